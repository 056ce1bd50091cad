//! Centroid-based linear separator (SVM approximation).
//!
//! ## Purpose
//!
//! This module computes an explainable linear decision boundary between
//! two point classes: the hyperplane normal is the vector between the
//! class centroids, and the regularization knob `C` visibly shifts the
//! boundary toward or away from the negative class.
//!
//! ## Design notes
//!
//! * **Heuristic by contract**: this is deliberately *not* a
//!   margin-maximizing QP solver. The centroid construction, the midpoint
//!   shift `(1 - C) · 10 · 0.1`, and the support-vector count
//!   `min(4, n/4)` are the behavioral contract of the demo and are
//!   preserved exactly.
//! * **Sentinel, not error**: fewer than 4 points or a missing class is a
//!   normal interactive state and returns an empty fit.
//! * **Deterministic**: pure function of `(points, C)`; the stable
//!   distance sort keeps support-vector selection reproducible on ties.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::evaluation::metrics::accuracy;
use crate::math::geometry::mean_position;
use crate::primitives::point::{Label, LabeledPoint};

/// Scale applied to `(1 - C)` when shifting the midpoint.
pub const REGULARIZATION_SCALE: f64 = 10.0;

/// Fraction of the centroid separation applied per unit of shift.
pub const SHIFT_FACTOR: f64 = 0.1;

/// Upper bound on the number of support vectors.
pub const MAX_SUPPORT_VECTORS: usize = 4;

/// Minimum points required before a separator is attempted.
pub const MIN_POINTS: usize = 4;

// ============================================================================
// Hyperplane
// ============================================================================

/// Linear decision boundary `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperplane<T> {
    /// X-coefficient of the plane normal.
    pub a: T,

    /// Y-coefficient of the plane normal.
    pub b: T,

    /// Offset term.
    pub c: T,
}

impl<T: Float> Hyperplane<T> {
    /// Signed value of the plane equation at `(x, y)`.
    #[inline]
    pub fn signed_value(&self, x: T, y: T) -> T {
        self.a * x + self.b * y + self.c
    }

    /// Perpendicular distance from `(x, y)` to the plane.
    #[inline]
    pub fn distance_to(&self, x: T, y: T) -> T {
        self.signed_value(x, y).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Predicted class at `(x, y)`: the positive side maps to class 1.
    #[inline]
    pub fn classify(&self, x: T, y: T) -> Label {
        if self.signed_value(x, y) > T::zero() {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

// ============================================================================
// SvmFit
// ============================================================================

/// Result of fitting the centroid separator.
///
/// `hyperplane` and `margin` are `None` when the dataset cannot support a
/// separator (fewer than [`MIN_POINTS`] points or a class missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvmFit<T> {
    /// The separating hyperplane, if one was fitted.
    pub hyperplane: Option<Hyperplane<T>>,

    /// Twice the distance of the closest support vector.
    pub margin: Option<T>,

    /// The points closest to the hyperplane, nearest first.
    pub support_vectors: Vec<LabeledPoint<T>>,

    /// Fraction of points on the correct side of the plane.
    pub accuracy: T,
}

impl<T: Float> SvmFit<T> {
    /// The sentinel fit returned when no separator can be computed.
    pub fn empty() -> Self {
        Self {
            hyperplane: None,
            margin: None,
            support_vectors: Vec::new(),
            accuracy: T::zero(),
        }
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit the centroid-based separator for a given regularization `C`.
pub fn fit_centroid_separator<T: Float>(points: &[LabeledPoint<T>], c: T) -> SvmFit<T> {
    if points.len() < MIN_POINTS {
        return SvmFit::empty();
    }

    let positive = points.iter().filter(|p| p.label == Label::Positive);
    let negative = points.iter().filter(|p| p.label == Label::Negative);

    let (Some((pos_x, pos_y)), Some((neg_x, neg_y))) =
        (mean_position(positive), mean_position(negative))
    else {
        return SvmFit::empty();
    };

    // Plane normal is the vector between the class centroids.
    let a = pos_x - neg_x;
    let b = pos_y - neg_y;

    // Shift the midpoint toward the negative centroid as C shrinks, so
    // the regularization slider visibly moves the boundary.
    let shift = (T::one() - c)
        * T::from(REGULARIZATION_SCALE).unwrap()
        * T::from(SHIFT_FACTOR).unwrap();
    let two = T::from(2.0).unwrap();
    let mid_x = (pos_x + neg_x) / two + shift * (neg_x - pos_x);
    let mid_y = (pos_y + neg_y) / two + shift * (neg_y - pos_y);

    let hyperplane = Hyperplane {
        a,
        b,
        c: -(a * mid_x + b * mid_y),
    };

    // Rank all points by perpendicular distance; the closest
    // min(4, n/4) become the support vectors.
    let mut ranked: Vec<(T, LabeledPoint<T>)> = points
        .iter()
        .map(|point| (hyperplane.distance_to(point.x, point.y), *point))
        .collect();
    ranked.sort_by(|(d1, _), (d2, _)| d1.partial_cmp(d2).unwrap_or(Ordering::Equal));

    let count = MAX_SUPPORT_VECTORS.min(points.len() / 4);
    let support_vectors: Vec<LabeledPoint<T>> =
        ranked.iter().take(count).map(|(_, p)| *p).collect();

    let margin = ranked.first().map(|(distance, _)| *distance * two);

    let accuracy = accuracy(
        points
            .iter()
            .map(|point| hyperplane.classify(point.x, point.y) == point.label),
    );

    SvmFit {
        hyperplane: Some(hyperplane),
        margin,
        support_vectors,
        accuracy,
    }
}
