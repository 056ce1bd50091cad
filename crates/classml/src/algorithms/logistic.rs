//! Batch gradient-descent logistic regression.
//!
//! ## Purpose
//!
//! This module trains a 3-weight linear-logit binary classifier
//! (`z = w0 + w1·x + w2·y`, `p = sigmoid(z)`) with full-batch gradient
//! descent over a fixed iteration budget, and derives the display
//! artifacts the host renders: a sampled sigmoid curve and the `p = 0.5`
//! decision boundary.
//!
//! ## Design notes
//!
//! * **Non-zero init**: training starts from `[0, 0.01, 0.01]`. A zero
//!   initialization would give the y-weight a degenerate zero gradient on
//!   symmetric data; the small positive init is a preserved default, not
//!   noise.
//! * **Simultaneous updates**: all three gradients are computed from the
//!   same predictions before any weight moves.
//! * **Deterministic**: no randomness anywhere; identical input and
//!   hyperparameters reproduce identical weights.
//!
//! ## Key concepts
//!
//! * **Decision boundary**: `w0 + w1·x + w2·y = 0` solved for y, only
//!   renderable when `|w2|` exceeds a small epsilon; otherwise `None`.
//! * **Sigmoid curve**: fixed-step scan across the x-domain with y held
//!   at the domain midpoint.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};
use tracing::trace;

// Internal dependencies
use crate::math::activation::sigmoid;
use crate::primitives::domain::Domain;
use crate::primitives::point::LabeledPoint;

/// Initial weight vector `[w0, w1, w2]` for gradient descent.
pub const INITIAL_WEIGHTS: [f64; 3] = [0.0, 0.01, 0.01];

/// Minimum `|w2|` for the decision boundary to be renderable.
pub const BOUNDARY_EPSILON: f64 = 0.001;

// ============================================================================
// LogisticModel
// ============================================================================

/// Trained linear-logit model: bias plus two feature weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel<T> {
    /// Weight vector `[w0, w1, w2]` (bias, x-weight, y-weight).
    pub weights: [T; 3],
}

impl<T: Float> LogisticModel<T> {
    /// The linear logit `w0 + w1·x + w2·y`.
    #[inline]
    pub fn logit(&self, x: T, y: T) -> T {
        self.weights[0] + self.weights[1] * x + self.weights[2] * y
    }

    /// Predicted probability of the positive class at `(x, y)`.
    #[inline]
    pub fn probability(&self, x: T, y: T) -> T {
        sigmoid(self.logit(x, y))
    }
}

// ============================================================================
// Derived Display Artifacts
// ============================================================================

/// One sample of the fitted sigmoid curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint<T> {
    /// Sampled x-coordinate.
    pub x: T,

    /// Predicted positive-class probability at that x.
    pub probability: T,
}

/// The `p = 0.5` decision boundary expressed as a line `y = m·x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLine<T> {
    /// Slope of the boundary line.
    pub slope: T,

    /// Y-intercept of the boundary line.
    pub intercept: T,
}

impl<T: Float> BoundaryLine<T> {
    /// Boundary y-coordinate at a given x.
    #[inline]
    pub fn y_at(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

// ============================================================================
// Training
// ============================================================================

/// Train the model with full-batch gradient descent.
///
/// The caller guarantees at least one point; hyperparameter validation
/// happens in the engine validator.
pub fn train_gradient_descent<T: Float>(
    points: &[LabeledPoint<T>],
    learning_rate: T,
    iterations: usize,
) -> LogisticModel<T> {
    let n = T::from(points.len()).unwrap();
    let mut weights = [
        T::from(INITIAL_WEIGHTS[0]).unwrap(),
        T::from(INITIAL_WEIGHTS[1]).unwrap(),
        T::from(INITIAL_WEIGHTS[2]).unwrap(),
    ];

    for _ in 0..iterations {
        let mut gradient0 = T::zero();
        let mut gradient1 = T::zero();
        let mut gradient2 = T::zero();

        for point in points {
            let prediction = sigmoid(weights[0] + weights[1] * point.x + weights[2] * point.y);
            let residual = prediction - point.label.as_target();

            gradient0 = gradient0 + residual;
            gradient1 = gradient1 + residual * point.x;
            gradient2 = gradient2 + residual * point.y;
        }

        // All gradients come from the same predictions; update together.
        weights[0] = weights[0] - learning_rate * gradient0 / n;
        weights[1] = weights[1] - learning_rate * gradient1 / n;
        weights[2] = weights[2] - learning_rate * gradient2 / n;
    }

    LogisticModel { weights }
}

/// Sample the fitted sigmoid curve across the x-domain.
///
/// The y-coordinate is held constant at the domain midpoint; `samples`
/// points are spaced evenly from `domain.min` to `domain.max` inclusive.
pub fn sample_sigmoid_curve<T: Float>(
    model: &LogisticModel<T>,
    domain: &Domain<T>,
    samples: usize,
) -> Vec<CurvePoint<T>> {
    let y_mid = domain.midpoint();
    let step = domain.width() / T::from(samples - 1).unwrap();

    (0..samples)
        .map(|i| {
            let x = domain.min + step * T::from(i).unwrap();
            CurvePoint {
                x,
                probability: model.probability(x, y_mid),
            }
        })
        .collect()
}

/// Derive the `p = 0.5` decision boundary, if renderable.
///
/// Solving `w0 + w1·x + w2·y = 0` for y requires `|w2|` above
/// [`BOUNDARY_EPSILON`]; a near-vertical boundary returns `None` rather
/// than an error.
pub fn decision_boundary<T: Float>(model: &LogisticModel<T>) -> Option<BoundaryLine<T>> {
    let [w0, w1, w2] = model.weights;
    let epsilon = T::from(BOUNDARY_EPSILON).unwrap();

    if w2.abs() <= epsilon {
        trace!("y-weight below epsilon; decision boundary not renderable");
        return None;
    }

    Some(BoundaryLine {
        slope: -w1 / w2,
        intercept: -w0 / w2,
    })
}
