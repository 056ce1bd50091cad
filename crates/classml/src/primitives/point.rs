//! Point variants, class labels, and centroids.
//!
//! ## Purpose
//!
//! This module defines the data carried through every kernel: plain 2D
//! points for regression, labeled points for the binary classifiers, and
//! cluster points plus centroids for k-means.
//!
//! ## Design notes
//!
//! * **Caller-owned**: The crate never creates or destroys points; it only
//!   reads them and, for k-means, returns updated copies.
//! * **Identity**: `id` must be unique within a dataset so a rendering
//!   host can correlate inputs with outputs. It carries no semantic weight
//!   for the math.
//! * **Type-level labels**: Class membership is a two-variant enum rather
//!   than a raw integer, so an out-of-range class is unrepresentable once
//!   construction succeeds.
//!
//! ## Invariants
//!
//! * `Label` only ever encodes the classes 0 and 1.
//! * A `ClusterPoint` with `cluster == None` is unassigned.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::ClassmlError;

/// Identifier correlating a point between host UI and kernel output.
pub type PointId = u64;

// ============================================================================
// Coordinate Access
// ============================================================================

/// Access to the 2D coordinates of a point-like value.
///
/// Implemented by every point variant and by [`Centroid`], so validation
/// and distance computations can be written once.
pub trait Coordinates<T> {
    /// The `(x, y)` coordinates of this value.
    fn coordinates(&self) -> (T, T);
}

impl<T, P: Coordinates<T>> Coordinates<T> for &P {
    #[inline]
    fn coordinates(&self) -> (T, T) {
        (*self).coordinates()
    }
}

// ============================================================================
// Point
// ============================================================================

/// An unlabeled 2D data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,

    /// Unique identifier within the dataset.
    pub id: PointId,
}

impl<T: Float> Point<T> {
    /// Create a new point.
    pub fn new(x: T, y: T, id: PointId) -> Self {
        Self { x, y, id }
    }
}

impl<T: Float> Coordinates<T> for Point<T> {
    #[inline]
    fn coordinates(&self) -> (T, T) {
        (self.x, self.y)
    }
}

// ============================================================================
// Label
// ============================================================================

/// Binary class label.
///
/// The classifiers in this crate are strictly binary; any other class
/// value is a caller error surfaced at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Class 0.
    Negative,

    /// Class 1.
    Positive,
}

impl Label {
    /// The numeric regression target for this label (0 or 1).
    #[inline]
    pub fn as_target<T: Float>(self) -> T {
        match self {
            Label::Negative => T::zero(),
            Label::Positive => T::one(),
        }
    }

    /// Raw class value (0 or 1).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        match self {
            Label::Negative => 0,
            Label::Positive => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = ClassmlError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(ClassmlError::InvalidLabel { got: other }),
        }
    }
}

// ============================================================================
// LabeledPoint
// ============================================================================

/// A 2D data point with a binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,

    /// Unique identifier within the dataset.
    pub id: PointId,

    /// Binary class membership.
    pub label: Label,
}

impl<T: Float> LabeledPoint<T> {
    /// Create a new labeled point.
    pub fn new(x: T, y: T, id: PointId, label: Label) -> Self {
        Self { x, y, id, label }
    }

    /// Create a labeled point from a raw class value.
    ///
    /// Returns [`ClassmlError::InvalidLabel`] for any class other than 0
    /// or 1.
    pub fn from_class(x: T, y: T, id: PointId, class: u8) -> Result<Self, ClassmlError> {
        Ok(Self::new(x, y, id, Label::try_from(class)?))
    }
}

impl<T: Float> Coordinates<T> for LabeledPoint<T> {
    #[inline]
    fn coordinates(&self) -> (T, T) {
        (self.x, self.y)
    }
}

// ============================================================================
// ClusterPoint
// ============================================================================

/// A 2D data point with a mutable cluster assignment.
///
/// `cluster` is `None` until the point has been assigned by a k-means
/// assignment step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterPoint<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,

    /// Unique identifier within the dataset.
    pub id: PointId,

    /// Index of the assigned centroid, if any.
    pub cluster: Option<usize>,
}

impl<T: Float> ClusterPoint<T> {
    /// Create an unassigned cluster point.
    pub fn unassigned(x: T, y: T, id: PointId) -> Self {
        Self {
            x,
            y,
            id,
            cluster: None,
        }
    }
}

impl<T: Float> Coordinates<T> for ClusterPoint<T> {
    #[inline]
    fn coordinates(&self) -> (T, T) {
        (self.x, self.y)
    }
}

// ============================================================================
// Centroid
// ============================================================================

/// Representative mean position of a cluster.
///
/// The centroid count is fixed for the lifetime of a k-means run;
/// changing `k` requires a fresh initialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid<T> {
    /// Horizontal coordinate.
    pub x: T,

    /// Vertical coordinate.
    pub y: T,

    /// Cluster index, stable across iterations.
    pub id: usize,
}

impl<T: Float> Centroid<T> {
    /// Create a new centroid.
    pub fn new(x: T, y: T, id: usize) -> Self {
        Self { x, y, id }
    }
}

impl<T: Float> Coordinates<T> for Centroid<T> {
    #[inline]
    fn coordinates(&self) -> (T, T) {
        (self.x, self.y)
    }
}
