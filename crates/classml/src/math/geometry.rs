//! Euclidean geometry helpers.
//!
//! ## Purpose
//!
//! Distance and mean-position primitives shared by the k-means and SVM
//! kernels.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Coordinates;

// ============================================================================
// Distance
// ============================================================================

/// Squared Euclidean distance between two coordinate pairs.
#[inline]
pub fn squared_distance<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// Euclidean distance between two coordinate pairs.
#[inline]
pub fn euclidean_distance<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    squared_distance(x1, y1, x2, y2).sqrt()
}

/// Euclidean distance between two point-like values.
#[inline]
pub fn distance_between<T, A, B>(a: &A, b: &B) -> T
where
    T: Float,
    A: Coordinates<T>,
    B: Coordinates<T>,
{
    let (ax, ay) = a.coordinates();
    let (bx, by) = b.coordinates();
    euclidean_distance(ax, ay, bx, by)
}

// ============================================================================
// Mean Position
// ============================================================================

/// Arithmetic mean of a set of coordinate pairs.
///
/// Returns `None` for an empty set; callers decide the fallback (k-means
/// keeps the previous centroid position, the SVM kernel treats a missing
/// class centroid as "no model").
pub fn mean_position<T, P, I>(points: I) -> Option<(T, T)>
where
    T: Float,
    P: Coordinates<T>,
    I: IntoIterator<Item = P>,
{
    let mut count = 0usize;
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();

    for point in points {
        let (x, y) = point.coordinates();
        sum_x = sum_x + x;
        sum_y = sum_y + y;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    let n = T::from(count).unwrap_or(T::one());
    Some((sum_x / n, sum_y / n))
}
