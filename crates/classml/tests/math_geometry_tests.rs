#![cfg(feature = "dev")]
//! Tests for the geometry and activation primitives.
//!
//! These tests verify the low-level math shared by the kernels for:
//! - Euclidean and squared distances
//! - Mean positions over point collections
//! - The sigmoid and probability clamping
//!
//! ## Test Organization
//!
//! 1. **Distances** - Known values, symmetry, degenerate pairs
//! 2. **Mean Position** - Averages, empty-collection sentinel
//! 3. **Activation** - Sigmoid values, clamp bounds

use approx::assert_relative_eq;

use classml::internals::math::activation::{
    clamp_probability, sigmoid, PROBABILITY_CEILING, PROBABILITY_FLOOR,
};
use classml::internals::math::geometry::{
    distance_between, euclidean_distance, mean_position, squared_distance,
};
use classml::prelude::*;

// ============================================================================
// Distance Tests
// ============================================================================

/// Test distances on a 3-4-5 triangle.
#[test]
fn test_known_distances() {
    assert_relative_eq!(euclidean_distance(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_relative_eq!(squared_distance(0.0, 0.0, 3.0, 4.0), 25.0);
}

/// Test that distance is symmetric and zero on identical points.
#[test]
fn test_distance_symmetry() {
    assert_relative_eq!(
        euclidean_distance(1.0, 2.0, 5.0, 7.0),
        euclidean_distance(5.0, 7.0, 1.0, 2.0)
    );
    assert_relative_eq!(euclidean_distance(2.5, 2.5, 2.5, 2.5), 0.0);
}

/// Test distance between heterogeneous point-like values.
#[test]
fn test_distance_between_point_kinds() {
    let point = ClusterPoint::unassigned(0.0, 0.0, 1);
    let centroid = Centroid::new(6.0, 8.0, 0);

    assert_relative_eq!(distance_between(&point, &centroid), 10.0);
}

// ============================================================================
// Mean Position Tests
// ============================================================================

/// Test the mean of a small point collection.
#[test]
fn test_mean_position() {
    let points = vec![
        Point::new(0.0, 0.0, 1),
        Point::new(2.0, 4.0, 2),
        Point::new(4.0, 2.0, 3),
    ];

    let (x, y) = mean_position(points.iter()).unwrap();

    assert_relative_eq!(x, 2.0);
    assert_relative_eq!(y, 2.0);
}

/// Test that an empty collection has no mean.
#[test]
fn test_mean_position_empty_is_none() {
    let points: Vec<Point<f64>> = Vec::new();

    assert!(mean_position(points.iter()).is_none());
}

// ============================================================================
// Activation Tests
// ============================================================================

/// Test sigmoid values at reference points.
#[test]
fn test_sigmoid_values() {
    assert_relative_eq!(sigmoid(0.0), 0.5);
    assert_relative_eq!(sigmoid(2.0), 1.0 / (1.0 + (-2.0f64).exp()), epsilon = 1e-12);

    // Symmetry about 0.5.
    assert_relative_eq!(sigmoid(3.0) + sigmoid(-3.0), 1.0, epsilon = 1e-12);

    // Saturation stays inside (0, 1).
    assert!(sigmoid(50.0) < 1.0);
    assert!(sigmoid(-50.0) > 0.0);
}

/// Test probability clamping at both bounds.
#[test]
fn test_clamp_probability_bounds() {
    assert_relative_eq!(clamp_probability(0.0), PROBABILITY_FLOOR);
    assert_relative_eq!(clamp_probability(1.0), PROBABILITY_CEILING);
    assert_relative_eq!(clamp_probability(0.42), 0.42);
}
