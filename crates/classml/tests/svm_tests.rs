//! Tests for the centroid-based linear separator.
//!
//! These tests verify the explainable SVM approximation for:
//! - Separation of two clean classes
//! - The regularization knob's effect on boundary placement
//! - Support-vector selection and margin reporting
//! - Sentinel behavior on undersized or single-class datasets
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Regularization bounds at build time
//! 2. **Separation** - Clean two-class data
//! 3. **Regularization** - Boundary offset moves with C
//! 4. **Support Vectors and Margin** - Selection count, margin formula
//! 5. **Sentinels** - Too few points, missing class

use approx::assert_relative_eq;

use classml::prelude::*;

/// Three points per class, clearly separated along the diagonal.
fn preset_points() -> Vec<LabeledPoint<f64>> {
    vec![
        LabeledPoint::new(1.0, 1.0, 1, Label::Negative),
        LabeledPoint::new(2.0, 1.5, 2, Label::Negative),
        LabeledPoint::new(1.5, 2.0, 3, Label::Negative),
        LabeledPoint::new(8.0, 8.5, 4, Label::Positive),
        LabeledPoint::new(9.0, 8.0, 5, Label::Positive),
        LabeledPoint::new(8.5, 9.0, 6, Label::Positive),
    ]
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test that a non-positive C is rejected at build time.
#[test]
fn test_non_positive_regularization_rejected() {
    let result = SvmBuilder::<f64>::new().regularization(0.0).build();

    assert!(matches!(
        result,
        Err(ClassmlError::InvalidRegularization { .. })
    ));
}

// ============================================================================
// Separation Tests
// ============================================================================

/// Test full separation of the preset at the default C = 1.
#[test]
fn test_preset_fully_separated() {
    let svm = SvmBuilder::new().build().unwrap();

    let fit = svm.fit(&preset_points()).unwrap();

    let hyperplane = fit.hyperplane.expect("separable preset has a hyperplane");
    assert_relative_eq!(fit.accuracy, 1.0);

    // Every point classifies to its own label.
    for point in preset_points() {
        assert_eq!(hyperplane.classify(point.x, point.y), point.label);
    }
}

/// Test that the hyperplane normal is the inter-centroid vector.
#[test]
fn test_normal_is_centroid_difference() {
    let svm = SvmBuilder::new().build().unwrap();

    let fit = svm.fit(&preset_points()).unwrap();
    let hyperplane = fit.hyperplane.unwrap();

    // Negative centroid (1.5, 1.5), positive centroid (8.5, 8.5).
    assert_relative_eq!(hyperplane.a, 7.0, epsilon = 1e-9);
    assert_relative_eq!(hyperplane.b, 7.0, epsilon = 1e-9);
}

/// Test that fitting is deterministic.
#[test]
fn test_fit_deterministic() {
    let svm = SvmBuilder::new().regularization(0.7).build().unwrap();
    let points = preset_points();

    assert_eq!(svm.fit(&points).unwrap(), svm.fit(&points).unwrap());
}

// ============================================================================
// Regularization Tests
// ============================================================================

/// Test that shrinking C shifts the boundary toward the negative class.
///
/// At C = 1 the boundary passes through the midpoint of the centroids;
/// smaller C moves it so previously borderline negative points fall on
/// the positive side.
#[test]
fn test_smaller_c_shifts_toward_negative() {
    let points = preset_points();

    let neutral = SvmBuilder::new().build().unwrap().fit(&points).unwrap();
    let shifted = SvmBuilder::new()
        .regularization(0.5)
        .build()
        .unwrap()
        .fit(&points)
        .unwrap();

    let neutral_plane = neutral.hyperplane.unwrap();
    let shifted_plane = shifted.hyperplane.unwrap();

    // The normal is unchanged; only the offset moves.
    assert_relative_eq!(neutral_plane.a, shifted_plane.a);
    assert_relative_eq!(neutral_plane.b, shifted_plane.b);
    assert!(neutral_plane.c != shifted_plane.c);

    // The centroid midpoint sits on the neutral boundary and on the
    // positive side of the shifted one.
    assert_relative_eq!(neutral_plane.signed_value(5.0, 5.0), 0.0, epsilon = 1e-9);
    assert!(shifted_plane.signed_value(5.0, 5.0) > 0.0);
}

// ============================================================================
// Support Vector and Margin Tests
// ============================================================================

/// Test the support-vector count rule `min(4, n / 4)`.
#[test]
fn test_support_vector_count() {
    let svm = SvmBuilder::new().build().unwrap();

    // 6 points: 6 / 4 = 1 support vector.
    let fit = svm.fit(&preset_points()).unwrap();
    assert_eq!(fit.support_vectors.len(), 1);

    // 20 points: capped at 4.
    let mut many = Vec::new();
    for i in 0..10 {
        let offset = f64::from(i) * 0.1;
        many.push(LabeledPoint::new(1.0 + offset, 1.0, i as u64, Label::Negative));
        many.push(LabeledPoint::new(8.0 + offset, 8.0, 10 + i as u64, Label::Positive));
    }
    let fit = svm.fit(&many).unwrap();
    assert_eq!(fit.support_vectors.len(), 4);
}

/// Test that the margin is twice the closest point's distance.
#[test]
fn test_margin_is_twice_closest_distance() {
    let svm = SvmBuilder::new().build().unwrap();

    let fit = svm.fit(&preset_points()).unwrap();
    let hyperplane = fit.hyperplane.unwrap();
    let margin = fit.margin.unwrap();

    let closest = preset_points()
        .iter()
        .map(|p| hyperplane.distance_to(p.x, p.y))
        .fold(f64::INFINITY, f64::min);

    assert_relative_eq!(margin, 2.0 * closest, epsilon = 1e-9);

    // The single support vector is that closest point.
    let support = &fit.support_vectors[0];
    assert_relative_eq!(
        hyperplane.distance_to(support.x, support.y),
        closest,
        epsilon = 1e-9
    );
}

// ============================================================================
// Sentinel Tests
// ============================================================================

/// Test that fewer than four points yields the empty fit.
#[test]
fn test_too_few_points_empty_fit() {
    let svm = SvmBuilder::new().build().unwrap();
    let points = vec![
        LabeledPoint::new(1.0, 1.0, 1, Label::Negative),
        LabeledPoint::new(8.0, 8.0, 2, Label::Positive),
        LabeledPoint::new(9.0, 9.0, 3, Label::Positive),
    ];

    let fit = svm.fit(&points).unwrap();

    assert!(fit.hyperplane.is_none());
    assert!(fit.margin.is_none());
    assert!(fit.support_vectors.is_empty());
    assert_eq!(fit.accuracy, 0.0);
}

/// Test that a single-class dataset yields the empty fit.
#[test]
fn test_single_class_empty_fit() {
    let svm = SvmBuilder::new().build().unwrap();
    let points = vec![
        LabeledPoint::new(1.0, 1.0, 1, Label::Positive),
        LabeledPoint::new(2.0, 2.0, 2, Label::Positive),
        LabeledPoint::new(3.0, 3.0, 3, Label::Positive),
        LabeledPoint::new(4.0, 4.0, 4, Label::Positive),
    ];

    let fit = svm.fit(&points).unwrap();

    assert!(fit.hyperplane.is_none());
    assert!(fit.support_vectors.is_empty());
}

/// Test that non-finite coordinates are rejected before fitting.
#[test]
fn test_non_finite_coordinates_rejected() {
    let svm = SvmBuilder::new().build().unwrap();
    let points = vec![
        LabeledPoint::new(f64::NAN, 1.0, 1, Label::Negative),
        LabeledPoint::new(2.0, 2.0, 2, Label::Negative),
        LabeledPoint::new(8.0, 8.0, 3, Label::Positive),
        LabeledPoint::new(9.0, 9.0, 4, Label::Positive),
    ];

    let result = svm.fit(&points);

    assert!(matches!(
        result,
        Err(ClassmlError::InvalidNumericValue { .. })
    ));
}
