//! Tests for the point-wise loss-function catalogue.
//!
//! These tests verify each loss variant used by the loss explainer for:
//! - Values at hand-computed reference points
//! - The Huber quadratic/linear transition
//! - The log-loss probability mapping and clamping
//! - Metadata (names, classification flags, default)
//!
//! ## Test Organization
//!
//! 1. **Regression Losses** - Squared, absolute, Huber
//! 2. **Classification Losses** - Log loss, hinge
//! 3. **Metadata** - Names, classification split, default variant

use approx::assert_relative_eq;

use classml::prelude::*;

// ============================================================================
// Regression Loss Tests
// ============================================================================

/// Test squared error at reference points.
#[test]
fn test_squared_error() {
    let loss = LossFunction::SquaredError;

    assert_relative_eq!(loss.evaluate(3.0, 1.0), 4.0);
    assert_relative_eq!(loss.evaluate(1.0, 3.0), 4.0);
    assert_relative_eq!(loss.evaluate(2.5, 2.5), 0.0);
}

/// Test absolute error at reference points.
#[test]
fn test_absolute_error() {
    let loss = LossFunction::AbsoluteError;

    assert_relative_eq!(loss.evaluate(3.0, 1.0), 2.0);
    assert_relative_eq!(loss.evaluate(1.0, 3.0), 2.0);
    assert_relative_eq!(loss.evaluate(-1.0, -1.0), 0.0);
}

/// Test the Huber transition between quadratic and linear cost.
///
/// Inside the default threshold of 1 the loss is `e²/2`; beyond it the
/// loss grows linearly as `δ·e - δ²/2`.
#[test]
fn test_huber_transition() {
    let loss = LossFunction::Huber;

    // Quadratic branch: e = 0.5.
    assert_relative_eq!(loss.evaluate(1.0, 0.5), 0.125);

    // Exactly at the threshold both branches agree: e = 1.
    assert_relative_eq!(loss.evaluate(1.0, 0.0), 0.5);

    // Linear branch: e = 3 gives 1·3 - 0.5 = 2.5.
    assert_relative_eq!(loss.evaluate(3.0, 0.0), 2.5);
}

/// Test the Huber loss with a custom threshold.
#[test]
fn test_huber_custom_delta() {
    // delta = 2, e = 3: 2·3 - 2 = 4.
    assert_relative_eq!(LossFunction::evaluate_huber(3.0, 0.0, 2.0), 4.0);

    // delta = 2, e = 1.5: quadratic, 1.5²/2 = 1.125.
    assert_relative_eq!(LossFunction::evaluate_huber(1.5, 0.0, 2.0), 1.125);
}

/// Test that Huber grows slower than squared error on large residuals.
#[test]
fn test_huber_robust_to_outliers() {
    let squared = LossFunction::SquaredError;
    let huber = LossFunction::Huber;

    for error in [2.0, 5.0, 10.0, 100.0] {
        assert!(huber.evaluate(error, 0.0) < squared.evaluate(error, 0.0));
    }
}

// ============================================================================
// Classification Loss Tests
// ============================================================================

/// Test the log-loss probability mapping `(predicted + 5) / 10`.
#[test]
fn test_log_loss_mapping() {
    let loss = LossFunction::LogLoss;

    // predicted = 0 maps to p = 0.5; either label costs -ln(0.5).
    assert_relative_eq!(loss.evaluate(1.0, 0.0), -(0.5f64.ln()), epsilon = 1e-12);
    assert_relative_eq!(loss.evaluate(0.0, 0.0), -(0.5f64.ln()), epsilon = 1e-12);

    // predicted = 3 maps to p = 0.8.
    assert_relative_eq!(loss.evaluate(1.0, 3.0), -(0.8f64.ln()), epsilon = 1e-12);
    assert_relative_eq!(loss.evaluate(0.0, 3.0), -(0.2f64.ln()), epsilon = 1e-12);
}

/// Test that log loss stays finite at extreme predictions.
///
/// The mapped probability is clamped into [0.0001, 0.9999], so a
/// prediction at either end of the sweep never produces infinity.
#[test]
fn test_log_loss_clamped_finite() {
    let loss = LossFunction::LogLoss;

    let confident_wrong: f64 = loss.evaluate(1.0, -5.0);
    assert!(confident_wrong.is_finite());
    assert_relative_eq!(confident_wrong, -(0.0001f64.ln()), epsilon = 1e-9);

    let confident_right: f64 = loss.evaluate(1.0, 5.0);
    assert!(confident_right.is_finite());
    assert_relative_eq!(confident_right, -(0.9999f64.ln()), epsilon = 1e-9);
}

/// Test hinge loss on correct, marginal, and wrong predictions.
#[test]
fn test_hinge_loss() {
    let loss = LossFunction::Hinge;

    // Confidently correct: zero loss.
    assert_relative_eq!(loss.evaluate(1.0, 2.0), 0.0);
    assert_relative_eq!(loss.evaluate(-1.0, -2.0), 0.0);

    // On the margin: loss 1 at a zero prediction.
    assert_relative_eq!(loss.evaluate(1.0, 0.0), 1.0);

    // Confidently wrong: loss grows linearly.
    assert_relative_eq!(loss.evaluate(1.0, -2.0), 3.0);
    assert_relative_eq!(loss.evaluate(-1.0, 2.0), 3.0);
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Test display names for every variant.
#[test]
fn test_loss_names() {
    assert_eq!(LossFunction::SquaredError.name(), "Squared Error");
    assert_eq!(LossFunction::AbsoluteError.name(), "Absolute Error");
    assert_eq!(LossFunction::Huber.name(), "Huber");
    assert_eq!(LossFunction::LogLoss.name(), "Log Loss");
    assert_eq!(LossFunction::Hinge.name(), "Hinge");
}

/// Test the regression/classification split.
#[test]
fn test_classification_split() {
    assert!(!LossFunction::SquaredError.is_classification());
    assert!(!LossFunction::AbsoluteError.is_classification());
    assert!(!LossFunction::Huber.is_classification());
    assert!(LossFunction::LogLoss.is_classification());
    assert!(LossFunction::Hinge.is_classification());
}

/// Test that squared error is the default variant.
#[test]
fn test_default_variant() {
    assert_eq!(LossFunction::default(), LossFunction::SquaredError);
}
