//! Shared model-quality metrics.
//!
//! ## Purpose
//!
//! Accuracy, mean log-loss, and R²: the three quality numbers the demos
//! display next to their charts.
//!
//! ## Design notes
//!
//! * **Defined everywhere**: each metric returns 0 rather than NaN for
//!   empty or zero-variance input, because the host renders these values
//!   directly.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::activation::log_loss_term;

// ============================================================================
// Accuracy
// ============================================================================

/// Fraction of `true` outcomes, or 0 for an empty iterator.
pub fn accuracy<T, I>(outcomes: I) -> T
where
    T: Float,
    I: IntoIterator<Item = bool>,
{
    let mut correct = 0usize;
    let mut total = 0usize;

    for hit in outcomes {
        if hit {
            correct += 1;
        }
        total += 1;
    }

    if total == 0 {
        return T::zero();
    }

    T::from(correct).unwrap() / T::from(total).unwrap()
}

// ============================================================================
// Log-Loss
// ============================================================================

/// Mean binary cross-entropy over paired targets and predictions.
///
/// Predictions are clamped away from 0 and 1 before taking logarithms,
/// so the result is always finite.
pub fn mean_log_loss<T: Float>(targets: &[T], predictions: &[T]) -> T {
    let n = targets.len();
    if n == 0 {
        return T::zero();
    }

    let mut sum = T::zero();
    for (&target, &prediction) in targets.iter().zip(predictions.iter()) {
        sum = sum + log_loss_term(target, prediction);
    }

    sum / T::from(n).unwrap()
}

// ============================================================================
// R-Squared
// ============================================================================

/// Coefficient of determination `1 - SSres/SStot`.
///
/// Defined as 0 when the observed values have zero variance.
pub fn r_squared<T: Float>(observed: &[T], predicted: &[T]) -> T {
    let n = observed.len();
    if n == 0 {
        return T::zero();
    }

    let n_t = T::from(n).unwrap();
    let mean = observed.iter().fold(T::zero(), |acc, &y| acc + y) / n_t;

    let mut ss_total = T::zero();
    let mut ss_residual = T::zero();

    for (&y, &y_hat) in observed.iter().zip(predicted.iter()) {
        let deviation = y - mean;
        let residual = y - y_hat;
        ss_total = ss_total + deviation * deviation;
        ss_residual = ss_residual + residual * residual;
    }

    if ss_total <= T::zero() {
        return T::zero();
    }

    T::one() - ss_residual / ss_total
}
