//! Loss-function catalogue for the loss explainer.
//!
//! ## Purpose
//!
//! This module provides the point-wise loss functions behind the
//! loss-function explainer: given one actual value and one predicted
//! value, each variant returns the penalty a model would incur.
//!
//! ## Design notes
//!
//! * **Pedagogical scaling**: `LogLoss` maps the raw prediction into
//!   probability space via `(predicted + 5) / 10` so the explainer can
//!   sweep predictions over `[-5, 5]`; `Hinge` maps the actual value to a
//!   ±1 target. Both transforms are part of the demo contract.
//! * **Total**: Every variant is defined for all finite inputs; the
//!   log-loss clamp keeps logarithms finite.
//!
//! ## Key concepts
//!
//! * **Regression losses**: squared error, absolute error, Huber.
//! * **Classification losses**: log loss, hinge.

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Default Huber transition threshold between quadratic and linear cost.
pub const HUBER_DELTA: f64 = 1.0;

/// Lower clamp for the log-loss probability mapping.
const LOG_LOSS_FLOOR: f64 = 0.0001;

/// Upper clamp for the log-loss probability mapping.
const LOG_LOSS_CEILING: f64 = 0.9999;

// ============================================================================
// Loss Function Enum
// ============================================================================

/// Point-wise loss function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossFunction {
    /// Squared error: `(y - ŷ)²`.
    #[default]
    SquaredError,

    /// Absolute error: `|y - ŷ|`.
    AbsoluteError,

    /// Huber loss: quadratic within `δ` of the target, linear beyond.
    Huber,

    /// Binary cross-entropy over the explainer's probability mapping.
    LogLoss,

    /// Hinge loss: `max(0, 1 - y·ŷ)` with `y ∈ {-1, +1}`.
    Hinge,
}

impl LossFunction {
    /// Get the display name of the loss function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            LossFunction::SquaredError => "Squared Error",
            LossFunction::AbsoluteError => "Absolute Error",
            LossFunction::Huber => "Huber",
            LossFunction::LogLoss => "Log Loss",
            LossFunction::Hinge => "Hinge",
        }
    }

    /// Whether this loss targets classification rather than regression.
    #[inline]
    pub const fn is_classification(&self) -> bool {
        matches!(self, LossFunction::LogLoss | LossFunction::Hinge)
    }

    /// Evaluate the loss for one `(actual, predicted)` pair.
    ///
    /// `Huber` uses the default threshold [`HUBER_DELTA`]; use
    /// [`LossFunction::evaluate_huber`] for a custom threshold.
    pub fn evaluate<T: Float>(&self, actual: T, predicted: T) -> T {
        match self {
            LossFunction::SquaredError => {
                let error = actual - predicted;
                error * error
            }

            LossFunction::AbsoluteError => (actual - predicted).abs(),

            LossFunction::Huber => {
                Self::evaluate_huber(actual, predicted, T::from(HUBER_DELTA).unwrap())
            }

            LossFunction::LogLoss => {
                let floor = T::from(LOG_LOSS_FLOOR).unwrap();
                let ceiling = T::from(LOG_LOSS_CEILING).unwrap();
                let ten = T::from(10.0).unwrap();
                let five = T::from(5.0).unwrap();

                // Map the raw prediction into (0, 1) probability space.
                let p = ((predicted + five) / ten).max(floor).min(ceiling);
                let y = if actual > T::zero() { T::one() } else { T::zero() };

                -(y * p.ln() + (T::one() - y) * (T::one() - p).ln())
            }

            LossFunction::Hinge => {
                let y = if actual > T::zero() { T::one() } else { -T::one() };
                (T::one() - y * predicted).max(T::zero())
            }
        }
    }

    /// Evaluate the Huber loss with an explicit transition threshold.
    pub fn evaluate_huber<T: Float>(actual: T, predicted: T, delta: T) -> T {
        let half = T::from(0.5).unwrap();
        let error = (actual - predicted).abs();

        if error <= delta {
            half * error * error
        } else {
            delta * error - half * delta * delta
        }
    }
}
