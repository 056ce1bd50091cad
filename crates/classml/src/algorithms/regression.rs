//! Closed-form ordinary least-squares regression.
//!
//! ## Purpose
//!
//! This module fits a straight line `y = m·x + b` to a point set in a
//! single pass and reports the coefficient of determination R². There is
//! no iteration and no incremental state: the host refits from scratch on
//! every change to the dataset.
//!
//! ## Design notes
//!
//! * **Degenerate default, not an error**: fewer than two points returns
//!   the all-zero model, because an almost-empty canvas is a normal state
//!   in an interactive demo.
//! * **Explicit degeneracy**: all-identical x-values make the slope
//!   mathematically undefined. That is surfaced as
//!   [`ClassmlError::DegenerateInput`] instead of letting a division by
//!   zero propagate NaN into the host.
//! * **Zero-variance R²**: when every y is identical, R² is defined as 0
//!   rather than NaN.
//!
//! ## Invariants
//!
//! * Pure, deterministic, idempotent under identical input.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::evaluation::metrics::r_squared;
use crate::primitives::errors::ClassmlError;
use crate::primitives::point::Point;

// ============================================================================
// RegressionModel
// ============================================================================

/// Fitted least-squares line with its goodness of fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel<T> {
    /// Slope `m` of the fitted line.
    pub slope: T,

    /// Y-intercept `b` of the fitted line.
    pub intercept: T,

    /// Coefficient of determination R² in `[0, 1]`.
    pub r_squared: T,
}

impl<T: Float> RegressionModel<T> {
    /// The all-zero model returned for datasets with fewer than 2 points.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            r_squared: T::zero(),
        }
    }

    /// Predict the y-value for a given x using the fitted line.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit ordinary least squares over a point set.
///
/// Fewer than 2 points yields [`RegressionModel::zero`]. All-identical
/// x-values yield [`ClassmlError::DegenerateInput`].
pub fn fit_least_squares<T: Float>(points: &[Point<T>]) -> Result<RegressionModel<T>, ClassmlError> {
    let n = points.len();
    if n < 2 {
        return Ok(RegressionModel::zero());
    }

    let n_t = T::from(n).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_xx = T::zero();

    for point in points {
        sum_x = sum_x + point.x;
        sum_y = sum_y + point.y;
        sum_xy = sum_xy + point.x * point.y;
        sum_xx = sum_xx + point.x * point.x;
    }

    let denominator = n_t * sum_xx - sum_x * sum_x;
    let tolerance = T::from(1e-12).unwrap();

    if denominator.abs() <= tolerance {
        return Err(ClassmlError::DegenerateInput {
            reason: "all x-values are identical; slope is undefined",
        });
    }

    let slope = (n_t * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_t;

    let model = RegressionModel {
        slope,
        intercept,
        r_squared: T::zero(),
    };

    let observed: Vec<T> = points.iter().map(|p| p.y).collect();
    let predicted: Vec<T> = points.iter().map(|p| model.predict(p.x)).collect();

    Ok(RegressionModel {
        r_squared: r_squared(&observed, &predicted),
        ..model
    })
}
