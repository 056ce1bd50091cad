//! Input validation for kernel configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for kernel parameters and
//! input point sets. It checks parameter bounds and rejects non-finite
//! coordinates before any kernel runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types and over any
//!   point-like value via the `Coordinates` trait.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not decide sentinel outcomes (too few points, a
//!   missing class); those are kernel contracts, not validation errors.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::domain::Domain;
use crate::primitives::errors::ClassmlError;
use crate::primitives::point::Coordinates;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel configuration and input data.
///
/// Provides static methods returning `Result<(), ClassmlError>` that
/// fail fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that every point has finite coordinates.
    pub fn validate_points<T, P>(points: &[P]) -> Result<(), ClassmlError>
    where
        T: Float,
        P: Coordinates<T>,
    {
        for (index, point) in points.iter().enumerate() {
            let (x, y) = point.coordinates();
            if !x.is_finite() {
                return Err(ClassmlError::InvalidNumericValue {
                    context: format!("point {}: x={}", index, x.to_f64().unwrap_or(f64::NAN)),
                });
            }
            if !y.is_finite() {
                return Err(ClassmlError::InvalidNumericValue {
                    context: format!("point {}: y={}", index, y.to_f64().unwrap_or(f64::NAN)),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the cluster count.
    pub fn validate_k(k: usize) -> Result<(), ClassmlError> {
        if k == 0 {
            return Err(ClassmlError::InvalidK { got: k });
        }
        Ok(())
    }

    /// Validate the chart domain bounds.
    pub fn validate_domain<T: Float>(domain: &Domain<T>) -> Result<(), ClassmlError> {
        if !domain.min.is_finite() || !domain.max.is_finite() || domain.min >= domain.max {
            return Err(ClassmlError::InvalidDomain {
                min: domain.min.to_f64().unwrap_or(f64::NAN),
                max: domain.max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the gradient-descent learning rate.
    pub fn validate_learning_rate<T: Float>(rate: T) -> Result<(), ClassmlError> {
        if !rate.is_finite() || rate <= T::zero() {
            return Err(ClassmlError::InvalidLearningRate {
                got: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the gradient-descent iteration budget.
    pub fn validate_iterations(iterations: usize) -> Result<(), ClassmlError> {
        if iterations == 0 {
            return Err(ClassmlError::InvalidIterations { got: iterations });
        }
        Ok(())
    }

    /// Validate the k-means convergence threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), ClassmlError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(ClassmlError::InvalidThreshold {
                got: threshold.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the SVM regularization parameter.
    pub fn validate_regularization<T: Float>(c: T) -> Result<(), ClassmlError> {
        if !c.is_finite() || c <= T::zero() {
            return Err(ClassmlError::InvalidRegularization {
                got: c.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the Laplace smoothing constant.
    pub fn validate_smoothing_alpha<T: Float>(alpha: T) -> Result<(), ClassmlError> {
        if !alpha.is_finite() || alpha < T::zero() {
            return Err(ClassmlError::InvalidSmoothingAlpha {
                got: alpha.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the sigmoid-curve sample count.
    pub fn validate_curve_samples(samples: usize) -> Result<(), ClassmlError> {
        if samples < 2 {
            return Err(ClassmlError::InvalidCurveSamples { got: samples });
        }
        Ok(())
    }
}
