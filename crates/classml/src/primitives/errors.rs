//! Error types for classml operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! kernels: out-of-domain parameters, malformed input data, and
//! mathematically undefined results from valid-shaped input.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values.
//! * **Two families**: degenerate-input errors (valid shape, undefined
//!   math) and invalid-parameter errors (caller mistakes). States that are
//!   normal in an interactive tool (too few points, a single class, empty
//!   text) are *not* errors; kernels return sentinel values for those.
//! * **Immediate**: The crate never catches its own errors; they propagate
//!   straight to the caller via `Result`.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for classml operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassmlError {
    /// Valid-shaped input with a mathematically undefined result, e.g.
    /// all-identical x-values in least-squares regression.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// Why the computation is undefined for this input.
        reason: &'static str,
    },

    /// Cluster count must be at least 1.
    #[error("invalid k: {got} (must be at least 1)")]
    InvalidK {
        /// The cluster count provided.
        got: usize,
    },

    /// Learning rate must be positive and finite.
    #[error("invalid learning rate: {got} (must be positive and finite)")]
    InvalidLearningRate {
        /// The learning rate provided.
        got: f64,
    },

    /// Gradient descent requires at least 1 iteration.
    #[error("invalid iterations: {got} (must be at least 1)")]
    InvalidIterations {
        /// The iteration count provided.
        got: usize,
    },

    /// Convergence threshold must be positive and finite.
    #[error("invalid convergence threshold: {got} (must be positive and finite)")]
    InvalidThreshold {
        /// The threshold provided.
        got: f64,
    },

    /// Regularization parameter C must be positive and finite.
    #[error("invalid regularization C: {got} (must be positive and finite)")]
    InvalidRegularization {
        /// The C value provided.
        got: f64,
    },

    /// Smoothing alpha must be non-negative and finite.
    #[error("invalid smoothing alpha: {got} (must be non-negative and finite)")]
    InvalidSmoothingAlpha {
        /// The alpha provided.
        got: f64,
    },

    /// Domain bounds must be finite with `min < max`.
    #[error("invalid domain: [{min}, {max}] (bounds must be finite with min < max)")]
    InvalidDomain {
        /// Lower bound provided.
        min: f64,
        /// Upper bound provided.
        max: f64,
    },

    /// Class labels are restricted to 0 and 1.
    #[error("invalid class label: {got} (must be 0 or 1)")]
    InvalidLabel {
        /// The class value provided.
        got: u8,
    },

    /// Curve sampling needs at least 2 samples to span the domain.
    #[error("invalid curve samples: {got} (must be at least 2)")]
    InvalidCurveSamples {
        /// The sample count provided.
        got: usize,
    },

    /// A token probability table must contain at least one token and
    /// positive priors.
    #[error("invalid probability table: {reason}")]
    InvalidTable {
        /// Why the table was rejected.
        reason: &'static str,
    },

    /// Input data contains NaN or infinite values.
    #[error("invalid numeric value: {context}")]
    InvalidNumericValue {
        /// Which value was non-finite, e.g. `point 3: x=NaN`.
        context: String,
    },
}
