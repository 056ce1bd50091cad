//! Layer 4: Evaluation
//!
//! This layer provides model-quality metrics shared across the kernels:
//! classification accuracy, mean log-loss, and the coefficient of
//! determination. Each kernel reports its fit quality through these
//! rather than reimplementing them.

/// Shared model-quality metrics.
pub mod metrics;
