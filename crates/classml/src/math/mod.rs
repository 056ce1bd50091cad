//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions shared by the kernels:
//! - Euclidean geometry helpers (distance, mean position)
//! - The logistic function and probability clamping
//! - The loss-function catalogue
//!
//! These are reusable building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance and mean-position helpers.
pub mod geometry;

/// Sigmoid and probability clamping.
pub mod activation;

/// Loss-function catalogue for the loss explainer.
pub mod loss;
