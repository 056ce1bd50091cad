//! Sigmoid and probability clamping.
//!
//! ## Purpose
//!
//! The logistic function and the probability clamps used when taking
//! logarithms of predicted probabilities.
//!
//! ## Invariants
//!
//! * `sigmoid` maps every finite input into `(0, 1)`.
//! * Clamped probabilities never reach 0 or 1, so their logarithms are
//!   always finite.

// External dependencies
use num_traits::Float;

// ============================================================================
// Clamping Bounds
// ============================================================================

/// Lower clamp applied to predicted probabilities before `ln`.
pub const PROBABILITY_FLOOR: f64 = 0.001;

/// Upper clamp applied to predicted probabilities before `ln`.
pub const PROBABILITY_CEILING: f64 = 0.999;

// ============================================================================
// Functions
// ============================================================================

/// The logistic function `1 / (1 + e^(-z))`.
#[inline]
pub fn sigmoid<T: Float>(z: T) -> T {
    T::one() / (T::one() + (-z).exp())
}

/// Clamp a probability into `[PROBABILITY_FLOOR, PROBABILITY_CEILING]`.
#[inline]
pub fn clamp_probability<T: Float>(p: T) -> T {
    let floor = T::from(PROBABILITY_FLOOR).unwrap();
    let ceiling = T::from(PROBABILITY_CEILING).unwrap();
    p.max(floor).min(ceiling)
}

/// Single-observation binary cross-entropy with clamped probability.
///
/// `-(y·ln(p) + (1-y)·ln(1-p))` where `y` is the 0/1 target.
#[inline]
pub fn log_loss_term<T: Float>(target: T, probability: T) -> T {
    let p = clamp_probability(probability);
    -(target * p.ln() + (T::one() - target) * (T::one() - p).ln())
}
