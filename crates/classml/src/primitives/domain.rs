//! Chart domain bounds and coordinate clamping.
//!
//! ## Purpose
//!
//! Every demo renders into a square chart with a configurable coordinate
//! range (commonly `[0, 15]` or `[0, 100]`). The kernels never hardcode
//! that range: centroid placement, curve sampling, and coordinate
//! clamping all take a [`Domain`].
//!
//! ## Invariants
//!
//! * `min < max` and both bounds are finite (enforced by the engine
//!   validator before a domain reaches any kernel).

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};

// ============================================================================
// Domain
// ============================================================================

/// Inclusive coordinate range applied to both chart axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain<T> {
    /// Lower bound of the range.
    pub min: T,

    /// Upper bound of the range.
    pub max: T,
}

impl<T: Float> Domain<T> {
    /// Create a new domain.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Width of the range.
    #[inline]
    pub fn width(&self) -> T {
        self.max - self.min
    }

    /// Midpoint of the range.
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.min + self.max) / T::from(2.0).unwrap()
    }

    /// Clamp a coordinate into the range.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        value.max(self.min).min(self.max)
    }

    /// Whether a coordinate lies within the range.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: Float> Default for Domain<T> {
    /// The `[0, 15]` range used by the clustering demos.
    fn default() -> Self {
        Self {
            min: T::zero(),
            max: T::from(15.0).unwrap(),
        }
    }
}
