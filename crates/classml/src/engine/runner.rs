//! The k-means step/run loop.
//!
//! ## Purpose
//!
//! This module holds the explicit k-means state and the loop that drives
//! Lloyd iterations across it. Animation cadence is a host concern: a UI
//! that wants to animate calls [`step_state`] from its own timer, while a
//! batch caller uses [`run_state`] and optionally observes every
//! intermediate state through the observer hook.
//!
//! ## Design notes
//!
//! * **Pure transitions**: every call is a transform of the caller-owned
//!   state tuple; nothing is retained internally, which makes replay and
//!   step-back trivial.
//! * **Atomic steps**: each step completes before returning, so
//!   cancelling an auto-run is simply "stop calling step"; there is no
//!   in-flight work to abort and no concurrency control needed.
//! * **Idempotent at convergence**: stepping a converged state returns it
//!   unchanged.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::kmeans::lloyd_step;
use crate::primitives::point::{Centroid, ClusterPoint};

// ============================================================================
// State
// ============================================================================

/// Lifecycle phase of a k-means run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KMeansPhase {
    /// No centroids placed yet.
    Uninitialized,

    /// Centroids placed; iterations may proceed.
    Ready,

    /// Centroid displacement fell below the threshold.
    Converged,
}

/// Explicit, caller-owned state of a k-means run.
///
/// The engine never holds state between calls; hosts pass this tuple in
/// and receive the successor state back.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansState<T> {
    /// The dataset with its current cluster assignments.
    pub points: Vec<ClusterPoint<T>>,

    /// Current centroid positions; count is fixed for the run.
    pub centroids: Vec<Centroid<T>>,

    /// Number of Lloyd iterations performed so far.
    pub iteration: usize,

    /// Whether the run has converged.
    pub converged: bool,
}

impl<T: Float> KMeansState<T> {
    /// Create a fresh state from points and newly placed centroids.
    pub fn new(points: Vec<ClusterPoint<T>>, centroids: Vec<Centroid<T>>) -> Self {
        Self {
            points,
            centroids,
            iteration: 0,
            converged: false,
        }
    }

    /// The lifecycle phase implied by this state.
    pub fn phase(&self) -> KMeansPhase {
        if self.centroids.is_empty() {
            KMeansPhase::Uninitialized
        } else if self.converged {
            KMeansPhase::Converged
        } else {
            KMeansPhase::Ready
        }
    }
}

// ============================================================================
// Step and Run
// ============================================================================

/// Advance the state by one Lloyd iteration.
///
/// A converged state is returned unchanged.
pub fn step_state<T: Float>(state: &KMeansState<T>, threshold: T) -> KMeansState<T> {
    if state.converged {
        return state.clone();
    }

    let outcome = lloyd_step(&state.points, &state.centroids, threshold);

    KMeansState {
        points: outcome.points,
        centroids: outcome.centroids,
        iteration: state.iteration + 1,
        converged: outcome.converged,
    }
}

/// Step repeatedly until convergence or the iteration budget runs out.
///
/// The observer receives every intermediate state, which is how an
/// animating host replays the run without owning the loop.
pub fn run_state<T: Float>(
    state: &KMeansState<T>,
    threshold: T,
    max_iterations: usize,
    mut observer: Option<&mut dyn FnMut(&KMeansState<T>)>,
) -> KMeansState<T> {
    let mut current = state.clone();

    for _ in 0..max_iterations {
        if current.converged {
            break;
        }

        current = step_state(&current, threshold);

        if let Some(observer) = observer.as_deref_mut() {
            observer(&current);
        }
    }

    if current.converged {
        debug!(iterations = current.iteration, "k-means run converged");
    }

    current
}
