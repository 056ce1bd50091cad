//! Lloyd's k-means iteration: assignment, update, convergence.
//!
//! ## Purpose
//!
//! This module implements a single Lloyd iteration over caller-owned
//! points and centroids. The surrounding state machine (explicit state
//! struct, run loop, observer hook) lives in the engine and API layers;
//! everything here is a pure transform of its inputs.
//!
//! ## Key concepts
//!
//! * **Assignment**: each point moves to its nearest centroid by
//!   Euclidean distance. Ties break to the lowest centroid index by
//!   following centroid iteration order, which keeps steps deterministic.
//! * **Update**: each centroid moves to the mean of its assigned points.
//!   A centroid with no assigned points keeps its previous position: no
//!   divide-by-zero, no forced re-seeding.
//! * **Convergence**: the iteration has converged when every centroid's
//!   displacement is below the threshold (default 0.01).
//!
//! ## Invariants
//!
//! * The centroid count never changes across a step.
//! * An empty point set converges immediately.

// External dependencies
use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::Rng;
use tracing::trace;

// Internal dependencies
use crate::math::geometry::distance_between;
use crate::primitives::domain::Domain;
use crate::primitives::point::{Centroid, ClusterPoint};

/// Default centroid-displacement threshold below which a run is
/// considered converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.01;

// ============================================================================
// Initialization
// ============================================================================

/// Place `k` centroids uniformly at random within the domain.
///
/// The RNG is caller-supplied so hosts can seed it for reproducible runs.
/// Parameter validation (`k >= 1`, well-formed domain) happens in the
/// engine validator before this is reached.
pub fn place_random_centroids<T, R>(k: usize, domain: &Domain<T>, rng: &mut R) -> Vec<Centroid<T>>
where
    T: Float + SampleUniform,
    R: Rng + ?Sized,
{
    (0..k)
        .map(|id| {
            let x = rng.random_range(domain.min..=domain.max);
            let y = rng.random_range(domain.min..=domain.max);
            Centroid::new(x, y, id)
        })
        .collect()
}

// ============================================================================
// Lloyd Step
// ============================================================================

/// Outcome of a single Lloyd iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct LloydOutcome<T> {
    /// Points with refreshed cluster assignments.
    pub points: Vec<ClusterPoint<T>>,

    /// Centroids moved to the mean of their assigned points.
    pub centroids: Vec<Centroid<T>>,

    /// Whether every centroid displacement fell below the threshold.
    pub converged: bool,
}

/// Run one Lloyd iteration: assign, update, test convergence.
pub fn lloyd_step<T: Float>(
    points: &[ClusterPoint<T>],
    centroids: &[Centroid<T>],
    threshold: T,
) -> LloydOutcome<T> {
    let assigned = assign_points(points, centroids);
    let updated = update_centroids(&assigned, centroids);
    let converged = centroids_converged(centroids, &updated, threshold);

    LloydOutcome {
        points: assigned,
        centroids: updated,
        converged,
    }
}

/// Assign each point to its nearest centroid.
///
/// Iterates centroids in index order with a strict `<` comparison, so the
/// first (lowest-index) centroid wins distance ties.
pub fn assign_points<T: Float>(
    points: &[ClusterPoint<T>],
    centroids: &[Centroid<T>],
) -> Vec<ClusterPoint<T>> {
    points
        .iter()
        .map(|point| {
            let mut nearest = point.cluster;
            let mut best_distance = T::infinity();

            for (index, centroid) in centroids.iter().enumerate() {
                let distance = distance_between(point, centroid);
                if distance < best_distance {
                    best_distance = distance;
                    nearest = Some(index);
                }
            }

            ClusterPoint {
                cluster: nearest,
                ..*point
            }
        })
        .collect()
}

/// Move each centroid to the mean of its assigned points.
///
/// A centroid with no assigned points keeps its previous position.
pub fn update_centroids<T: Float>(
    points: &[ClusterPoint<T>],
    centroids: &[Centroid<T>],
) -> Vec<Centroid<T>> {
    centroids
        .iter()
        .enumerate()
        .map(|(index, centroid)| {
            let mut count = 0usize;
            let mut sum_x = T::zero();
            let mut sum_y = T::zero();

            for point in points.iter().filter(|p| p.cluster == Some(index)) {
                sum_x = sum_x + point.x;
                sum_y = sum_y + point.y;
                count += 1;
            }

            if count == 0 {
                trace!(cluster = centroid.id, "no points assigned; centroid kept");
                return *centroid;
            }

            let n = T::from(count).unwrap();
            Centroid {
                x: sum_x / n,
                y: sum_y / n,
                ..*centroid
            }
        })
        .collect()
}

/// Test whether every centroid displacement is below the threshold.
pub fn centroids_converged<T: Float>(
    old: &[Centroid<T>],
    new: &[Centroid<T>],
    threshold: T,
) -> bool {
    old.iter()
        .zip(new.iter())
        .all(|(before, after)| distance_between(before, after) < threshold)
}
