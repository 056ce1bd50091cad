//! Layer 3: Algorithms
//!
//! This layer implements the classical-ML kernels themselves: closed-form
//! least squares, the Lloyd iteration, batch gradient descent for
//! logistic regression, the centroid-based linear separator, and naive
//! Bayes scoring. It contains the "business logic" of the demos but is
//! orchestrated by the engine and API layers.

/// Closed-form ordinary least-squares regression.
pub mod regression;

/// Lloyd's k-means iteration: assignment, update, convergence.
pub mod kmeans;

/// Batch gradient-descent logistic regression.
pub mod logistic;

/// Centroid-based linear separator (SVM approximation).
pub mod svm;

/// Naive Bayes token scoring with Laplace smoothing.
pub mod bayes;
