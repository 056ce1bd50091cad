//! # classml: Classical Machine-Learning Kernels
//!
//! Numerical kernels behind interactive, classroom-style machine-learning
//! demos: ordinary least-squares regression, Lloyd's k-means, batch
//! gradient-descent logistic regression, a centroid-based linear-SVM
//! approximation, naive Bayes text scoring, and a catalogue of loss
//! functions.
//!
//! ## What this crate is
//!
//! Each algorithm is a small, deterministic, pure (or explicitly state
//! passing) computation over caller-owned collections of 2D points. The
//! crate holds no hidden state: a rendering host owns the dataset, calls a
//! kernel with `(points, config)`, and receives plain data back (model
//! parameters, per-iteration state, derived curves, classification
//! traces). Animation, charting, and user interaction are deliberately out
//! of scope.
//!
//! ## Quick Start
//!
//! ### Linear regression
//!
//! ```rust
//! use classml::prelude::*;
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(1.0, 3.0, 1),
//!     Point::new(2.0, 5.0, 2),
//!     Point::new(3.0, 7.0, 3),
//! ];
//!
//! let model = LinearRegression::fit(&points)?;
//! assert!((model.slope - 2.0).abs() < 1e-9);
//! assert!((model.intercept - 1.0).abs() < 1e-9);
//! # Result::<(), ClassmlError>::Ok(())
//! ```
//!
//! ### K-means, one step at a time
//!
//! ```rust
//! use classml::prelude::*;
//!
//! let points = vec![
//!     ClusterPoint::unassigned(1.0, 1.0, 1),
//!     ClusterPoint::unassigned(1.5, 1.2, 2),
//!     ClusterPoint::unassigned(9.0, 9.5, 3),
//!     ClusterPoint::unassigned(9.5, 9.0, 4),
//! ];
//!
//! let engine = KMeans::new()
//!     .k(2)
//!     .domain(Domain::new(0.0, 15.0))
//!     .seed(42)
//!     .build()?;
//!
//! let state = engine.initialize(&points);
//! let state = engine.run(&state, 50);
//! assert!(state.converged);
//! # Result::<(), ClassmlError>::Ok(())
//! ```
//!
//! ### Naive Bayes text scoring
//!
//! ```rust
//! use classml::prelude::*;
//!
//! let scorer = NaiveBayes::new().build()?;
//! let result = scorer.classify("free money win now");
//! assert_eq!(result.predicted, PredictedClass::Spam);
//! # Result::<(), ClassmlError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, ClassmlError>`. Degenerate
//! but *expected* interactive states (an empty canvas, a single class, too
//! few points for a model) are not errors: they come back as explicit
//! sentinel values such as `Ok(None)` or an empty fit, so a host can show
//! "add more points" instead of handling a failure. Errors are reserved
//! for out-of-domain parameters and mathematically undefined results.
//!
//! ## References
//!
//! - Lloyd, S. (1982). "Least squares quantization in PCM"
//! - Cox, D. R. (1958). "The regression analysis of binary sequences"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the classical-ML kernels.
mod algorithms;

// Layer 4: Evaluation - shared model-quality metrics.
mod evaluation;

// Layer 5: Engine - validation and the step/run loop.
mod engine;

// High-level fluent API for the kernels.
mod api;

// Standard classml prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryLine, Centroid, CentroidSvm, ClassLikelihood, Classification, ClassmlError,
        ClusterPoint, CurvePoint, Domain, Hyperplane, KMeans, KMeansBuilder, KMeansEngine,
        KMeansPhase, KMeansState, Label, LabeledPoint, LinearRegression, LogisticFit,
        LogisticModel, LogisticRegression, LogisticRegressionBuilder, LogisticTrainer,
        LossFunction, NaiveBayes, NaiveBayesBuilder, NaiveBayesScorer, Point, PredictedClass,
        RegressionModel, Smoothing, SvmBuilder, SvmFit, TraceEntry, WordProbabilityTable,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
