//! High-level fluent API for the classical-ML kernels.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points of the crate: one
//! small builder per kernel, each validating its configuration once at
//! `build()` and returning a cheap, reusable handle. It re-exports every
//! type a host needs so `use classml::prelude::*` is the only import.
//!
//! ## Design notes
//!
//! * **Validate once**: builders run the engine validator at `build()`;
//!   the handles assume well-formed configuration and only re-validate
//!   per-call data (the points, the text).
//! * **Handles are plain data**: `KMeansEngine`, `LogisticTrainer`,
//!   `CentroidSvm`, and `NaiveBayesScorer` hold configuration only. All
//!   run state stays with the caller, so one handle can serve many
//!   independent datasets.
//! * **Sentinels over errors**: expected interactive states (too few
//!   points, a missing class, empty text) come back as `Ok(None)`, an
//!   empty fit, or a neutral classification rather than an `Err`.
//!
//! ## Examples
//!
//! ```rust
//! use classml::prelude::*;
//!
//! let trainer = LogisticRegression::new()
//!     .learning_rate(0.1)
//!     .iterations(1000)
//!     .build()?;
//!
//! let points = vec![
//!     LabeledPoint::new(1.0, 1.0, 1, Label::Negative),
//!     LabeledPoint::new(2.0, 1.5, 2, Label::Negative),
//!     LabeledPoint::new(4.0, 5.0, 3, Label::Positive),
//!     LabeledPoint::new(5.0, 4.5, 4, Label::Positive),
//! ];
//!
//! let fit = trainer.train(&points)?.unwrap();
//! assert!(fit.accuracy > 0.9);
//! # Result::<(), ClassmlError>::Ok(())
//! ```

// External dependencies
use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::bayes;
use crate::algorithms::kmeans::{place_random_centroids, DEFAULT_CONVERGENCE_THRESHOLD};
use crate::algorithms::logistic::{
    decision_boundary, sample_sigmoid_curve, train_gradient_descent,
};
use crate::algorithms::regression::fit_least_squares;
use crate::algorithms::svm::fit_centroid_separator;
use crate::engine::runner::{run_state, step_state};
use crate::engine::validator::Validator;
use crate::evaluation::metrics::{accuracy, mean_log_loss};

// ============================================================================
// Re-exports
// ============================================================================

pub use crate::algorithms::bayes::{
    ClassLikelihood, Classification, PredictedClass, Smoothing, TraceEntry, WordProbabilityTable,
};
pub use crate::algorithms::kmeans::LloydOutcome;
pub use crate::algorithms::logistic::{BoundaryLine, CurvePoint, LogisticModel};
pub use crate::algorithms::regression::RegressionModel;
pub use crate::algorithms::svm::{Hyperplane, SvmFit};
pub use crate::engine::runner::{KMeansPhase, KMeansState};
pub use crate::math::loss::LossFunction;
pub use crate::primitives::domain::Domain;
pub use crate::primitives::errors::ClassmlError;
pub use crate::primitives::point::{Centroid, ClusterPoint, Label, LabeledPoint, Point};

// ============================================================================
// Linear Regression
// ============================================================================

/// Ordinary least-squares regression entry point.
///
/// Stateless; `fit` is an associated function because there is nothing to
/// configure.
#[derive(Debug, Clone, Copy)]
pub struct LinearRegression;

impl LinearRegression {
    /// Fit a least-squares line through the points.
    ///
    /// Fewer than two points yields the zero model; identical x-values
    /// are a degenerate-input error.
    pub fn fit<T: Float>(points: &[Point<T>]) -> Result<RegressionModel<T>, ClassmlError> {
        Validator::validate_points(points)?;
        fit_least_squares(points)
    }
}

// ============================================================================
// K-Means
// ============================================================================

/// Builder for the k-means engine.
#[derive(Debug, Clone, Copy)]
pub struct KMeansBuilder<T> {
    k: usize,
    domain: Domain<T>,
    threshold: T,
    seed: Option<u64>,
}

/// Builder alias for `f64` data, the common case.
pub type KMeans = KMeansBuilder<f64>;

impl<T: Float> Default for KMeansBuilder<T> {
    fn default() -> Self {
        Self {
            k: 3,
            domain: Domain::default(),
            threshold: T::from(DEFAULT_CONVERGENCE_THRESHOLD).unwrap(),
            seed: None,
        }
    }
}

impl<T: Float> KMeansBuilder<T> {
    /// Create a builder with default parameters (`k = 3`, domain
    /// `[0, 15]`, threshold `0.01`, OS-seeded randomness).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of clusters.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the square domain centroids are placed in.
    pub fn domain(mut self, domain: Domain<T>) -> Self {
        self.domain = domain;
        self
    }

    /// Set the centroid-displacement convergence threshold.
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.threshold = threshold;
        self
    }

    /// Seed the centroid placement RNG for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<KMeansEngine<T>, ClassmlError> {
        Validator::validate_k(self.k)?;
        Validator::validate_domain(&self.domain)?;
        Validator::validate_threshold(self.threshold)?;

        Ok(KMeansEngine {
            k: self.k,
            domain: self.domain,
            threshold: self.threshold,
            seed: self.seed,
        })
    }
}

/// Configured k-means engine.
///
/// Holds configuration only; every call takes the caller's state and
/// returns the successor, so a single engine can drive many runs.
#[derive(Debug, Clone, Copy)]
pub struct KMeansEngine<T> {
    k: usize,
    domain: Domain<T>,
    threshold: T,
    seed: Option<u64>,
}

impl<T: Float> KMeansEngine<T> {
    /// Place fresh random centroids and return the initial state.
    pub fn initialize(&self, points: &[ClusterPoint<T>]) -> KMeansState<T>
    where
        T: SampleUniform,
    {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.initialize_with_rng(points, &mut rng)
    }

    /// Place fresh centroids using a caller-supplied RNG.
    pub fn initialize_with_rng<R>(
        &self,
        points: &[ClusterPoint<T>],
        rng: &mut R,
    ) -> KMeansState<T>
    where
        T: SampleUniform,
        R: Rng + ?Sized,
    {
        let centroids = place_random_centroids(self.k, &self.domain, rng);
        KMeansState::new(points.to_vec(), centroids)
    }

    /// Advance the state by one Lloyd iteration.
    pub fn step(&self, state: &KMeansState<T>) -> KMeansState<T> {
        step_state(state, self.threshold)
    }

    /// Step until convergence or the iteration budget runs out.
    pub fn run(&self, state: &KMeansState<T>, max_iterations: usize) -> KMeansState<T> {
        run_state(state, self.threshold, max_iterations, None)
    }

    /// Like [`run`](Self::run), but invoking the observer after every
    /// step so a host can record or animate intermediate states.
    pub fn run_with_observer<F>(
        &self,
        state: &KMeansState<T>,
        max_iterations: usize,
        mut observer: F,
    ) -> KMeansState<T>
    where
        F: FnMut(&KMeansState<T>),
    {
        run_state(state, self.threshold, max_iterations, Some(&mut observer))
    }
}

// ============================================================================
// Logistic Regression
// ============================================================================

/// Builder for the logistic-regression trainer.
#[derive(Debug, Clone, Copy)]
pub struct LogisticRegressionBuilder<T> {
    learning_rate: T,
    iterations: usize,
    domain: Domain<T>,
    curve_samples: usize,
}

/// Builder alias for `f64` data, the common case.
pub type LogisticRegression = LogisticRegressionBuilder<f64>;

impl<T: Float> Default for LogisticRegressionBuilder<T> {
    fn default() -> Self {
        Self {
            learning_rate: T::from(0.1).unwrap(),
            iterations: 1000,
            domain: Domain::new(T::zero(), T::from(100.0).unwrap()),
            curve_samples: 51,
        }
    }
}

impl<T: Float> LogisticRegressionBuilder<T> {
    /// Create a builder with default hyperparameters (`learning_rate =
    /// 0.1`, `iterations = 1000`, curve domain `[0, 100]`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gradient-descent learning rate.
    pub fn learning_rate(mut self, rate: T) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Set the fixed gradient-descent iteration budget.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the x-domain the sigmoid curve is sampled over.
    pub fn curve_domain(mut self, domain: Domain<T>) -> Self {
        self.domain = domain;
        self
    }

    /// Set how many points the sigmoid curve is sampled at.
    pub fn curve_samples(mut self, samples: usize) -> Self {
        self.curve_samples = samples;
        self
    }

    /// Validate the configuration and build the trainer.
    pub fn build(self) -> Result<LogisticTrainer<T>, ClassmlError> {
        Validator::validate_learning_rate(self.learning_rate)?;
        Validator::validate_iterations(self.iterations)?;
        Validator::validate_domain(&self.domain)?;
        Validator::validate_curve_samples(self.curve_samples)?;

        Ok(LogisticTrainer {
            learning_rate: self.learning_rate,
            iterations: self.iterations,
            domain: self.domain,
            curve_samples: self.curve_samples,
        })
    }
}

/// Trained logistic model bundled with its display artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticFit<T> {
    /// The trained 3-weight model.
    pub model: LogisticModel<T>,

    /// Fraction of training points classified correctly at `p = 0.5`.
    pub accuracy: T,

    /// Mean binary cross-entropy over the training points.
    pub log_loss: T,

    /// Sampled sigmoid curve across the configured x-domain.
    pub sigmoid_curve: Vec<CurvePoint<T>>,

    /// The `p = 0.5` boundary line, when renderable.
    pub decision_boundary: Option<BoundaryLine<T>>,
}

/// Configured logistic-regression trainer.
#[derive(Debug, Clone, Copy)]
pub struct LogisticTrainer<T> {
    learning_rate: T,
    iterations: usize,
    domain: Domain<T>,
    curve_samples: usize,
}

impl<T: Float> LogisticTrainer<T> {
    /// Train on the labeled points.
    ///
    /// Fewer than two points is a normal interactive state and returns
    /// `Ok(None)`; the host shows "add more points" instead of a chart.
    pub fn train(
        &self,
        points: &[LabeledPoint<T>],
    ) -> Result<Option<LogisticFit<T>>, ClassmlError> {
        Validator::validate_points(points)?;

        if points.len() < 2 {
            return Ok(None);
        }

        let model = train_gradient_descent(points, self.learning_rate, self.iterations);

        let half = T::from(0.5).unwrap();
        let accuracy = accuracy(points.iter().map(|point| {
            let predicted_positive = model.probability(point.x, point.y) > half;
            predicted_positive == (point.label == Label::Positive)
        }));

        let targets: Vec<T> = points.iter().map(|p| p.label.as_target()).collect();
        let predictions: Vec<T> = points.iter().map(|p| model.probability(p.x, p.y)).collect();
        let log_loss = mean_log_loss(&targets, &predictions);

        let sigmoid_curve = sample_sigmoid_curve(&model, &self.domain, self.curve_samples);
        let decision_boundary = decision_boundary(&model);

        Ok(Some(LogisticFit {
            model,
            accuracy,
            log_loss,
            sigmoid_curve,
            decision_boundary,
        }))
    }
}

// ============================================================================
// Centroid SVM
// ============================================================================

/// Builder for the centroid-based linear separator.
#[derive(Debug, Clone, Copy)]
pub struct SvmBuilder<T> {
    c: T,
}

impl<T: Float> Default for SvmBuilder<T> {
    fn default() -> Self {
        Self { c: T::one() }
    }
}

impl<T: Float> SvmBuilder<T> {
    /// Create a builder with the default regularization `C = 1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the regularization parameter `C`.
    pub fn regularization(mut self, c: T) -> Self {
        self.c = c;
        self
    }

    /// Validate the configuration and build the separator.
    pub fn build(self) -> Result<CentroidSvm<T>, ClassmlError> {
        Validator::validate_regularization(self.c)?;
        Ok(CentroidSvm { c: self.c })
    }
}

/// Configured centroid separator.
#[derive(Debug, Clone, Copy)]
pub struct CentroidSvm<T> {
    c: T,
}

impl<T: Float> CentroidSvm<T> {
    /// Fit the separator to the labeled points.
    ///
    /// Fewer than four points or a missing class yields the empty fit.
    pub fn fit(&self, points: &[LabeledPoint<T>]) -> Result<SvmFit<T>, ClassmlError> {
        Validator::validate_points(points)?;
        Ok(fit_centroid_separator(points, self.c))
    }
}

// ============================================================================
// Naive Bayes
// ============================================================================

/// Builder for the naive Bayes text scorer.
#[derive(Debug, Clone)]
pub struct NaiveBayesBuilder<T> {
    table: WordProbabilityTable<T>,
    smoothing_enabled: bool,
    alpha: T,
}

/// Builder alias for `f64` scoring, the common case.
pub type NaiveBayes = NaiveBayesBuilder<f64>;

impl<T: Float> Default for NaiveBayesBuilder<T> {
    fn default() -> Self {
        Self {
            table: WordProbabilityTable::builtin(),
            smoothing_enabled: true,
            alpha: T::from(bayes::DEFAULT_ALPHA).unwrap(),
        }
    }
}

impl<T: Float> NaiveBayesBuilder<T> {
    /// Create a builder with the builtin 20-token table and Laplace
    /// smoothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the builtin table with a caller-supplied one.
    pub fn table(mut self, table: WordProbabilityTable<T>) -> Self {
        self.table = table;
        self
    }

    /// Enable or disable Laplace smoothing for unknown tokens.
    ///
    /// When disabled, unknown tokens fall back to a fixed likelihood of
    /// `0.01` for both classes.
    pub fn smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }

    /// Set the Laplace smoothing constant.
    pub fn alpha(mut self, alpha: T) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validate the configuration and build the scorer.
    pub fn build(self) -> Result<NaiveBayesScorer<T>, ClassmlError> {
        Validator::validate_smoothing_alpha(self.alpha)?;

        let smoothing = if self.smoothing_enabled {
            Smoothing::Laplace { alpha: self.alpha }
        } else {
            Smoothing::Fixed {
                probability: T::from(bayes::UNSMOOTHED_FALLBACK).unwrap(),
            }
        };

        Ok(NaiveBayesScorer {
            table: self.table,
            smoothing,
        })
    }
}

/// Configured naive Bayes scorer.
#[derive(Debug, Clone)]
pub struct NaiveBayesScorer<T> {
    table: WordProbabilityTable<T>,
    smoothing: Smoothing<T>,
}

impl<T: Float> NaiveBayesScorer<T> {
    /// Score a text and return the normalized posterior with its trace.
    ///
    /// Empty or whitespace-only text yields the neutral 0.5/0.5 result.
    pub fn classify(&self, text: &str) -> Classification<T> {
        bayes::classify(&self.table, text, self.smoothing)
    }

    /// The token table this scorer uses.
    pub fn table(&self) -> &WordProbabilityTable<T> {
        &self.table
    }
}
