//! Naive Bayes token scoring with Laplace smoothing.
//!
//! ## Purpose
//!
//! This module scores free text against a pre-trained token probability
//! table: tokenize, look up per-class likelihoods, accumulate a posterior
//! in log-space, and normalize. It also emits the ordered step-by-step
//! trace the explainer UI renders (prior row, one row per token, final
//! normalized row) as structured data.
//!
//! ## Design notes
//!
//! * **Injectable reference data**: the table and priors are
//!   configuration, not computed from a corpus. A builtin 20-token
//!   spam/ham table mirrors the demo dataset.
//! * **Log-domain**: likelihood products underflow quickly; sums of
//!   logarithms with max-subtraction before exponentiation do not.
//! * **Neutral on empty input**: empty text returns a 0.5/0.5 split with
//!   an `Unknown` prediction and no trace, a normal interactive state.
//!
//! ## Key concepts
//!
//! * **Unknown tokens**: Laplace smoothing assigns `α/(V+α)` to both
//!   classes; with smoothing disabled, a fixed fallback probability is
//!   used instead. Both paths treat the classes symmetrically.

// External dependencies
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Internal dependencies
use crate::primitives::errors::ClassmlError;

/// Fallback likelihood for unknown tokens when smoothing is disabled.
pub const UNSMOOTHED_FALLBACK: f64 = 0.01;

/// Default Laplace smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

// ============================================================================
// Word Probability Table
// ============================================================================

/// Per-class conditional likelihoods for one token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassLikelihood<T> {
    /// `P(token | spam)`.
    pub spam: T,

    /// `P(token | ham)`.
    pub ham: T,
}

/// Pre-trained token likelihoods plus class priors.
///
/// Immutable reference data injected into the scorer; a BTreeMap keeps
/// iteration order (and thus any derived display) deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordProbabilityTable<T> {
    /// Token to per-class likelihood.
    entries: BTreeMap<String, ClassLikelihood<T>>,

    /// Prior probability of spam.
    pub spam_prior: T,

    /// Prior probability of ham.
    pub ham_prior: T,
}

/// Builtin likelihoods mirroring the demo's simplified training data.
const BUILTIN_LIKELIHOODS: &[(&str, f64, f64)] = &[
    // Spam-leaning tokens
    ("free", 0.8, 0.1),
    ("money", 0.7, 0.05),
    ("win", 0.6, 0.02),
    ("click", 0.5, 0.1),
    ("now", 0.4, 0.3),
    ("offer", 0.7, 0.05),
    ("urgent", 0.8, 0.02),
    ("limited", 0.6, 0.1),
    ("guarantee", 0.7, 0.05),
    ("prize", 0.8, 0.01),
    // Ham-leaning tokens
    ("meeting", 0.01, 0.4),
    ("project", 0.02, 0.5),
    ("work", 0.05, 0.6),
    ("team", 0.02, 0.4),
    ("please", 0.1, 0.3),
    ("thank", 0.05, 0.4),
    ("schedule", 0.01, 0.3),
    ("report", 0.02, 0.35),
    ("update", 0.03, 0.4),
    ("regards", 0.01, 0.5),
];

/// Builtin prior probability of spam.
const BUILTIN_SPAM_PRIOR: f64 = 0.4;

/// Builtin prior probability of ham.
const BUILTIN_HAM_PRIOR: f64 = 0.6;

impl<T: Float> WordProbabilityTable<T> {
    /// Create a table from token likelihoods and class priors.
    pub fn new<I, S>(entries: I, spam_prior: T, ham_prior: T) -> Result<Self, ClassmlError>
    where
        I: IntoIterator<Item = (S, ClassLikelihood<T>)>,
        S: Into<String>,
    {
        let entries: BTreeMap<String, ClassLikelihood<T>> = entries
            .into_iter()
            .map(|(token, likelihood)| (token.into(), likelihood))
            .collect();

        if entries.is_empty() {
            return Err(ClassmlError::InvalidTable {
                reason: "table must contain at least one token",
            });
        }
        if spam_prior <= T::zero() || ham_prior <= T::zero() {
            return Err(ClassmlError::InvalidTable {
                reason: "priors must be positive",
            });
        }

        Ok(Self {
            entries,
            spam_prior,
            ham_prior,
        })
    }

    /// The builtin 20-token spam/ham table with priors 0.4/0.6.
    pub fn builtin() -> Self {
        let entries = BUILTIN_LIKELIHOODS.iter().map(|&(token, spam, ham)| {
            (
                token.to_string(),
                ClassLikelihood {
                    spam: T::from(spam).unwrap(),
                    ham: T::from(ham).unwrap(),
                },
            )
        });

        Self {
            entries: entries.collect(),
            spam_prior: T::from(BUILTIN_SPAM_PRIOR).unwrap(),
            ham_prior: T::from(BUILTIN_HAM_PRIOR).unwrap(),
        }
    }

    /// Look up the likelihoods for a token.
    pub fn lookup(&self, token: &str) -> Option<ClassLikelihood<T>> {
        self.entries.get(token).copied()
    }

    /// Vocabulary size of the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no tokens (unreachable after `new`).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Smoothing Policy
// ============================================================================

/// How unknown tokens are scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Smoothing<T> {
    /// Laplace smoothing: unknown tokens get `α / (V + α)` per class.
    Laplace {
        /// Additive smoothing constant.
        alpha: T,
    },

    /// Fixed fallback: unknown tokens get a constant small likelihood.
    Fixed {
        /// The fallback likelihood applied to both classes.
        probability: T,
    },
}

impl<T: Float> Smoothing<T> {
    /// Per-class likelihood for an unknown token.
    fn unknown_likelihood(&self, vocabulary: usize) -> T {
        match *self {
            Smoothing::Laplace { alpha } => alpha / (T::from(vocabulary).unwrap() + alpha),
            Smoothing::Fixed { probability } => probability,
        }
    }
}

impl<T: Float> Default for Smoothing<T> {
    fn default() -> Self {
        Smoothing::Laplace {
            alpha: T::from(DEFAULT_ALPHA).unwrap(),
        }
    }
}

// ============================================================================
// Classification Output
// ============================================================================

/// Predicted class of a scored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictedClass {
    /// Spam posterior exceeded ham.
    Spam,

    /// Ham posterior met or exceeded spam.
    Ham,

    /// Input was empty; no evidence either way.
    Unknown,
}

/// One row of the step-by-step scoring trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEntry<T> {
    /// The class priors before any token is scored.
    Prior {
        /// `P(spam)`.
        spam: T,
        /// `P(ham)`.
        ham: T,
    },

    /// The likelihood contribution of one token.
    Token {
        /// The token scored.
        token: String,
        /// `P(token | spam)` used.
        spam: T,
        /// `P(token | ham)` used.
        ham: T,
        /// Whether the token appears in the table.
        known: bool,
    },

    /// The final normalized posteriors.
    Posterior {
        /// `P(spam | text)`.
        spam: T,
        /// `P(ham | text)`.
        ham: T,
    },
}

/// Normalized classification result with its scoring trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification<T> {
    /// Posterior probability of spam; sums with `ham` to 1.
    pub spam: T,

    /// Posterior probability of ham.
    pub ham: T,

    /// Predicted class.
    pub predicted: PredictedClass,

    /// Ordered scoring trace for display.
    pub trace: Vec<TraceEntry<T>>,
}

impl<T: Float> Classification<T> {
    /// The neutral result for empty input.
    pub fn neutral() -> Self {
        let half = T::from(0.5).unwrap();
        Self {
            spam: half,
            ham: half,
            predicted: PredictedClass::Unknown,
            trace: Vec::new(),
        }
    }
}

// ============================================================================
// Tokenization and Scoring
// ============================================================================

/// Tokenize input text: lowercase, strip non-word and non-space
/// characters, split on whitespace, drop empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score a text against the table and produce a normalized posterior.
pub fn classify<T: Float>(
    table: &WordProbabilityTable<T>,
    text: &str,
    smoothing: Smoothing<T>,
) -> Classification<T> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Classification::neutral();
    }

    let mut trace = Vec::with_capacity(tokens.len() + 2);
    trace.push(TraceEntry::Prior {
        spam: table.spam_prior,
        ham: table.ham_prior,
    });

    let mut log_spam = table.spam_prior.ln();
    let mut log_ham = table.ham_prior.ln();

    for token in tokens {
        let (likelihood, known) = match table.lookup(&token) {
            Some(likelihood) => (likelihood, true),
            None => {
                let p = smoothing.unknown_likelihood(table.len());
                (ClassLikelihood { spam: p, ham: p }, false)
            }
        };

        log_spam = log_spam + likelihood.spam.ln();
        log_ham = log_ham + likelihood.ham.ln();

        trace.push(TraceEntry::Token {
            token,
            spam: likelihood.spam,
            ham: likelihood.ham,
            known,
        });
    }

    // Subtract the max before exponentiating to avoid underflow, then
    // normalize so the posteriors sum to 1.
    let max_log = log_spam.max(log_ham);
    let spam_unnormalized = (log_spam - max_log).exp();
    let ham_unnormalized = (log_ham - max_log).exp();
    let total = spam_unnormalized + ham_unnormalized;

    let spam = spam_unnormalized / total;
    let ham = ham_unnormalized / total;

    trace.push(TraceEntry::Posterior { spam, ham });

    Classification {
        spam,
        ham,
        predicted: if spam > ham {
            PredictedClass::Spam
        } else {
            PredictedClass::Ham
        },
        trace,
    }
}
