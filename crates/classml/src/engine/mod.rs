//! Layer 5: Engine
//!
//! This layer provides the orchestration around the kernels: fail-fast
//! validation of parameters and input data, and the k-means step/run
//! loop with its observer hook. The algorithms stay pure; the engine
//! decides when they run and with what.

/// Parameter and input validation.
pub mod validator;

/// The k-means step/run loop.
pub mod runner;
