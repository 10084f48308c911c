//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use horizon_simulation::prelude::*;
//! ```

// Monte Carlo projector
pub use crate::monte_carlo::{InvestmentPath, MonteCarloProjector, PathSet};

// Percentile aggregation
pub use crate::percentile::{
    DEFAULT_PERCENTILE_LEVELS, PercentileBand, PercentileSummary, summarize,
};

// Return sampling models
pub use crate::return_model::{DeterministicReturns, NormalReturnModel, ReturnModel};

// Configuration
pub use crate::state::ProjectionConfig;
