use serde::{Deserialize, Serialize};

/// Mean and sample standard deviation of historical annual returns.
///
/// Computed once per run from a [`crate::entities::ReturnSeries`] and
/// immutable thereafter. The standard deviation uses sample (n-1) semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReturnStatistics {
    /// Mean annual return as a fraction (0.07 = 7%).
    pub mean: f64,
    /// Sample standard deviation of annual returns.
    pub std_dev: f64,
}

impl ReturnStatistics {
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}
