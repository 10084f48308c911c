//! Projection configuration.
//!
//! Parameters for a projection run, owned by the caller and passed by value
//! into the projector. Validation is fail-fast: an invalid configuration
//! never produces a partial path set.

use horizon_domain::{ConfigError, ReturnStatistics};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for a Monte Carlo projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Initial invested amount.
    pub initial_investment: Decimal,
    /// Recurring deposit contributed every month.
    pub monthly_deposit: Decimal,
    /// Projection horizon in years.
    pub n_years: usize,
    /// Number of independent simulated paths.
    pub n_simulations: usize,
    /// Historical annual return statistics parameterizing the sampler.
    pub statistics: ReturnStatistics,
}

impl ProjectionConfig {
    /// Creates a projection config with defaults.
    #[must_use]
    pub fn new(initial_investment: Decimal, statistics: ReturnStatistics) -> Self {
        Self {
            initial_investment,
            monthly_deposit: Decimal::ZERO,
            n_years: 30,
            n_simulations: 1000,
            statistics,
        }
    }

    /// Sets the recurring monthly deposit.
    #[must_use]
    pub fn with_monthly_deposit(mut self, deposit: Decimal) -> Self {
        self.monthly_deposit = deposit;
        self
    }

    /// Sets the projection horizon in years.
    #[must_use]
    pub fn with_horizon_years(mut self, n_years: usize) -> Self {
        self.n_years = n_years;
        self
    }

    /// Sets the number of simulated paths.
    #[must_use]
    pub fn with_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = n_simulations;
        self
    }

    /// Checks the configuration for out-of-range parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint: simulation count and horizon
    /// must be at least 1, amounts and the standard deviation non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations < 1 {
            return Err(ConfigError::InvalidSimulationCount);
        }
        if self.n_years < 1 {
            return Err(ConfigError::InvalidHorizon);
        }
        if self.statistics.std_dev < 0.0 {
            return Err(ConfigError::InvalidStdDev {
                std_dev: self.statistics.std_dev,
            });
        }
        if self.initial_investment < Decimal::ZERO {
            return Err(ConfigError::NegativeAmount {
                field: "initial_investment",
                amount: self.initial_investment,
            });
        }
        if self.monthly_deposit < Decimal::ZERO {
            return Err(ConfigError::NegativeAmount {
                field: "monthly_deposit",
                amount: self.monthly_deposit,
            });
        }
        Ok(())
    }
}
