//! Monte Carlo projection of investment paths under recurring deposits.
//!
//! Each trial draws one annual return per projection year, compounds the
//! balance year by year, and adds the future value of twelve monthly deposits
//! as an ordinary annuity. A per-path time-weighted return (TWR) geometrically
//! links the per-year returns and annualizes over the horizon.

use crate::return_model::{NormalReturnModel, ReturnModel};
use crate::state::ProjectionConfig;
use horizon_domain::ConfigError;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One simulated investment trajectory.
///
/// Holds `n_years + 1` values indexed by year, where index 0 is the initial
/// investment, plus the path's annualized time-weighted return. Built
/// independently per trial and immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentPath {
    values: Vec<Decimal>,
    twr: f64,
}

impl InvestmentPath {
    #[must_use]
    pub fn new(values: Vec<Decimal>, twr: f64) -> Self {
        Self { values, twr }
    }

    /// Investment values indexed by year, starting at year 0.
    #[must_use]
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Annualized time-weighted return over the whole path.
    #[must_use]
    pub fn twr(&self) -> f64 {
        self.twr
    }

    /// Value at the end of the horizon.
    #[must_use]
    pub fn final_value(&self) -> Decimal {
        self.values.last().copied().unwrap_or(Decimal::ZERO)
    }

    /// Number of simulated years (values length minus the year-0 entry).
    #[must_use]
    pub fn horizon_years(&self) -> usize {
        self.values.len().saturating_sub(1)
    }
}

/// The full set of simulated paths produced by one projection run.
///
/// Sole output of the projector and sole input to percentile aggregation.
/// Trial order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSet {
    paths: Vec<InvestmentPath>,
    n_years: usize,
}

impl PathSet {
    #[must_use]
    pub fn new(paths: Vec<InvestmentPath>, n_years: usize) -> Self {
        Self { paths, n_years }
    }

    #[must_use]
    pub fn paths(&self) -> &[InvestmentPath] {
        &self.paths
    }

    /// Number of simulated paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Projection horizon in years.
    #[must_use]
    pub fn horizon_years(&self) -> usize {
        self.n_years
    }

    /// The cross-trial slice of investment values at a given year index.
    #[must_use]
    pub fn values_at_year(&self, year: usize) -> Vec<Decimal> {
        self.paths
            .iter()
            .map(|p| p.values().get(year).copied().unwrap_or(Decimal::ZERO))
            .collect()
    }

    /// One time-weighted return per path.
    #[must_use]
    pub fn twrs(&self) -> Vec<f64> {
        self.paths.iter().map(InvestmentPath::twr).collect()
    }
}

/// Simulates many independent investment paths from a validated config.
#[derive(Debug)]
pub struct MonteCarloProjector<M: ReturnModel> {
    config: ProjectionConfig,
    model: M,
}

impl MonteCarloProjector<NormalReturnModel> {
    /// Creates a projector sampling from Normal(mean, std_dev).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid; no path set
    /// is ever produced from an invalid configuration.
    pub fn new(config: ProjectionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let model = NormalReturnModel::new(config.statistics.mean, config.statistics.std_dev)?;
        Ok(Self { config, model })
    }
}

impl<M: ReturnModel> MonteCarloProjector<M> {
    /// Creates a projector with a custom return model.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn with_model(config: ProjectionConfig, model: M) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, model })
    }

    #[must_use]
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Runs all trials, consuming randomness from the caller-supplied
    /// generator. Seeding the generator makes the run reproducible.
    pub fn run(&self, rng: &mut StdRng) -> PathSet {
        let n_years = self.config.n_years;
        let n_simulations = self.config.n_simulations;

        let initial = self.config.initial_investment.to_f64().unwrap_or(0.0);
        let deposit = self.config.monthly_deposit.to_f64().unwrap_or(0.0);

        // The monthly growth rate is derived once from the overall mean
        // annual return. It parameterizes the deposit annuity only; sampled
        // annual returns never feed back into it.
        let monthly_rate = monthly_growth_rate(self.config.statistics.mean);
        let yearly_deposit_growth = if deposit == 0.0 {
            0.0
        } else {
            deposit * annuity_factor(monthly_rate)
        };

        debug!(
            n_simulations,
            n_years, monthly_rate, "running Monte Carlo projection"
        );

        let mut paths = Vec::with_capacity(n_simulations);
        for trial in 0..n_simulations {
            let annual_returns = self.model.sample_years(n_years, rng);

            let mut values = Vec::with_capacity(n_years + 1);
            values.push(self.config.initial_investment);

            let mut current = initial;
            let mut linked_growth = 1.0;
            for (year, r) in annual_returns.iter().enumerate() {
                let previous = current;
                current = previous * (1.0 + r) + yearly_deposit_growth;

                // Money-weighted comparison base: deposits treated as
                // contributed at the start of the year.
                let year_return = current / (previous + deposit * 12.0) - 1.0;
                if year_return <= -1.0 || current < 0.0 {
                    warn!(
                        trial,
                        year = year + 1,
                        value = current,
                        year_return,
                        "extreme path outcome; propagating unclamped"
                    );
                }
                linked_growth *= 1.0 + year_return;

                values.push(Decimal::from_f64(current).unwrap_or(Decimal::ZERO));
            }

            let twr = linked_growth.powf(1.0 / n_years as f64) - 1.0;
            paths.push(InvestmentPath::new(values, twr));
        }

        PathSet::new(paths, n_years)
    }
}

/// Constant monthly growth rate equivalent to an annual rate.
fn monthly_growth_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// Future value at year-end of 12 unit deposits compounded monthly at `m`.
///
/// At `m = 0` the factor is exactly 12, its limiting value.
fn annuity_factor(m: f64) -> f64 {
    if m == 0.0 {
        12.0
    } else {
        ((1.0 + m).powi(12) - 1.0) / m
    }
}
