//! Error taxonomy shared across the workspace.
//!
//! `DataError` covers insufficient or malformed historical input and empty
//! aggregation input; `ConfigError` covers invalid simulation parameters.
//! Both abort a run fail-fast: no partial results are returned.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Errors caused by insufficient or malformed historical data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// The series is too short to compute any period return.
    #[error("historical series has {observations} observation(s), at least {required} are required")]
    InsufficientObservations {
        /// Observations present in the series.
        observations: usize,
        /// Minimum observations required.
        required: usize,
    },
    /// Fewer than two distinct calendar years of annual returns.
    #[error("annual returns cover {years} calendar year(s), at least 2 are required")]
    InsufficientYears {
        /// Distinct years present.
        years: usize,
    },
    /// A price observation that cannot anchor a period return.
    #[error("non-positive price {price} at {date}")]
    NonPositivePrice {
        /// Date of the offending observation.
        date: NaiveDate,
        /// The offending price.
        price: Decimal,
    },
    /// A row of the input file could not be parsed.
    #[error("row {row}: {message}")]
    Parse {
        /// 1-based data row number.
        row: usize,
        /// What went wrong.
        message: String,
    },
    /// Aggregation was asked to summarize zero simulated paths.
    #[error("path set is empty")]
    EmptyPathSet,
    /// A requested percentile level lies outside [0, 100].
    #[error("percentile level {level} is outside [0, 100]")]
    InvalidPercentileLevel {
        /// The offending level.
        level: f64,
    },
}

/// Errors caused by invalid simulation parameters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Fewer than one simulated path requested.
    #[error("number of simulations must be at least 1")]
    InvalidSimulationCount,
    /// Projection horizon shorter than one year.
    #[error("projection horizon must be at least 1 year")]
    InvalidHorizon,
    /// Negative standard deviation of annual returns.
    #[error("standard deviation must be non-negative, got {std_dev}")]
    InvalidStdDev {
        /// The offending standard deviation.
        std_dev: f64,
    },
    /// Negative currency amount.
    #[error("{field} must be non-negative, got {amount}")]
    NegativeAmount {
        /// Which configuration field was negative.
        field: &'static str,
        /// The offending amount.
        amount: Decimal,
    },
}
