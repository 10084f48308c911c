//! Annual return statistics derived from a historical price series.
//!
//! Monthly returns are grouped by the calendar year of the later observation
//! and compounded multiplicatively into one annual return per year. A partial
//! first or last year is still included, compounded over however many months
//! are present; callers wanting strict full-year coverage should truncate the
//! series to whole calendar years before estimating.

use crate::entities::ReturnSeries;
use crate::errors::DataError;
use crate::metrics::{AnnualReturn, MonthlyReturn};
use crate::value_objects::ReturnStatistics;
use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;

/// Computes month-over-month fractional returns for consecutive observations.
///
/// # Errors
///
/// Returns [`DataError::InsufficientObservations`] if the series holds fewer
/// than two observations, and [`DataError::NonPositivePrice`] if a return
/// would be anchored on a price <= 0.
pub fn monthly_returns(series: &ReturnSeries) -> Result<Vec<MonthlyReturn>, DataError> {
    let points = series.points();
    if points.len() < 2 {
        return Err(DataError::InsufficientObservations {
            observations: points.len(),
            required: 2,
        });
    }

    let mut returns = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.price <= Decimal::ZERO {
            return Err(DataError::NonPositivePrice {
                date: prev.date,
                price: prev.price,
            });
        }
        let ratio = (next.price / prev.price).to_f64().unwrap_or(0.0);
        returns.push(MonthlyReturn {
            year: next.date.year(),
            value: ratio - 1.0,
        });
    }
    Ok(returns)
}

/// Compounds monthly returns into one annual return per calendar year.
///
/// # Errors
///
/// Propagates errors from [`monthly_returns`].
pub fn annual_returns(series: &ReturnSeries) -> Result<Vec<AnnualReturn>, DataError> {
    let monthly = monthly_returns(series)?;

    let mut growth_by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for r in monthly {
        *growth_by_year.entry(r.year).or_insert(1.0) *= 1.0 + r.value;
    }

    Ok(growth_by_year
        .into_iter()
        .map(|(year, growth)| AnnualReturn {
            year,
            value: growth - 1.0,
        })
        .collect())
}

/// Estimates mean and sample standard deviation of annual returns.
///
/// # Errors
///
/// Returns [`DataError::InsufficientYears`] if fewer than two distinct
/// calendar years of annual returns result (the sample standard deviation is
/// undefined), plus any error from [`annual_returns`].
pub fn estimate_return_statistics(series: &ReturnSeries) -> Result<ReturnStatistics, DataError> {
    let annual = annual_returns(series)?;
    if annual.len() < 2 {
        return Err(DataError::InsufficientYears {
            years: annual.len(),
        });
    }

    let n = annual.len() as f64;
    let mean = annual.iter().map(|r| r.value).sum::<f64>() / n;
    let variance = annual
        .iter()
        .map(|r| (r.value - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    Ok(ReturnStatistics::new(mean, variance.sqrt()))
}
