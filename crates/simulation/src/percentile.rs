//! Percentile aggregation over simulated paths.
//!
//! Reduces a [`PathSet`] into per-year percentile trajectories and matching
//! time-weighted returns. Value and TWR percentiles are marginal: the value
//! at a level and the TWR at the same level generally come from different
//! trials.

use crate::monte_carlo::PathSet;
use horizon_domain::DataError;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Percentile levels reported by default.
pub const DEFAULT_PERCENTILE_LEVELS: [f64; 4] = [10.0, 20.0, 50.0, 90.0];

/// The trajectory and summary values at one percentile level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileBand {
    /// Percentile level in [0, 100].
    pub level: f64,
    /// Year-by-year percentile of investment value, year 0 included.
    pub trajectory: Vec<Decimal>,
    /// Percentile of investment value at the final year.
    pub final_value: Decimal,
    /// Percentile of annualized time-weighted return.
    pub twr: f64,
}

/// Distributional summary of a path set at the requested percentile levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PercentileSummary {
    bands: Vec<PercentileBand>,
}

impl PercentileSummary {
    /// Bands in the order the levels were requested.
    #[must_use]
    pub fn bands(&self) -> &[PercentileBand] {
        &self.bands
    }

    /// The requested percentile levels.
    #[must_use]
    pub fn levels(&self) -> Vec<f64> {
        self.bands.iter().map(|b| b.level).collect()
    }
}

/// Summarizes a path set at the requested percentile levels.
///
/// Percentiles use linear interpolation between order statistics, computed
/// independently per year index over investment values and once over the TWR
/// scalars.
///
/// # Errors
///
/// Returns [`DataError::EmptyPathSet`] for a path set without paths and
/// [`DataError::InvalidPercentileLevel`] for a level outside [0, 100].
pub fn summarize(paths: &PathSet, levels: &[f64]) -> Result<PercentileSummary, DataError> {
    if paths.is_empty() {
        return Err(DataError::EmptyPathSet);
    }
    for &level in levels {
        if !(0.0..=100.0).contains(&level) {
            return Err(DataError::InvalidPercentileLevel { level });
        }
    }

    let mut bands: Vec<PercentileBand> = levels
        .iter()
        .map(|&level| PercentileBand {
            level,
            trajectory: Vec::with_capacity(paths.horizon_years() + 1),
            final_value: Decimal::ZERO,
            twr: 0.0,
        })
        .collect();

    for year in 0..=paths.horizon_years() {
        let mut values: Vec<f64> = paths
            .values_at_year(year)
            .iter()
            .map(|v| v.to_f64().unwrap_or(0.0))
            .collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for band in &mut bands {
            let value = percentile(&values, band.level);
            band.trajectory
                .push(Decimal::from_f64(value).unwrap_or(Decimal::ZERO));
        }
    }

    let mut twrs = paths.twrs();
    twrs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    for band in &mut bands {
        band.final_value = band.trajectory.last().copied().unwrap_or(Decimal::ZERO);
        band.twr = percentile(&twrs, band.level);
    }

    Ok(PercentileSummary { bands })
}

/// Linear-interpolated percentile of an ascending-sorted slice.
fn percentile(sorted: &[f64], level: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = level / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::{InvestmentPath, MonteCarloProjector};
    use crate::state::ProjectionConfig;
    use horizon_domain::ReturnStatistics;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    fn one_year_path(final_value: Decimal, twr: f64) -> InvestmentPath {
        InvestmentPath::new(vec![dec!(100), final_value], twr)
    }

    fn sample_path_set() -> PathSet {
        PathSet::new(
            vec![
                one_year_path(dec!(10), 0.01),
                one_year_path(dec!(20), 0.02),
                one_year_path(dec!(30), 0.03),
                one_year_path(dec!(40), 0.04),
                one_year_path(dec!(50), 0.05),
            ],
            1,
        )
    }

    #[test]
    fn test_median_and_interpolated_levels() {
        let summary = summarize(&sample_path_set(), &[10.0, 50.0, 90.0]).unwrap();
        let bands = summary.bands();

        // rank = level/100 * (n-1); 10th lands at 0.4 between 10 and 20.
        assert!((bands[0].final_value.to_f64().unwrap() - 14.0).abs() < 1e-9);
        assert_eq!(bands[1].final_value, dec!(30));
        assert!((bands[2].final_value.to_f64().unwrap() - 46.0).abs() < 1e-9);

        assert!((bands[0].twr - 0.014).abs() < 1e-12);
        assert!((bands[1].twr - 0.03).abs() < 1e-12);
        assert!((bands[2].twr - 0.046).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_levels_hit_min_and_max() {
        let summary = summarize(&sample_path_set(), &[0.0, 100.0]).unwrap();
        assert_eq!(summary.bands()[0].final_value, dec!(10));
        assert_eq!(summary.bands()[1].final_value, dec!(50));
    }

    #[test]
    fn test_trajectory_includes_year_zero() {
        let summary = summarize(&sample_path_set(), &[50.0]).unwrap();
        let band = &summary.bands()[0];
        assert_eq!(band.trajectory.len(), 2);
        assert_eq!(band.trajectory[0], dec!(100));
        assert_eq!(band.final_value, *band.trajectory.last().unwrap());
    }

    #[test]
    fn test_percentiles_are_monotonic_in_level() {
        let projector = MonteCarloProjector::new(
            ProjectionConfig::new(dec!(10000), ReturnStatistics::new(0.07, 0.15))
                .with_monthly_deposit(dec!(100))
                .with_horizon_years(15)
                .with_simulations(200),
        )
        .unwrap();
        let paths = projector.run(&mut StdRng::seed_from_u64(21));

        let summary = summarize(&paths, &DEFAULT_PERCENTILE_LEVELS).unwrap();
        let bands = summary.bands();

        for year in 0..=paths.horizon_years() {
            for pair in bands.windows(2) {
                assert!(pair[0].trajectory[year] <= pair[1].trajectory[year]);
            }
        }
        for pair in bands.windows(2) {
            assert!(pair[0].twr <= pair[1].twr);
        }
    }

    #[test]
    fn test_identical_paths_collapse_percentiles() {
        let projector = MonteCarloProjector::new(
            ProjectionConfig::new(dec!(10000), ReturnStatistics::new(0.07, 0.0))
                .with_horizon_years(5)
                .with_simulations(30),
        )
        .unwrap();
        let paths = projector.run(&mut StdRng::seed_from_u64(2));

        let summary = summarize(&paths, &DEFAULT_PERCENTILE_LEVELS).unwrap();
        let bands = summary.bands();
        for year in 0..=5 {
            let first = bands[0].trajectory[year];
            assert!(bands.iter().all(|b| b.trajectory[year] == first));
        }
    }

    #[test]
    fn test_empty_path_set_is_rejected() {
        let empty = PathSet::new(Vec::new(), 0);
        assert!(matches!(
            summarize(&empty, &DEFAULT_PERCENTILE_LEVELS),
            Err(DataError::EmptyPathSet)
        ));
    }

    #[test]
    fn test_out_of_range_level_is_rejected() {
        let err = summarize(&sample_path_set(), &[50.0, 101.0]).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidPercentileLevel { level } if level > 100.0
        ));
    }

    #[test]
    fn test_single_path_summary() {
        let paths = PathSet::new(vec![one_year_path(dec!(123), 0.23)], 1);
        let summary = summarize(&paths, &[10.0, 90.0]).unwrap();
        assert_eq!(summary.bands()[0].final_value, dec!(123));
        assert_eq!(summary.bands()[1].final_value, dec!(123));
    }
}
