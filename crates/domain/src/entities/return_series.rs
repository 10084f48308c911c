//! Historical monthly price series.
//!
//! A `ReturnSeries` owns an ordered, per-month deduplicated sequence of price
//! observations. Period returns are only ever derived from chronologically
//! adjacent observations within the series; gaps are never filled or
//! interpolated.

use crate::entities::PricePoint;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// An ordered historical series of monthly price observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<PricePoint>,
}

impl ReturnSeries {
    /// Builds a series from raw observations.
    ///
    /// Observations are sorted by date (stable, ties keep their original
    /// order) and deduplicated per calendar month, keeping the first
    /// observation seen for each month.
    #[must_use]
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| (p.date.year(), p.date.month()));
        Self { points }
    }

    /// The observations in chronological order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct calendar years covered by the observations.
    #[must_use]
    pub fn year_span(&self) -> usize {
        let mut years: Vec<i32> = self.points.iter().map(|p| p.date.year()).collect();
        years.dedup();
        years.len()
    }
}
