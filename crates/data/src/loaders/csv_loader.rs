//! CSV loader for historical monthly price series.

use crate::SeriesSource;
use chrono::NaiveDate;
use horizon_domain::{DataError, PricePoint, ReturnSeries};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Loads a monthly price series from a CSV file.
///
/// Expects a header row with a date column (default `Date`, values in
/// `%Y-%m` or `%Y-%m-%d` form) and a numeric price column. When no price
/// column is named, the first non-date column is used.
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    path: PathBuf,
    date_column: String,
    price_column: Option<String>,
}

impl CsvSeriesLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            date_column: "Date".to_string(),
            price_column: None,
        }
    }

    /// Sets the name of the date column.
    #[must_use]
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Sets the name of the price column.
    #[must_use]
    pub fn with_price_column(mut self, name: impl Into<String>) -> Self {
        self.price_column = Some(name.into());
        self
    }
}

impl SeriesSource for CsvSeriesLoader {
    fn load(&self) -> Result<ReturnSeries, DataError> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| DataError::Parse {
            row: 0,
            message: format!("failed to open {}: {e}", self.path.display()),
        })?;

        let headers = reader
            .headers()
            .map_err(|e| DataError::Parse {
                row: 0,
                message: format!("failed to read headers: {e}"),
            })?
            .clone();

        let date_idx = headers
            .iter()
            .position(|h| h == self.date_column)
            .ok_or_else(|| DataError::Parse {
                row: 0,
                message: format!(
                    "missing date column '{}' (available: {:?})",
                    self.date_column,
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;

        let price_idx = match &self.price_column {
            Some(name) => headers
                .iter()
                .position(|h| h == name.as_str())
                .ok_or_else(|| DataError::Parse {
                    row: 0,
                    message: format!(
                        "missing price column '{name}' (available: {:?})",
                        headers.iter().collect::<Vec<_>>()
                    ),
                })?,
            None => headers
                .iter()
                .position(|h| h != self.date_column)
                .ok_or_else(|| DataError::Parse {
                    row: 0,
                    message: "no price column besides the date column".to_string(),
                })?,
        };

        let mut points = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let row = i + 1;
            let record = record.map_err(|e| DataError::Parse {
                row,
                message: e.to_string(),
            })?;

            let raw_date = record.get(date_idx).unwrap_or_default().trim();
            let date = parse_month(raw_date).ok_or_else(|| DataError::Parse {
                row,
                message: format!("unparseable date '{raw_date}'"),
            })?;

            let raw_price = record.get(price_idx).unwrap_or_default().trim();
            let price = Decimal::from_str(raw_price).map_err(|e| DataError::Parse {
                row,
                message: format!("unparseable price '{raw_price}': {e}"),
            })?;

            points.push(PricePoint::new(date, price));
        }

        debug!(
            observations = points.len(),
            path = %self.path.display(),
            "loaded historical series"
        );

        Ok(ReturnSeries::from_points(points))
    }
}

/// Parses a date at monthly granularity, accepting `%Y-%m` and `%Y-%m-%d`.
fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_csv(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("series.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_year_month_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "Date,MSCI World\n1978-01,100.0\n1978-02,101.5\n1978-03,99.75\n",
        );

        let series = CsvSeriesLoader::new(path).load().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.points()[0].date,
            NaiveDate::from_ymd_opt(1978, 1, 1).unwrap()
        );
        assert_eq!(series.points()[2].price, Decimal::from_str("99.75").unwrap());
    }

    #[test]
    fn test_loads_full_dates_and_named_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "Date,Open,Close\n2020-01-01,1.0,100.0\n2020-02-01,1.0,102.0\n",
        );

        let series = CsvSeriesLoader::new(path)
            .with_price_column("Close")
            .load()
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[1].price, Decimal::from(102));
    }

    #[test]
    fn test_default_price_column_is_first_non_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Date,Index\n2020-01,50\n2020-02,55\n");

        let series = CsvSeriesLoader::new(path).load().unwrap();
        assert_eq!(series.points()[0].price, Decimal::from(50));
    }

    #[test]
    fn test_duplicate_months_collapse_to_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "Date,Index\n2020-01,50\n2020-01,999\n2020-02,55\n",
        );

        let series = CsvSeriesLoader::new(path).load().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].price, Decimal::from(50));
    }

    #[test]
    fn test_unparseable_price_reports_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Date,Index\n2020-01,50\n2020-02,abc\n");

        let err = CsvSeriesLoader::new(path).load().unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_unparseable_date_reports_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Date,Index\nJanuary 2020,50\n");

        let err = CsvSeriesLoader::new(path).load().unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 1, .. }));
    }

    #[test]
    fn test_missing_price_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Date,Index\n2020-01,50\n");

        let err = CsvSeriesLoader::new(path)
            .with_price_column("Level")
            .load()
            .unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 0, .. }));
    }

    #[test]
    fn test_loaded_series_feeds_the_estimator() {
        let dir = tempfile::tempdir().unwrap();
        let mut contents = String::from("Date,Index\n");
        let mut price = 100.0;
        for year in 2019..=2021 {
            for month in 1..=12 {
                contents.push_str(&format!("{year}-{month:02},{price:.2}\n"));
                price *= 1.005;
            }
        }
        let path = write_csv(dir.path(), &contents);

        let series = CsvSeriesLoader::new(path).load().unwrap();
        let stats = horizon_domain::metrics::estimate_return_statistics(&series).unwrap();
        assert!(stats.mean > 0.0);
        assert!(stats.std_dev >= 0.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = CsvSeriesLoader::new("/nonexistent/series.csv")
            .load()
            .unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 0, .. }));
    }
}
