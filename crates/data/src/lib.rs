//! Historical series loading.
//!
//! This crate is the input boundary of the projector: it parses external
//! price data into a [`ReturnSeries`]. File formats and parsing errors are
//! handled here; the simulation core only ever sees an already-parsed series.

pub mod loaders;

pub use loaders::CsvSeriesLoader;

use horizon_domain::{DataError, ReturnSeries};

/// A source of historical monthly price observations.
pub trait SeriesSource {
    /// Loads and parses the historical series.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`] if the source cannot be read or parsed.
    fn load(&self) -> Result<ReturnSeries, DataError>;
}
