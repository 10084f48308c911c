//! Domain types for the savings horizon projector.
//!
//! This crate holds the entities, value objects, and return metrics shared by
//! the simulation and data-loading crates: historical price series, derived
//! return statistics, and the error taxonomy.

pub mod entities;
pub mod errors;
pub mod metrics;
pub mod value_objects;

pub use entities::{PricePoint, ReturnSeries};
pub use errors::{ConfigError, DataError};
pub use value_objects::ReturnStatistics;
