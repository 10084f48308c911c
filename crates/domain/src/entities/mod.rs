pub mod price_point;
pub mod return_series;

// Re-export for easier access
pub use price_point::PricePoint;
pub use return_series::ReturnSeries;
