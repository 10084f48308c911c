use serde::{Deserialize, Serialize};

pub mod annual_returns;

pub use annual_returns::{annual_returns, estimate_return_statistics, monthly_returns};

/// A month-over-month fractional return, tagged with the calendar year of the
/// later of the two observations it was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyReturn {
    pub year: i32,
    pub value: f64,
}

/// The compounded return of one calendar year of monthly returns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnualReturn {
    pub year: i32,
    pub value: f64,
}
