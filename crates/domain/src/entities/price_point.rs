use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observation of a price or index level at monthly granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: Decimal) -> Self {
        Self { date, price }
    }
}
