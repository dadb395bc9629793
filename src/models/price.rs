use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily close and volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPricePoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}
