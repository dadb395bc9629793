use serde::{Deserialize, Serialize};

/// One row of the static stock universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub ticker: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub industry: &'static str,
}

/// Company profile with its latest quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub ticker: String,
    pub name: String,
    pub description: String,
    pub sector: String,
    pub industry: String,
    pub logo_url: String,
    pub market_cap: f64,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Fraction, not percent (0.0125 == 1.25%)
    pub dividend_yield: f64,
}
