use log::info;

/// Round half away from zero to 2 decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// "2.41 Billion" style market cap used in prompts and tables
pub fn format_market_cap_billions(market_cap: f64) -> String {
    format!("{:.2} Billion", market_cap / 1e9)
}

/// Fractional yield as a percentage string ("1.25%")
pub fn format_yield_percent(dividend_yield: f64) -> String {
    format!("{:.2}%", dividend_yield * 100.0)
}

/// Truncates `records` to `max_records`, logging when anything is dropped
pub fn limit_records<T>(records: &mut Vec<T>, max_records: usize, what: &str) {
    if records.len() > max_records {
        info!("Limiting {} {} to {}", records.len(), what, max_records);
        records.truncate(max_records);
    }
}
