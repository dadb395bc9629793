use crate::clock::{Clock, SystemClock};
use crate::errors::Result;
use crate::mock::{actions, company, history, ReferenceTable};
use crate::models::action::CorporateAction;
use crate::models::company::Company;
use crate::models::price::StockPricePoint;
use crate::sources::base::MarketDataSource;
use async_trait::async_trait;
use std::sync::Arc;

/// Companies returned for an empty search
pub const DEFAULT_LISTING_SIZE: usize = 20;

/// Synthesized market data over the static stock universe
pub struct MockSource {
    table: &'static ReferenceTable,
    clock: Arc<dyn Clock>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: ReferenceTable::global(),
            clock,
        }
    }

    pub fn company(&self, ticker: &str) -> Option<Company> {
        self.table.get(ticker).map(company::synthesize_company)
    }

    pub fn companies(&self) -> Vec<Company> {
        self.table.entries().iter().map(company::synthesize_company).collect()
    }

    /// Case-insensitive substring match on name or ticker; empty query lists the first 20
    pub fn search(&self, query: &str) -> Vec<Company> {
        if query.is_empty() {
            return self
                .table
                .entries()
                .iter()
                .take(DEFAULT_LISTING_SIZE)
                .map(company::synthesize_company)
                .collect();
        }

        let needle = query.to_lowercase();
        self.table
            .entries()
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle) || e.ticker.to_lowercase().contains(&needle))
            .map(company::synthesize_company)
            .collect()
    }

    /// Whole action feed, or one company's actions, newest first
    pub fn actions(&self, ticker: Option<&str>) -> Vec<CorporateAction> {
        let all = actions::synthesize_actions(&self.companies(), self.clock.today(), &mut rand::rng());
        match ticker {
            Some(ticker) => all.into_iter().filter(|a| a.ticker == ticker).collect(),
            None => all,
        }
    }

    pub fn history(&self, ticker: &str, days: usize) -> Vec<StockPricePoint> {
        history::generate_price_history(ticker, days, self.clock.today(), &mut rand::rng())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataSource for MockSource {
    fn source_name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_company(&self, ticker: &str) -> Result<Option<Company>> {
        Ok(self.company(ticker))
    }

    async fn search_companies(&self, query: &str) -> Result<Vec<Company>> {
        Ok(self.search(query))
    }

    async fn fetch_stock_history(&self, ticker: &str, days: usize) -> Result<Vec<StockPricePoint>> {
        Ok(self.history(ticker, days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn source() -> MockSource {
        MockSource::with_clock(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())))
    }

    #[test]
    fn test_empty_search_lists_first_twenty() {
        let results = source().search("");
        assert_eq!(results.len(), DEFAULT_LISTING_SIZE);
        assert_eq!(results[0].ticker, "AAPL");
    }

    #[test]
    fn test_search_matches_name_or_ticker_case_insensitively() {
        let s = source();
        let tickers: Vec<String> = s.search("micro").into_iter().map(|c| c.ticker).collect();
        assert_eq!(tickers, vec!["MSFT", "AMD", "MU"]);

        let tickers: Vec<String> = s.search("brk").into_iter().map(|c| c.ticker).collect();
        assert_eq!(tickers, vec!["BRK.B"]);

        assert!(s.search("zzz-nonexistent").is_empty());
    }

    #[test]
    fn test_actions_filtered_by_ticker() {
        let s = source();
        let all = s.actions(None);
        let tsla = s.actions(Some("TSLA"));

        assert!(!tsla.is_empty());
        assert!(tsla.iter().all(|a| a.ticker == "TSLA"));
        assert_eq!(tsla.len(), all.iter().filter(|a| a.ticker == "TSLA").count());
        assert!(s.actions(Some("NOPE")).is_empty());
    }

    #[test]
    fn test_history_ends_today() {
        let s = source();
        let history = s.history("AAPL", 7);
        assert_eq!(history.len(), 7);
        assert_eq!(history[6].date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(history[6].price, s.company("AAPL").unwrap().price);
    }
}
