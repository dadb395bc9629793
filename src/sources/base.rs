use crate::errors::Result;
use crate::models::company::Company;
use crate::models::price::StockPricePoint;
use async_trait::async_trait;

/// Base trait for market data sources
#[async_trait]
pub trait MarketDataSource {
    /// Short name used in logs
    fn source_name(&self) -> &'static str;

    /// Profile and quote for one ticker; Ok(None) when the source has no such company
    async fn fetch_company(&self, ticker: &str) -> Result<Option<Company>>;

    /// Companies matching a free-text query
    async fn search_companies(&self, query: &str) -> Result<Vec<Company>>;

    /// Daily history for the last `days` days, ascending by date
    async fn fetch_stock_history(&self, ticker: &str, days: usize) -> Result<Vec<StockPricePoint>>;
}
