use log::{debug, info, warn};
use std::sync::Arc;

use crate::clock::Clock;
use crate::config::Config;
use crate::errors::Result;
use crate::mock::MAX_HISTORY_DAYS;
use crate::models::action::CorporateAction;
use crate::models::company::Company;
use crate::models::price::StockPricePoint;
use crate::sources::base::MarketDataSource;
use crate::sources::fmp::FmpSource;
use crate::sources::mock::MockSource;
use crate::util;

/// Single entry point for market data.
///
/// Tries the live source when one is configured and falls back to the mock
/// source on a missing key, a failed request or an empty answer. Nothing
/// here returns an error to the caller.
pub struct DataProvider {
    live: Option<Arc<dyn MarketDataSource + Send + Sync>>,
    mock: MockSource,
}

impl DataProvider {
    /// Live FMP source iff the config carries an FMP key
    pub fn new(config: &Config) -> Result<Self> {
        let live: Option<Arc<dyn MarketDataSource + Send + Sync>> = if config.has_market_data_key() {
            info!("FMP key configured, using live market data");
            Some(Arc::new(FmpSource::new(config)?))
        } else {
            info!("No FMP key configured, using mock market data");
            None
        };

        Ok(Self {
            live,
            mock: MockSource::new(),
        })
    }

    /// Mock-only provider
    pub fn mock_only(clock: Arc<dyn Clock>) -> Self {
        Self {
            live: None,
            mock: MockSource::with_clock(clock),
        }
    }

    pub fn with_sources(live: Option<Arc<dyn MarketDataSource + Send + Sync>>, mock: MockSource) -> Self {
        Self { live, mock }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub async fn get_company(&self, ticker: &str) -> Option<Company> {
        if let Some(live) = &self.live {
            match live.fetch_company(ticker).await {
                Ok(Some(company)) => return Some(company),
                Ok(None) => debug!("{} has no profile for {}, falling back to mock", live.source_name(), ticker),
                Err(e) => warn!("{} API error (falling back to mock): {}", live.source_name(), e),
            }
        }

        self.mock.company(ticker)
    }

    pub async fn search_companies(&self, query: &str) -> Vec<Company> {
        if let Some(live) = &self.live {
            if !query.trim().is_empty() {
                match live.search_companies(query).await {
                    Ok(results) => return results,
                    Err(e) => warn!("{} API error (falling back to mock): {}", live.source_name(), e),
                }
            }
        }

        self.mock.search(query)
    }

    /// Always synthesized; filtered to one company when `ticker` is given
    pub async fn get_corporate_actions(&self, ticker: Option<&str>) -> Vec<CorporateAction> {
        self.mock.actions(ticker)
    }

    /// Ascending by date in both modes; `days` is capped at [`MAX_HISTORY_DAYS`]
    pub async fn get_stock_history(&self, ticker: &str, days: usize) -> Vec<StockPricePoint> {
        let days = if days > MAX_HISTORY_DAYS {
            warn!("Requested {} days of history for {}, capping at {}", days, ticker, MAX_HISTORY_DAYS);
            MAX_HISTORY_DAYS
        } else {
            days
        };

        if let Some(live) = &self.live {
            match live.fetch_stock_history(ticker, days).await {
                Ok(mut points) => {
                    points.sort_by(|a, b| a.date.cmp(&b.date));
                    return points;
                }
                Err(e) => warn!("{} API error (falling back to mock): {}", live.source_name(), e),
            }
        }

        self.mock.history(ticker, days)
    }

    /// Default listing sorted by absolute percent move, biggest first
    pub async fn market_movers(&self, limit: usize) -> Vec<Company> {
        let mut movers = self.search_companies("").await;
        movers.sort_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
        util::limit_records(&mut movers, limit, "market movers");
        movers
    }

    /// Head of the action feed
    pub async fn recent_actions(&self, limit: usize) -> Vec<CorporateAction> {
        let mut actions = self.get_corporate_actions(None).await;
        util::limit_records(&mut actions, limit, "recent actions");
        actions
    }
}
