use crate::config::Config;
use crate::errors::{ActionalyzeError, Result};
use crate::models::company::Company;
use crate::models::price::StockPricePoint;
use crate::sources::base::MarketDataSource;
use crate::util::round2;
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const SEARCH_LIMIT: &str = "10";

/// Financial Modeling Prep profile record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmpProfile {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub mkt_cap: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub changes: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct FmpSearchHit {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FmpHistoricalBar {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct FmpHistory {
    #[serde(default)]
    pub historical: Option<Vec<FmpHistoricalBar>>,
}

/// Live market data from the Financial Modeling Prep REST API
pub struct FmpSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FmpSource {
    /// Create a live source from config; fails when no FMP key is configured
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.fmp_api_key.clone().ok_or_else(|| {
            ActionalyzeError::ConfigError("FMP API key is not configured".to_string())
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ActionalyzeError::RequestError)?;

        Ok(Self {
            client,
            base_url: config.fmp_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<T> {
        let url = endpoint_url(&self.base_url, segments)?;
        let endpoint = segments.join("/");
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ActionalyzeError::DataError(format!(
                "FMP request {} failed: HTTP status {}",
                endpoint,
                response.status()
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// `base` with each segment appended, percent-encoded
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| ActionalyzeError::ConfigError(format!("Invalid FMP base URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| ActionalyzeError::ConfigError(format!("FMP base URL {} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Maps a profile record onto the dashboard's company shape
pub fn map_profile(p: FmpProfile) -> Company {
    let price = p.price.unwrap_or_default();
    let change = p.changes.unwrap_or_default();
    let change_percent = if price != 0.0 {
        round2(change / price * 100.0)
    } else {
        0.0
    };

    Company {
        ticker: p.symbol,
        name: p.company_name.unwrap_or_default(),
        description: p.description.unwrap_or_default(),
        sector: p.sector.unwrap_or_default(),
        industry: p.industry.unwrap_or_default(),
        logo_url: p.image.unwrap_or_default(),
        market_cap: p.mkt_cap.unwrap_or_default(),
        price,
        change,
        change_percent,
        // profile has no reliable yield field
        dividend_yield: 0.0,
    }
}

/// Search hits only carry symbol and name
pub fn map_search_hit(hit: FmpSearchHit) -> Company {
    let name = hit.name.unwrap_or_default();
    let encoded: String = url::form_urlencoded::byte_serialize(name.as_bytes()).collect();

    Company {
        ticker: hit.symbol,
        logo_url: format!("https://ui-avatars.com/api/?name={}&background=random", encoded),
        name,
        description: String::new(),
        sector: String::new(),
        industry: String::new(),
        market_cap: 0.0,
        price: 0.0,
        change: 0.0,
        change_percent: 0.0,
        dividend_yield: 0.0,
    }
}

/// FMP returns newest first; the output is ascending by date
pub fn map_history(history: FmpHistory) -> Result<Vec<StockPricePoint>> {
    let bars = history.historical.ok_or_else(|| {
        ActionalyzeError::DataError("FMP response has no historical series".to_string())
    })?;

    let mut points: Vec<StockPricePoint> = bars
        .into_iter()
        .map(|bar| StockPricePoint {
            date: bar.date,
            price: bar.close,
            volume: bar.volume.unwrap_or_default().max(0.0) as u64,
        })
        .collect();

    points.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(points)
}

#[async_trait]
impl MarketDataSource for FmpSource {
    fn source_name(&self) -> &'static str {
        "FMP"
    }

    async fn fetch_company(&self, ticker: &str) -> Result<Option<Company>> {
        let profiles: Vec<FmpProfile> = self.get_json(&["profile", ticker], &[]).await?;
        let company = profiles.into_iter().next().map(map_profile);

        if company.is_none() {
            debug!("FMP has no profile for {}", ticker);
        }
        Ok(company)
    }

    async fn search_companies(&self, query: &str) -> Result<Vec<Company>> {
        let hits: Vec<FmpSearchHit> = self
            .get_json(&["search"], &[("query", query), ("limit", SEARCH_LIMIT)])
            .await?;

        info!("FMP search '{}' returned {} hits", query, hits.len());
        Ok(hits.into_iter().map(map_search_hit).collect())
    }

    async fn fetch_stock_history(&self, ticker: &str, days: usize) -> Result<Vec<StockPricePoint>> {
        let days = days.to_string();
        let history: FmpHistory = self
            .get_json(
                &["historical-price-full", ticker],
                &[("timeseries", days.as_str())],
            )
            .await?;

        let points = map_history(history)?;
        debug!("FMP returned {} daily bars for {}", points.len(), ticker);
        Ok(points)
    }
}
