use actionalyze::clock::FixedClock;
use actionalyze::data_provider::DataProvider;
use actionalyze::errors::{ActionalyzeError, Result};
use actionalyze::mock::{synthesize_all, synthesize_by_ticker};
use actionalyze::models::company::Company;
use actionalyze::models::price::StockPricePoint;
use actionalyze::sources::base::MarketDataSource;
use actionalyze::sources::mock::MockSource;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
}

fn mock() -> MockSource {
    MockSource::with_clock(Arc::new(FixedClock(today())))
}

#[derive(Clone, Copy)]
enum Behavior {
    Answer,
    Empty,
    Fail,
}

/// Live source stand-in with canned answers
struct FakeLive {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl FakeLive {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Fail => Err(ActionalyzeError::DataError("HTTP status 500".to_string())),
            _ => Ok(()),
        }
    }
}

fn live_company(ticker: &str) -> Company {
    Company {
        ticker: ticker.to_string(),
        name: "Live Corp".to_string(),
        description: "From the wire".to_string(),
        sector: "Technology".to_string(),
        industry: "Software".to_string(),
        logo_url: String::new(),
        market_cap: 1.0,
        price: 1234.5,
        change: 0.0,
        change_percent: 0.0,
        dividend_yield: 0.0,
    }
}

#[async_trait]
impl MarketDataSource for FakeLive {
    fn source_name(&self) -> &'static str {
        "fake"
    }

    async fn fetch_company(&self, ticker: &str) -> Result<Option<Company>> {
        self.check()?;
        Ok(match self.behavior {
            Behavior::Answer => Some(live_company(ticker)),
            _ => None,
        })
    }

    async fn search_companies(&self, query: &str) -> Result<Vec<Company>> {
        self.check()?;
        Ok(match self.behavior {
            Behavior::Answer => vec![live_company(&query.to_uppercase())],
            _ => Vec::new(),
        })
    }

    async fn fetch_stock_history(&self, _ticker: &str, _days: usize) -> Result<Vec<StockPricePoint>> {
        self.check()?;
        let point = |d: u32, price: f64| StockPricePoint {
            date: NaiveDate::from_ymd_opt(2025, 9, d).unwrap(),
            price,
            volume: 1_000,
        };
        // newest first, like the remote API
        Ok(vec![point(29, 3.0), point(26, 2.0), point(25, 1.0)])
    }
}

fn provider_with(live: &Arc<FakeLive>) -> DataProvider {
    let live: Arc<dyn MarketDataSource + Send + Sync> = live.clone();
    DataProvider::with_sources(Some(live), mock())
}

#[tokio::test]
async fn test_mock_mode_scenarios() {
    let provider = DataProvider::with_sources(None, mock());
    assert!(!provider.is_live());

    assert!(provider.get_company("NOPE").await.is_none());
    assert_eq!(provider.search_companies("").await.len(), 20);
    assert!(provider.search_companies("zzz-nonexistent").await.is_empty());

    let first = provider.get_company("AAPL").await.unwrap();
    let second = provider.get_company("AAPL").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_mock_history_contract_for_every_ticker() {
    let provider = DataProvider::with_sources(None, mock());

    for company in synthesize_all().iter().take(25) {
        let history = provider.get_stock_history(&company.ticker, 30).await;
        assert_eq!(history.len(), 30);
        for pair in history.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        let last = history.last().unwrap();
        assert_eq!(last.date, today());
        assert_eq!(last.price, company.price);
    }
}

#[tokio::test]
async fn test_mock_actions_repeat_except_values() {
    let provider = DataProvider::with_sources(None, mock());

    let strip = |actions: Vec<actionalyze::CorporateAction>| {
        actions
            .into_iter()
            .map(|a| (a.id, a.action_type, a.status, a.date, a.description))
            .collect::<Vec<_>>()
    };

    let first = strip(provider.get_corporate_actions(None).await);
    let second = strip(provider.get_corporate_actions(None).await);
    assert_eq!(first, second);

    let jpm = provider.get_corporate_actions(Some("JPM")).await;
    assert!((1..=3).contains(&jpm.len()));
    assert!(jpm.iter().all(|a| a.ticker == "JPM"));
}

#[tokio::test]
async fn test_live_answer_wins() {
    let live = FakeLive::new(Behavior::Answer);
    let provider = provider_with(&live);
    assert!(provider.is_live());

    let company = provider.get_company("AAPL").await.unwrap();
    assert_eq!(company.name, "Live Corp");
    assert_eq!(company.price, 1234.5);

    let results = provider.search_companies("abc").await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].ticker, "ABC");
    assert_eq!(live.calls(), 2);
}

#[tokio::test]
async fn test_live_failure_falls_back_to_mock() {
    let live = FakeLive::new(Behavior::Fail);
    let provider = provider_with(&live);

    assert_eq!(provider.get_company("MSFT").await, synthesize_by_ticker("MSFT"));
    assert!(provider.get_company("NOPE").await.is_none());

    let results = provider.search_companies("micro").await;
    assert_eq!(results.len(), 3);

    let history = provider.get_stock_history("MSFT", 10).await;
    assert_eq!(history.len(), 10);
    assert_eq!(history.last().unwrap().date, today());

    assert_eq!(live.calls(), 4);
}

#[tokio::test]
async fn test_empty_live_profile_falls_back_but_empty_search_does_not() {
    let live = FakeLive::new(Behavior::Empty);
    let provider = provider_with(&live);

    let company = provider.get_company("KO").await.unwrap();
    assert_eq!(company.name, "Coca-Cola Co.");

    assert!(provider.search_companies("coca").await.is_empty());
}

#[tokio::test]
async fn test_blank_query_skips_live_source() {
    let live = FakeLive::new(Behavior::Answer);
    let provider = provider_with(&live);

    let results = provider.search_companies("").await;
    assert_eq!(results.len(), 20);
    assert_eq!(live.calls(), 0);
}

#[tokio::test]
async fn test_live_history_is_ascending() {
    let live = FakeLive::new(Behavior::Answer);
    let provider = provider_with(&live);

    let history = provider.get_stock_history("AAPL", 3).await;
    let prices: Vec<f64> = history.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![1.0, 2.0, 3.0]);
}

#[tokio::test]
async fn test_actions_ignore_live_source() {
    let live = FakeLive::new(Behavior::Fail);
    let provider = provider_with(&live);

    assert!(!provider.get_corporate_actions(Some("AAPL")).await.is_empty());
    assert_eq!(live.calls(), 0);
}
