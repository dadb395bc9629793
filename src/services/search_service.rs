use crate::config::Config;
use crate::data_provider::DataProvider;
use crate::models::company::Company;
use crate::util;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Search-as-you-type front for [`DataProvider::search_companies`].
///
/// Each call waits out the debounce window and is dropped when a newer call
/// arrives first. A response that resolves after a newer call was issued is
/// dropped as stale.
pub struct DebouncedSearch {
    provider: Arc<DataProvider>,
    window: Duration,
    suggestion_limit: usize,
    latest: AtomicU64,
}

impl DebouncedSearch {
    pub fn new(provider: Arc<DataProvider>, config: &Config) -> Self {
        Self::with_window(
            provider,
            Duration::from_millis(config.search_debounce_ms),
            config.search_suggestion_limit,
        )
    }

    pub fn with_window(provider: Arc<DataProvider>, window: Duration, suggestion_limit: usize) -> Self {
        Self {
            provider,
            window,
            suggestion_limit,
            latest: AtomicU64::new(0),
        }
    }

    /// Suggestions for `query`, or None when superseded by a newer call
    pub async fn search(&self, query: &str) -> Option<Vec<Company>> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.window).await;
        if !self.is_current(ticket) {
            debug!("Search '{}' superseded during debounce", query);
            return None;
        }

        if query.trim().is_empty() {
            return Some(Vec::new());
        }

        let mut results = self.provider.search_companies(query).await;
        if !self.is_current(ticket) {
            debug!("Dropping stale results for '{}'", query);
            return None;
        }

        util::limit_records(&mut results, self.suggestion_limit, "search suggestions");
        Some(results)
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
