use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ActionalyzeError, Result};

pub const DEFAULT_FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct Config {
    pub fmp_api_key: Option<String>,
    pub fmp_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub request_timeout_secs: u64,
    pub default_history_days: usize,
    pub search_debounce_ms: u64,
    pub search_suggestion_limit: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            fmp_api_key: None,
            fmp_base_url: DEFAULT_FMP_BASE_URL.to_string(),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: 30,
            default_history_days: 30,
            search_debounce_ms: 300,
            search_suggestion_limit: 5,
        }
    }

    /// Defaults, then environment, merged with the key store
    pub fn load(key_store: &KeyStore) -> Result<Self> {
        let keys = key_store.load()?;
        Ok(Self::from_env().with_stored_keys(keys))
    }

    /// A stored FMP key overrides the environment; a stored Gemini key is
    /// only used when the environment has none
    pub fn with_stored_keys(mut self, keys: StoredKeys) -> Self {
        if keys.fmp_api_key.is_some() {
            self.fmp_api_key = keys.fmp_api_key;
        }
        if self.gemini_api_key.is_none() {
            self.gemini_api_key = keys.gemini_api_key;
        }
        self
    }

    /// Reads FMP_API_KEY, GEMINI_API_KEY (or API_KEY), FMP_BASE_URL, GEMINI_BASE_URL
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.fmp_api_key = env_non_empty("FMP_API_KEY");
        config.gemini_api_key = env_non_empty("GEMINI_API_KEY").or_else(|| env_non_empty("API_KEY"));
        if let Some(url) = env_non_empty("FMP_BASE_URL") {
            config.fmp_base_url = url;
        }
        if let Some(url) = env_non_empty("GEMINI_BASE_URL") {
            config.gemini_base_url = url;
        }
        config
    }

    pub fn with_fmp_api_key(mut self, key: &str) -> Self {
        self.fmp_api_key = non_empty(key);
        self
    }

    pub fn with_fmp_base_url(mut self, url: &str) -> Self {
        self.fmp_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_gemini_api_key(mut self, key: &str) -> Self {
        self.gemini_api_key = non_empty(key);
        self
    }

    pub fn with_gemini_base_url(mut self, url: &str) -> Self {
        self.gemini_base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_default_history_days(mut self, days: usize) -> Self {
        self.default_history_days = days;
        self
    }

    pub fn with_search_debounce_ms(mut self, ms: u64) -> Self {
        self.search_debounce_ms = ms;
        self
    }

    pub fn with_search_suggestion_limit(mut self, limit: usize) -> Self {
        self.search_suggestion_limit = limit;
        self
    }

    /// True when live market data can be requested
    pub fn has_market_data_key(&self) -> bool {
        self.fmp_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| non_empty(&v))
}

/// The two credentials kept in local storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredKeys {
    #[serde(rename = "FMP_API_KEY", default, skip_serializing_if = "Option::is_none")]
    pub fmp_api_key: Option<String>,
    #[serde(rename = "GEMINI_API_KEY", default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
}

/// JSON file holding API keys between runs
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// $ACTIONALYZE_KEY_FILE, else ~/.actionalyze/keys.json
    pub fn default_location() -> Self {
        if let Some(path) = env_non_empty("ACTIONALYZE_KEY_FILE") {
            return Self::new(path);
        }
        let base = env_non_empty("HOME").map(PathBuf::from).unwrap_or_default();
        Self::new(base.join(".actionalyze").join("keys.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as no keys
    pub fn load(&self) -> Result<StoredKeys> {
        if !self.path.exists() {
            debug!("Key file {} not found", self.path.display());
            return Ok(StoredKeys::default());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(StoredKeys::default());
        }
        let mut keys: StoredKeys = serde_json::from_str(&text).map_err(|e| {
            ActionalyzeError::ConfigError(format!("Invalid key file {}: {}", self.path.display(), e))
        })?;
        keys.fmp_api_key = keys.fmp_api_key.and_then(|k| non_empty(&k));
        keys.gemini_api_key = keys.gemini_api_key.and_then(|k| non_empty(&k));
        Ok(keys)
    }

    pub fn save(&self, keys: &StoredKeys) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(keys)?)?;
        info!("Saved API keys to {}", self.path.display());
        Ok(())
    }

    /// Sets the given keys; an empty string clears that key
    pub fn update(&self, fmp_api_key: Option<&str>, gemini_api_key: Option<&str>) -> Result<StoredKeys> {
        let mut keys = self.load()?;
        if let Some(key) = fmp_api_key {
            keys.fmp_api_key = non_empty(key);
        }
        if let Some(key) = gemini_api_key {
            keys.gemini_api_key = non_empty(key);
        }
        self.save(&keys)?;
        Ok(keys)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("Removed key file {}", self.path.display());
        }
        Ok(())
    }
}
