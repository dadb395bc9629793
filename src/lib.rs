// Public modules
pub mod clock;
pub mod config;
pub mod data_provider;
pub mod errors;
pub mod mock;
pub mod models;
pub mod services;
pub mod sources;

#[doc(hidden)]
pub mod util;

// Commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, KeyStore};
pub use data_provider::DataProvider;
pub use errors::{ActionalyzeError, Result};
pub use models::action::{ActionStatus, ActionType, CorporateAction};
pub use models::alert::{Alert, AlertBook, PriceCondition};
pub use models::company::{Company, ReferenceEntry};
pub use models::price::StockPricePoint;
pub use services::analysis_service::AnalysisService;
pub use services::search_service::DebouncedSearch;
