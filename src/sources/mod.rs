pub mod base;
pub mod fmp;
pub mod mock;

pub use base::MarketDataSource;
pub use fmp::FmpSource;
pub use mock::MockSource;
