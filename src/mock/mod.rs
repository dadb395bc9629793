//! Deterministic mock market data
//!
//! Profiles and corporate actions are pure functions of the ticker (plus
//! "today" for action dates). Dividend amounts, split ratios, daily volume
//! and the day-to-day price walk are market noise and come from the caller's
//! RNG instead of the seed.

pub mod actions;
pub mod company;
pub mod history;
pub mod reference;
pub mod seed;

pub use actions::synthesize_actions;
pub use company::{synthesize_all, synthesize_by_ticker, synthesize_company};
pub use history::{generate_price_history, MAX_HISTORY_DAYS};
pub use reference::ReferenceTable;
pub use seed::seeded_hash;
