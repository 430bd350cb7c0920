//! Prediction engine: store, history ledger and selector.
//!
//! - [`store::PredictionStore`]: card id to per-language prediction lists
//! - [`ledger::HistoryLedger`]: per-chat history with time-window eviction
//! - [`selector::Selector`]: deduplicated random pick with exhaustion reset

pub mod ledger;
pub mod selector;
pub mod store;

pub use ledger::{HistoryLedger, LedgerTxn, CACHE_DURATION};
pub use selector::Selector;
pub use store::PredictionStore;
