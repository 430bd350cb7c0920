//! Core domain types: identifiers, languages, prediction pools and history
//! events.

pub mod error;
pub mod id;
pub mod language;
pub mod prediction;

pub use error::{PredictionError, StoreError};
pub use id::{CardId, ChatId, UserId};
pub use language::Language;
pub use prediction::{HistoryEvent, PredictionPool};
