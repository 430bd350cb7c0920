//! Errors raised by the prediction engine.
//!
//! None of these escape the engine boundary: the service turns them into a
//! user-facing message or an empty result.

use thiserror::Error;

use super::id::CardId;
use super::language::Language;

/// Errors raised while loading the predictions source.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("predictions file not found: {path}")]
    Missing { path: String },

    #[error("predictions file is empty: {path}")]
    Empty { path: String },

    #[error("failed to read predictions file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse predictions: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Errors raised while selecting a prediction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    /// No predictions are configured for the card in the requested language
    /// or in the primary fallback.
    #[error("no predictions for card `{card}` in language `{language}`")]
    EmptyPool { card: CardId, language: Language },
}
