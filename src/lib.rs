//! Tarotbot - a Telegram tarot bot.
//!
//! Users draw one of four face-down cards and receive the card image with a
//! prediction. Predictions are never repeated within a chat until the card's
//! pool for that language is exhausted or the history window expires.
//!
//! # Architecture
//!
//! - [`domain`] - Identifiers, languages, prediction pools and history events
//! - [`port`] - Clock and card catalog traits
//! - [`application`] - Prediction store, history ledger, selector and the
//!   [`TarotService`](application::TarotService) facade
//! - [`adapter`] - Telegram bot, CLI and filesystem card catalog
//! - [`infrastructure`] - Configuration loading and service wiring
//!
//! # Features
//!
//! - `telegram` (default) - teloxide bot worker
//! - `testkit` - test doubles for integration tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tarotbot::application::prediction::{HistoryLedger, PredictionStore, Selector};
//! use tarotbot::domain::{CardId, ChatId, Language};
//!
//! let store = PredictionStore::from_json(r#"{"fool": {"en": ["A", "B"]}}"#).unwrap();
//! let selector = Selector::new(Arc::new(store), Arc::new(HistoryLedger::default()));
//!
//! let first = selector.pick(&CardId::new("fool"), ChatId(1), Language::En).unwrap();
//! let second = selector.pick(&CardId::new("fool"), ChatId(1), Language::En).unwrap();
//! assert_ne!(first, second);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
