//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the bot's use cases.

pub mod catalog;
pub mod language;
pub mod prediction;
pub mod service;
pub mod stats;
pub mod texts;

pub use service::{ClearOutcome, Reading, ReadingError, TarotService};
