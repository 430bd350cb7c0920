//! Telegram bot integration.
//!
//! Command and callback parsing plus the transport-free [`control`] layer
//! are always built; the teloxide worker needs the `telegram` feature.

pub mod callback;
pub mod command;
pub mod control;

#[cfg(feature = "telegram")]
pub mod bot;
#[cfg(feature = "telegram")]
pub mod keyboard;
