//! Adapters connecting the application to the outside world.
//!
//! - [`inbound`] - Telegram bot and command-line interface
//! - [`outbound`] - Filesystem card image catalog

pub mod inbound;
pub mod outbound;
