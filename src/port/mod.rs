//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`Clock`] - Monotonic time for history eviction
//! - [`CardCatalog`] - Card face and back images

pub mod outbound;

pub use outbound::catalog::{CardCatalog, CardImage};
pub use outbound::clock::{Clock, SystemClock};
