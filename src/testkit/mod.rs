//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`clock`] - [`ManualClock`](clock::ManualClock), a clock tests advance by hand.
//! - [`catalog`] - In-memory [`CardCatalog`](crate::port::CardCatalog) and image builders.

pub mod catalog;
pub mod clock;
