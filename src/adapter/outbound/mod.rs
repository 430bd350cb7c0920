//! Outbound adapters (driven side).

pub mod assets;
