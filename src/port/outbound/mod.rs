//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies of the prediction
//! engine: the time source and the image catalog.

pub mod catalog;
pub mod clock;
