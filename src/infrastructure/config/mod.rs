//! Infrastructure configuration modules.

pub mod assets;
pub mod logging;
pub mod settings;
pub mod telegram;

pub use settings::Config;
