//! Handler for the `check` command.

use std::path::Path;

use super::output;
use crate::adapter::outbound::assets::FilesystemCatalog;
use crate::application::catalog::{available_cards, unmatched_cards};
use crate::application::prediction::PredictionStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::CardCatalog;

/// Validate configuration, predictions and image directories without
/// starting the bot.
///
/// # Errors
///
/// Fails when the configuration is invalid or the predictions file cannot
/// be loaded.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Configuration");
    output::field("Config", path.display());
    let (config, found) = Config::load_or_default(path)?;
    if found {
        output::success("Configuration file is valid");
    } else {
        output::warning("Configuration file not found, using defaults");
    }
    output::field("History", format!("{}s", config.history.cache_duration_secs));
    if config.telegram.bot_token.is_some() {
        output::success("Bot token detected");
    } else {
        output::warning("Bot token not configured (set BOT_TOKEN)");
    }

    output::section("Predictions");
    output::field("File", config.predictions.path.display());
    let store = PredictionStore::try_load(&config.predictions.path)?;
    output::field("Cards", store.len());
    output::field("Predictions", store.total_predictions());

    output::section("Images");
    let catalog = FilesystemCatalog::new(&config.assets.cards_dir, &config.assets.backs_dir);
    let backs = catalog.back_images();
    let cards = catalog.card_images();
    let available = available_cards(&cards, &store);
    output::field("Backs", backs.len());
    output::field("Cards", cards.len());
    output::field("Available", available.len());

    if backs.is_empty() {
        output::warning(&format!(
            "No card backs in {}",
            config.assets.backs_dir.display()
        ));
    }
    for card in unmatched_cards(&cards, &store) {
        output::warning(&format!("No predictions for card image {card}"));
    }
    if available.is_empty() {
        output::warning("No card images with predictions");
    } else {
        output::success("Ready to draw cards");
    }
    Ok(())
}
