//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::adapter::outbound::assets::FilesystemCatalog;
use crate::application::prediction::PredictionStore;
use crate::application::TarotService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::SystemClock;

/// Build the filesystem catalog and create its directories.
pub(crate) fn build_catalog(config: &Config) -> Result<FilesystemCatalog> {
    let catalog = FilesystemCatalog::new(&config.assets.cards_dir, &config.assets.backs_dir);
    catalog.ensure_dirs()?;
    Ok(catalog)
}

/// Build the tarot service from configuration.
///
/// A missing or broken predictions file does not fail startup; the bot then
/// answers every reading request with the "not configured" message.
pub fn build_service(config: &Config) -> Result<Arc<TarotService>> {
    let catalog = build_catalog(config)?;
    let store = PredictionStore::load(&config.predictions.path);

    let service = TarotService::new(
        store,
        Arc::new(catalog),
        Arc::new(SystemClock),
        config.cache_duration(),
    );
    log_startup_summary(&service);
    Ok(Arc::new(service))
}

fn log_startup_summary(service: &TarotService) {
    if service.has_predictions() {
        info!(cards = service.store().len(), "Predictions loaded");
    } else {
        error!("No predictions loaded, readings are disabled");
    }

    let stats = service.stats();
    if stats.backs_count == 0 {
        warn!("No card back images found");
    } else {
        info!(backs = stats.backs_count, "Card backs found");
    }

    for card in service.unmatched_cards() {
        warn!(card = %card, "No predictions for card image");
    }

    if stats.available_cards_count == 0 {
        warn!("No card images with predictions");
    } else {
        info!(
            cards = stats.available_cards_count,
            "Cards with predictions available"
        );
    }
}
