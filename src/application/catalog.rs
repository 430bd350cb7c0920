//! Cards that can be drawn: images that also have predictions.

use std::collections::BTreeSet;

use tracing::debug;

use super::prediction::PredictionStore;
use crate::domain::CardId;
use crate::port::CardImage;

/// Ids of the cards that have an image and a non-empty prediction pool.
#[must_use]
pub fn available_cards(images: &[CardImage], store: &PredictionStore) -> BTreeSet<CardId> {
    drawable_images(images.to_vec(), store)
        .into_iter()
        .map(|image| image.id)
        .collect()
}

/// Ids of card images that have no predictions.
#[must_use]
pub fn unmatched_cards(images: &[CardImage], store: &PredictionStore) -> BTreeSet<CardId> {
    images
        .iter()
        .filter(|image| !store.has_predictions(&image.id))
        .map(|image| image.id.clone())
        .collect()
}

/// Keep only the images whose card has predictions.
///
/// Recomputed on every call.
#[must_use]
pub fn drawable_images(images: Vec<CardImage>, store: &PredictionStore) -> Vec<CardImage> {
    let drawable: Vec<CardImage> = images
        .into_iter()
        .filter(|image| {
            let ok = store.has_predictions(&image.id);
            if !ok {
                debug!(card = %image.id, "Skipping card image without predictions");
            }
            ok
        })
        .collect();
    debug!(count = drawable.len(), "Cards with predictions");
    drawable
}
