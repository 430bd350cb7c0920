//! Card image catalog port.
//!
//! The engine never touches storage paths itself; a catalog adapter lists
//! which card faces and card backs exist.

use std::path::PathBuf;

use crate::domain::CardId;

/// One card face image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Card identity derived from the lowercase file stem.
    pub id: CardId,
    /// Location of the image.
    pub path: PathBuf,
}

/// Lists the images available to the bot.
///
/// Implementations are queried on every draw; no caching is expected.
pub trait CardCatalog: Send + Sync {
    /// Card face images.
    fn card_images(&self) -> Vec<CardImage>;

    /// Card back images shown before a card is revealed.
    fn back_images(&self) -> Vec<PathBuf>;
}
