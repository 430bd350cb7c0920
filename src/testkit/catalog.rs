//! In-memory card catalog.

use std::path::PathBuf;

use crate::domain::CardId;
use crate::port::{CardCatalog, CardImage};

/// Build a card image at `images/open/<name>.jpg`.
pub fn card_image(name: &str) -> CardImage {
    CardImage {
        id: CardId::new(name),
        path: PathBuf::from(format!("images/open/{name}.jpg")),
    }
}

/// Catalog with a fixed set of cards and `backs` numbered back images.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    cards: Vec<CardImage>,
    backs: Vec<PathBuf>,
}

impl StaticCatalog {
    pub fn new(cards: &[&str], backs: usize) -> Self {
        Self {
            cards: cards.iter().map(|name| card_image(name)).collect(),
            backs: (0..backs)
                .map(|i| PathBuf::from(format!("images/backs/back{i}.png")))
                .collect(),
        }
    }
}

impl CardCatalog for StaticCatalog {
    fn card_images(&self) -> Vec<CardImage> {
        self.cards.clone()
    }

    fn back_images(&self) -> Vec<PathBuf> {
        self.backs.clone()
    }
}
