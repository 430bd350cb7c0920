//! Card images read from the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::CardId;
use crate::port::{CardCatalog, CardImage};

/// Image extensions recognized, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Catalog scanning a directory of card faces and one of card backs.
///
/// Directories are rescanned on every call so images added while the bot
/// runs are picked up.
#[derive(Debug, Clone)]
pub struct FilesystemCatalog {
    cards_dir: PathBuf,
    backs_dir: PathBuf,
}

impl FilesystemCatalog {
    #[must_use]
    pub fn new(cards_dir: impl Into<PathBuf>, backs_dir: impl Into<PathBuf>) -> Self {
        Self {
            cards_dir: cards_dir.into(),
            backs_dir: backs_dir.into(),
        }
    }

    /// Create both image directories if they are missing.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cards_dir)?;
        fs::create_dir_all(&self.backs_dir)
    }

    #[must_use]
    pub fn cards_dir(&self) -> &Path {
        &self.cards_dir
    }

    #[must_use]
    pub fn backs_dir(&self) -> &Path {
        &self.backs_dir
    }
}

impl CardCatalog for FilesystemCatalog {
    fn card_images(&self) -> Vec<CardImage> {
        list_images(&self.cards_dir)
            .into_iter()
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                Some(CardImage {
                    id: CardId::new(stem),
                    path,
                })
            })
            .collect()
    }

    fn back_images(&self) -> Vec<PathBuf> {
        list_images(&self.backs_dir)
    }
}

/// Image files directly inside `dir`, sorted by path.
///
/// An unreadable directory is logged and treated as empty.
#[must_use]
pub fn list_images(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Cannot read image directory");
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image(path))
        .collect();
    images.sort();
    images
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
