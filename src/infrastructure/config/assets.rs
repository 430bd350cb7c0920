//! Asset, prediction source and history settings.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::application::prediction::CACHE_DURATION;

/// Image directories.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Card back images shown before the reveal.
    #[serde(default = "default_backs_dir")]
    pub backs_dir: PathBuf,
    /// Card face images; the file stem is the card id.
    #[serde(default = "default_cards_dir")]
    pub cards_dir: PathBuf,
}

fn default_backs_dir() -> PathBuf {
    PathBuf::from("./images/backs")
}

fn default_cards_dir() -> PathBuf {
    PathBuf::from("./images/open")
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            backs_dir: default_backs_dir(),
            cards_dir: default_cards_dir(),
        }
    }
}

/// Predictions source.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionsConfig {
    #[serde(default = "default_predictions_path")]
    pub path: PathBuf,
}

fn default_predictions_path() -> PathBuf {
    PathBuf::from("predictions.json")
}

impl Default for PredictionsConfig {
    fn default() -> Self {
        Self {
            path: default_predictions_path(),
        }
    }
}

/// Prediction history settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// How long a shown prediction stays excluded for a chat (default: 3600).
    #[serde(default = "default_cache_duration_secs")]
    pub cache_duration_secs: u64,
}

const fn default_cache_duration_secs() -> u64 {
    CACHE_DURATION.as_secs()
}

impl HistoryConfig {
    #[must_use]
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            cache_duration_secs: default_cache_duration_secs(),
        }
    }
}
