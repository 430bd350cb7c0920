use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const PREDICTIONS: &str = r#"{
    "fool": {
        "ru": ["Новое начало", "Смелый шаг"],
        "en": ["A new beginning", "A bold step"]
    },
    "magician": ["Skill and will"],
    "tower": {"en": []}
}"#;

/// A bot directory laid out like a deployment: config, predictions and
/// image folders, all under one temp dir.
pub struct BotDir {
    pub dir: TempDir,
}

impl BotDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("images/open")).expect("create cards dir");
        fs::create_dir_all(dir.path().join("images/backs")).expect("create backs dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_predictions(&self, json: &str) -> PathBuf {
        let path = self.path().join("predictions.json");
        fs::write(&path, json).expect("write predictions");
        path
    }

    pub fn add_card(&self, name: &str) -> PathBuf {
        let path = self.path().join("images/open").join(name);
        fs::write(&path, b"jpg").expect("write card image");
        path
    }

    pub fn add_back(&self, name: &str) -> PathBuf {
        let path = self.path().join("images/backs").join(name);
        fs::write(&path, b"png").expect("write back image");
        path
    }

    /// Config with absolute paths into this directory.
    pub fn config_toml(&self, cache_duration_secs: u64) -> String {
        let root = self.path().display();
        format!(
            "[assets]\n\
             cards_dir = '{root}/images/open'\n\
             backs_dir = '{root}/images/backs'\n\
             \n\
             [predictions]\n\
             path = '{root}/predictions.json'\n\
             \n\
             [history]\n\
             cache_duration_secs = {cache_duration_secs}\n"
        )
    }

    pub fn write_config(&self, cache_duration_secs: u64) -> PathBuf {
        let path = self.path().join("config.toml");
        fs::write(&path, self.config_toml(cache_duration_secs)).expect("write config");
        path
    }
}
