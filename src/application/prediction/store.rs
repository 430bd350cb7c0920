//! Immutable prediction store loaded once at startup.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::{CardId, Language, PredictionPool, StoreError};

/// One card entry as it appears in the predictions file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPool {
    /// `{"sun": ["...", "..."]}`
    Legacy(Vec<String>),
    /// `{"sun": {"ru": ["..."], "en": ["..."]}}`
    Multilingual(HashMap<String, Vec<String>>),
}

/// Card id to prediction pool mapping.
///
/// Built once from the predictions file and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct PredictionStore {
    pools: BTreeMap<CardId, PredictionPool>,
}

impl PredictionStore {
    /// Load the store, absorbing any failure.
    ///
    /// A missing, empty or malformed file yields an empty store and an
    /// error log line; every later pick then reports that nothing is
    /// available.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load(&path) {
            Ok(store) => store,
            Err(e) => {
                error!(error = %e, "Predictions unavailable, starting with an empty store");
                Self::default()
            }
        }
    }

    /// Load the store, reporting why it could not be read.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::Missing {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(StoreError::Read)?;
        Self::from_json(&content).map_err(|e| match e {
            StoreError::Empty { .. } => StoreError::Empty {
                path: path.display().to_string(),
            },
            other => other,
        })
    }

    /// Parse and normalize the predictions JSON document.
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::Empty {
                path: "<inline>".into(),
            });
        }

        let raw: BTreeMap<String, RawPool> =
            serde_json::from_str(content).map_err(StoreError::Parse)?;
        if raw.is_empty() {
            return Err(StoreError::Empty {
                path: "<inline>".into(),
            });
        }

        let mut pools = BTreeMap::new();
        let mut legacy_cards = 0usize;

        for (key, raw_pool) in raw {
            let card = CardId::new(&key);
            let pool = match raw_pool {
                RawPool::Legacy(texts) => {
                    legacy_cards += 1;
                    PredictionPool::Shared(texts)
                }
                RawPool::Multilingual(buckets) => normalize_buckets(&card, buckets),
            };

            if pools.insert(card.clone(), pool).is_some() {
                warn!(card = %card, "Duplicate card key in predictions, keeping the last one");
            }
        }

        if legacy_cards > 0 {
            warn!(
                legacy_cards,
                "Legacy flat prediction lists found; they are served for every language"
            );
        } else {
            info!("Loaded multilingual predictions");
        }

        let store = Self { pools };
        info!(
            cards = store.len(),
            predictions = store.total_predictions(),
            names = %store.card_names().join(", "),
            "Predictions loaded"
        );
        Ok(store)
    }

    /// Predictions for `card` in `language`, falling back to the primary
    /// language. Empty when nothing can be served.
    #[must_use]
    pub fn lookup(&self, card: &CardId, language: Language) -> &[String] {
        self.resolve(card, language).map_or(&[][..], |(_, texts)| texts)
    }

    /// Like [`lookup`](Self::lookup) but also reports which language bucket
    /// served the request. `None` when the card is unknown.
    #[must_use]
    pub fn resolve(&self, card: &CardId, language: Language) -> Option<(Language, &[String])> {
        self.pools.get(card).map(|pool| pool.resolve(language))
    }

    /// True when the card has at least one prediction in any language.
    #[must_use]
    pub fn has_predictions(&self, card: &CardId) -> bool {
        self.pools.get(card).is_some_and(|pool| !pool.is_empty())
    }

    /// Number of predictions configured for a card across all languages.
    #[must_use]
    pub fn prediction_count(&self, card: &CardId) -> usize {
        self.pools.get(card).map_or(0, PredictionPool::len)
    }

    /// Number of predictions across all cards and languages.
    #[must_use]
    pub fn total_predictions(&self) -> usize {
        self.pools.values().map(PredictionPool::len).sum()
    }

    /// Card ids in sorted order.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.pools.keys()
    }

    fn card_names(&self) -> Vec<&str> {
        self.pools.keys().map(CardId::as_str).collect()
    }

    /// Number of cards in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// True when no card is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

fn normalize_buckets(card: &CardId, buckets: HashMap<String, Vec<String>>) -> PredictionPool {
    let mut normalized = HashMap::new();
    for (code, texts) in buckets {
        match code.parse::<Language>() {
            Ok(language) => {
                if texts.is_empty() {
                    warn!(card = %card, language = %language, "Empty prediction list");
                }
                normalized.insert(language, texts);
            }
            Err(e) => warn!(card = %card, error = %e, "Skipping predictions"),
        }
    }
    PredictionPool::PerLanguage(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_multilingual_shape() {
        let store =
            PredictionStore::from_json(r#"{"sun": {"ru": ["А", "Б"], "en": ["A", "B", "C"]}}"#)
                .unwrap();

        let sun = CardId::new("sun");
        assert_eq!(store.lookup(&sun, Language::Ru), ["А", "Б"]);
        assert_eq!(store.lookup(&sun, Language::En), ["A", "B", "C"]);
        assert_eq!(store.prediction_count(&sun), 5);
    }

    #[test]
    fn parses_legacy_shape_for_every_language() {
        let store = PredictionStore::from_json(r#"{"moon": ["one", "two"]}"#).unwrap();
        let moon = CardId::new("moon");

        assert_eq!(store.lookup(&moon, Language::Ru), store.lookup(&moon, Language::En));
        assert_eq!(store.resolve(&moon, Language::En).unwrap().0, Language::En);
        assert!(matches!(store.pools.get(&moon), Some(PredictionPool::Shared(_))));
    }

    #[test]
    fn accepts_mixed_shapes() {
        let store =
            PredictionStore::from_json(r#"{"moon": ["one"], "sun": {"ru": ["два"]}}"#).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_predictions(), 2);
    }

    #[test]
    fn card_keys_are_lowercased() {
        let store = PredictionStore::from_json(r#"{"The_Star": ["shine"]}"#).unwrap();
        assert!(store.has_predictions(&CardId::new("the_star")));
        assert_eq!(
            store.card_ids().map(CardId::as_str).collect::<Vec<_>>(),
            vec!["the_star"]
        );
    }

    #[test]
    fn missing_language_falls_back_to_primary() {
        let store = PredictionStore::from_json(r#"{"sun": {"ru": ["Да"]}}"#).unwrap();
        let sun = CardId::new("sun");

        let (served, texts) = store.resolve(&sun, Language::En).unwrap();
        assert_eq!(served, Language::Ru);
        assert_eq!(texts, ["Да"]);
    }

    #[test]
    fn missing_primary_and_requested_language_is_empty() {
        let store = PredictionStore::from_json(r#"{"sun": {"en": ["Yes"]}}"#).unwrap();
        assert!(store.lookup(&CardId::new("sun"), Language::Ru).is_empty());
    }

    #[test]
    fn unknown_card_is_empty() {
        let store = PredictionStore::from_json(r#"{"sun": ["x"]}"#).unwrap();
        let moon = CardId::new("moon");
        assert!(store.lookup(&moon, Language::Ru).is_empty());
        assert!(store.resolve(&moon, Language::Ru).is_none());
        assert!(!store.has_predictions(&moon));
    }

    #[test]
    fn unknown_language_keys_are_skipped() {
        let store = PredictionStore::from_json(r#"{"sun": {"de": ["Ja"], "ru": ["Да"]}}"#).unwrap();
        assert_eq!(store.prediction_count(&CardId::new("sun")), 1);
    }

    #[test]
    fn card_with_only_empty_lists_has_no_predictions() {
        let store = PredictionStore::from_json(r#"{"sun": {"ru": []}, "moon": []}"#).unwrap();
        assert!(!store.has_predictions(&CardId::new("sun")));
        assert!(!store.has_predictions(&CardId::new("moon")));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn empty_documents_are_rejected() {
        assert!(matches!(
            PredictionStore::from_json("   "),
            Err(StoreError::Empty { .. })
        ));
        assert!(matches!(
            PredictionStore::from_json("{}"),
            Err(StoreError::Empty { .. })
        ));
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(matches!(
            PredictionStore::from_json("{not json"),
            Err(StoreError::Parse(_))
        ));
        assert!(matches!(
            PredictionStore::from_json(r#"{"sun": 5}"#),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn load_absorbs_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.json");

        assert!(matches!(
            PredictionStore::try_load(&path),
            Err(StoreError::Missing { .. })
        ));
        assert!(PredictionStore::load(&path).is_empty());
    }

    #[test]
    fn load_absorbs_empty_and_malformed_files() {
        let mut empty = tempfile::NamedTempFile::new().unwrap();
        empty.write_all(b"{}").unwrap();
        assert!(matches!(
            PredictionStore::try_load(empty.path()),
            Err(StoreError::Empty { path }) if path == empty.path().display().to_string()
        ));
        assert!(PredictionStore::load(empty.path()).is_empty());

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"[1, 2").unwrap();
        assert!(PredictionStore::load(broken.path()).is_empty());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(r#"{"sun": {"ru": ["А"]}}"#.as_bytes()).unwrap();

        let store = PredictionStore::load(file.path());
        assert_eq!(store.len(), 1);
    }
}
