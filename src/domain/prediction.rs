//! Prediction pools and the history events recorded when one is shown.

use std::collections::HashMap;
use std::time::Instant;

use super::id::CardId;
use super::language::Language;

/// The predictions configured for one card.
///
/// The predictions file accepts two shapes per card; both are resolved into
/// this enum once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionPool {
    /// Legacy flat list. Served for every requested language.
    Shared(Vec<String>),
    /// One ordered list per language.
    PerLanguage(HashMap<Language, Vec<String>>),
}

impl PredictionPool {
    /// Resolve the bucket serving `language`.
    ///
    /// Returns the language the texts are actually in together with the
    /// texts: the requested language for shared pools and for per-language
    /// pools that have it, otherwise the primary language. An empty slice
    /// means nothing can be served.
    #[must_use]
    pub fn resolve(&self, language: Language) -> (Language, &[String]) {
        match self {
            Self::Shared(texts) => (language, texts.as_slice()),
            Self::PerLanguage(buckets) => match buckets.get(&language) {
                Some(texts) => (language, texts.as_slice()),
                None => (
                    Language::PRIMARY,
                    buckets
                        .get(&Language::PRIMARY)
                        .map_or(&[][..], Vec::as_slice),
                ),
            },
        }
    }

    /// Number of predictions across all languages.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Shared(texts) => texts.len(),
            Self::PerLanguage(buckets) => buckets.values().map(Vec::len).sum(),
        }
    }

    /// True when no language has a single prediction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A prediction shown in a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    pub card: CardId,
    pub text: String,
    pub language: Language,
    pub recorded_at: Instant,
}

impl HistoryEvent {
    pub fn new(card: CardId, text: impl Into<String>, language: Language, recorded_at: Instant) -> Self {
        Self {
            card,
            text: text.into(),
            language,
            recorded_at,
        }
    }

    /// True when this event belongs to the given card/language pair.
    #[must_use]
    pub fn matches(&self, card: &CardId, language: Language) -> bool {
        self.card == *card && self.language == language
    }
}
