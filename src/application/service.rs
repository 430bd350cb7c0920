//! Long-lived tarot service owning all bot state.
//!
//! The Telegram adapter talks only to [`TarotService`]; the prediction
//! store, history ledger, language preferences and image catalog are owned
//! here instead of living in process-wide globals.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{info, warn};

use super::catalog::{available_cards, drawable_images, unmatched_cards};
use super::language::LanguagePreferences;
use super::prediction::{HistoryLedger, PredictionStore, Selector};
use super::stats::{BotStats, CardListing};
use super::texts::{render, text, TextKey};
use crate::domain::{CardId, ChatId, Language, PredictionError, UserId};
use crate::port::{CardCatalog, Clock};

/// Why a reading cannot be offered.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    #[error("no predictions loaded")]
    NoPredictions,
    #[error("no card images with predictions")]
    NoCards,
    #[error("no card back images")]
    NoBacks,
    #[error("cards temporarily unavailable")]
    Unavailable,
}

impl ReadingError {
    /// Text shown to the user for this error.
    #[must_use]
    pub const fn text_key(self) -> TextKey {
        match self {
            Self::NoPredictions => TextKey::NoPredictions,
            Self::NoCards => TextKey::NoCardsFiles,
            Self::NoBacks | Self::Unavailable => TextKey::CardsUnavailable,
        }
    }
}

/// A revealed card with its prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub card: CardId,
    pub image: PathBuf,
    pub prediction: String,
}

/// Outcome of clearing a chat's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    AlreadyEmpty,
}

pub struct TarotService {
    store: Arc<PredictionStore>,
    ledger: Arc<HistoryLedger>,
    selector: Selector,
    languages: LanguagePreferences,
    catalog: Arc<dyn CardCatalog>,
    started_at: DateTime<Utc>,
}

impl TarotService {
    /// Create the service around a loaded store.
    #[must_use]
    pub fn new(
        store: PredictionStore,
        catalog: Arc<dyn CardCatalog>,
        clock: Arc<dyn Clock>,
        cache_duration: Duration,
    ) -> Self {
        let store = Arc::new(store);
        let ledger = Arc::new(HistoryLedger::new(clock, cache_duration));
        let selector = Selector::new(Arc::clone(&store), Arc::clone(&ledger));

        Self {
            store,
            ledger,
            selector,
            languages: LanguagePreferences::new(),
            catalog,
            started_at: Utc::now(),
        }
    }

    /// Language of `user`.
    #[must_use]
    pub fn language(&self, user: UserId) -> Language {
        self.languages.get(user)
    }

    /// Store the user's language choice.
    pub fn set_language(&self, user: UserId, language: Language) {
        self.languages.set(user, language);
    }

    /// Text in the user's language.
    #[must_use]
    pub fn text(&self, user: UserId, key: TextKey) -> String {
        text(self.language(user), key).to_string()
    }

    /// Text in the user's language with placeholders filled.
    #[must_use]
    pub fn render(
        &self,
        user: UserId,
        key: TextKey,
        args: &[(&str, &dyn std::fmt::Display)],
    ) -> String {
        render(self.language(user), key, args)
    }

    /// Prediction for `card` shown in `chat` to `user`.
    ///
    /// Never fails: when the card has no predictions the localized
    /// "not configured" message is returned and nothing is recorded.
    #[must_use]
    pub fn pick(&self, card: &CardId, chat: ChatId, user: UserId) -> String {
        let language = self.language(user);
        match self.selector.pick(card, chat, language) {
            Ok(prediction) => prediction,
            Err(PredictionError::EmptyPool { .. }) => {
                text(language, TextKey::NoPredictions).to_string()
            }
        }
    }

    /// Ids of cards with an image and predictions.
    #[must_use]
    pub fn available_cards(&self) -> BTreeSet<CardId> {
        available_cards(&self.catalog.card_images(), &self.store)
    }

    /// Ids of card images without predictions; they are never drawn.
    #[must_use]
    pub fn unmatched_cards(&self) -> BTreeSet<CardId> {
        unmatched_cards(&self.catalog.card_images(), &self.store)
    }

    /// True when any prediction was loaded.
    #[must_use]
    pub fn has_predictions(&self) -> bool {
        !self.store.is_empty()
    }

    /// Pick the card back to show for a new reading.
    ///
    /// # Errors
    ///
    /// Fails when no predictions are loaded, no card can be drawn or no
    /// card back image exists.
    pub fn prepare_reading(&self) -> Result<PathBuf, ReadingError> {
        if !self.has_predictions() {
            return Err(ReadingError::NoPredictions);
        }
        if self.available_cards().is_empty() {
            return Err(ReadingError::NoCards);
        }

        let backs = self.catalog.back_images();
        let back = backs
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(ReadingError::NoBacks)?;
        info!(back = %back.display(), "Using card back");
        Ok(back)
    }

    /// Draw a random card with predictions and pick its prediction.
    ///
    /// # Errors
    ///
    /// [`ReadingError::Unavailable`] when no card can be drawn.
    pub fn reveal(&self, chat: ChatId, user: UserId) -> Result<Reading, ReadingError> {
        let drawable = drawable_images(self.catalog.card_images(), &self.store);
        let Some(image) = drawable.choose(&mut rand::thread_rng()).cloned() else {
            warn!(chat_id = chat.0, "No drawable cards");
            return Err(ReadingError::Unavailable);
        };

        let prediction = self.pick(&image.id, chat, user);
        info!(chat_id = chat.0, user_id = user.0, card = %image.id, "Card revealed");

        Ok(Reading {
            card: image.id,
            image: image.path,
            prediction,
        })
    }

    /// Forget the prediction history of a chat.
    pub fn clear_history(&self, chat: ChatId) -> ClearOutcome {
        match self.ledger.clear_chat(chat) {
            0 => ClearOutcome::AlreadyEmpty,
            count => {
                info!(chat_id = chat.0, count, "Prediction history cleared");
                ClearOutcome::Cleared(count)
            }
        }
    }

    /// Current statistics.
    #[must_use]
    pub fn stats(&self) -> BotStats {
        let images = self.catalog.card_images();
        BotStats {
            backs_count: self.catalog.back_images().len(),
            all_cards_count: images.len(),
            available_cards_count: available_cards(&images, &self.store).len(),
            predictions_count: self.store.total_predictions(),
            active_chats: self.ledger.chat_count(),
            cached_predictions: self.ledger.event_count(),
            known_users: self.languages.count(),
            started_at: self.started_at,
        }
    }

    /// Every configured card with its image status and prediction count.
    #[must_use]
    pub fn card_listing(&self) -> Vec<CardListing> {
        let with_images = self.available_cards();
        self.store
            .card_ids()
            .map(|card| CardListing {
                card: card.clone(),
                has_image: with_images.contains(card),
                predictions: self.store.prediction_count(card),
            })
            .collect()
    }

    /// Prediction store.
    #[must_use]
    pub fn store(&self) -> &PredictionStore {
        &self.store
    }

    /// History ledger.
    #[must_use]
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }
}
