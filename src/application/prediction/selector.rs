//! Prediction selection with per-chat deduplication.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::ledger::HistoryLedger;
use super::store::PredictionStore;
use crate::domain::{CardId, ChatId, HistoryEvent, Language, PredictionError};

/// Picks predictions a chat has not seen recently.
///
/// Each pick runs inside one ledger transaction: eviction, the used-set
/// read, the exhaustion reset and the append cannot interleave with another
/// pick.
pub struct Selector {
    store: Arc<PredictionStore>,
    ledger: Arc<HistoryLedger>,
}

impl Selector {
    #[must_use]
    pub fn new(store: Arc<PredictionStore>, ledger: Arc<HistoryLedger>) -> Self {
        Self { store, ledger }
    }

    /// Pick a prediction for `card` shown in `chat` to a reader of `language`.
    ///
    /// Texts already shown for the same chat, card and served language are
    /// skipped. Once every text was shown, that card/language history is
    /// reset and the pick is made from the full pool, so the text shown
    /// last may come up again right away.
    ///
    /// # Errors
    ///
    /// [`PredictionError::EmptyPool`] when the card has no predictions in
    /// `language` nor in the primary language. No history is recorded then.
    pub fn pick(
        &self,
        card: &CardId,
        chat: ChatId,
        language: Language,
    ) -> Result<String, PredictionError> {
        self.ledger.transaction(|txn| {
            txn.cleanup();

            let empty = || PredictionError::EmptyPool {
                card: card.clone(),
                language,
            };
            let (served, pool) = match self.store.resolve(card, language) {
                Some((served, pool)) if !pool.is_empty() => (served, pool),
                _ => {
                    warn!(card = %card, language = %language, "No predictions for card");
                    return Err(empty());
                }
            };

            let used = txn.used_texts(chat, card, served);
            let mut candidates: Vec<&String> =
                pool.iter().filter(|text| !used.contains(*text)).collect();

            if candidates.is_empty() {
                let cleared = txn.reset_card(chat, card, served);
                debug!(
                    chat_id = chat.0,
                    card = %card,
                    language = %served,
                    cleared,
                    "Predictions exhausted, resetting history"
                );
                candidates = pool.iter().collect();
            }

            let Some(selected) = candidates.choose(&mut rand::thread_rng()) else {
                return Err(empty());
            };
            let selected = (*selected).clone();

            txn.record(
                chat,
                HistoryEvent::new(card.clone(), selected.clone(), served, txn.now()),
            );
            Ok(selected)
        })
    }

    /// Ledger backing this selector.
    #[must_use]
    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }
}
