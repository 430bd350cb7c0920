//! Per-chat history of recently shown predictions.
//!
//! Eviction happens at read time: every public read first drops events
//! older than the cache window, and chats left without events disappear.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::{CardId, ChatId, HistoryEvent, Language};
use crate::port::{Clock, SystemClock};

/// How long a shown prediction keeps counting as used.
pub const CACHE_DURATION: Duration = Duration::from_secs(3600);

#[derive(Debug, Default)]
struct LedgerState {
    chats: HashMap<ChatId, Vec<HistoryEvent>>,
}

/// Thread-safe history ledger guarded by a single lock.
pub struct HistoryLedger {
    state: Mutex<LedgerState>,
    clock: Arc<dyn Clock>,
    window: Duration,
}

impl HistoryLedger {
    /// Create a ledger using the given clock and cache window.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, window: Duration) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            clock,
            window,
        }
    }

    /// Current instant from the injected clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Run `f` with exclusive access to the ledger.
    ///
    /// The lock is held for the whole closure, so a read, a reset and an
    /// append made through the [`LedgerTxn`] form one atomic unit.
    pub fn transaction<R>(&self, f: impl FnOnce(&mut LedgerTxn<'_>) -> R) -> R {
        let now = self.clock.now();
        let mut state = self.state.lock();
        let mut txn = LedgerTxn {
            state: &mut *state,
            now,
            window: self.window,
        };
        f(&mut txn)
    }

    /// Drop events older than the window relative to `now`.
    ///
    /// Returns the number of events removed.
    pub fn cleanup(&self, now: Instant) -> usize {
        self.state.lock().cleanup(now, self.window)
    }

    /// Texts already shown in `chat` for this card and language.
    #[must_use]
    pub fn used_texts(&self, chat: ChatId, card: &CardId, language: Language) -> HashSet<String> {
        self.transaction(|txn| {
            txn.cleanup();
            txn.used_texts(chat, card, language)
        })
    }

    /// Append an event to the chat's history.
    pub fn record(&self, chat: ChatId, event: HistoryEvent) {
        self.state.lock().record(chat, event);
    }

    /// Forget every event of this card and language in the chat.
    pub fn reset_card(&self, chat: ChatId, card: &CardId, language: Language) -> usize {
        self.state.lock().reset_card(chat, card, language)
    }

    /// Remove the chat's whole history. Returns how many live events it had.
    pub fn clear_chat(&self, chat: ChatId) -> usize {
        self.transaction(|txn| {
            txn.cleanup();
            txn.state.chats.remove(&chat).map_or(0, |events| events.len())
        })
    }

    /// Number of chats with live history.
    #[must_use]
    pub fn chat_count(&self) -> usize {
        self.transaction(|txn| {
            txn.cleanup();
            txn.state.chats.len()
        })
    }

    /// Number of live events across all chats.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.transaction(|txn| {
            txn.cleanup();
            txn.state.chats.values().map(Vec::len).sum()
        })
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), CACHE_DURATION)
    }
}

/// Exclusive view of the ledger for one atomic unit of work.
pub struct LedgerTxn<'a> {
    state: &'a mut LedgerState,
    now: Instant,
    window: Duration,
}

impl LedgerTxn<'_> {
    /// Instant captured when the transaction started.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Evict stale events as of the transaction's instant.
    pub fn cleanup(&mut self) -> usize {
        self.state.cleanup(self.now, self.window)
    }

    /// Texts already shown in `chat` for this card and language.
    #[must_use]
    pub fn used_texts(&self, chat: ChatId, card: &CardId, language: Language) -> HashSet<String> {
        self.state.used_texts(chat, card, language)
    }

    /// Forget every event of this card and language in the chat.
    pub fn reset_card(&mut self, chat: ChatId, card: &CardId, language: Language) -> usize {
        self.state.reset_card(chat, card, language)
    }

    /// Append an event to the chat's history.
    pub fn record(&mut self, chat: ChatId, event: HistoryEvent) {
        self.state.record(chat, event);
    }
}

impl LedgerState {
    fn cleanup(&mut self, now: Instant, window: Duration) -> usize {
        let mut removed = 0;
        self.chats.retain(|_, events| {
            let before = events.len();
            events.retain(|event| now.duration_since(event.recorded_at) < window);
            removed += before - events.len();
            !events.is_empty()
        });
        if removed > 0 {
            debug!(removed, "Evicted stale prediction history");
        }
        removed
    }

    fn used_texts(&self, chat: ChatId, card: &CardId, language: Language) -> HashSet<String> {
        self.chats
            .get(&chat)
            .map(|events| {
                events
                    .iter()
                    .filter(|event| event.matches(card, language))
                    .map(|event| event.text.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn record(&mut self, chat: ChatId, event: HistoryEvent) {
        self.chats.entry(chat).or_default().push(event);
    }

    fn reset_card(&mut self, chat: ChatId, card: &CardId, language: Language) -> usize {
        let Some(events) = self.chats.get_mut(&chat) else {
            return 0;
        };
        let before = events.len();
        events.retain(|event| !event.matches(card, language));
        before - events.len()
    }
}
