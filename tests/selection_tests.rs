//! Prediction selection properties across the public engine API.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tarotbot::application::prediction::{HistoryLedger, PredictionStore, Selector, CACHE_DURATION};
use tarotbot::domain::{CardId, ChatId, Language, PredictionError};
use tarotbot::testkit::clock::ManualClock;

fn selector(json: &str) -> (Selector, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let store = PredictionStore::from_json(json).expect("valid predictions");
    let ledger = HistoryLedger::new(clock.clone(), CACHE_DURATION);
    (Selector::new(Arc::new(store), Arc::new(ledger)), clock)
}

fn card(name: &str) -> CardId {
    CardId::new(name)
}

#[test]
fn a_full_cycle_shows_every_text_once() {
    let texts: Vec<String> = (0..7).map(|i| format!("text {i}")).collect();
    let json = serde_json::json!({ "star": { "en": texts } }).to_string();
    let (selector, _) = selector(&json);

    let seen: HashSet<String> = (0..7)
        .map(|_| selector.pick(&card("star"), ChatId(1), Language::En).unwrap())
        .collect();

    assert_eq!(seen.len(), 7);
}

#[test]
fn exhaustion_restarts_from_the_full_pool() {
    let (selector, _) = selector(r#"{"fool": {"en": ["A", "B"]}}"#);
    let fool = card("fool");

    let first = selector.pick(&fool, ChatId(1), Language::En).unwrap();
    let second = selector.pick(&fool, ChatId(1), Language::En).unwrap();
    assert_ne!(first, second);

    let third = selector.pick(&fool, ChatId(1), Language::En).unwrap();
    assert!(third == "A" || third == "B");
    // After the reset only the third pick is in history.
    assert_eq!(selector.ledger().event_count(), 1);
}

#[test]
fn history_is_scoped_by_chat_and_language() {
    let (selector, _) = selector(r#"{"fool": {"ru": ["Р"], "en": ["E1", "E2"]}}"#);
    let fool = card("fool");

    let en = selector.pick(&fool, ChatId(1), Language::En).unwrap();
    assert_eq!(selector.pick(&fool, ChatId(1), Language::Ru).unwrap(), "Р");

    // Another chat starts fresh and may get the same text.
    let other: HashSet<String> = (0..2)
        .map(|_| selector.pick(&fool, ChatId(2), Language::En).unwrap())
        .collect();
    assert!(other.contains(&en));

    let used = selector.ledger().used_texts(ChatId(1), &fool, Language::En);
    assert_eq!(used, HashSet::from([en]));
}

#[test]
fn missing_language_falls_back_to_primary() {
    let (selector, _) = selector(r#"{"fool": {"ru": ["Только русский"]}}"#);

    let text = selector.pick(&card("fool"), ChatId(1), Language::En).unwrap();

    assert_eq!(text, "Только русский");
    assert_eq!(
        selector.ledger().used_texts(ChatId(1), &card("fool"), Language::Ru).len(),
        1
    );
}

#[test]
fn cards_without_texts_report_an_empty_pool() {
    let (selector, _) = selector(r#"{"tower": {"en": []}, "fool": ["A"]}"#);

    let result = selector.pick(&card("tower"), ChatId(1), Language::En);
    assert_eq!(
        result,
        Err(PredictionError::EmptyPool {
            card: card("tower"),
            language: Language::En,
        })
    );
    assert!(selector.pick(&card("moon"), ChatId(1), Language::En).is_err());
    assert_eq!(selector.ledger().event_count(), 0);
}

#[test]
fn history_expires_after_the_window() {
    let (selector, clock) = selector(r#"{"fool": ["A", "B", "C"]}"#);
    let fool = card("fool");

    selector.pick(&fool, ChatId(1), Language::En).unwrap();
    selector.pick(&fool, ChatId(1), Language::En).unwrap();
    assert_eq!(selector.ledger().event_count(), 2);

    clock.advance(CACHE_DURATION - Duration::from_secs(1));
    assert_eq!(selector.ledger().event_count(), 2);

    clock.advance(Duration::from_secs(1));
    assert_eq!(selector.ledger().event_count(), 0);
    assert_eq!(selector.ledger().chat_count(), 0);
}

#[test]
fn concurrent_picks_never_repeat_within_a_cycle() {
    let texts: Vec<String> = (0..32).map(|i| format!("t{i}")).collect();
    let json = serde_json::json!({ "sun": texts }).to_string();
    let (selector, _) = selector(&json);
    let sun = card("sun");

    let picks: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (0..8)
                        .map(|_| selector.pick(&sun, ChatId(9), Language::En).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<&String> = picks.iter().collect();
    assert_eq!(unique.len(), 32);
}
