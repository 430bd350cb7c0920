//! Telegram command execution against the tarot service.
//!
//! Everything here is transport-free: it returns what to send and the bot
//! worker turns that into Telegram requests.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::command::TelegramCommand;
use crate::application::stats::CardListing;
use crate::application::texts::TextKey;
use crate::application::{ClearOutcome, TarotService};
use crate::domain::{ChatId, Language, UserId};

/// Who sent an update and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatContext {
    pub chat: ChatId,
    pub user: UserId,
    /// `@username` without the `@`, or the first name.
    pub display_name: String,
    pub private: bool,
}

/// Response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    /// Text with the language selection keyboard.
    LanguagePicker(String),
    /// Card back photo with the card selection keyboard.
    CardBack { image: PathBuf, caption: String },
}

/// Response to a language button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChanged {
    /// Short notice for the callback answer.
    pub notice: String,
    /// Greeting sent as a new message.
    pub greeting: String,
}

/// A revealed card ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealReply {
    pub image: PathBuf,
    pub caption: String,
}

/// Runtime command executor for Telegram updates.
#[derive(Clone)]
pub struct TarotControl {
    service: Arc<TarotService>,
    reveal_delay: Duration,
}

impl TarotControl {
    #[must_use]
    pub fn new(service: Arc<TarotService>, reveal_delay: Duration) -> Self {
        Self {
            service,
            reveal_delay,
        }
    }

    /// Pause between the opening notice and the reveal.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Text in the user's language.
    #[must_use]
    pub fn text(&self, user: UserId, key: TextKey) -> String {
        self.service.text(user, key)
    }

    /// Execute one parsed command.
    #[must_use]
    pub fn execute(&self, command: TelegramCommand, ctx: &ChatContext) -> Reply {
        match command {
            TelegramCommand::Start => {
                info!(user_id = ctx.user.0, private = ctx.private, "User started the bot");
                Reply::LanguagePicker(self.text(ctx.user, TextKey::Welcome))
            }
            TelegramCommand::Language => {
                Reply::LanguagePicker(self.text(ctx.user, TextKey::Welcome))
            }
            TelegramCommand::Help => Reply::Text(self.text(ctx.user, TextKey::Help)),
            TelegramCommand::Tarot => self.tarot(ctx),
            TelegramCommand::Stats => Reply::Text(self.stats_text(ctx.user)),
            TelegramCommand::Cards => Reply::Text(self.cards_text(ctx.user)),
            TelegramCommand::Clear => Reply::Text(self.clear_text(ctx)),
        }
    }

    fn tarot(&self, ctx: &ChatContext) -> Reply {
        info!(user_id = ctx.user.0, chat_id = ctx.chat.0, "Reading requested");
        match self.service.prepare_reading() {
            Ok(image) => {
                let caption = if ctx.private {
                    self.text(ctx.user, TextKey::ChooseCard)
                } else {
                    self.service.render(
                        ctx.user,
                        TextKey::UserChooses,
                        &[("username", &ctx.display_name)],
                    )
                };
                Reply::CardBack { image, caption }
            }
            Err(e) => Reply::Text(self.text(ctx.user, e.text_key())),
        }
    }

    fn stats_text(&self, user: UserId) -> String {
        let stats = self.service.stats();
        self.service.render(
            user,
            TextKey::Stats,
            &[
                ("backs_count", &stats.backs_count),
                ("all_cards_count", &stats.all_cards_count),
                ("available_cards_count", &stats.available_cards_count),
                ("predictions_count", &stats.predictions_count),
                ("active_chats", &stats.active_chats),
                ("total_cached_predictions", &stats.cached_predictions),
                ("known_users", &stats.known_users),
                ("uptime", &stats.uptime()),
            ],
        )
    }

    fn cards_text(&self, user: UserId) -> String {
        if !self.service.has_predictions() {
            return self.text(user, TextKey::NoPredictionsLoaded);
        }

        let lines: Vec<String> = self
            .service
            .card_listing()
            .iter()
            .map(|listing| self.card_line(user, listing))
            .collect();
        self.service.render(
            user,
            TextKey::CardsList,
            &[("cards_list", &lines.join("\n"))],
        )
    }

    fn card_line(&self, user: UserId, listing: &CardListing) -> String {
        let status = if listing.has_image { "✅" } else { "❌" };
        self.service.render(
            user,
            TextKey::CardsListEntry,
            &[
                ("status", &status),
                ("card", &listing.card),
                ("count", &listing.predictions),
            ],
        )
    }

    fn clear_text(&self, ctx: &ChatContext) -> String {
        match self.service.clear_history(ctx.chat) {
            ClearOutcome::Cleared(count) => {
                self.service
                    .render(ctx.user, TextKey::HistoryCleared, &[("count", &count)])
            }
            ClearOutcome::AlreadyEmpty => self.text(ctx.user, TextKey::HistoryEmpty),
        }
    }

    /// Store a language choice and build the confirmation texts.
    #[must_use]
    pub fn set_language(&self, user: UserId, language: Language) -> LanguageChanged {
        self.service.set_language(user, language);
        LanguageChanged {
            notice: self.text(user, TextKey::LanguageSet),
            greeting: self.text(user, TextKey::Start),
        }
    }

    /// Notice shown while the card "opens".
    #[must_use]
    pub fn opening_text(&self, user: UserId) -> String {
        self.text(user, TextKey::CardOpening)
    }

    /// Draw a card and caption it with the prediction.
    ///
    /// # Errors
    ///
    /// Returns the localized message to send when no card can be drawn.
    pub fn reveal(&self, ctx: &ChatContext) -> Result<RevealReply, String> {
        match self.service.reveal(ctx.chat, ctx.user) {
            Ok(reading) => Ok(RevealReply {
                image: reading.image,
                caption: self.service.render(
                    ctx.user,
                    TextKey::YourCard,
                    &[("prediction", &reading.prediction)],
                ),
            }),
            Err(e) => Err(self.text(ctx.user, e.text_key())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prediction::{PredictionStore, CACHE_DURATION};
    use crate::application::texts::text;
    use crate::testkit::catalog::StaticCatalog;
    use crate::testkit::clock::ManualClock;

    fn control(json: &str, cards: &[&str], backs: usize) -> TarotControl {
        let service = TarotService::new(
            PredictionStore::from_json(json).unwrap_or_default(),
            Arc::new(StaticCatalog::new(cards, backs)),
            Arc::new(ManualClock::new()),
            CACHE_DURATION,
        );
        TarotControl::new(Arc::new(service), Duration::ZERO)
    }

    fn ctx(private: bool) -> ChatContext {
        ChatContext {
            chat: ChatId(10),
            user: UserId(20),
            display_name: "seer".into(),
            private,
        }
    }

    #[test]
    fn start_offers_language_picker() {
        let control = control(r#"{"sun": ["A"]}"#, &["sun"], 1);
        assert_eq!(
            control.execute(TelegramCommand::Start, &ctx(true)),
            Reply::LanguagePicker(text(Language::Ru, TextKey::Welcome).to_string())
        );
    }

    #[test]
    fn tarot_in_group_mentions_user() {
        let control = control(r#"{"sun": ["A"]}"#, &["sun"], 1);

        match control.execute(TelegramCommand::Tarot, &ctx(false)) {
            Reply::CardBack { caption, .. } => assert!(caption.contains("seer")),
            other => panic!("expected card back, got {other:?}"),
        }
        match control.execute(TelegramCommand::Tarot, &ctx(true)) {
            Reply::CardBack { caption, .. } => {
                assert_eq!(caption, text(Language::Ru, TextKey::ChooseCard));
            }
            other => panic!("expected card back, got {other:?}"),
        }
    }

    #[test]
    fn tarot_without_predictions_reports_configuration() {
        let control = control("", &["sun"], 1);
        assert_eq!(
            control.execute(TelegramCommand::Tarot, &ctx(true)),
            Reply::Text(text(Language::Ru, TextKey::NoPredictions).to_string())
        );
    }

    #[test]
    fn language_choice_changes_texts() {
        let control = control(r#"{"sun": {"ru": ["Да"], "en": ["Yes"]}}"#, &["sun"], 1);
        let changed = control.set_language(UserId(20), Language::En);
        assert_eq!(changed.notice, text(Language::En, TextKey::LanguageSet));
        assert_eq!(changed.greeting, text(Language::En, TextKey::Start));

        let reveal = control.reveal(&ctx(true)).unwrap();
        assert!(reveal.caption.contains("Yes"));
        assert!(reveal.caption.starts_with("🎴 Your card of the day"));
    }

    #[test]
    fn reveal_without_cards_returns_message() {
        let control = control(r#"{"sun": ["A"]}"#, &[], 1);
        assert_eq!(
            control.reveal(&ctx(true)),
            Err(text(Language::Ru, TextKey::CardsUnavailable).to_string())
        );
    }

    #[test]
    fn cards_lists_every_configured_card() {
        let control = control(r#"{"sun": ["A", "B"], "moon": ["C"]}"#, &["sun"], 1);
        let Reply::Text(listing) = control.execute(TelegramCommand::Cards, &ctx(true)) else {
            panic!("expected text");
        };
        assert!(listing.contains("✅ sun (2 предсказаний)"));
        assert!(listing.contains("❌ moon (1 предсказаний)"));
    }

    #[test]
    fn cards_without_predictions() {
        let control = control("", &[], 0);
        assert_eq!(
            control.execute(TelegramCommand::Cards, &ctx(true)),
            Reply::Text(text(Language::Ru, TextKey::NoPredictionsLoaded).to_string())
        );
    }

    #[test]
    fn clear_reports_removed_records() {
        let control = control(r#"{"sun": ["A", "B"]}"#, &["sun"], 1);
        assert_eq!(
            control.execute(TelegramCommand::Clear, &ctx(true)),
            Reply::Text(text(Language::Ru, TextKey::HistoryEmpty).to_string())
        );

        control.reveal(&ctx(true)).unwrap();
        let Reply::Text(cleared) = control.execute(TelegramCommand::Clear, &ctx(true)) else {
            panic!("expected text");
        };
        assert!(cleared.contains('1'));
    }

    #[test]
    fn stats_are_rendered() {
        let control = control(r#"{"sun": ["A", "B"]}"#, &["sun", "moon"], 2);
        control.reveal(&ctx(true)).unwrap();

        let Reply::Text(stats) = control.execute(TelegramCommand::Stats, &ctx(true)) else {
            panic!("expected text");
        };
        assert!(stats.contains("Рубашек: 2"));
        assert!(stats.contains("Всего карт: 2"));
        assert!(stats.contains("Карт с предсказаниями: 1"));
        assert!(stats.contains("Активных чатов: 1"));
        assert!(stats.contains("Пользователей с выбранным языком: 0"));
    }
}
