//! Inline keyboard callback data.

use crate::domain::Language;

/// Number of face-down cards offered per reading.
pub const CARD_SLOTS: u8 = 4;

const LANGUAGE_PREFIX: &str = "lang_";
const CARD_PREFIX: &str = "card_";

/// Action requested by pressing an inline button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SetLanguage(Language),
    /// The slot number is cosmetic; the card is drawn at random.
    ChooseCard(u8),
}

/// Callback data this bot did not produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized callback data `{0}`")]
pub struct UnknownCallback(pub String);

/// Parse callback data such as `lang_en` or `card_3`.
pub fn parse_callback(data: &str) -> Result<CallbackAction, UnknownCallback> {
    let unknown = || UnknownCallback(data.to_string());

    if let Some(code) = data.strip_prefix(LANGUAGE_PREFIX) {
        return code
            .parse::<Language>()
            .map(CallbackAction::SetLanguage)
            .map_err(|_| unknown());
    }
    if let Some(slot) = data.strip_prefix(CARD_PREFIX) {
        return match slot.parse::<u8>() {
            Ok(slot) if (1..=CARD_SLOTS).contains(&slot) => Ok(CallbackAction::ChooseCard(slot)),
            _ => Err(unknown()),
        };
    }
    Err(unknown())
}

/// Callback data for a language button.
#[must_use]
pub fn language_data(language: Language) -> String {
    format!("{LANGUAGE_PREFIX}{}", language.code())
}

/// Callback data for a card slot button.
#[must_use]
pub fn card_data(slot: u8) -> String {
    format!("{CARD_PREFIX}{slot}")
}
