//! Inline keyboards.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::callback::{card_data, language_data};
use crate::domain::Language;

fn language_label(language: Language) -> &'static str {
    match language {
        Language::Ru => "🇷🇺 Русский",
        Language::En => "🇺🇸 English",
    }
}

/// One row with a button per supported language.
#[must_use]
pub fn language_keyboard() -> InlineKeyboardMarkup {
    let row = Language::ALL
        .into_iter()
        .map(|language| {
            InlineKeyboardButton::callback(language_label(language), language_data(language))
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new([row])
}

/// Four face-down cards laid out two by two.
#[must_use]
pub fn card_keyboard() -> InlineKeyboardMarkup {
    let button = |slot: u8| InlineKeyboardButton::callback(slot.to_string(), card_data(slot));
    InlineKeyboardMarkup::new([[button(1), button(2)], [button(3), button(4)]])
}
