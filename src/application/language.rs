//! Per-user language preferences.

use dashmap::DashMap;
use tracing::info;

use crate::domain::{Language, UserId};

/// Language chosen by each user. Users who never chose get the primary
/// language.
#[derive(Debug, Default)]
pub struct LanguagePreferences {
    languages: DashMap<UserId, Language>,
}

impl LanguagePreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Language for `user`, defaulting to [`Language::PRIMARY`].
    #[must_use]
    pub fn get(&self, user: UserId) -> Language {
        self.languages
            .get(&user)
            .map_or(Language::PRIMARY, |entry| *entry.value())
    }

    /// Remember the user's choice for the rest of the process lifetime.
    pub fn set(&self, user: UserId, language: Language) {
        self.languages.insert(user, language);
        info!(user_id = user.0, language = %language, "User language set");
    }

    /// Number of users with an explicit choice.
    #[must_use]
    pub fn count(&self) -> usize {
        self.languages.len()
    }
}
