//! Read-only statistics for the `/stats` and `/cards` commands.

use chrono::{DateTime, Utc};

use crate::domain::CardId;

/// Aggregated bot statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotStats {
    pub backs_count: usize,
    pub all_cards_count: usize,
    pub available_cards_count: usize,
    pub predictions_count: usize,
    pub active_chats: usize,
    pub cached_predictions: usize,
    /// Users who picked a language.
    pub known_users: usize,
    pub started_at: DateTime<Utc>,
}

impl BotStats {
    /// Uptime as `HH:MM:SS`.
    #[must_use]
    pub fn uptime(&self) -> String {
        format_uptime(self.started_at, Utc::now())
    }
}

/// One row of the `/cards` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListing {
    pub card: CardId,
    /// An image for this card exists in the catalog.
    pub has_image: bool,
    /// Predictions across all languages.
    pub predictions: usize,
}

pub(crate) fn format_uptime(started_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let total_seconds = (now - started_at).num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn uptime_formats_hours_minutes_seconds() {
        let start = Utc::now();
        let now = start + Duration::seconds(3 * 3600 + 25 * 60 + 7);
        assert_eq!(format_uptime(start, now), "03:25:07");
    }

    #[test]
    fn uptime_never_negative() {
        let now = Utc::now();
        assert_eq!(format_uptime(now + Duration::seconds(5), now), "00:00:00");
    }
}
