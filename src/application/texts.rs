//! Localized bot texts.
//!
//! Templates use `{name}` placeholders filled by [`render`].

use crate::domain::Language;

/// Identifies one localized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Start,
    Welcome,
    LanguageSet,
    ChooseCard,
    UserChooses,
    CardOpening,
    YourCard,
    CardsUnavailable,
    NoPredictions,
    NoCardsFiles,
    ErrorLoading,
    Help,
    Stats,
    CardsList,
    CardsListEntry,
    HistoryCleared,
    HistoryEmpty,
    NoPredictionsLoaded,
}

/// Raw template for `key` in `language`.
#[must_use]
pub fn text(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::Ru => ru(key),
        Language::En => en(key),
    }
}

/// Template for `key` in `language` with `{name}` placeholders replaced.
#[must_use]
pub fn render(language: Language, key: TextKey, args: &[(&str, &dyn std::fmt::Display)]) -> String {
    let mut out = text(language, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), &value.to_string());
    }
    out
}

fn ru(key: TextKey) -> &'static str {
    match key {
        TextKey::Start => "Привет! Я бот Таро 🔮\n\nУзнай своё предсказание на сегодняшний день!\n\nИспользуй команду /tarot, чтобы получить предсказание!",
        TextKey::Welcome => "👋 Добро пожаловать! Выберите язык: \n\n 👋 Welcome! Choose your language:",
        TextKey::LanguageSet => "✅ Язык установлен: Русский",
        TextKey::ChooseCard => "🔮 Выбери карту судьбы (1-4):",
        TextKey::UserChooses => "🔮 {username} выбирает карту судьбы! Нажми кнопку (1-4):",
        TextKey::CardOpening => "🔮 Карта открывается...",
        TextKey::YourCard => "🎴 Твоя карта дня\n\n{prediction}\n\n✨ Используй /tarot для нового расклада!",
        TextKey::CardsUnavailable => "❌ Карты временно недоступны.",
        TextKey::NoPredictions => "❌ Бот не настроен. Файл с предсказаниями не найден.",
        TextKey::NoCardsFiles => "❌ Нет доступных карт с предсказаниями.",
        TextKey::ErrorLoading => "❌ Ошибка загрузки карт",
        TextKey::Help => "🔮 Бот Таро - Помощь:\n\n/start - Начать работу\n/tarot - Получить предсказание\n/language - Сменить язык\n/help - Эта справка\n/stats - Статистика бота\n/cards - Список карт\n/clear - Очистить историю предсказаний чата\n\n💡 Бота можно добавлять в группы!",
        TextKey::Stats => "📊 Статистика бота:\n\n🔙 Рубашек: {backs_count}\n🎴 Всего карт: {all_cards_count}\n✅ Карт с предсказаниями: {available_cards_count}\n📜 Предсказаний: {predictions_count}\n💬 Активных чатов: {active_chats}\n🕒 Кэшированных предсказаний: {total_cached_predictions}\n🌐 Пользователей с выбранным языком: {known_users}\n⏱ Время работы: {uptime}",
        TextKey::CardsList => "📋 Карты с предсказаниями:\n\n{cards_list}\n\n✅ - есть файл карты\n❌ - файл карты не найден",
        TextKey::CardsListEntry => "{status} {card} ({count} предсказаний)",
        TextKey::HistoryCleared => "✅ История предсказаний очищена! Удалено {count} записей.",
        TextKey::HistoryEmpty => "ℹ️ История предсказаний уже пуста",
        TextKey::NoPredictionsLoaded => "❌ Нет загруженных предсказаний",
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::Start => "Hello! I'm a Tarot bot 🔮\n\nFind out your prediction for today!\n\nUse the /tarot command to get a prediction!",
        TextKey::Welcome => "👋 Welcome! Choose your language: \n\n 👋 Добро пожаловать! Выберите язык:",
        TextKey::LanguageSet => "✅ Language set: English",
        TextKey::ChooseCard => "🔮 Choose your fate card (1-4):",
        TextKey::UserChooses => "🔮 {username} is choosing a fate card! Press a button (1-4):",
        TextKey::CardOpening => "🔮 The card is opening...",
        TextKey::YourCard => "🎴 Your card of the day\n\n{prediction}\n\n✨ Use /tarot for a new reading!",
        TextKey::CardsUnavailable => "❌ Cards are temporarily unavailable.",
        TextKey::NoPredictions => "❌ Bot is not configured. Prediction file not found.",
        TextKey::NoCardsFiles => "❌ No available cards with predictions.",
        TextKey::ErrorLoading => "❌ Error loading cards",
        TextKey::Help => "🔮 Tarot Bot - Help:\n\n/start - Start\n/tarot - Get prediction\n/language - Change language\n/help - This help\n/stats - Bot statistics\n/cards - List of cards\n/clear - Clear this chat's prediction history\n\n💡 You can add the bot to groups!",
        TextKey::Stats => "📊 Bot statistics:\n\n🔙 Card backs: {backs_count}\n🎴 Total cards: {all_cards_count}\n✅ Cards with predictions: {available_cards_count}\n📜 Predictions: {predictions_count}\n💬 Active chats: {active_chats}\n🕒 Cached predictions: {total_cached_predictions}\n🌐 Users with a language set: {known_users}\n⏱ Uptime: {uptime}",
        TextKey::CardsList => "📋 Cards with predictions:\n\n{cards_list}\n\n✅ - card file exists\n❌ - card file not found",
        TextKey::CardsListEntry => "{status} {card} ({count} predictions)",
        TextKey::HistoryCleared => "✅ Prediction history cleared! Deleted {count} records.",
        TextKey::HistoryEmpty => "ℹ️ Prediction history is already empty",
        TextKey::NoPredictionsLoaded => "❌ No predictions loaded",
    }
}
