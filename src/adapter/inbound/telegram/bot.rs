//! Telegram bot worker.
//!
//! Long-polls updates and routes commands and inline-button callbacks to
//! [`TarotControl`]. Delivery failures are logged and never stop the
//! dispatcher.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::{BotCommand, InputFile, ReplyParameters, User};
use tracing::{debug, error, info, warn};

use super::callback::{parse_callback, CallbackAction};
use super::command::{bot_commands, parse_command, CommandParseError};
use super::control::{ChatContext, Reply, RevealReply, TarotControl};
use super::keyboard::{card_keyboard, language_keyboard};
use crate::application::texts::TextKey;
use crate::application::TarotService;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::telegram::TelegramAppConfig;

/// Run the bot until Ctrl-C.
///
/// # Errors
///
/// Fails when no bot token is configured.
pub async fn run(config: &TelegramAppConfig, service: Arc<TarotService>) -> Result<()> {
    let token = config
        .bot_token
        .clone()
        .ok_or(ConfigError::MissingField { field: "BOT_TOKEN" })?;
    let bot = Bot::new(token);

    if config.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let control = TarotControl::new(
        service,
        std::time::Duration::from_millis(config.reveal_delay_ms),
    );
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("Telegram bot started");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![control])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Telegram bot stopped");
    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

fn display_name(user: &User) -> String {
    user.username
        .clone()
        .unwrap_or_else(|| user.first_name.clone())
}

fn context(chat: &teloxide::types::Chat, user: &User) -> ChatContext {
    ChatContext {
        chat: chat.id.0.into(),
        user: user.id.0.into(),
        display_name: display_name(user),
        private: chat.is_private(),
    }
}

async fn handle_message(bot: Bot, msg: Message, control: TarotControl) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let command = match parse_command(text) {
        Ok(command) => command,
        Err(CommandParseError::NotACommand) => return Ok(()),
        Err(e) => {
            debug!(error = %e, "Ignoring command");
            return Ok(());
        }
    };
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let ctx = context(&msg.chat, user);

    match control.execute(command, &ctx) {
        Reply::Text(text) => {
            bot.send_message(msg.chat.id, text).await?;
        }
        Reply::LanguagePicker(text) => {
            bot.send_message(msg.chat.id, text)
                .reply_markup(language_keyboard())
                .await?;
        }
        Reply::CardBack { image, caption } => {
            if let Err(e) = bot
                .send_photo(msg.chat.id, InputFile::file(&image))
                .caption(caption)
                .reply_markup(card_keyboard())
                .await
            {
                error!(error = %e, image = %image.display(), "Failed to send card back");
                bot.send_message(msg.chat.id, control.text(ctx.user, TextKey::ErrorLoading))
                    .await?;
            }
        }
    }
    Ok(())
}

async fn handle_callback(bot: Bot, q: CallbackQuery, control: TarotControl) -> ResponseResult<()> {
    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let action = match parse_callback(data) {
        Ok(action) => action,
        Err(e) => {
            debug!(error = %e, "Ignoring callback");
            bot.answer_callback_query(q.id.clone()).await?;
            return Ok(());
        }
    };
    let Some(msg) = q.regular_message() else {
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    };
    let ctx = context(&msg.chat, &q.from);

    match action {
        CallbackAction::SetLanguage(language) => {
            let changed = control.set_language(ctx.user, language);
            bot.answer_callback_query(q.id.clone())
                .text(changed.notice)
                .await?;
            if let Err(e) = bot.delete_message(msg.chat.id, msg.id).await {
                warn!(error = %e, "Failed to delete language picker");
            }
            bot.send_message(msg.chat.id, changed.greeting).await?;
        }
        CallbackAction::ChooseCard(slot) => {
            info!(user_id = ctx.user.0, chat_id = ctx.chat.0, slot, "Card chosen");
            retire_card_back(&bot, msg, ctx.private).await;
            bot.answer_callback_query(q.id.clone())
                .text(control.opening_text(ctx.user))
                .await?;
            tokio::time::sleep(control.reveal_delay()).await;

            match control.reveal(&ctx) {
                Ok(reveal) => send_reveal(&bot, msg, &ctx, reveal, &control).await?,
                Err(text) => send_text(&bot, msg, ctx.private, text).await?,
            }
        }
    }
    Ok(())
}

/// Private chats drop the card back; groups only lose the buttons so the
/// message stays as context for the reply.
async fn retire_card_back(bot: &Bot, msg: &Message, private: bool) {
    if private {
        if let Err(e) = bot.delete_message(msg.chat.id, msg.id).await {
            warn!(error = %e, "Failed to delete card back");
        }
    } else if let Err(e) = bot.edit_message_reply_markup(msg.chat.id, msg.id).await {
        warn!(error = %e, "Failed to remove card buttons");
    }
}

async fn send_reveal(
    bot: &Bot,
    msg: &Message,
    ctx: &ChatContext,
    reveal: RevealReply,
    control: &TarotControl,
) -> ResponseResult<()> {
    let mut request = bot
        .send_photo(msg.chat.id, InputFile::file(&reveal.image))
        .caption(reveal.caption.clone());
    if !ctx.private {
        request = request.reply_parameters(ReplyParameters::new(msg.id));
    }

    match request.await {
        Ok(_) => {
            info!(user_id = ctx.user.0, image = %reveal.image.display(), "Prediction delivered");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, image = %reveal.image.display(), "Failed to send card");
            // Without the photo the prediction still goes out as text.
            let sent = send_text(bot, msg, ctx.private, reveal.caption).await;
            if let Err(e) = &sent {
                error!(error = %e, "Failed to send prediction text");
                send_text(bot, msg, ctx.private, control.text(ctx.user, TextKey::ErrorLoading))
                    .await?;
            }
            Ok(())
        }
    }
}

async fn send_text(bot: &Bot, msg: &Message, private: bool, text: String) -> ResponseResult<()> {
    let mut request = bot.send_message(msg.chat.id, text);
    if !private {
        request = request.reply_parameters(ReplyParameters::new(msg.id));
    }
    request.await?;
    Ok(())
}
