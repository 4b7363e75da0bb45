//! `/start`, `/help` and echo handlers. Each resolves the sender's [`MessageProvider`] and replies in the same chat.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result, Trigger};
use tracing::{info, instrument};

use crate::messages::MessageProvider;

async fn reply(bot: &dyn Bot, message: &Message, text: &str) -> Result<HandlerResponse> {
    bot.reply_to(message, text).await?;
    info!(
        user_id = message.user.id,
        chat_id = message.chat.id,
        reply_len = text.len(),
        "Sent reply"
    );
    Ok(HandlerResponse::Reply(text.to_string()))
}

/// Replies to `/start` with [`MessageProvider::start`].
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub fn trigger() -> Trigger {
        Trigger::command("start")
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let messages = MessageProvider::for_user(&message.user);
        reply(self.bot.as_ref(), message, messages.start()).await
    }
}

/// Replies to `/help` with [`MessageProvider::help`].
pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub fn trigger() -> Trigger {
        Trigger::command("help")
    }
}

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let messages = MessageProvider::for_user(&message.user);
        reply(self.bot.as_ref(), message, messages.help()).await
    }
}

/// Sends any non-command text back unchanged.
pub struct EchoHandler {
    bot: Arc<dyn Bot>,
}

impl EchoHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub fn trigger() -> Trigger {
        Trigger::PlainText
    }
}

#[async_trait]
impl Handler for EchoHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.text().ok_or(HandlerError::NoText)?;
        let messages = MessageProvider::for_user(&message.user);
        reply(self.bot.as_ref(), message, messages.echo(text)).await
    }
}
