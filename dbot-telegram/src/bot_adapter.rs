//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Message, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters, ThreadId},
};
use tracing::{error, instrument};

/// Parses a core message id string into a Telegram message id.
pub fn parse_message_id(s: &str) -> Result<MessageId> {
    s.parse()
        .map(MessageId)
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for reply: {}", s)))
}

/// How a reply to `message` is posted: quoting it outside private chats, and in the same forum topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTarget {
    pub quote: Option<MessageId>,
    pub thread: Option<ThreadId>,
}

impl ReplyTarget {
    pub fn for_message(message: &Message) -> Result<Self> {
        let quote = if message.chat.is_private() {
            None
        } else {
            Some(parse_message_id(&message.id)?)
        };
        Ok(Self {
            quote,
            thread: message.thread_id.map(|id| ThreadId(MessageId(id))),
        })
    }
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn send_failed(chat_id: i64, e: teloxide::RequestError) -> DbotError {
    error!(chat_id = chat_id, error = %e, "Failed to send message");
    DbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    #[instrument(skip(self, text), fields(chat_id = chat.id))]
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| send_failed(chat.id, e))?;
        Ok(())
    }

    #[instrument(skip(self, message, text), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let target = ReplyTarget::for_message(message)?;
        let mut request = self
            .bot
            .send_message(ChatId(message.chat.id), text.to_string());
        if let Some(quote) = target.quote {
            request = request.reply_parameters(ReplyParameters::new(quote));
        }
        if let Some(thread) = target.thread {
            request = request.message_thread_id(thread);
        }
        request.await.map_err(|e| send_failed(message.chat.id, e))?;
        Ok(())
    }
}
