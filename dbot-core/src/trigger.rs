//! Trigger predicates: decide whether a route applies to a message.
//!
//! Command syntax is teloxide's: the first word starts with `/`, optionally suffixed with `@botusername`.

use teloxide::utils::command::parse_command;

use crate::types::Message;

/// Returns true if `text` is a command for any bot, addressed or not.
pub fn is_command(text: &str) -> bool {
    let mention = text
        .split_whitespace()
        .next()
        .and_then(|word| word.split('@').nth(1))
        .unwrap_or_default();
    parse_command(text, mention).is_some()
}

/// Predicate half of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Every message.
    Any,
    /// `/name`, case-insensitive. A `@mention` must name this bot.
    Command(String),
    /// Text that is not a command.
    PlainText,
}

impl Trigger {
    /// Shorthand for [`Trigger::Command`].
    pub fn command(name: impl Into<String>) -> Self {
        Trigger::Command(name.into())
    }

    /// Returns true if the message satisfies this trigger. `bot_username` is the bot's own
    /// username, when known; commands addressed to another bot never match.
    pub fn matches(&self, message: &Message, bot_username: Option<&str>) -> bool {
        match self {
            Trigger::Any => true,
            Trigger::Command(expected) => message
                .text()
                .and_then(|text| parse_command(text, bot_username.unwrap_or_default()))
                .map(|(name, _args)| name.eq_ignore_ascii_case(expected))
                .unwrap_or(false),
            Trigger::PlainText => message.text().map(|text| !is_command(text)).unwrap_or(false),
        }
    }
}
