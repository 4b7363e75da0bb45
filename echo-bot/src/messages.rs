//! Reply texts, picked per user tier.

use dbot_core::User;

const START_TEXT: &str = "hello!";
const PREMIUM_HELP_TEXT: &str = "help mock!";
const REGULAR_HELP_TEXT: &str = "You need to purchase a subscription";

/// Reply set for one update. Variants differ only in [`MessageProvider::help`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageProvider {
    Regular,
    Premium,
}

impl MessageProvider {
    /// Picks the reply set for `user`.
    ///
    /// Users *without* Telegram Premium get [`MessageProvider::Premium`] and premium users get
    /// [`MessageProvider::Regular`]. This looks inverted but is the shipped behavior; keep it until
    /// product confirms which tier should see the subscription prompt.
    pub fn for_user(user: &User) -> Self {
        if !user.is_premium {
            MessageProvider::Premium
        } else {
            MessageProvider::Regular
        }
    }

    /// Reply to `/start`.
    pub fn start(&self) -> &'static str {
        START_TEXT
    }

    /// Reply to `/help`.
    pub fn help(&self) -> &'static str {
        match self {
            MessageProvider::Regular => REGULAR_HELP_TEXT,
            MessageProvider::Premium => PREMIUM_HELP_TEXT,
        }
    }

    /// Reply to plain text: the text itself.
    pub fn echo<'a>(&self, text: &'a str) -> &'a str {
        text
    }
}
