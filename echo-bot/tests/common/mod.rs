pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Message, User, OTHER_MESSAGE_TYPE, TEXT_MESSAGE_TYPE};

pub const CHAT_ID: i64 = 456;

/// Incoming text message in a private chat.
pub fn text_message(content: &str, is_premium: bool) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
            is_premium,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: TEXT_MESSAGE_TYPE.to_string(),
        thread_id: None,
        created_at: Utc::now(),
    }
}

/// Incoming message without text (sticker, photo, ...).
pub fn non_text_message() -> Message {
    let mut message = text_message("", false);
    message.message_type = OTHER_MESSAGE_TYPE.to_string();
    message
}
