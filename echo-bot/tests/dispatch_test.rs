//! End-to-end dispatch tests: the full echo-bot chain driven with core messages and a recording MockBot.

mod common;

use common::mock_bot::{drain, MockBot, SentRecord};
use common::{non_text_message, text_message, CHAT_ID};
use dbot_core::{DbotError, Handler, HandlerError, HandlerResponse};
use dbot_telegram::dispatch;
use echo_bot::{build_handler_chain, EchoHandler};

fn sent(text: &str) -> SentRecord {
    SentRecord {
        chat_id: CHAT_ID,
        text: text.to_string(),
    }
}

/// **Test: /start yields exactly one "hello!" reply for both tiers.**
#[tokio::test]
async fn test_start_replies_once() {
    for is_premium in [false, true] {
        let (bot, mut rx) = MockBot::with_receiver();
        let chain = build_handler_chain(bot);

        let result = chain.handle(&text_message("/start", is_premium)).await.unwrap();

        assert_eq!(result, HandlerResponse::Reply("hello!".to_string()));
        assert_eq!(drain(&mut rx), vec![sent("hello!")]);
    }
}

/// **Test: /help reply depends on tier (as shipped: non-premium → "help mock!").**
#[tokio::test]
async fn test_help_reply_depends_on_tier() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    chain.handle(&text_message("/help", false)).await.unwrap();
    assert_eq!(drain(&mut rx), vec![sent("help mock!")]);

    chain.handle(&text_message("/help", true)).await.unwrap();
    assert_eq!(
        drain(&mut rx),
        vec![sent("You need to purchase a subscription")]
    );
}

/// **Test: plain text is echoed once, unchanged.**
#[tokio::test]
async fn test_plain_text_is_echoed() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    let result = chain.handle(&text_message("ping", false)).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("ping".to_string()));
    assert_eq!(drain(&mut rx), vec![sent("ping")]);
}

/// **Test: unknown commands are not echoed and get no reply.**
#[tokio::test]
async fn test_unknown_command_is_not_echoed() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    let result = chain.handle(&text_message("/unknown", false)).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert!(drain(&mut rx).is_empty());
}

/// **Test: a long unknown command (over 32 characters) is still a command and is not echoed.**
#[tokio::test]
async fn test_long_unknown_command_is_not_echoed() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    for length in [33, 40, 64] {
        let command = format!("/{}", "a".repeat(length));
        let result = chain.handle(&text_message(&command, false)).await.unwrap();
        assert_eq!(result, HandlerResponse::Continue);
    }

    assert!(drain(&mut rx).is_empty());
}

/// **Test: a command for another bot, or with a bare `@`, is neither handled nor echoed.**
#[tokio::test]
async fn test_foreign_or_bare_mention_is_not_echoed() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);
    *chain.bot_username().write().await = Some("echo_bot".to_string());

    chain
        .handle(&text_message("/start@other_bot", false))
        .await
        .unwrap();
    chain.handle(&text_message("/start@", false)).await.unwrap();

    assert!(drain(&mut rx).is_empty());
}

/// **Test: updates from one chat dispatched in turn are answered in the same order.**
#[tokio::test]
async fn test_dispatch_keeps_same_chat_order() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    for text in ["a", "b", "c"] {
        dispatch(&chain, &text_message(text, false)).await;
    }

    assert_eq!(drain(&mut rx), vec![sent("a"), sent("b"), sent("c")]);
}

/// **Test: dispatch logs and drops a failed update instead of propagating.**
#[tokio::test]
async fn test_dispatch_swallows_send_failure() {
    let chain = build_handler_chain(MockBot::failing());

    dispatch(&chain, &text_message("ping", false)).await;
    dispatch(&chain, &text_message("/start", false)).await;
}

/// **Test: commands addressed to this bot are handled, those for other bots are dropped.**
#[tokio::test]
async fn test_mentioned_commands() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);
    *chain.bot_username().write().await = Some("echo_bot".to_string());

    chain
        .handle(&text_message("/start@echo_bot", false))
        .await
        .unwrap();
    chain
        .handle(&text_message("/help@other_bot", false))
        .await
        .unwrap();

    assert_eq!(drain(&mut rx), vec![sent("hello!")]);
}

/// **Test: command arguments do not change the command reply.**
#[tokio::test]
async fn test_command_with_args() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    chain
        .handle(&text_message("/help me please", false))
        .await
        .unwrap();

    assert_eq!(drain(&mut rx), vec![sent("help mock!")]);
}

/// **Test: non-text updates produce no reply.**
#[tokio::test]
async fn test_non_text_message_gets_no_reply() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    let result = chain.handle(&non_text_message()).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert!(drain(&mut rx).is_empty());
}

/// **Test: a failed send propagates out of the chain and is not retried.**
#[tokio::test]
async fn test_send_failure_propagates() {
    let chain = build_handler_chain(MockBot::failing());

    let err = chain
        .handle(&text_message("ping", false))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Bot(_)));
}

/// **Test: EchoHandler called directly on a non-text message reports NoText.**
#[tokio::test]
async fn test_echo_handler_requires_text() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = EchoHandler::new(bot);

    let err = handler.handle(&non_text_message()).await.unwrap_err();

    assert!(matches!(err, DbotError::Handler(HandlerError::NoText)));
    assert!(drain(&mut rx).is_empty());
}

/// **Test: concurrent updates from different chats each get their own reply.**
#[tokio::test]
async fn test_concurrent_updates() {
    let (bot, mut rx) = MockBot::with_receiver();
    let chain = build_handler_chain(bot);

    let mut tasks = Vec::new();
    for i in 0..10 {
        let chain = chain.clone();
        tasks.push(tokio::spawn(async move {
            let mut message = text_message(&format!("msg {}", i), i % 2 == 0);
            message.chat.id = i;
            chain.handle(&message).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let mut replies = drain(&mut rx);
    replies.sort_by_key(|r| r.chat_id);
    assert_eq!(replies.len(), 10);
    for (i, record) in replies.iter().enumerate() {
        assert_eq!(record.chat_id, i as i64);
        assert_eq!(record.text, format!("msg {}", i));
    }
}
