//! # echo-bot
//!
//! Answers `/start` and `/help`, echoes any other text. Replies are picked per user by [`MessageProvider`].

pub mod handlers;
pub mod messages;

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{Bot, Trigger};
use dbot_telegram::{run_repl, TelegramBotAdapter, TelegramConfig};
use handler_chain::{HandlerChain, LoggingHandler, Route};
use tracing::{info, instrument};

pub use handlers::{EchoHandler, HelpHandler, StartHandler};
pub use messages::MessageProvider;

/// Routes in dispatch order: logging hook, `/start`, `/help`, then plain text.
pub fn routes(bot: Arc<dyn Bot>) -> Vec<Route> {
    vec![
        Route::new(Trigger::Any, Arc::new(LoggingHandler)),
        Route::new(StartHandler::trigger(), Arc::new(StartHandler::new(bot.clone()))),
        Route::new(HelpHandler::trigger(), Arc::new(HelpHandler::new(bot.clone()))),
        Route::new(EchoHandler::trigger(), Arc::new(EchoHandler::new(bot))),
    ]
}

/// Builds the chain that replies through `bot`.
pub fn build_handler_chain(bot: Arc<dyn Bot>) -> HandlerChain {
    HandlerChain::from_routes(routes(bot))
}

/// Main entry: init logging, validate config, build the chain, then long-poll until stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: TelegramConfig) -> Result<()> {
    config.validate()?;
    dbot_core::init_tracing(config.log_file.as_deref())?;

    let teloxide_bot = config.build_bot()?;
    let reply_bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(reply_bot);

    info!(
        api_url = ?config.telegram_api_url,
        log_file = ?config.log_file,
        "Bot started successfully"
    );

    run_repl(teloxide_bot, handler_chain).await
}
