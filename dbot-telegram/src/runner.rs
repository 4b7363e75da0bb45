//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Calls teloxide's long-polling REPL and get_me to fill the chain's bot username.

use anyhow::Result;
use dbot_core::{Message as CoreMessage, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs the chain for one update. Errors are logged and the update is dropped.
pub async fn dispatch(chain: &HandlerChain, message: &CoreMessage) {
    if let Err(e) = chain.handle(message).await {
        error!(
            error = %e,
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Handler chain failed"
        );
    }
}

/// Starts the REPL with the given teloxide Bot and HandlerChain. Runs until the process is stopped.
/// Calls get_me() first and stores the username in the chain. Each update is handled inside the
/// REPL callback, so teloxide keeps updates from one chat in order while different chats run concurrently.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *handler_chain.bot_username().write().await = Some(username.clone());
                info!(username = %username, "Bot username set before repl");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; @mention commands will not match"),
    }

    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                dispatch(&chain, &core_msg).await;
                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
