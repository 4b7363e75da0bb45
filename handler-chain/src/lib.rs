//! # Handler chain
//!
//! Runs an ordered list of routes for each message. Every route is a [`Trigger`] plus a [`Handler`].
//! All `before` hooks run first and may stop the chain; then the first matching handler that returns
//! Stop or Reply ends the handle phase; `after` hooks run in reverse order.

mod logging;

pub use logging::LoggingHandler;

use dbot_core::{Handler, HandlerResponse, Message, Result, Trigger};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// A handler bound to the trigger that selects it.
#[derive(Clone)]
pub struct Route {
    pub trigger: Trigger,
    pub handler: Arc<dyn Handler>,
}

impl Route {
    pub fn new(trigger: Trigger, handler: Arc<dyn Handler>) -> Self {
        Self { trigger, handler }
    }
}

/// Ordered routes plus the bot's own username (filled in by the runner once known).
#[derive(Clone)]
pub struct HandlerChain {
    routes: Vec<Route>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerChain {
    /// Creates an empty chain with an unknown bot username.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            bot_username: Arc::new(RwLock::new(None)),
        }
    }

    /// Builds a chain from routes, keeping their order.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        routes
            .into_iter()
            .fold(Self::new(), |chain, route| chain.add(route))
    }

    /// Appends a route.
    pub fn add(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends a handler that only runs when `trigger` matches.
    pub fn add_route(self, trigger: Trigger, handler: Arc<dyn Handler>) -> Self {
        self.add(Route::new(trigger, handler))
    }

    /// Appends a handler that sees every message.
    pub fn add_handler(self, handler: Arc<dyn Handler>) -> Self {
        self.add_route(Trigger::Any, handler)
    }

    /// The username cell used for `@mention` matching; the runner fills it from `get_me`.
    pub fn bot_username(&self) -> Arc<RwLock<Option<String>>> {
        self.bot_username.clone()
    }

    /// Runs before hooks, then matching handlers, then after hooks in reverse. Returns first Stop or Reply, or Continue.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for route in &self.routes {
            if !route.handler.before(message).await? {
                let handler_name = route.handler.name();
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let bot_username = self.bot_username.read().await.clone();
        for route in &self.routes {
            if !route.trigger.matches(message, bot_username.as_deref()) {
                continue;
            }

            let handler_name = route.handler.name();
            info!(
                user_id = message.user.id,
                handler = %handler_name,
                trigger = ?route.trigger,
                "step: handler processing"
            );
            let response = route.handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for route in self.routes.iter().rev() {
            route.handler.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Integration tests live in tests/handler_chain_test.rs
