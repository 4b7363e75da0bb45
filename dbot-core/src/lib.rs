//! # dbot-core
//!
//! Core types and traits for the Telegram bot: [`Bot`], [`Handler`], [`Trigger`], message and user types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod trigger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use trigger::{is_command, Trigger};
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User, OTHER_MESSAGE_TYPE,
    TEXT_MESSAGE_TYPE,
};
