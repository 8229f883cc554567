//! # datacast-core
//!
//! Core types and traits for the data-podcast Telegram bot: [`Bot`], [`Handler`],
//! [`HandlerChain`], message and attachment types, the error taxonomy, and tracing
//! initialization. Transport specifics stay behind the [`Bot`] trait and the
//! `ToCore*` conversion traits; the bot crate plugs in teloxide.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use chain::HandlerChain;
pub use error::{DatacastError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Document, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
