//! Message handlers, registered in order: commands, document pipeline, fallback.

pub mod commands;
pub mod document;
pub mod fallback;

pub use commands::CommandHandler;
pub use document::DocumentHandler;
pub use fallback::FallbackHandler;
