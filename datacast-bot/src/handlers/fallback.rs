//! Catch-all handler for anything the earlier handlers did not settle.

use async_trait::async_trait;
use datacast_core::{Handler, HandlerResponse, Message, Result};

pub const FALLBACK_TEXT: &str =
    "Please send a CSV file to analyze, or use /help to see available commands.";

/// Replies with usage guidance to any remaining message.
pub struct FallbackHandler;

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(FALLBACK_TEXT.to_string()))
    }
}
