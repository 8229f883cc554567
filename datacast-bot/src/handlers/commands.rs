//! /start and /help command handler.

use async_trait::async_trait;
use datacast_core::{Handler, HandlerResponse, Message, Result};
use tracing::info;

pub const WELCOME_TEXT: &str = "Welcome to the Data Analysis Podcast Bot! 📊🎙\n\
Send me a CSV file, and I'll analyze it and create a podcast for you.";

pub const HELP_TEXT: &str = "Available commands:\n\
/start - Start the bot\n\
/help - Show this help message\n\
To analyze data:\n\
1. Send a CSV file\n\
2. Wait for the analysis\n\
3. Receive your audio podcast!";

/// Replies to /start and /help; passes everything else along.
pub struct CommandHandler;

impl CommandHandler {
    /// First word of the message with any `@botname` suffix stripped.
    fn command_of(content: &str) -> Option<&str> {
        let first = content.trim().split_whitespace().next()?;
        first.split('@').next()
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Self::command_of(&message.content) {
            Some("/start") => {
                info!(user_id = message.user.id, "step: /start command");
                Ok(HandlerResponse::Reply(WELCOME_TEXT.to_string()))
            }
            Some("/help") => {
                info!(user_id = message.user.id, "step: /help command");
                Ok(HandlerResponse::Reply(HELP_TEXT.to_string()))
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacast_core::{Chat, User};

    fn message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 2,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            document: None,
            message_type: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_start_command_replies_welcome() {
        let response = CommandHandler.handle(&message("/start")).await.unwrap();
        assert_eq!(response, HandlerResponse::Reply(WELCOME_TEXT.to_string()));
    }

    #[tokio::test]
    async fn test_help_command_replies_help() {
        let response = CommandHandler.handle(&message("/help")).await.unwrap();
        assert_eq!(response, HandlerResponse::Reply(HELP_TEXT.to_string()));
    }

    #[tokio::test]
    async fn test_command_with_bot_mention_suffix() {
        let response = CommandHandler
            .handle(&message("/help@datacast_bot"))
            .await
            .unwrap();
        assert_eq!(response, HandlerResponse::Reply(HELP_TEXT.to_string()));
    }

    #[tokio::test]
    async fn test_other_text_continues() {
        let response = CommandHandler.handle(&message("hello")).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
    }

    #[tokio::test]
    async fn test_unknown_command_continues() {
        let response = CommandHandler.handle(&message("/stats")).await.unwrap();
        assert_eq!(response, HandlerResponse::Continue);
    }
}
