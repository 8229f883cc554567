//! Core types: user, chat, document, message, handler response, and Handler trait.

use async_trait::async_trait;

/// User identity (id, username, names).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// An attached document as the transport reports it.
#[derive(Debug, Clone)]
pub struct Document {
    /// Transport file id used to download the content.
    pub file_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub size: u32,
}

impl Document {
    /// True if the file name ends in `.csv` (case-insensitive).
    pub fn is_csv(&self) -> bool {
        self.file_name
            .as_deref()
            .map(|name| name.to_ascii_lowercase().ends_with(".csv"))
            .unwrap_or(false)
    }
}

/// A single incoming message with user, chat, text content, and optional attachment.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub document: Option<Document>,
    /// "text" or "document"; used for dispatch logging.
    pub message_type: String,
}

/// Handler result for the chain. `Reply(text)` is sent to the chat by the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to the next handler.
    Continue,
    /// Stop the chain; the handler already produced any output itself.
    Stop,
    /// Stop the chain and reply with the given text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One handler in the chain. Default: pass the message along.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Return Stop or Reply to end the chain. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
}
