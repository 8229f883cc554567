//! Teloxide → core type conversion.

use datacast_core::{Chat, Document, Message, ToCoreMessage, ToCoreUser, User};

/// Converts a Telegram user to the core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Converts a Telegram message (text or document) to the core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let document = self.0.document().map(document_to_core);
        let message_type = if document.is_some() { "document" } else { "text" };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            document,
            message_type: message_type.to_string(),
        }
    }
}

/// Maps a Telegram document attachment to the core [`Document`].
fn document_to_core(doc: &teloxide::types::Document) -> Document {
    Document {
        file_id: doc.file.id.0.clone(),
        file_name: doc.file_name.clone(),
        mime_type: doc.mime_type.as_ref().map(|m| m.to_string()),
        size: doc.file.size,
    }
}
