//! Bot abstraction for replying, sending audio, and downloading attachments.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.

use crate::error::{DatacastError, Result};
use crate::types::{Chat, Document, Message};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use teloxide::net::Download;
use teloxide::payloads::SendAudioSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, InputFile};

/// Abstraction over the chat transport. Implementations map to Telegram; tests use doubles.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text reply into the message's chat.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends an audio file with a caption to the given chat.
    async fn send_audio(&self, chat: &Chat, audio: &Path, caption: &str) -> Result<()>;
    /// Downloads the attached document and returns its raw bytes.
    async fn download_document(&self, document: &Document) -> Result<Vec<u8>>;
}

/// Teloxide-based implementation of [`Bot`].
///
/// The underlying reqwest client carries an explicit request timeout so a hung
/// Telegram call cannot stall a pipeline indefinitely.
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Creates a bot from a token, optional API base URL override (used by tests
    /// to point at a mock server), and a per-request timeout.
    pub fn new(token: String, api_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatacastError::Bot(format!("Failed to build HTTP client: {}", e)))?;

        let mut bot = teloxide::Bot::with_client(token, client);
        if let Some(url) = api_url {
            let url = reqwest::Url::parse(&url)
                .map_err(|e| DatacastError::Bot(format!("Invalid TELEGRAM_API_URL: {}", e)))?;
            bot = bot.set_api_url(url);
        }
        Ok(Self { bot })
    }

    /// The inner teloxide bot, for the polling runner.
    pub fn inner(&self) -> teloxide::Bot {
        self.bot.clone()
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), text)
            .await
            .map_err(|e| DatacastError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_audio(&self, chat: &Chat, audio: &Path, caption: &str) -> Result<()> {
        self.bot
            .send_audio(ChatId(chat.id), InputFile::file(audio.to_path_buf()))
            .caption(caption.to_string())
            .await
            .map_err(|e| DatacastError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_document(&self, document: &Document) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(document.file_id.clone()))
            .await
            .map_err(|e| DatacastError::Bot(e.to_string()))?;

        let mut buf = Vec::with_capacity(document.size as usize);
        self.bot
            .download_file(&file.path, &mut buf)
            .await
            .map_err(|e| DatacastError::Bot(e.to_string()))?;
        Ok(buf)
    }
}
