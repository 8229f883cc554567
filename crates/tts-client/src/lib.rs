//! # Speech synthesis abstraction
//!
//! Defines the [`SpeechSynthesizer`] trait and a Translate TTS implementation.
//! The bot's pipeline depends on the trait so tests can substitute stub
//! synthesizers that write fixed files.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

mod google;

pub use google::GoogleTtsClient;

/// Text-to-speech interface: synthesize `text` in `lang` into an audio file at `out_path`.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str, out_path: &Path) -> Result<()>;
}
