//! Translate TTS implementation of [`SpeechSynthesizer`].
//!
//! The endpoint only accepts short inputs, so the script is split into
//! whitespace-aligned chunks of at most [`MAX_CHUNK_CHARS`] characters; the
//! returned MP3 bodies are concatenated into one playable file.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::SpeechSynthesizer;

pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";

/// Per-request character limit of the endpoint.
const MAX_CHUNK_CHARS: usize = 100;

/// Splits `text` into chunks of at most `max_chars` characters, breaking at
/// whitespace where possible. Words longer than the limit are hard-split.
fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        // Hard-split words that alone exceed the limit.
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            chunks.push(word[..split_at].to_string());
            word = &word[split_at..];
        }
        if word.is_empty() {
            continue;
        }

        let needed = word.chars().count() + if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + needed > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Translate TTS client. No API key; the reqwest client carries an explicit
/// request timeout.
#[derive(Clone)]
pub struct GoogleTtsClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build TTS HTTP client")?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the endpoint base URL (mock servers in tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn fetch_chunk(&self, chunk: &str, lang: &str, idx: usize, total: usize) -> Result<Vec<u8>> {
        let textlen = chunk.len().to_string();
        let idx_param = idx.to_string();
        let total_param = total.to_string();
        let res = self
            .client
            .get(format!("{}/translate_tts", self.base_url))
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", lang),
                ("client", "tw-ob"),
                ("textlen", textlen.as_str()),
                ("idx", idx_param.as_str()),
                ("total", total_param.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to TTS endpoint")?;

        let status = res.status();
        if !status.is_success() {
            bail!("TTS endpoint rejected chunk {} of {} ({})", idx + 1, total, status);
        }

        let bytes = res
            .bytes()
            .await
            .context("Failed to read TTS response body")?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsClient {
    async fn synthesize(&self, text: &str, lang: &str, out_path: &Path) -> Result<()> {
        if text.trim().is_empty() {
            bail!("Cannot synthesize empty text");
        }

        let chunks = chunk_text(text, MAX_CHUNK_CHARS);
        let total = chunks.len();
        info!(chunks = total, lang = %lang, "Synthesizing speech");

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            debug!(idx, chunk_len = chunk.len(), "Fetching TTS chunk");
            let bytes = self.fetch_chunk(chunk, lang, idx, total).await?;
            audio.extend_from_slice(&bytes);
        }

        std::fs::write(out_path, &audio)
            .with_context(|| format!("Failed to write audio file {}", out_path.display()))?;
        info!(bytes = audio.len(), path = %out_path.display(), "Audio file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_text_short_input_is_one_chunk() {
        let chunks = chunk_text("hello world", 100);
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_chunk_text_breaks_at_whitespace() {
        let chunks = chunk_text("aaaa bbbb cccc", 9);
        assert_eq!(
            chunks,
            vec!["aaaa bbbb".to_string(), "cccc".to_string()]
        );
    }

    #[test]
    fn test_chunk_text_hard_splits_long_words() {
        let chunks = chunk_text(&"x".repeat(250), 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 100);
        assert_eq!(chunks[1].len(), 100);
        assert_eq!(chunks[2].len(), 50);
    }

    #[test]
    fn test_chunk_text_never_exceeds_limit() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
        for chunk in chunk_text(&text, 100) {
            assert!(chunk.chars().count() <= 100, "chunk too long: {}", chunk);
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_chunk_text_empty_input() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   ", 100).is_empty());
    }
}
