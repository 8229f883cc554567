//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and a Gemini implementation. Transport-agnostic;
//! the bot's pipeline depends on the trait so tests can substitute stub clients.

use anyhow::Result;
use async_trait::async_trait;

mod gemini;

pub use gemini::GeminiClient;

/// Generative-text client interface: one prompt string in, one reply string out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Masks an API key for safe logging: first 4 chars + "***" + last 4 chars.
/// Short keys return "***" so no part of the secret leaks.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 8 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..4], &token[len - 4..])
    }
}
