//! Bot configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// All runtime configuration, built once at startup and passed into components.
/// Secrets come only from the environment (or `.env` via dotenvy), never from code.
#[derive(Debug)]
pub struct BotConfig {
    pub bot_token: String,
    pub gemini_api_key: String,
    /// Override for the Gemini API base URL (proxies, mock servers). None = library default.
    pub gemini_base_url: Option<String>,
    pub gemini_model: String,
    /// Override for the TTS endpoint base URL. None = library default.
    pub tts_base_url: Option<String>,
    /// Language code passed to speech synthesis.
    pub tts_lang: String,
    /// Timeout applied to every external HTTP call (Telegram, Gemini, TTS).
    pub request_timeout_secs: u64,
    /// Scratch directory for per-request CSV and audio files.
    pub work_dir: String,
    pub log_file: String,
    /// Optional Telegram Bot API base URL; points the bot at a mock server in tests.
    /// Env: `TELEGRAM_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads configuration from the environment.
    /// If `token` is given it overrides `BOT_TOKEN`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let gemini_api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        let gemini_base_url = env::var("GEMINI_BASE_URL").ok();
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash-002".to_string());
        let tts_base_url = env::var("TTS_BASE_URL").ok();
        let tts_lang = env::var("TTS_LANG").unwrap_or_else(|_| "en".to_string());
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let work_dir = env::var("WORK_DIR")
            .unwrap_or_else(|_| env::temp_dir().join("datacast").display().to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/datacast-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();

        Ok(Self {
            bot_token,
            gemini_api_key,
            gemini_base_url,
            gemini_model,
            tts_base_url,
            tts_lang,
            request_timeout_secs,
            work_dir,
            log_file,
            telegram_api_url,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
