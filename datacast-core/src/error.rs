//! Error types for the bot core.
//!
//! [`DatacastError`] is the closed taxonomy every pipeline failure maps into.
//! The user-facing reply is chosen per variant via [`DatacastError::user_message`];
//! internal detail (paths, API error bodies) stays in the logs.

use thiserror::Error;

/// Top-level error for datacast (validation, dataset, upstream API, transport, IO).
#[derive(Error, Debug)]
pub enum DatacastError {
    /// The user sent something we refuse up front (e.g. a non-CSV attachment).
    /// The payload is the reply text shown to the user.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The CSV could not be read, parsed, or summarized.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A hosted API call failed (generative text or speech synthesis).
    #[error("Upstream error in {stage}: {message}")]
    Upstream {
        stage: &'static str,
        message: String,
    },

    /// Telegram transport failure (send, download).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatacastError {
    /// Wraps an upstream API failure with the pipeline stage it happened in.
    pub fn upstream(stage: &'static str, err: impl std::fmt::Display) -> Self {
        DatacastError::Upstream {
            stage,
            message: err.to_string(),
        }
    }

    /// Reply text for the user. Never contains internal detail.
    pub fn user_message(&self) -> String {
        match self {
            DatacastError::Validation(text) => text.clone(),
            DatacastError::Dataset(_) => {
                "Sorry, I couldn't read that CSV file. Please check the file and try again."
                    .to_string()
            }
            DatacastError::Upstream { .. } => {
                "Sorry, the analysis service is unavailable right now. Please try again later."
                    .to_string()
            }
            DatacastError::Bot(_) | DatacastError::Io(_) => {
                "Sorry, something went wrong while processing your file. Please try again."
                    .to_string()
            }
        }
    }
}

/// Result type for core operations; uses [`DatacastError`].
pub type Result<T> = std::result::Result<T, DatacastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = DatacastError::Validation("Please send a CSV file only.".to_string());
        assert_eq!(err.user_message(), "Please send a CSV file only.");
    }

    #[test]
    fn test_upstream_message_does_not_leak_detail() {
        let err = DatacastError::upstream("eda", "401 Unauthorized: key=sk-secret");
        let msg = err.user_message();
        assert!(!msg.contains("sk-secret"));
        assert!(!msg.contains("401"));
    }

    #[test]
    fn test_upstream_display_keeps_stage() {
        let err = DatacastError::upstream("script", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Upstream error in script: quota exceeded"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DatacastError = io.into();
        assert!(matches!(err, DatacastError::Io(_)));
    }
}
