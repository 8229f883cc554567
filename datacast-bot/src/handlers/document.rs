//! Document upload handler: validates the attachment and runs the podcast pipeline.

use crate::pipeline::PodcastPipeline;
use async_trait::async_trait;
use datacast_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info};

pub const MSG_NOT_CSV: &str = "Please send a CSV file only.";
pub const MSG_TOO_LARGE: &str = "Sorry, I can only analyze CSV files up to 20 MB.";

/// Telegram bots cannot download files above 20 MB.
const MAX_FILE_SIZE: u32 = 20 * 1024 * 1024;

/// Runs the pipeline for CSV uploads; rejects everything else up front.
/// Pipeline failures are logged in full and answered with the taxonomy's
/// user message, never the raw error.
pub struct DocumentHandler {
    pipeline: Arc<PodcastPipeline>,
}

impl DocumentHandler {
    pub fn new(pipeline: Arc<PodcastPipeline>) -> Self {
        Self { pipeline }
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let document = match &message.document {
            Some(document) => document,
            None => return Ok(HandlerResponse::Continue),
        };

        if !document.is_csv() {
            info!(
                user_id = message.user.id,
                file_name = ?document.file_name,
                "step: rejected non-CSV attachment"
            );
            return Ok(HandlerResponse::Reply(MSG_NOT_CSV.to_string()));
        }

        if document.size > MAX_FILE_SIZE {
            info!(
                user_id = message.user.id,
                size = document.size,
                "step: rejected oversized attachment"
            );
            return Ok(HandlerResponse::Reply(MSG_TOO_LARGE.to_string()));
        }

        match self.pipeline.process(message, document).await {
            Ok(()) => Ok(HandlerResponse::Stop),
            Err(e) => {
                error!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    error = %e,
                    "Pipeline failed"
                );
                Ok(HandlerResponse::Reply(e.user_message()))
            }
        }
    }
}
