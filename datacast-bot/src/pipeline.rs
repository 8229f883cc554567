//! Per-message pipeline: download CSV → summary stats → three generation
//! stages → speech synthesis → audio reply.
//!
//! Straight-line and stateless: any stage's failure aborts the rest and maps
//! into the error taxonomy. Scratch files (temp CSV, audio) live in guards
//! that delete them on drop, so cleanup happens on success and failure alike.

use datacast_core::{Bot, DatacastError, Document, Message, Result};
use llm_client::LlmClient;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tts_client::SpeechSynthesizer;

// --- User-facing texts (progress and final caption) ---
pub const MSG_RECEIVING: &str = "Receiving your CSV file... 📥";
pub const MSG_ANALYZING: &str = "Analyzing your data... 🔍";
pub const MSG_EDA: &str = "Generating EDA results... 📊";
pub const MSG_INSIGHTS: &str = "Generating insights... 💡";
pub const MSG_SCRIPT: &str = "Creating podcast script... ✍";
pub const MSG_AUDIO: &str = "Generating audio... 🎙";
pub const CAPTION_PODCAST: &str = "Here's your data analysis podcast! 🎧";

/// A scratch file removed when the guard drops, on every exit path.
struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file");
            }
        }
    }
}

fn eda_prompt(summary: &str) -> String {
    format!("Perform exploratory data analysis on this dataset: {summary}")
}

fn insights_prompt(eda: &str) -> String {
    format!("Generate insights based on this EDA: {eda}")
}

fn script_prompt(insights: &str) -> String {
    format!(
        "Create a natural conversation between Alex and Sarah discussing these data insights.\n\
         Make it sound casual and engaging.\n\
         Insights: {insights}"
    )
}

/// The per-message orchestrator. Holds the transport and the two hosted-API
/// clients behind their traits so tests can substitute doubles.
pub struct PodcastPipeline {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
    tts: Arc<dyn SpeechSynthesizer>,
    tts_lang: String,
    work_dir: PathBuf,
}

impl PodcastPipeline {
    pub fn new(
        bot: Arc<dyn Bot>,
        llm: Arc<dyn LlmClient>,
        tts: Arc<dyn SpeechSynthesizer>,
        tts_lang: String,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            bot,
            llm,
            tts,
            tts_lang,
            work_dir,
        }
    }

    /// Runs the whole pipeline for one uploaded document and sends the result.
    #[instrument(skip(self, message, document), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn process(&self, message: &Message, document: &Document) -> Result<()> {
        self.bot.reply_to(message, MSG_RECEIVING).await?;
        info!(
            file_name = ?document.file_name,
            size = document.size,
            "step: downloading document"
        );
        let bytes = self.bot.download_document(document).await?;
        let csv_path = self.write_temp_csv(&bytes)?;

        self.bot.reply_to(message, MSG_ANALYZING).await?;
        let df = dataset::load_csv_from_file(&csv_path)
            .map_err(|e| DatacastError::Dataset(format!("{:#}", e)))?;
        let summary = dataset::summary_json(&df)
            .map_err(|e| DatacastError::Dataset(format!("{:#}", e)))?;

        self.bot.reply_to(message, MSG_EDA).await?;
        let eda = self.request_stage("analysis", &eda_prompt(&summary)).await?;

        self.bot.reply_to(message, MSG_INSIGHTS).await?;
        let insights = self
            .request_stage("insights", &insights_prompt(&eda))
            .await?;

        self.bot.reply_to(message, MSG_SCRIPT).await?;
        let script = self
            .request_stage("script", &script_prompt(&insights))
            .await?;

        self.bot.reply_to(message, MSG_AUDIO).await?;
        let audio = ScratchFile::new(self.audio_path(message));
        self.tts
            .synthesize(&script, &self.tts_lang, audio.path())
            .await
            .map_err(|e| DatacastError::upstream("speech", format!("{:#}", e)))?;

        self.bot
            .send_audio(&message.chat, audio.path(), CAPTION_PODCAST)
            .await?;
        info!("step: pipeline finished");
        Ok(())
        // csv_path and audio drop here: scratch files are removed on every path
    }

    fn write_temp_csv(&self, bytes: &[u8]) -> Result<tempfile::TempPath> {
        let mut file = tempfile::Builder::new()
            .prefix("dataset-")
            .suffix(".csv")
            .tempfile_in(&self.work_dir)?;
        file.write_all(bytes)?;
        Ok(file.into_temp_path())
    }

    /// Audio output path, unique per chat/message so concurrent runs never collide.
    fn audio_path(&self, message: &Message) -> PathBuf {
        self.work_dir
            .join(format!("podcast-{}-{}.mp3", message.chat.id, message.id))
    }

    async fn request_stage(&self, stage: &'static str, prompt: &str) -> Result<String> {
        info!(stage, prompt_len = prompt.len(), "step: requesting generation");
        let text = self
            .llm
            .generate(prompt)
            .await
            .map_err(|e| DatacastError::upstream(stage, format!("{:#}", e)))?;
        info!(stage, response_len = text.len(), "step: generation done");
        Ok(text)
    }
}
