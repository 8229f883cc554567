//! Shared test doubles: recording bot, scripted LLM, stub speech synthesizer.
//! All doubles count their calls so tests can assert which pipeline stages ran.
#![allow(dead_code)]

use async_trait::async_trait;
use datacast_core::{Bot, Chat, DatacastError, Document, Message, Result, User};
use llm_client::LlmClient;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tts_client::SpeechSynthesizer;

/// Bot double: records replies and audio sends, serves canned download bytes.
pub struct RecordingBot {
    pub replies: Mutex<Vec<String>>,
    /// (caption, audio bytes read at send time)
    pub audio_sent: Mutex<Vec<(String, Vec<u8>)>>,
    pub download_calls: AtomicUsize,
    download_bytes: Vec<u8>,
}

impl RecordingBot {
    pub fn new(download_bytes: Vec<u8>) -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            audio_sent: Mutex::new(Vec::new()),
            download_calls: AtomicUsize::new(0),
            download_bytes,
        }
    }

    pub fn reply_texts(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn audio_count(&self) -> usize {
        self.audio_sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn reply_to(&self, _message: &Message, text: &str) -> Result<()> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_audio(&self, _chat: &Chat, audio: &Path, caption: &str) -> Result<()> {
        let bytes = std::fs::read(audio)
            .map_err(|e| DatacastError::Bot(format!("audio file unreadable: {}", e)))?;
        self.audio_sent
            .lock()
            .unwrap()
            .push((caption.to_string(), bytes));
        Ok(())
    }

    async fn download_document(&self, _document: &Document) -> Result<Vec<u8>> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.download_bytes.clone())
    }
}

/// LLM double: pops one scripted result per call and records the prompts.
pub struct ScriptedLlm {
    responses: Mutex<VecDeque<std::result::Result<String, String>>>,
    pub prompts: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(responses: Vec<std::result::Result<String, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompt_at(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("unexpected LLM call")),
        }
    }
}

/// Synthesizer double: writes a 1-byte file, or fails when scripted to.
pub struct StubSynthesizer {
    pub calls: AtomicUsize,
    pub inputs: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl StubSynthesizer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SpeechSynthesizer for StubSynthesizer {
    async fn synthesize(&self, text: &str, lang: &str, out_path: &Path) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs
            .lock()
            .unwrap()
            .push((text.to_string(), lang.to_string()));
        if self.fail {
            anyhow::bail!("synthesis rejected");
        }
        std::fs::write(out_path, [0u8])?;
        Ok(())
    }
}

/// A core message carrying a document attachment.
pub fn document_message(file_name: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: User {
            id: 7,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 99,
            chat_type: "private".to_string(),
        },
        content: String::new(),
        document: Some(Document {
            file_id: "file-1".to_string(),
            file_name: Some(file_name.to_string()),
            mime_type: Some("text/csv".to_string()),
            size: 64,
        }),
        message_type: "document".to_string(),
    }
}

/// A plain text core message.
pub fn text_message(content: &str) -> Message {
    Message {
        id: "43".to_string(),
        user: User {
            id: 7,
            username: Some("tester".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 99,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        document: None,
        message_type: "text".to_string(),
    }
}
