//! Bot assembly and the long-poll runner.

use crate::adapters::TelegramMessageWrapper;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, DocumentHandler, FallbackHandler};
use crate::pipeline::PodcastPipeline;
use anyhow::{Context, Result};
use datacast_core::{init_tracing, Bot, HandlerChain, TelegramBot, ToCoreMessage};
use llm_client::{GeminiClient, LlmClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, instrument};
use tts_client::{GoogleTtsClient, SpeechSynthesizer};

/// Builds the handler chain: commands → document pipeline → fallback.
pub fn build_handler_chain(bot: Arc<dyn Bot>, pipeline: Arc<PodcastPipeline>) -> HandlerChain {
    HandlerChain::new(bot)
        .add_handler(Arc::new(CommandHandler))
        .add_handler(Arc::new(DocumentHandler::new(pipeline)))
        .add_handler(Arc::new(FallbackHandler))
}

/// Builds the transport and both hosted-API clients from config.
pub fn build_components(config: &BotConfig) -> Result<(Arc<TelegramBot>, Arc<PodcastPipeline>)> {
    let timeout = config.request_timeout();

    let telegram = Arc::new(TelegramBot::new(
        config.bot_token.clone(),
        config.telegram_api_url.clone(),
        timeout,
    )?);

    let mut llm =
        GeminiClient::new(config.gemini_api_key.clone(), timeout)?.with_model(config.gemini_model.clone());
    if let Some(url) = &config.gemini_base_url {
        llm = llm.with_base_url(url.clone());
    }

    let mut tts = GoogleTtsClient::new(timeout)?;
    if let Some(url) = &config.tts_base_url {
        tts = tts.with_base_url(url.clone());
    }

    let work_dir = PathBuf::from(&config.work_dir);
    std::fs::create_dir_all(&work_dir)
        .with_context(|| format!("Failed to create work dir {}", work_dir.display()))?;

    let pipeline = Arc::new(PodcastPipeline::new(
        telegram.clone() as Arc<dyn Bot>,
        Arc::new(llm) as Arc<dyn LlmClient>,
        Arc::new(tts) as Arc<dyn SpeechSynthesizer>,
        config.tts_lang.clone(),
        work_dir,
    ));

    Ok((telegram, pipeline))
}

/// Main entry: init logging, build components and chain, then run the poller.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create log directory")?;
        }
    }
    init_tracing(&config.log_file)?;

    info!(
        model = %config.gemini_model,
        tts_lang = %config.tts_lang,
        work_dir = %config.work_dir,
        "Initializing bot"
    );

    let (telegram, pipeline) = build_components(&config)?;
    let chain = build_handler_chain(telegram.clone(), pipeline);

    info!("Bot started successfully");
    run_repl(telegram.inner(), chain).await
}

/// Long-poll REPL: converts each teloxide message to a core message and hands
/// it to the chain in its own task so a slow pipeline never blocks polling.
pub async fn run_repl(bot: teloxide::Bot, chain: HandlerChain) -> Result<()> {
    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_type = %core_msg.message_type,
                    "Received message"
                );

                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
