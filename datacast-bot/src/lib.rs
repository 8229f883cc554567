//! # datacast-bot
//!
//! Telegram bot that turns an uploaded CSV into a spoken data-analysis
//! podcast: summary statistics → three Gemini generation stages (EDA,
//! insights, dialogue script) → speech synthesis → audio reply.
//!
//! The library exposes the config, the pipeline, and the runner so
//! integration tests can assemble the bot with stubbed clients.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use pipeline::PodcastPipeline;
pub use runner::{build_components, build_handler_chain, run_bot};
