//! Quill - terminal AI writing assistant
//!
//! Submits prompts to an OpenAI-compatible chat-completions endpoint and
//! keeps a searchable history of prompt/response pairs persisted on disk.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod conversation;
mod core;
mod providers;
mod repl;

use crate::cli::Args;
use crate::config::{Config, FileConfig};
use crate::core::{HistoryStore, Session};
use crate::providers::{OpenAICompatConfig, OpenAICompatProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let file = match &args.config {
        Some(path) => Some(FileConfig::from_file(path)?),
        None => {
            let default = Path::new("quill.toml");
            if default.exists() {
                Some(FileConfig::from_file(default)?)
            } else {
                None
            }
        }
    };

    let mut config = Config::resolve(file);
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    if config.api_key.is_none() {
        tracing::warn!("no API key configured; set QUILL_API_KEY or OPENROUTER_API_KEY");
    }

    let store = HistoryStore::new(&config.data_dir)?;
    let history = store.load().await?;
    tracing::info!(
        records = history.len(),
        path = %store.path().display(),
        "history loaded"
    );

    let provider = OpenAICompatProvider::new(OpenAICompatConfig {
        base_url: config.base_url.clone(),
        api_key: config.api_key.as_ref().map(|k| k.expose().to_string()),
        model: config.model.clone(),
        ..OpenAICompatConfig::default()
    });

    let mut session = Session::new(provider, store, history, config.system_prompt.clone());

    repl::run(&mut session).await
}
