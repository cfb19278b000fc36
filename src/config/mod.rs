//! Application configuration
//!
//! Resolution order, lowest to highest precedence: builtin defaults, the
//! optional `quill.toml` file, environment variables. CLI flags are applied
//! on top by `main`.

pub mod file;
pub mod prompts;

use std::env;
use std::fmt;
use std::path::PathBuf;

pub use file::{ConfigError, FileConfig};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// API credential. Deliberately opaque: no `Serialize`, and `Debug` redacts,
/// so the key cannot end up in logs or persisted state.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for building the Authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([redacted])")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the effective configuration from an optional file layer plus
    /// the environment.
    pub fn resolve(file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();

        let api_key = env::var("QUILL_API_KEY")
            .or_else(|_| env::var("OPENROUTER_API_KEY"))
            .ok()
            .map(ApiKey::new);

        Self {
            api_key,
            base_url: env::var("QUILL_BASE_URL")
                .ok()
                .or(file.llm.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            model: env::var("QUILL_MODEL")
                .ok()
                .or(file.llm.model)
                .unwrap_or_else(|| DEFAULT_MODEL.into()),
            system_prompt: env::var("QUILL_SYSTEM_PROMPT")
                .ok()
                .or(file.prompt.system)
                .unwrap_or_else(|| prompts::WRITING_ASSISTANT.into()),
            data_dir: env::var("QUILL_DATA_DIR")
                .ok()
                .map(PathBuf::from)
                .or(file.storage.data_dir)
                .unwrap_or_else(|| PathBuf::from("./data")),
        }
    }
}
