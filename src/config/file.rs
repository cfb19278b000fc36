//! Optional configuration file loaded from TOML
//!
//! Every field is optional; anything left unset falls back to the
//! environment and then to the builtin defaults. Example:
//!
//! ```toml
//! [llm]
//! model = "openai/gpt-4o-mini"
//! base_url = "https://openrouter.ai/api/v1"
//!
//! [prompt]
//! system = "You are a terse technical editor."
//!
//! [storage]
//! data_dir = "~/.local/share/quill"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root of the optional `quill.toml` file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub llm: LlmSection,

    #[serde(default)]
    pub prompt: PromptSection,

    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmSection {
    /// Model identifier passed through to the API
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptSection {
    /// System instruction override
    #[serde(default)]
    pub system: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageSection {
    /// Directory holding `history.json`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig = toml::from_str(content)?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
[llm]
model = "openai/gpt-4o-mini"
base_url = "https://openrouter.ai/api/v1"

[prompt]
system = "You are a terse technical editor."

[storage]
data_dir = "/tmp/quill-data"
"#;

    #[test]
    fn test_parse_config() {
        let config = FileConfig::from_str(SAMPLE_CONFIG).unwrap();

        assert_eq!(config.llm.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert_eq!(
            config.llm.base_url.as_deref(),
            Some("https://openrouter.ai/api/v1")
        );
        assert_eq!(
            config.prompt.system.as_deref(),
            Some("You are a terse technical editor.")
        );
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/tmp/quill-data"))
        );
    }

    #[test]
    fn test_empty_config() {
        let config = FileConfig::from_str("").unwrap();
        assert!(config.llm.model.is_none());
        assert!(config.llm.base_url.is_none());
        assert!(config.prompt.system.is_none());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = FileConfig::from_str("[llm]\nmodel = \"mistralai/mistral-small\"\n").unwrap();
        assert_eq!(config.llm.model.as_deref(), Some("mistralai/mistral-small"));
        assert!(config.llm.base_url.is_none());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(FileConfig::from_str("[llm\nmodel = ").is_err());
    }
}
