//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "quill",
    version,
    about = "Terminal AI writing assistant with a searchable local prompt history"
)]
pub struct Args {
    /// Path to a quill.toml configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Model identifier (overrides file and environment configuration)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Directory holding history.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        let args = Args::try_parse_from(["quill"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.model.is_none());
        assert!(args.data_dir.is_none());
    }

    #[test]
    fn test_overrides_parse() {
        let args = Args::try_parse_from([
            "quill",
            "--config",
            "quill.toml",
            "--model",
            "openai/gpt-4o-mini",
            "--data-dir",
            "/tmp/quill",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("quill.toml")));
        assert_eq!(args.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/quill")));
    }
}
