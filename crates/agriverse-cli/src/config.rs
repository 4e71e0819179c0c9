// crates/agriverse-cli/src/config.rs
//
// CLI configuration. Loaded from a TOML file or populated with defaults;
// command-line flags override file values.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use agriverse_carbon::RenewablePolicy;

use crate::output::OutputFormat;

/// Default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "~/.agriverse/config.toml";

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CliConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format when `--output` is not given: "table" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Treatment of renewable shares above 100%: "clamp" or "strict".
    /// `agriverse carbon --strict` forces "strict" for one run.
    #[serde(default)]
    pub renewable_policy: RenewablePolicy,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputFormat::default(),
            renewable_policy: RenewablePolicy::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
