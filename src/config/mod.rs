//! Layered configuration: defaults, global file, working-directory file,
//! environment overrides.

mod facade;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

fn default_prompt() -> String {
    "command:".to_string()
}

/// Top-level configuration for the interactive shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt text printed before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            logging: LoggingConfig::default(),
        }
    }
}
