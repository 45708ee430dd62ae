//! ConfigLoader facade merging defaults, files, and environment.

use super::ShellConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources.
    /// Precedence: global file (lowest) -> working-directory file ->
    /// environment (highest).
    pub fn load() -> Result<ShellConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder
            .add_source(File::with_name("memfs").required(false))
            .add_source(
                Environment::with_prefix("MEMFS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ShellConfig, ConfigError> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("MEMFS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Create default configuration.
    pub fn default() -> ShellConfig {
        ShellConfig::default()
    }

    /// Global config file path: `$XDG_CONFIG_HOME/memfs/config.toml`, falling
    /// back to `~/.config/memfs/config.toml`.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(std::env::var("HOME").ok()?).join(".config"),
        };
        Some(config_home.join("memfs").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.prompt, "command:");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "prompt = \"memfs>\"\n\n[logging]\nlevel = \"debug\"\noutput = \"stderr\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.prompt, "memfs>");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_environment_overrides_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "prompt = \"memfs>\"\n").unwrap();

        std::env::set_var("MEMFS_PROMPT", "env>");
        let result = ConfigLoader::load_from_file(&path);
        std::env::remove_var("MEMFS_PROMPT");

        assert_eq!(result.unwrap().prompt, "env>");
    }
}
