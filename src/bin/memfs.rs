//! Memfs CLI Binary
//!
//! Interactive shell over the in-memory filesystem.

use anyhow::Context;
use clap::Parser;
use memfs::config::{ConfigLoader, ShellConfig};
use memfs::logging;
use memfs::shell::Shell;
use std::path::PathBuf;

/// Memfs - in-memory hierarchical filesystem shell
#[derive(Parser)]
#[command(name = "memfs")]
#[command(about = "In-memory hierarchical filesystem with a shell-style command interpreter")]
struct Cli {
    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run commands from a script file instead of the interactive prompt
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ConfigLoader::load().context("failed to load configuration")?,
    };
    apply_cli_overrides(&mut config, &cli);

    logging::init_logging(Some(&config.logging)).context("failed to initialize logging")?;

    let mut shell = Shell::new(&config);
    match &cli.script {
        Some(path) => shell
            .run_script(path)
            .with_context(|| format!("failed to run script {}", path.display()))?,
        None => shell.run_interactive().context("interactive session failed")?,
    }
    Ok(())
}

fn apply_cli_overrides(config: &mut ShellConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
}
