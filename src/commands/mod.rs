//! Command implementations for prompter.
//!
//! This module resolves configuration shared by every command (config file
//! plus CLI overrides) and routes each command to its handler.

mod check;
mod list;
mod render;
mod sample;
mod wildcards;

use crate::cli::{Cli, Command, SourceArgs};
use prompter::config::{Config, DEFAULT_CONFIG_FILE};
use prompter::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Command::Render(args) => render::cmd_render(config, args),
        Command::List(args) => list::cmd_list(with_source(config, args)),
        Command::Wildcards(args) => wildcards::cmd_wildcards(config, args),
        Command::Sample(args) => sample::cmd_sample(config, args),
        Command::Check(args) => check::cmd_check(with_source(config, args)),
    }
}

/// Load the explicit config file, or `prompter.yaml` from the working
/// directory when present, or fall back to defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            log::info!("using config '{}'", path.display());
            Config::load(path)
        }
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            log::info!("using config '{}'", DEFAULT_CONFIG_FILE);
            Config::load(DEFAULT_CONFIG_FILE)
        }
        None => Ok(Config::default()),
    }
}

/// Apply `--payloads-dir` / `--wildcards-dir` overrides.
fn with_source(mut config: Config, source: &SourceArgs) -> Config {
    if let Some(dir) = &source.payloads_dir {
        config.payloads_dir = dir.to_string_lossy().into_owned();
    }
    if let Some(dir) = &source.wildcards_dir {
        config.wildcards_dir = dir.to_string_lossy().into_owned();
    }
    config
}
