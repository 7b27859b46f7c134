//! CLI argument parsing for prompter.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use prompter::config::OutputFormat;
use std::path::PathBuf;

/// Prompter: render image-generation payloads from YAML files and wildcards.
///
/// Payloads are YAML files in a payloads directory. `__name__` tokens in a
/// payload's prompt are replaced by a random line from `name.txt` in the
/// wildcards directory.
#[derive(Parser, Debug)]
#[command(name = "prompter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./prompter.yaml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prompter.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render payloads and print them.
    ///
    /// Loads every payload, fills defaults, resolves wildcards in each
    /// prompt, and prints the result as JSON or YAML.
    Render(RenderArgs),

    /// List discovered payloads.
    List(SourceArgs),

    /// List indexed wildcards and their entry counts.
    Wildcards(WildcardsArgs),

    /// Print sampled lines for one wildcard.
    ///
    /// Unknown names print themselves, matching prompt rendering.
    Sample(SampleArgs),

    /// Validate every payload file without rendering.
    ///
    /// Reports each file as OK or with its error; exits non-zero if any fail.
    Check(SourceArgs),
}

/// Locations of the payloads and wildcards directories.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Payloads directory (overrides config).
    #[arg(short, long)]
    pub payloads_dir: Option<PathBuf>,

    /// Wildcards directory (overrides config).
    #[arg(short, long)]
    pub wildcards_dir: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only render these payloads (by file base name).
    #[arg(short, long, value_delimiter = ',')]
    pub name: Vec<String>,

    /// Seed for wildcard sampling (overrides config).
    #[arg(long)]
    pub seed: Option<u64>,

    /// batch_size for payloads that omit it (overrides config).
    #[arg(long)]
    pub batch_size: Option<u32>,

    /// Output format: json or yaml (overrides config).
    #[arg(short, long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `wildcards` command.
#[derive(Args, Debug)]
pub struct WildcardsArgs {
    /// Wildcards directory (overrides config).
    #[arg(short, long)]
    pub wildcards_dir: Option<PathBuf>,
}

/// Arguments for the `sample` command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Wildcard name, without underscores or extension.
    pub name: String,

    /// Wildcards directory (overrides config).
    #[arg(short, long)]
    pub wildcards_dir: Option<PathBuf>,

    /// Number of samples to print.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for sampling (overrides config).
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).ok_or_else(|| format!("unknown format '{}' (expected json or yaml)", s))
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
