//! CLI argument definitions.
//!
//! All Clap derive structs for thumbsketch command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::api::DEFAULT_API_BASE;
use crate::logging::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Ink-sketch thumbnail generator for blog posts.
#[derive(Parser, Debug)]
#[command(name = "thumbsketch", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "THUMBSKETCH_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a thumbnail for a blog post and record it in the front matter.
    Generate(GenerateArgs),

    /// List the built-in location presets.
    Locations(LocationsArgs),
}

// ============================================================================
// Generate Command
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the blog post markdown file.
    pub post: PathBuf,

    /// Location for the scene: a preset name or free text (defaults to chicago).
    #[arg(conflicts_with = "reference")]
    pub location: Option<String>,

    /// Redraw a local reference photo instead of generating from a location.
    #[arg(long = "ref", value_name = "IMAGE")]
    pub reference: Option<PathBuf>,

    /// OpenAI API key.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the images API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

// ============================================================================
// Locations Command
// ============================================================================

/// Arguments for `locations`.
#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
