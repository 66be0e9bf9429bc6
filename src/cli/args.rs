//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for ofstedready
#[derive(Parser, Debug)]
#[command(
    name = "ofstedready",
    version,
    about = "Draft statutory school website content with Google Gemini"
)]
pub struct Cli {
    /// Configuration file path; skips the workspace lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root searched for ofstedready.toml; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Gemini model ID, overriding the configured one
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a document for one content type
    Generate(GenerateArgs),

    /// Print the prompt that would be sent, without calling the API
    Prompt(RequestArgs),

    /// List the content types in the catalog
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a sample ofstedready.toml into the workspace
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration with the API key masked
    Config,
}

/// What to generate
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Content type id, e.g. safeguarding or pupil_premium
    pub content_type: String,

    /// Output format (detailed, bullet_points, structured)
    #[arg(long, default_value = "detailed")]
    pub format: String,

    /// Detail level (basic, standard, comprehensive)
    #[arg(long, default_value = "standard")]
    pub detail: String,

    /// Extra information about the school to include in the prompt
    #[arg(long)]
    pub context: Option<String>,

    /// Accept unknown content types and use the curriculum template for them
    #[arg(long)]
    pub allow_fallback: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Write the generated text to this file
    #[arg(short, long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the generated text to a dated file in the workspace
    #[arg(long)]
    pub save: bool,

    /// Emit a JSON record instead of plain text
    #[arg(long)]
    pub json: bool,

    /// User id the rate limit is tracked against
    #[arg(long, default_value = "local")]
    pub user: String,
}
