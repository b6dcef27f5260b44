//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Backlog - Draft PRDs, strategic narratives and Shape Up pitches with Gemini
#[derive(Parser, Debug)]
#[command(name = "backlog")]
#[command(about = "Draft PRDs, strategic narratives and Shape Up pitches with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key to use ahead of the saved or default key
    #[arg(long, global = true, env = "BACKLOG_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model to use (e.g., gemini-2.5-pro)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Extra configuration file, applied over the standard layers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft a PRD section and print it as JSON
    Prd {
        /// Feature idea (multiple words are joined with spaces)
        #[arg(required = true)]
        topic: Vec<String>,
    },

    /// Draft a strategic narrative in Markdown
    Narrative {
        /// Initiative to write about
        #[arg(required = true)]
        topic: Vec<String>,
    },

    /// Draft a Shape Up pitch in Markdown
    ShapeUp {
        /// Initiative to pitch
        #[arg(required = true)]
        topic: Vec<String>,

        /// Extra context appended to the prompt
        #[arg(long)]
        details: Option<String>,
    },

    /// Manage the saved Gemini API key
    #[command(subcommand)]
    Key(KeyCommands),
}

/// API key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Save an API key for later runs
    Set {
        /// The key value
        value: String,
    },

    /// Remove the saved API key
    Clear,

    /// Show where the API key would come from (never prints the key)
    Status,
}
