//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - label: interactive labeling session (default)
//! - show: print one random dog
//! - summary: per-label counts from the sink file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Doggo Discriminator - label dog pictures from the terminal
#[derive(Parser, Debug)]
#[command(name = "doggo-discriminator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run a loop asking you to label images of dogs
    Label {
        /// Labeler name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Labeler email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Sink file to write labels to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Truncate the sink file instead of appending
        #[arg(long)]
        overwrite: bool,

        /// Print image URLs instead of ASCII art
        #[arg(long)]
        no_render: bool,
    },

    /// Print a random dog to the console
    Show,

    /// Summarize labels saved in a sink file
    Summary {
        /// Sink file to read
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// The label command with every option left to prompts and config
    pub fn default_label() -> Self {
        Commands::Label {
            name: None,
            email: None,
            output: None,
            overwrite: false,
            no_render: false,
        }
    }
}
