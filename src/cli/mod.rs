//! CLI interface for commit-tidy

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod message;
pub mod staged;

/// commit-tidy: conventional commit messages from model output
#[derive(Parser)]
#[command(name = "commit-tidy")]
#[command(
    about = "Normalizes language-model output into conventional commit messages",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Commit-message operations
    Message(message::MessageCommand),
    /// Staged-change operations
    Staged(staged::StagedCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Message(message_cmd) => message_cmd.execute(),
            Commands::Staged(staged_cmd) => staged_cmd.execute(),
        }
    }
}
