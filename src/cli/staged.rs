//! Staged-change CLI commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::git::{GitRepository, StagedSummary};

/// Staged-change operations.
#[derive(Parser)]
pub struct StagedCommand {
    /// Staged subcommand to execute.
    #[command(subcommand)]
    pub command: StagedSubcommands,
}

/// Staged subcommands.
#[derive(Subcommand)]
pub enum StagedSubcommands {
    /// Prints the staged-change summary as YAML.
    View(ViewCommand),
}

impl StagedCommand {
    /// Executes the staged command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            StagedSubcommands::View(view_cmd) => view_cmd.execute(),
        }
    }
}

/// View command options.
#[derive(Parser)]
pub struct ViewCommand {}

impl ViewCommand {
    /// Executes the view command.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;
        let summary = StagedSummary::from_repository(&repo)?;

        let yaml =
            serde_yaml::to_string(&summary).context("Failed to serialize staged summary")?;
        print!("{yaml}");
        Ok(())
    }
}
