//! Commit-message CLI commands.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::git::{GitRepository, StagedSummary};
use crate::message::{MessageNormalizer, VerbosityLevel};
use crate::utils::Settings;

/// Commit-message operations.
#[derive(Parser)]
pub struct MessageCommand {
    /// Message subcommand to execute.
    #[command(subcommand)]
    pub command: MessageSubcommands,
}

/// Message subcommands.
#[derive(Subcommand)]
pub enum MessageSubcommands {
    /// Normalizes a model response into a conventional commit message.
    Normalize(NormalizeCommand),
}

impl MessageCommand {
    /// Executes the message command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            MessageSubcommands::Normalize(normalize_cmd) => normalize_cmd.execute(),
        }
    }
}

/// Normalize command options.
#[derive(Parser)]
pub struct NormalizeCommand {
    /// Ticket identifier prefixed to the subject (e.g. PROJ-123).
    /// Falls back to COMMIT_TIDY_TICKET when omitted.
    #[arg(value_name = "TICKET")]
    pub ticket: Option<String>,

    /// Increases body verbosity (-v: 1-3 bullets, -vv: 3-5 bullets).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reads the model response from a file instead of standard input.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Reads a `git diff --cached --name-status` listing from a file
    /// instead of querying the repository.
    #[arg(long, value_name = "FILE")]
    pub name_status: Option<PathBuf>,

    /// Supplies a `git diff --cached --shortstat` line instead of querying
    /// the repository.
    #[arg(long, value_name = "TEXT")]
    pub shortstat: Option<String>,
}

impl NormalizeCommand {
    /// Executes the normalize command: the finalized message goes to stdout,
    /// diagnostics to stderr.
    pub fn execute(self) -> Result<()> {
        let raw = self.read_response()?;
        let level = VerbosityLevel::from_flag_count(self.verbose);
        let ticket = self.resolve_ticket()?;
        let staged = self.staged_summary()?;

        let normalizer = MessageNormalizer::new(level, ticket.as_deref(), &staged);
        let message = normalizer
            .normalize(&raw)
            .context("Failed to normalize model response")?;

        print!("{message}");
        Ok(())
    }

    /// Reads the raw model response from `--input` or standard input.
    fn read_response(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read response file: {}", path.display())),
            None => {
                let mut raw = String::new();
                std::io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read response from standard input")?;
                Ok(raw)
            }
        }
    }

    /// Resolves the ticket from the positional argument, else settings.
    fn resolve_ticket(&self) -> Result<Option<String>> {
        if self.ticket.is_some() {
            return Ok(self.ticket.clone());
        }

        let settings = Settings::load().context("Failed to load settings")?;
        Ok(settings.get_env_var("COMMIT_TIDY_TICKET"))
    }

    /// Builds the fallback context. Explicit listings win; otherwise the
    /// repository index is summarized, and with no repository at all the
    /// summary is empty and synthesis falls back to its literal bullet.
    fn staged_summary(&self) -> Result<StagedSummary> {
        if self.name_status.is_some() || self.shortstat.is_some() {
            let name_status = match &self.name_status {
                Some(path) => std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read name-status file: {}", path.display())
                })?,
                None => String::new(),
            };
            let shortstat = self.shortstat.as_deref().unwrap_or("");
            return Ok(StagedSummary::from_parts(&name_status, shortstat));
        }

        match GitRepository::open() {
            Ok(repo) => StagedSummary::from_repository(&repo),
            Err(e) => {
                debug!(error = %e, "no repository available, using empty staged summary");
                Ok(StagedSummary::default())
            }
        }
    }
}
