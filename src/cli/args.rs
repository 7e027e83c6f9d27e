//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report tracked files touched by the change set (no network access)
//! - `render`: Print the status comment body for the change set
//! - `sync`: Create or update the status comment on a GitHub pull request
//! - `init`: Initialize extrack configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands that read the registry.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Registry file mapping tracked paths to external URIs (overrides config file)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Changed files of the pull request, joined by the delimiter
    #[arg(long, env = "GIT_DIFF_SERIALIZED", default_value = "")]
    pub changed: String,

    /// Delimiter between changed files (overrides config file)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Overrides for the status comment identity.
#[derive(Debug, Clone, Args)]
pub struct CommentArgs {
    /// Comment header used to find and render the status comment (overrides config file)
    #[arg(long)]
    pub header: Option<String>,

    /// Label attached when tracked files are affected (overrides config file)
    #[arg(long)]
    pub label: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub comment: CommentArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub comment: CommentArgs,

    /// Pull request number
    #[arg(long, env = "PR_NUMBER")]
    pub pr: u64,

    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// GitHub token used for the API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Login of the account that owns the status comment (overrides config file)
    #[arg(long)]
    pub bot_login: Option<String>,

    /// Read existing comments and print the planned action without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report tracked files changed by the pull request
    Check(CheckCommand),
    /// Print the status comment body for the changed files
    Render(RenderCommand),
    /// Create or update the status comment on a GitHub pull request
    Sync(SyncCommand),
    /// Initialize a new .extrackrc.json configuration file
    Init,
}
