use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::SyncCommand, context::RunContext};
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::core::pipeline;
use crate::platform::{GithubClient, RepoRef};

/// Bring the pull request's status comment in line with the change set.
pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let settings = ctx.comment_settings(&cmd.comment, cmd.bot_login.as_deref())?;
    let repo = RepoRef::parse(&cmd.repo)?;

    if ctx.verbose {
        eprintln!(
            "{} syncing {}#{} as {}{}",
            "note:".bold().cyan(),
            repo,
            cmd.pr,
            settings.bot_login,
            if cmd.dry_run { " (dry run)" } else { "" }
        );
    }

    let client = GithubClient::new(&ctx.config.api_base, repo.clone(), cmd.token.as_deref())?;

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(pipeline::run(
            &client,
            cmd.pr,
            &settings,
            &ctx.registry_text,
            &ctx.changed,
            cmd.dry_run,
        ))
        .with_context(|| format!("Failed to sync status comment on {}#{}", repo, cmd.pr))?;

    if ctx.verbose {
        eprintln!(
            "{} existing status comment: {}",
            "note:".bold().cyan(),
            outcome.state
        );
    }

    Ok(CommandResult::success(CommandSummary::Sync(SyncSummary {
        repo: repo.to_string(),
        pr: cmd.pr,
        outcome,
    })))
}
