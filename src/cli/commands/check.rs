use anyhow::{Context, Result};

use super::super::{args::CheckCommand, context::RunContext, exit_status::ExitStatus};
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::core::pipeline::evaluate;

/// Report which tracked files the change set touches.
///
/// Exits with [`ExitStatus::Failure`] when at least one tracked file changed.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;

    let (tracked_count, affected) = evaluate(&ctx.registry_text, &ctx.changed)
        .with_context(|| format!("Invalid registry: {}", ctx.registry_path.display()))?;

    let exit_status = if affected.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    };

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            registry_path: ctx.registry_path,
            tracked_count,
            changed_count: ctx.changed.len(),
            affected,
        }),
        exit_status,
    })
}
