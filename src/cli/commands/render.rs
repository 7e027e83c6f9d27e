use anyhow::{Context, Result};

use super::super::{args::RenderCommand, context::RunContext};
use super::{CommandResult, CommandSummary, RenderSummary};
use crate::core::{pipeline::evaluate, render};

pub fn render_comment(cmd: RenderCommand) -> Result<CommandResult> {
    let ctx = RunContext::new(&cmd.common)?;
    let settings = ctx.comment_settings(&cmd.comment, None)?;

    let (_, affected) = evaluate(&ctx.registry_text, &ctx.changed)
        .with_context(|| format!("Invalid registry: {}", ctx.registry_path.display()))?;

    Ok(CommandResult::success(CommandSummary::Render(
        RenderSummary {
            body: render(&settings.header, &affected),
        },
    )))
}
