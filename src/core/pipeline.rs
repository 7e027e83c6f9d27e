//! One tracker run against a pull request.
//!
//! The registry is parsed before any platform call so that a malformed
//! registry never produces a comment. Platform calls are made one at a time:
//! list, then at most one create or update, then the labels.

use super::{
    decision::{CommentAction, CommentState, Plan, plan},
    error::TrackerResult,
    matcher::{AffectedSet, ChangeSet, intersect},
    registry::parse_registry,
};
use crate::platform::CommentPlatform;

/// Inputs that identify the status comment and the label it carries.
#[derive(Debug, Clone)]
pub struct CommentSettings {
    pub header: String,
    pub label: String,
    pub bot_login: String,
}

/// What a run found and did.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub tracked_count: usize,
    pub affected: AffectedSet,
    pub state: CommentState,
    pub plan: Plan,
    /// False when the plan was computed but not executed (dry run).
    pub executed: bool,
}

/// Parses the registry and intersects it with `changed`. No platform access.
pub fn evaluate(registry_text: &str, changed: &ChangeSet) -> TrackerResult<(usize, AffectedSet)> {
    let registry = parse_registry(registry_text)?;
    let affected = intersect(&registry, changed);
    Ok((registry.len(), affected))
}

/// Runs the full decision against `platform` for pull request `issue`.
pub async fn run<P>(
    platform: &P,
    issue: u64,
    settings: &CommentSettings,
    registry_text: &str,
    changed: &ChangeSet,
    dry_run: bool,
) -> TrackerResult<RunOutcome>
where
    P: CommentPlatform + ?Sized,
{
    let (tracked_count, affected) = evaluate(registry_text, changed)?;

    let comments = platform.list_comments(issue).await?;
    let state = CommentState::from_comments(&comments, &settings.bot_login, &settings.header);
    let plan = plan(&state, &settings.header, &affected, &settings.label);

    if !dry_run {
        execute(platform, issue, &plan).await?;
    }

    Ok(RunOutcome {
        tracked_count,
        affected,
        state,
        plan,
        executed: !dry_run,
    })
}

/// Performs the comment write and label request described by `plan`.
pub async fn execute<P>(platform: &P, issue: u64, plan: &Plan) -> TrackerResult<()>
where
    P: CommentPlatform + ?Sized,
{
    match &plan.action {
        CommentAction::Skip => {}
        CommentAction::Create { body } => platform.create_comment(issue, body).await?,
        CommentAction::Update { comment_id, body } => {
            platform.update_comment(issue, *comment_id, body).await?
        }
    }

    if !plan.labels.is_empty() {
        platform.add_labels(issue, &plan.labels).await?;
    }

    Ok(())
}
