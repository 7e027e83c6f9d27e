//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow extrack to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, RenderSummary, SyncSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::CommentAction;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, verbose, writer),
        CommandSummary::Render(summary) => print_render(summary, writer),
        CommandSummary::Sync(summary) => print_sync(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "{} {}",
            "Registry:".bold(),
            summary.registry_path.display()
        );
    }

    if summary.affected.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} tracked {} against {} changed {} - no external sources affected",
                summary.tracked_count,
                plural(summary.tracked_count),
                summary.changed_count,
                plural(summary.changed_count)
            )
            .green()
        );
        return;
    }

    for (path, uri) in summary.affected.iter() {
        let _ = writeln!(
            writer,
            "{}: {} is cited externally",
            "warning".bold().yellow(),
            format!("`{}`", path).bold()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue().bold(), uri);
    }
    let _ = writeln!(writer);

    let count = summary.affected.len();
    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} tracked {} changed, please review the external sources",
            count,
            plural(count)
        )
        .red()
        .bold()
    );
}

fn print_render<W: Write>(summary: &RenderSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.body);
}

fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    let outcome = &summary.outcome;
    let target = format!("{}#{}", summary.repo, summary.pr);
    let prefix = if outcome.executed { "" } else { "[dry run] " };

    if verbose {
        for (path, uri) in outcome.affected.iter() {
            let _ = writeln!(writer, "  - `{}`: {}", path, uri);
        }
    }

    let action = match &outcome.plan.action {
        CommentAction::Skip if outcome.affected.is_empty() => {
            "No tracked files changed, nothing to do".to_string()
        }
        CommentAction::Skip => format!("Status comment on {} is up to date", target),
        CommentAction::Create { .. } if outcome.executed => {
            format!("Created status comment on {}", target)
        }
        CommentAction::Create { .. } => format!("Would create status comment on {}", target),
        CommentAction::Update { comment_id, .. } if outcome.executed => {
            format!("Updated status comment {} on {}", comment_id, target)
        }
        CommentAction::Update { comment_id, .. } => {
            format!("Would update status comment {} on {}", comment_id, target)
        }
    };
    let _ = writeln!(
        writer,
        "{}{} {}",
        prefix,
        SUCCESS_MARK.green(),
        action.green()
    );

    if !outcome.plan.labels.is_empty() {
        let verb = if outcome.executed {
            "Requested label"
        } else {
            "Would request label"
        };
        let _ = writeln!(
            writer,
            "{}{} {} {}",
            prefix,
            SUCCESS_MARK.green(),
            verb.green(),
            outcome.plan.labels.join(", ").cyan()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
