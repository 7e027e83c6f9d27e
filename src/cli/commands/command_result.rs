use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{AffectedSet, RunOutcome};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Render(RenderSummary),
    Sync(SyncSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub registry_path: PathBuf,
    pub tracked_count: usize,
    pub changed_count: usize,
    pub affected: AffectedSet,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub body: String,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub repo: String,
    pub pr: u64,
    pub outcome: RunOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running extrack commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
