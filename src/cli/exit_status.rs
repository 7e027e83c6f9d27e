use std::process::ExitCode;

/// Process exit status, read by CI jobs gating on `extrack`.
///
/// `check` is the only command that reports [`ExitStatus::Failure`]; `sync`
/// succeeds whether or not tracked files changed, because the status comment
/// is the signal there. Registry validation failures and GitHub API errors
/// surface as [`ExitStatus::Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: no tracked file is affected, or the command finished its work.
    Success,
    /// 1: the pull request changes files cited by external sources.
    Failure,
    /// 2: invalid registry or config, unreadable input, or a failed API call.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
