//! Error types for the registry and comment engine.

use thiserror::Error;

use crate::platform::PlatformError;

/// A registry line that does not split into a valid path and URI.
///
/// `uri` is `None` when the line held a single token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Invalid file path or URI detected on line {line}: {path} {}",
    .uri.as_deref().unwrap_or("<missing>")
)]
pub struct ValidationError {
    pub line: usize,
    pub path: String,
    pub uri: Option<String>,
}

/// Errors that abort a tracker run.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The registry failed validation; raised before any platform call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A call to the hosting platform failed.
    #[error(transparent)]
    Collaborator(#[from] PlatformError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
