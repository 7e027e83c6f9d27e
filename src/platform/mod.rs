//! Hosting-platform collaborator used to read and write pull-request comments.
//!
//! ## Module Structure
//!
//! - `github`: GitHub REST API implementation
//! - `memory`: In-memory implementation that records every call

pub mod github;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use github::{GithubClient, RepoRef};
pub use memory::{MemoryPlatform, PlatformCall};

/// A comment on a pull request (GitHub treats pull requests as issues).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    /// Login of the comment author.
    pub author: String,
    pub body: String,
}

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} failed with status {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid platform configuration: {0}")]
    Config(String),

    #[error("{operation} rejected: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// The four operations the tracker needs from a hosting platform.
#[async_trait]
pub trait CommentPlatform: Send + Sync {
    async fn list_comments(&self, issue: u64) -> PlatformResult<Vec<Comment>>;

    async fn create_comment(&self, issue: u64, body: &str) -> PlatformResult<()>;

    async fn update_comment(&self, issue: u64, comment_id: u64, body: &str) -> PlatformResult<()>;

    async fn add_labels(&self, issue: u64, labels: &[String]) -> PlatformResult<()>;
}
