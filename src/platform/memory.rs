use std::sync::Mutex;

use async_trait::async_trait;

use super::{Comment, CommentPlatform, PlatformError, PlatformResult};

/// Author recorded on comments created through [`MemoryPlatform`].
pub const MEMORY_BOT_LOGIN: &str = "github-actions[bot]";

/// A write recorded by [`MemoryPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Create { issue: u64, body: String },
    Update { issue: u64, comment_id: u64, body: String },
    AddLabels { issue: u64, labels: Vec<String> },
}

#[derive(Debug, Default)]
struct State {
    comments: Vec<Comment>,
    labels: Vec<String>,
    calls: Vec<PlatformCall>,
    list_count: usize,
    next_id: u64,
}

/// Comment store for a single pull request, kept in memory.
///
/// Writes are applied to the stored comments, so consecutive runs observe each
/// other's effects the same way they would on a real platform.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    state: Mutex<State>,
    fail_with: Option<String>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let next_id = comments.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(State {
                comments,
                next_id,
                ..State::default()
            }),
            fail_with: None,
        }
    }

    /// A platform whose every call fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            state: Mutex::default(),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.lock().comments.clone()
    }

    pub fn labels(&self) -> Vec<String> {
        self.lock().labels.clone()
    }

    /// Every write call made so far, in order.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.lock().calls.clone()
    }

    pub fn list_count(&self) -> usize {
        self.lock().list_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self, operation: &'static str) -> PlatformResult<()> {
        match &self.fail_with {
            Some(reason) => Err(PlatformError::Rejected {
                operation,
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CommentPlatform for MemoryPlatform {
    async fn list_comments(&self, _issue: u64) -> PlatformResult<Vec<Comment>> {
        self.check("list comments")?;
        let mut state = self.lock();
        state.list_count += 1;
        Ok(state.comments.clone())
    }

    async fn create_comment(&self, issue: u64, body: &str) -> PlatformResult<()> {
        self.check("create comment")?;
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.comments.push(Comment {
            id,
            author: MEMORY_BOT_LOGIN.to_string(),
            body: body.to_string(),
        });
        state.calls.push(PlatformCall::Create {
            issue,
            body: body.to_string(),
        });
        Ok(())
    }

    async fn update_comment(&self, issue: u64, comment_id: u64, body: &str) -> PlatformResult<()> {
        self.check("update comment")?;
        let mut state = self.lock();
        let Some(comment) = state.comments.iter_mut().find(|c| c.id == comment_id) else {
            return Err(PlatformError::Rejected {
                operation: "update comment",
                reason: format!("comment {comment_id} not found"),
            });
        };
        comment.body = body.to_string();
        state.calls.push(PlatformCall::Update {
            issue,
            comment_id,
            body: body.to_string(),
        });
        Ok(())
    }

    async fn add_labels(&self, issue: u64, labels: &[String]) -> PlatformResult<()> {
        self.check("add labels")?;
        let mut state = self.lock();
        for label in labels {
            if !state.labels.contains(label) {
                state.labels.push(label.clone());
            }
        }
        state.calls.push(PlatformCall::AddLabels {
            issue,
            labels: labels.to_vec(),
        });
        Ok(())
    }
}
