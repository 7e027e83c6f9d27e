//! Create / update / skip decision for the status comment.
//!
//! A run finds at most one bot comment, identified by its author and header
//! prefix. Once created, that comment is only ever updated in place.

use super::matcher::AffectedSet;
use super::render::{render_changed, render_not_changed};
use crate::platform::Comment;

/// What the pull request currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentState {
    /// No bot comment with the header exists.
    Absent,
    /// A bot comment exists and reports affected files.
    PresentChanged { id: u64, body: String },
    /// A bot comment exists and holds the "not changed" body.
    PresentUnchanged { id: u64, body: String },
}

impl CommentState {
    /// Classify the first comment authored by `bot_login` whose body starts with `header`.
    pub fn from_comments(comments: &[Comment], bot_login: &str, header: &str) -> Self {
        let Some(comment) = comments
            .iter()
            .find(|c| c.author == bot_login && c.body.starts_with(header))
        else {
            return CommentState::Absent;
        };

        if comment.body == render_not_changed(header) {
            CommentState::PresentUnchanged {
                id: comment.id,
                body: comment.body.clone(),
            }
        } else {
            CommentState::PresentChanged {
                id: comment.id,
                body: comment.body.clone(),
            }
        }
    }

    /// The existing comment's id and stored body, if any.
    pub fn existing(&self) -> Option<(u64, &str)> {
        match self {
            CommentState::Absent => None,
            CommentState::PresentChanged { id, body }
            | CommentState::PresentUnchanged { id, body } => Some((*id, body.as_str())),
        }
    }
}

impl std::fmt::Display for CommentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentState::Absent => write!(f, "absent"),
            CommentState::PresentChanged { id, .. } => write!(f, "comment {} (changed)", id),
            CommentState::PresentUnchanged { id, .. } => write!(f, "comment {} (not changed)", id),
        }
    }
}

/// The single comment write a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAction {
    Skip,
    Create { body: String },
    Update { comment_id: u64, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub action: CommentAction,
    /// Labels to attach after the comment write. Empty when nothing is affected.
    pub labels: Vec<String>,
}

impl Plan {
    /// True when executing the plan makes no platform call.
    pub fn is_noop(&self) -> bool {
        self.action == CommentAction::Skip && self.labels.is_empty()
    }
}

/// Decide what to do with the status comment.
///
/// - Nothing affected, no comment: do nothing.
/// - Nothing affected, comment present: always rewrite it to the "not changed" body.
/// - Files affected, no comment: create one and attach `label`.
/// - Files affected, comment present: rewrite only if the body differs, and
///   attach `label` either way.
pub fn plan(state: &CommentState, header: &str, affected: &AffectedSet, label: &str) -> Plan {
    if affected.is_empty() {
        let action = match state.existing() {
            None => CommentAction::Skip,
            Some((comment_id, _)) => CommentAction::Update {
                comment_id,
                body: render_not_changed(header),
            },
        };
        return Plan {
            action,
            labels: Vec::new(),
        };
    }

    let body = render_changed(header, affected);
    let action = match state.existing() {
        None => CommentAction::Create { body },
        Some((_, existing)) if existing == body => CommentAction::Skip,
        Some((comment_id, _)) => CommentAction::Update { comment_id, body },
    };

    Plan {
        action,
        labels: vec![label.to_string()],
    }
}
