//! Registry matching and comment-state engine.
//!
//! ## Module Structure
//!
//! - `registry`: Parses and validates the tracked-file registry
//! - `matcher`: Intersects the registry with the pull request's changed files
//! - `render`: Renders the two comment bodies
//! - `decision`: Chooses create, update or skip for the status comment
//! - `pipeline`: Runs parse, match, decide and execute against a platform
//! - `error`: Error types

pub mod decision;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod registry;
pub mod render;

pub use decision::{CommentAction, CommentState, Plan};
pub use error::{TrackerError, TrackerResult, ValidationError};
pub use matcher::{AffectedSet, ChangeSet, change_set_from_serialized, intersect};
pub use pipeline::{CommentSettings, RunOutcome};
pub use registry::{Registry, TrackedFile, parse_registry};
pub use render::render;
