//! Rendering of the pull-request status comment.
//!
//! Both bodies are compared byte-for-byte against the stored comment to decide
//! whether an update is needed, so their wording must stay stable.

use std::fmt::Write;

use super::matcher::AffectedSet;

const NOT_CHANGED_BODY: &str = "A previous version of this PR changed code that is used or cited in  external sources, e.g. blog posts.

It looks like these changes have been reverted or are otherwise not present in this PR anymore. Please still carefully review the changes to make sure code we use in external sources still works.";

const CHANGED_PREAMBLE: &str = "This PR changes code that is used or cited in external sources, e.g. blog posts.

Before merging this PR, please make sure that the code in the external sources is still working, and consider updating them to reflect the changes.

The affected files and the external sources are:";

/// Body posted once a pull request no longer touches any tracked file.
pub fn render_not_changed(header: &str) -> String {
    format!("{header}\n\n{NOT_CHANGED_BODY}")
}

/// Body listing every affected file as a Markdown bullet, in affected-set order.
pub fn render_changed(header: &str, affected: &AffectedSet) -> String {
    let mut body = format!("{header}\n\n{CHANGED_PREAMBLE}");
    for (path, uri) in affected.iter() {
        let _ = write!(body, "\n- `{path}`: {uri}");
    }
    body
}

/// Renders the comment body for `affected`.
pub fn render(header: &str, affected: &AffectedSet) -> String {
    if affected.is_empty() {
        render_not_changed(header)
    } else {
        render_changed(header, affected)
    }
}
