//! Intersection of the registry with the files changed in a pull request.

use std::collections::HashSet;

use super::registry::{Registry, TrackedFile};
use crate::utils::deserialize_into_array;

/// Paths modified in the current pull request.
pub type ChangeSet = HashSet<String>;

/// Registry entries whose paths appear in a [`ChangeSet`], in registry order.
pub type AffectedSet = Registry;

/// Builds a [`ChangeSet`] from its delimited transport form.
pub fn change_set_from_serialized(serialized: &str, delimiter: &str) -> ChangeSet {
    deserialize_into_array(serialized, delimiter)
        .into_iter()
        .collect()
}

/// Returns the registry entries whose paths are members of `changed`.
///
/// Paths are compared as-is; no normalization happens here.
pub fn intersect(registry: &Registry, changed: &ChangeSet) -> AffectedSet {
    if changed.is_empty() {
        return AffectedSet::new();
    }

    registry
        .iter()
        .filter(|(path, _)| changed.contains(*path))
        .map(|(path, uri)| TrackedFile {
            path: path.to_string(),
            uri: uri.to_string(),
        })
        .collect()
}
