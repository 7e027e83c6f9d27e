//! Parsing of the tracked-file registry.
//!
//! The registry is a plain text file with one `path uri` pair per line.
//! Lines starting with `#` and blank lines are ignored:
//!
//! ```text
//! # Cited in the 2.0 release blog post
//! python/ray/serve/api.py https://example.com/blog/serve-2-0
//! ```
//!
//! Parsing is all-or-nothing: one malformed line rejects the whole file.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::error::ValidationError;

static FILE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_/.-]+$").unwrap());
static URI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[a-zA-Z0-9._:/&#-]+$").unwrap());

/// A single registry entry: a repository path and the external URI citing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub path: String,
    pub uri: String,
}

/// Validated mapping from tracked file path to external URI.
///
/// Iteration follows first-insertion order. Re-inserting a path replaces its
/// URI but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: IndexMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the URI it replaced if the path was already present.
    pub fn insert(&mut self, file: TrackedFile) -> Option<String> {
        self.entries.insert(file.path, file.uri)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(path, uri)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, uri)| (path.as_str(), uri.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<TrackedFile> for Registry {
    fn from_iter<I: IntoIterator<Item = TrackedFile>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for file in iter {
            registry.insert(file);
        }
        registry
    }
}

/// Parse registry text into a [`Registry`].
///
/// Fails on the first line that does not consist of exactly one valid path and
/// one valid URI separated by a single space. Duplicate paths resolve to the
/// URI on the last line that names them.
pub fn parse_registry(content: &str) -> Result<Registry, ValidationError> {
    let mut registry = Registry::new();

    for (index, line) in content.split('\n').enumerate() {
        if let Some(file) = parse_line(line, index + 1)? {
            registry.insert(file);
        }
    }

    Ok(registry)
}

fn parse_line(line: &str, line_number: usize) -> Result<Option<TrackedFile>, ValidationError> {
    if line.starts_with('#') || line.trim().is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split(' ').map(str::trim).collect();
    let invalid = || ValidationError {
        line: line_number,
        path: tokens[0].to_string(),
        uri: (tokens.len() > 1).then(|| tokens[1..].join(" ")),
    };

    let [path, uri] = tokens.as_slice() else {
        return Err(invalid());
    };
    if !FILE_PATH_REGEX.is_match(path) || !URI_REGEX.is_match(uri) {
        return Err(invalid());
    }

    Ok(Some(TrackedFile {
        path: path.to_string(),
        uri: uri.to_string(),
    }))
}
