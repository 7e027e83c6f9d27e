//! Common utility functions shared across the codebase.

/// Delimiter used when a list of paths travels as a single string.
pub const DEFAULT_DELIMITER: &str = "||";

/// Splits a delimiter-joined string into its non-empty elements.
///
/// Each element is trimmed; elements that are empty after trimming are dropped,
/// so leading, trailing and repeated delimiters produce nothing.
///
/// # Examples
///
/// ```
/// use extrack::utils::deserialize_into_array;
///
/// assert_eq!(deserialize_into_array("1||2||3", "||"), vec!["1", "2", "3"]);
/// assert_eq!(deserialize_into_array("||1||2||3||", "||"), vec!["1", "2", "3"]);
/// assert!(deserialize_into_array("", "||").is_empty());
/// ```
pub fn deserialize_into_array(serialized: &str, delimiter: &str) -> Vec<String> {
    serialized
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
