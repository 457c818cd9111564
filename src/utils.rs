//! Common utility functions shared across the codebase.

/// Check if a pattern contains glob wildcards (`*`, `?` or `[`).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Returns the text between the first and the last `"` of `line`.
///
/// Returns `None` when the line has fewer than two quotes or when the quoted
/// text is empty.
///
/// # Examples
///
/// ```
/// use protoglot::utils::quoted_value;
///
/// assert_eq!(quoted_value(r#"id: "invalid_input""#), Some("invalid_input"));
/// assert_eq!(quoted_value(r#"message: "say "hi"""#), Some(r#"say "hi""#));
/// assert_eq!(quoted_value(r#"id: """#), None);
/// assert_eq!(quoted_value("id: invalid_input"), None);
/// ```
pub fn quoted_value(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = line.rfind('"')?;
    if end > start {
        Some(&line[start..end])
    } else {
        None
    }
}
