//! Safety predicates for text spliced into JSON_CONTAINS templates.
//!
//! The builder only enforces these in strict mode. In the default mode the
//! caller is trusted to pass safe column names, paths and values.

/// Maximum length for column identifiers (MySQL limit is 64).
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validate that a string is a plain SQL column identifier.
///
/// A valid identifier:
/// - Starts with a letter (a-z, A-Z) or underscore
/// - Contains only letters, digits (0-9), and underscores
/// - Is not empty and not longer than 64 characters
///
/// # Examples
///
/// ```
/// use mik_json_contains::is_valid_column_name;
///
/// assert!(is_valid_column_name("tags"));
/// assert!(is_valid_column_name("_meta2"));
///
/// assert!(!is_valid_column_name(""));
/// assert!(!is_valid_column_name("2tags"));
/// assert!(!is_valid_column_name("t.tags"));
/// assert!(!is_valid_column_name("tags`; DROP"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_column_name(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate that a JSON path can be written inside a double-quoted literal.
///
/// The path must start with `$` and contain no double quotes, backslashes
/// or control characters. The path grammar itself is left to the database.
///
/// # Examples
///
/// ```
/// use mik_json_contains::is_valid_json_path;
///
/// assert!(is_valid_json_path("$"));
/// assert!(is_valid_json_path("$.tags[0]"));
///
/// assert!(!is_valid_json_path("tags"));
/// assert!(!is_valid_json_path("$\") OR 1=1 -- "));
/// ```
#[inline]
#[must_use]
pub fn is_valid_json_path(s: &str) -> bool {
    s.starts_with('$') && is_safe_literal(s) && !s.chars().any(char::is_control)
}

/// Whether text can be wrapped in double quotes without breaking out.
///
/// # Examples
///
/// ```
/// use mik_json_contains::is_safe_literal;
///
/// assert!(is_safe_literal("plain value"));
/// assert!(is_safe_literal("it's fine"));
/// assert!(!is_safe_literal("say \"hi\""));
/// assert!(!is_safe_literal("trailing\\"));
/// ```
#[inline]
#[must_use]
pub fn is_safe_literal(s: &str) -> bool {
    !s.contains(['"', '\\'])
}
