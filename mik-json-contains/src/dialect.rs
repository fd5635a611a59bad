//! Quoting dialects for JSON_CONTAINS templates.
//!
//! A dialect decides how the column identifier and the text literals are
//! written into the clause. Neither dialect escapes anything: the text is
//! wrapped, never rewritten.

/// Quoting policy for identifiers and text literals.
pub trait Dialect: Clone + Copy {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Append a quoted column identifier (e.g. `` `tags` `` or `tags`).
    fn push_ident(&self, out: &mut String, ident: &str);

    /// Append a quoted text literal (e.g. `"value"`).
    fn push_text(&self, out: &mut String, text: &str);
}

/// MySQL / MariaDB: backtick identifiers, double-quoted literals.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct MySql;

impl Dialect for MySql {
    #[inline]
    fn name(&self) -> &'static str {
        "mysql"
    }

    #[inline]
    fn push_ident(&self, out: &mut String, ident: &str) {
        out.push('`');
        out.push_str(ident);
        out.push('`');
    }

    #[inline]
    fn push_text(&self, out: &mut String, text: &str) {
        out.push('"');
        out.push_str(text);
        out.push('"');
    }
}

/// Bare identifiers, double-quoted literals.
///
/// For callers that pass already-qualified or already-quoted column
/// references such as `t.tags`.
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct Unquoted;

impl Dialect for Unquoted {
    #[inline]
    fn name(&self) -> &'static str {
        "unquoted"
    }

    #[inline]
    fn push_ident(&self, out: &mut String, ident: &str) {
        out.push_str(ident);
    }

    #[inline]
    fn push_text(&self, out: &mut String, text: &str) {
        out.push('"');
        out.push_str(text);
        out.push('"');
    }
}
