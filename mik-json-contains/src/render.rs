//! The JSON_CONTAINS template.
//!
//! All quoting goes through the dialect here; nothing else in the crate
//! writes SQL text.

use crate::dialect::Dialect;
use crate::types::{FieldSpec, Mode, Scalar};

/// Rough per-clause size used to pre-size the output buffer.
const CLAUSE_CAPACITY: usize = 32;

/// Append `JSON_CONTAINS(<ident>, "<value>", "<path>")`.
pub(crate) fn push_clause<D: Dialect>(
    dialect: &D,
    out: &mut String,
    field: &FieldSpec,
    value: &Scalar,
) {
    out.push_str("JSON_CONTAINS(");
    dialect.push_ident(out, field.name());
    out.push_str(", ");
    match value {
        Scalar::String(s) => dialect.push_text(out, s),
        other => dialect.push_text(out, &other.to_string()),
    }
    out.push_str(", ");
    dialect.push_text(out, field.path());
    out.push(')');
}

/// Render a single clause.
pub(crate) fn render_single<D: Dialect>(dialect: &D, field: &FieldSpec, value: &Scalar) -> String {
    let mut out = String::with_capacity(CLAUSE_CAPACITY + field.name().len());
    push_clause(dialect, &mut out, field, value);
    out
}

/// Render `(<clause> <MODE> <clause> ...)` in value order.
pub(crate) fn render_combined<D: Dialect>(
    dialect: &D,
    mode: Mode,
    field: &FieldSpec,
    values: &[Scalar],
) -> String {
    let mut out = String::with_capacity(2 + values.len() * (CLAUSE_CAPACITY + field.name().len()));
    out.push('(');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(mode.as_sql());
            out.push(' ');
        }
        push_clause(dialect, &mut out, field, value);
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySql, Unquoted};

    fn tags() -> FieldSpec {
        FieldSpec::new("tags").unwrap()
    }

    #[test]
    fn test_single_clause() {
        assert_eq!(
            render_single(&MySql, &tags(), &Scalar::from("x")),
            "JSON_CONTAINS(`tags`, \"x\", \"$\")"
        );
    }

    #[test]
    fn test_single_clause_non_string_values() {
        assert_eq!(
            render_single(&MySql, &tags(), &Scalar::Int(5)),
            "JSON_CONTAINS(`tags`, \"5\", \"$\")"
        );
        assert_eq!(
            render_single(&MySql, &tags(), &Scalar::Bool(true)),
            "JSON_CONTAINS(`tags`, \"1\", \"$\")"
        );
        assert_eq!(
            render_single(&MySql, &tags(), &Scalar::Null),
            "JSON_CONTAINS(`tags`, \"\", \"$\")"
        );
    }

    #[test]
    fn test_combined_or() {
        let values = [Scalar::from("a"), Scalar::from("b")];
        assert_eq!(
            render_combined(&MySql, Mode::Or, &tags(), &values),
            "(JSON_CONTAINS(`tags`, \"a\", \"$\") OR JSON_CONTAINS(`tags`, \"b\", \"$\"))"
        );
    }

    #[test]
    fn test_combined_single_value_keeps_parentheses() {
        let values = [Scalar::from("a")];
        assert_eq!(
            render_combined(&MySql, Mode::And, &tags(), &values),
            "(JSON_CONTAINS(`tags`, \"a\", \"$\"))"
        );
    }

    #[test]
    fn test_unquoted_dialect_with_path() {
        let field = FieldSpec::with_path("t.meta", "$.tags").unwrap();
        let values = [Scalar::from("a"), Scalar::from("b")];
        assert_eq!(
            render_combined(&Unquoted, Mode::And, &field, &values),
            "(JSON_CONTAINS(t.meta, \"a\", \"$.tags\") AND JSON_CONTAINS(t.meta, \"b\", \"$.tags\"))"
        );
    }
}
