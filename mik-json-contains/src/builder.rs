//! Expression builder: validation plus rendering.

use crate::dialect::Dialect;
use crate::error::InvalidArgument;
use crate::parse::parse_request;
use crate::render::{render_combined, render_single};
use crate::types::{Expression, FieldSpec, Request, Scalar};
use crate::validate::{is_safe_literal, is_valid_column_name, is_valid_json_path};

/// Builds JSON_CONTAINS expressions for one dialect.
///
/// The default mode trusts the caller: names, paths and values are spliced
/// in verbatim, and quote characters in them are only reported through a
/// `tracing` warning. [`strict`](Self::strict) turns those into errors.
///
/// # Example
///
/// ```
/// use mik_json_contains::{FieldSpec, JsonContains, MySql, Request};
///
/// let builder = JsonContains::new(MySql::default());
/// let field = FieldSpec::with_path("meta", "$.tags").unwrap();
///
/// let expr = builder.build(&Request::single(field, "x")).unwrap();
/// assert_eq!(expr.as_str(), r#"JSON_CONTAINS(`meta`, "x", "$.tags")"#);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct JsonContains<D: Dialect> {
    dialect: D,
    strict: bool,
}

impl<D: Dialect> JsonContains<D> {
    /// Create a builder in trusting mode.
    pub const fn new(dialect: D) -> Self {
        Self {
            dialect,
            strict: false,
        }
    }

    /// Reject identifiers, paths and values that are unsafe to interpolate.
    ///
    /// ```
    /// use mik_json_contains::{FieldSpec, InvalidArgument, Request, mysql};
    ///
    /// let field = FieldSpec::new("tags").unwrap();
    /// let err = mysql().strict().build(&Request::single(field, "a\" OR 1")).unwrap_err();
    /// assert!(matches!(err, InvalidArgument::UnsafeValue(_)));
    /// ```
    pub const fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Whether strict validation is enabled.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// The dialect used for quoting.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Build the SQL fragment for a request.
    pub fn build(&self, request: &Request) -> Result<Expression, InvalidArgument> {
        let (sql, clauses) = match request {
            Request::Single { field, value } => {
                self.check_field(field)?;
                self.check_value(value)?;
                (render_single(&self.dialect, field, value), 1)
            },
            Request::Combined {
                mode,
                field,
                values,
            } => {
                if values.is_empty() {
                    return Err(InvalidArgument::EmptyValues);
                }
                self.check_field(field)?;
                for value in values {
                    self.check_value(value)?;
                }
                (
                    render_combined(&self.dialect, *mode, field, values),
                    values.len(),
                )
            },
        };

        tracing::debug!(
            dialect = self.dialect.name(),
            field = request.field().name(),
            clauses,
            "Built JSON_CONTAINS expression"
        );

        Ok(Expression::new(sql))
    }

    /// Parse a positional JSON parameter array and build it.
    ///
    /// ```
    /// use mik_json_contains::mysql;
    ///
    /// let expr = mysql().build_json(r#"["or", "tags", ["a", "b"]]"#).unwrap();
    /// assert!(expr.as_str().contains(" OR "));
    /// ```
    pub fn build_json(&self, json: &str) -> Result<Expression, InvalidArgument> {
        let request = parse_request(json)?;
        self.build(&request)
    }

    fn check_field(&self, field: &FieldSpec) -> Result<(), InvalidArgument> {
        if self.strict {
            if !is_valid_column_name(field.name()) {
                return Err(InvalidArgument::UnsafeIdentifier(field.name().to_string()));
            }
            if !is_valid_json_path(field.path()) {
                return Err(InvalidArgument::UnsafePath(field.path().to_string()));
            }
        } else {
            if !is_valid_column_name(field.name()) {
                tracing::warn!(
                    field = field.name(),
                    "Field name is not a plain SQL identifier and is interpolated unescaped"
                );
            }
            if !is_safe_literal(field.path()) {
                tracing::warn!(
                    field = field.name(),
                    path = field.path(),
                    "JSON path contains quote characters and is interpolated unescaped"
                );
            }
        }
        Ok(())
    }

    fn check_value(&self, value: &Scalar) -> Result<(), InvalidArgument> {
        let Scalar::String(text) = value else {
            return Ok(());
        };

        if is_safe_literal(text) {
            return Ok(());
        }

        if self.strict {
            return Err(InvalidArgument::UnsafeValue(text.clone()));
        }

        tracing::warn!(
            value = %text,
            "JSON_CONTAINS value contains quote characters and is interpolated unescaped"
        );
        Ok(())
    }
}
