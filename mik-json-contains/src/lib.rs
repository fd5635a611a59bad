// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // JSON_CONTAINS and friends appear bare in docs
#![allow(clippy::missing_errors_doc)] // Every fallible fn returns InvalidArgument
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder methods return Self

//! # mik-json-contains - JSON_CONTAINS Expression Builder
//!
//! Turns "does this JSON column contain X" questions into raw SQL fragments
//! for embedding in a larger query.
//!
//! ## Quick Start
//!
//! ```
//! # use mik_json_contains::prelude::*;
//! // One value at the document root
//! let expr = contains("tags", "x").unwrap();
//! assert_eq!(expr.as_str(), r#"JSON_CONTAINS(`tags`, "x", "$")"#);
//!
//! // One value at a JSON path
//! let expr = contains(("meta", "$.tags"), "x").unwrap();
//! assert_eq!(expr.as_str(), r#"JSON_CONTAINS(`meta`, "x", "$.tags")"#);
//!
//! // Any of several values
//! let expr = contains_any("tags", ["a", "b"]).unwrap();
//! assert_eq!(
//!     expr.as_str(),
//!     r#"(JSON_CONTAINS(`tags`, "a", "$") OR JSON_CONTAINS(`tags`, "b", "$"))"#
//! );
//! ```
//!
//! ## Escaping
//!
//! Values and paths are spliced into the template verbatim. This is a textual
//! template, not a parameterized statement: callers must pass values that are
//! already safe. Quote characters are reported through `tracing` warnings;
//! use [`JsonContains::strict`] to reject them instead.
//!
//! ```
//! # use mik_json_contains::prelude::*;
//! let field = FieldSpec::new("tags").unwrap();
//! let request = Request::single(field, r#"x") OR ("1"#);
//!
//! assert!(mysql().build(&request).is_ok());
//! assert!(mysql().strict().build(&request).is_err());
//! ```
//!
//! ## Dialects
//!
//! | Dialect | Identifier | Literal |
//! |---------|------------|---------|
//! | [`MySql`] | `` `tags` `` | `"x"` |
//! | [`Unquoted`] | `tags` | `"x"` |

mod builder;
mod dialect;
mod error;
mod parse;
mod render;
mod types;
mod validate;

pub use builder::JsonContains;
pub use dialect::{Dialect, MySql, Unquoted};
pub use error::InvalidArgument;
pub use parse::{parse_request, parse_request_bytes};
pub use types::{DEFAULT_PATH, Expression, FieldSpec, Mode, Request, Scalar};
pub use validate::{is_safe_literal, is_valid_column_name, is_valid_json_path};

/// Re-export miniserde's json module for runtime request parsing.
///
/// ```
/// use mik_json_contains::{Request, json};
///
/// let value: json::Value = json::from_str(r#"["tags", "x"]"#).unwrap();
/// let request = Request::from_json(&value).unwrap();
/// ```
pub use miniserde::json;

/// Builder using MySQL quoting (backtick identifiers).
pub const fn mysql() -> JsonContains<MySql> {
    JsonContains::new(MySql)
}

/// Builder using bare identifiers.
pub const fn unquoted() -> JsonContains<Unquoted> {
    JsonContains::new(Unquoted)
}

/// Build a request with the default MySQL builder.
pub fn build(request: &Request) -> Result<Expression, InvalidArgument> {
    mysql().build(request)
}

/// Match a single value.
///
/// `field` is a column name or a `(name, path)` pair.
pub fn contains<F, V>(field: F, value: V) -> Result<Expression, InvalidArgument>
where
    F: TryInto<FieldSpec, Error = InvalidArgument>,
    V: Into<Scalar>,
{
    build(&Request::single(field.try_into()?, value))
}

/// Match when any of the values is contained (`OR`).
pub fn contains_any<F, I, V>(field: F, values: I) -> Result<Expression, InvalidArgument>
where
    F: TryInto<FieldSpec, Error = InvalidArgument>,
    I: IntoIterator<Item = V>,
    V: Into<Scalar>,
{
    contains_with(Mode::Or, field, values)
}

/// Match when all of the values are contained (`AND`).
pub fn contains_all<F, I, V>(field: F, values: I) -> Result<Expression, InvalidArgument>
where
    F: TryInto<FieldSpec, Error = InvalidArgument>,
    I: IntoIterator<Item = V>,
    V: Into<Scalar>,
{
    contains_with(Mode::And, field, values)
}

/// Match values combined with an explicit mode.
///
/// ```
/// use mik_json_contains::{Mode, contains_with};
///
/// let mode: Mode = "and".parse().unwrap();
/// let expr = contains_with(mode, "tags", [1, 2]).unwrap();
/// assert!(expr.as_str().contains(" AND "));
/// ```
pub fn contains_with<F, I, V>(
    mode: Mode,
    field: F,
    values: I,
) -> Result<Expression, InvalidArgument>
where
    F: TryInto<FieldSpec, Error = InvalidArgument>,
    I: IntoIterator<Item = V>,
    V: Into<Scalar>,
{
    build(&Request::combined(mode, field.try_into()?, values))
}

/// Prelude module for convenient imports.
///
/// ```
/// use mik_json_contains::prelude::*;
///
/// let expr = contains_all("tags", ["a", "b"]).unwrap();
/// assert!(expr.as_str().starts_with('('));
/// ```
pub mod prelude {
    pub use crate::{
        Dialect, Expression, FieldSpec, InvalidArgument, JsonContains, Mode, MySql, Request,
        Scalar, Unquoted, build, contains, contains_all, contains_any, contains_with, json, mysql,
        parse_request, parse_request_bytes, unquoted,
    };
}


// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================
