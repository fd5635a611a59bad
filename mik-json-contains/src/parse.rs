//! Runtime parsing of positional JSON parameter arrays.
//!
//! Accepts the untyped call shapes ORM code tends to pass around and turns
//! them into a typed [`Request`].
//!
//! # Supported Shapes
//!
//! | Parameters | Request |
//! |------------|---------|
//! | `["tags", "x"]` | `Single` at `$` |
//! | `[["meta", "$.tags"], "x"]` | `Single` at `$.tags` |
//! | `["tags", ["a", "b"]]` | `Combined` with `OR` |
//! | `["and", "tags", ["a", "b"]]` | `Combined` with `AND` |
//!
//! ```
//! use mik_json_contains::{Mode, Request, parse_request};
//!
//! let request = parse_request(r#"["AND", "tags", ["a", "b"]]"#).unwrap();
//! assert!(matches!(request, Request::Combined { mode: Mode::And, .. }));
//! ```

use crate::error::InvalidArgument;
use crate::types::{FieldSpec, Mode, Request, Scalar};
use miniserde::json::{Number, Value as JsonValue};

/// Parse a request from a JSON parameter array.
///
/// This is a convenience function that calls [`Request::from_json`].
pub fn parse_request(json_str: &str) -> Result<Request, InvalidArgument> {
    let json: JsonValue =
        miniserde::json::from_str(json_str).map_err(|_| InvalidArgument::InvalidJson)?;
    Request::from_json(&json)
}

/// Parse a request from JSON bytes.
///
/// ```
/// use mik_json_contains::parse_request_bytes;
///
/// let request = parse_request_bytes(br#"["tags", "x"]"#).unwrap();
/// assert_eq!(request.field().name(), "tags");
/// ```
pub fn parse_request_bytes(bytes: &[u8]) -> Result<Request, InvalidArgument> {
    let s = std::str::from_utf8(bytes).map_err(|_| InvalidArgument::InvalidJson)?;
    parse_request(s)
}

impl Scalar {
    /// Convert from a miniserde JSON value.
    ///
    /// Returns `None` for arrays and objects. Unsigned integers beyond
    /// `i64::MAX` become floats.
    ///
    /// ```
    /// use mik_json_contains::Scalar;
    /// use miniserde::json::{Number, Value as JsonValue};
    ///
    /// let json = JsonValue::Number(Number::I64(42));
    /// assert_eq!(Scalar::from_json(&json), Some(Scalar::Int(42)));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        match json {
            JsonValue::Null => Some(Self::Null),
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(n) => Some(match n {
                Number::I64(i) => Self::Int(*i),
                Number::U64(u) => i64::try_from(*u).map_or(Self::Float(*u as f64), Self::Int),
                Number::F64(f) => Self::Float(*f),
            }),
            JsonValue::String(s) => Some(Self::String(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl Request {
    /// Build a request from a parsed positional parameter array.
    ///
    /// Validation order follows the helper's historical behaviour: in the
    /// three-parameter form the mode is checked first, then the values,
    /// then the field.
    pub fn from_json(json: &JsonValue) -> Result<Self, InvalidArgument> {
        let params = match json {
            JsonValue::Array(a) => a,
            _ => return Err(InvalidArgument::ParamsNotArray),
        };

        match params.as_slice() {
            [field, value] => {
                let field = parse_field(field)?;
                match value {
                    JsonValue::Array(values) => Ok(Self::Combined {
                        mode: Mode::Or,
                        field,
                        values: parse_values(values)?,
                    }),
                    scalar => Ok(Self::Single {
                        field,
                        value: Scalar::from_json(scalar).ok_or(InvalidArgument::UnsupportedValue)?,
                    }),
                }
            },
            [mode, field, values] => {
                let mode = parse_mode(mode)?;
                let values = match values {
                    JsonValue::Array(values) => values,
                    _ => return Err(InvalidArgument::ValuesNotArray),
                };
                let field = parse_field(field)?;
                Ok(Self::Combined {
                    mode,
                    field,
                    values: parse_values(values)?,
                })
            },
            other => Err(InvalidArgument::ParamCount(other.len())),
        }
    }
}

/// Parse the mode parameter; anything but an AND/OR string is rejected.
fn parse_mode(json: &JsonValue) -> Result<Mode, InvalidArgument> {
    match json {
        JsonValue::String(s) => s.parse(),
        other => Err(InvalidArgument::UnknownMode(miniserde::json::to_string(other))),
    }
}

/// Parse a field descriptor: `"name"` or `["name", "path"]`.
///
/// A pair is read positionally: elements past the second are ignored and
/// missing elements fail the same checks as non-string ones.
fn parse_field(json: &JsonValue) -> Result<FieldSpec, InvalidArgument> {
    match json {
        JsonValue::String(name) => FieldSpec::new(name.as_str()),
        JsonValue::Array(pair) => {
            let name = match pair.first() {
                Some(JsonValue::String(s)) => s.as_str(),
                _ => return Err(InvalidArgument::FieldNameNotString),
            };
            if name.is_empty() {
                return Err(InvalidArgument::EmptyFieldName);
            }
            let path = match pair.get(1) {
                Some(JsonValue::String(s)) => s.as_str(),
                _ => return Err(InvalidArgument::PathNotString),
            };
            FieldSpec::with_path(name, path)
        },
        _ => Err(InvalidArgument::UnparsableField),
    }
}

/// Parse a non-empty list of scalar values.
fn parse_values(values: &[JsonValue]) -> Result<Vec<Scalar>, InvalidArgument> {
    if values.is_empty() {
        return Err(InvalidArgument::EmptyValues);
    }

    values
        .iter()
        .map(|v| Scalar::from_json(v).ok_or(InvalidArgument::UnsupportedValue))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_params_scalar() {
        let request = parse_request(r#"["tags", "x"]"#).unwrap();
        assert_eq!(
            request,
            Request::single(FieldSpec::new("tags").unwrap(), "x")
        );
    }

    #[test]
    fn test_two_params_with_path() {
        let request = parse_request(r#"[["meta", "$.tags"], 7]"#).unwrap();
        assert_eq!(
            request,
            Request::single(FieldSpec::with_path("meta", "$.tags").unwrap(), 7)
        );
    }

    #[test]
    fn test_two_params_array_means_or() {
        let request = parse_request(r#"["tags", ["a", true, null, 1.5]]"#).unwrap();
        assert_eq!(
            request,
            Request::Combined {
                mode: Mode::Or,
                field: FieldSpec::new("tags").unwrap(),
                values: vec![
                    Scalar::from("a"),
                    Scalar::Bool(true),
                    Scalar::Null,
                    Scalar::Float(1.5),
                ],
            }
        );
    }

    #[test]
    fn test_three_params_mode_ignores_case() {
        let request = parse_request(r#"["and", "tags", ["a"]]"#).unwrap();
        assert!(matches!(request, Request::Combined { mode: Mode::And, .. }));

        let request = parse_request(r#"["Or", "tags", ["a"]]"#).unwrap();
        assert!(matches!(request, Request::Combined { mode: Mode::Or, .. }));
    }

    #[test]
    fn test_three_params_checks_mode_before_values_and_field() {
        assert_eq!(
            parse_request(r#"["XOR", "", "nope"]"#),
            Err(InvalidArgument::UnknownMode("XOR".into()))
        );
        assert_eq!(
            parse_request(r#"[1, "tags", ["a"]]"#),
            Err(InvalidArgument::UnknownMode("1".into()))
        );
    }

    #[test]
    fn test_three_params_checks_values_before_field() {
        assert_eq!(
            parse_request(r#"["OR", "", "a"]"#),
            Err(InvalidArgument::ValuesNotArray)
        );
        assert_eq!(
            parse_request(r#"["OR", "", ["a"]]"#),
            Err(InvalidArgument::EmptyFieldName)
        );
    }

    #[test]
    fn test_empty_values_rejected() {
        assert_eq!(
            parse_request(r#"["AND", "tags", []]"#),
            Err(InvalidArgument::EmptyValues)
        );
        assert_eq!(
            parse_request(r#"["tags", []]"#),
            Err(InvalidArgument::EmptyValues)
        );
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            parse_request(r#"["", "x"]"#),
            Err(InvalidArgument::EmptyFieldName)
        );
        assert_eq!(
            parse_request(r#"[[5, "$"], "x"]"#),
            Err(InvalidArgument::FieldNameNotString)
        );
        assert_eq!(
            parse_request(r#"[["", "$"], "x"]"#),
            Err(InvalidArgument::EmptyFieldName)
        );
        assert_eq!(
            parse_request(r#"[["meta", ""], "x"]"#),
            Err(InvalidArgument::EmptyPath)
        );
        assert_eq!(
            parse_request(r#"[["meta", null], "x"]"#),
            Err(InvalidArgument::PathNotString)
        );
        assert_eq!(
            parse_request(r#"[{"name": "meta"}, "x"]"#),
            Err(InvalidArgument::UnparsableField)
        );
    }

    #[test]
    fn test_field_pair_read_positionally() {
        assert_eq!(
            parse_request(r#"[["meta"], "x"]"#),
            Err(InvalidArgument::PathNotString)
        );
        assert_eq!(
            parse_request(r#"[[], "x"]"#),
            Err(InvalidArgument::FieldNameNotString)
        );
        assert_eq!(
            parse_request(r#"[["meta", "$.tags", "ignored"], "x"]"#).unwrap(),
            Request::single(FieldSpec::with_path("meta", "$.tags").unwrap(), "x")
        );
    }

    #[test]
    fn test_unsupported_values() {
        assert_eq!(
            parse_request(r#"["tags", {"a": 1}]"#),
            Err(InvalidArgument::UnsupportedValue)
        );
        assert_eq!(
            parse_request(r#"["tags", ["a", ["nested"]]]"#),
            Err(InvalidArgument::UnsupportedValue)
        );
    }

    #[test]
    fn test_param_shape_errors() {
        assert_eq!(parse_request(r#"["tags"]"#), Err(InvalidArgument::ParamCount(1)));
        assert_eq!(parse_request("[]"), Err(InvalidArgument::ParamCount(0)));
        assert_eq!(
            parse_request(r#"["OR", "tags", ["a"], "extra"]"#),
            Err(InvalidArgument::ParamCount(4))
        );
        assert_eq!(
            parse_request(r#"{"field": "tags"}"#),
            Err(InvalidArgument::ParamsNotArray)
        );
        assert_eq!(parse_request("[\"tags\", "), Err(InvalidArgument::InvalidJson));
    }

    #[test]
    fn test_bytes_must_be_utf8() {
        assert_eq!(
            parse_request_bytes(&[0x5b, 0xff, 0x5d]),
            Err(InvalidArgument::InvalidJson)
        );
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let json = JsonValue::Number(Number::U64(u64::MAX));
        assert!(matches!(Scalar::from_json(&json), Some(Scalar::Float(_))));

        let json = JsonValue::Number(Number::U64(10));
        assert_eq!(Scalar::from_json(&json), Some(Scalar::Int(10)));
    }
}
