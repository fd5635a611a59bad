//! Error type for JSON_CONTAINS expression building.

use std::fmt;

/// Invalid arguments passed to the expression builder.
///
/// Every failure is reported before any SQL text is returned; there are no
/// partial expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// Field name is empty.
    EmptyFieldName,
    /// Field name is present but not a string.
    FieldNameNotString,
    /// JSON path is present but empty.
    EmptyPath,
    /// JSON path is present but not a string.
    PathNotString,
    /// Field descriptor is neither a name nor a `[name, path]` pair.
    UnparsableField,
    /// Mode is not `AND` or `OR`.
    UnknownMode(String),
    /// The values argument of the three-parameter form is not an array.
    ValuesNotArray,
    /// The values list is empty.
    EmptyValues,
    /// A value is an object or a nested array.
    UnsupportedValue,
    /// Parameter list has neither two nor three elements.
    ParamCount(usize),
    /// Parameters were not given as an array.
    ParamsNotArray,
    /// Invalid JSON syntax or encoding.
    InvalidJson,
    /// Field name is not a plain SQL identifier (strict mode).
    UnsafeIdentifier(String),
    /// JSON path cannot be interpolated safely (strict mode).
    UnsafePath(String),
    /// Value cannot be interpolated safely (strict mode).
    UnsafeValue(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFieldName => write!(f, "JSONContains field name cannot be empty"),
            Self::FieldNameNotString => write!(f, "JSONContains field name must be a string"),
            Self::EmptyPath => write!(f, "JSONContains path cannot be empty"),
            Self::PathNotString => write!(f, "JSONContains path must be a string"),
            Self::UnparsableField => write!(f, "JSONContains field could not be parsed"),
            Self::UnknownMode(mode) => write!(
                f,
                "JSONContains first param must be either \"AND\" or \"OR\", got '{mode}'"
            ),
            Self::ValuesNotArray => write!(f, "JSONContains third param must be an array"),
            Self::EmptyValues => write!(f, "JSONContains values cannot be empty"),
            Self::UnsupportedValue => {
                write!(f, "JSONContains values must be strings, numbers, booleans or null")
            },
            Self::ParamCount(n) => write!(
                f,
                "JSONContains params array must contain only 2 or 3 elements, got {n}"
            ),
            Self::ParamsNotArray => write!(f, "JSONContains params must be an array"),
            Self::InvalidJson => write!(f, "Invalid JSON syntax or encoding"),
            Self::UnsafeIdentifier(name) => write!(
                f,
                "Field name '{name}' must start with letter/underscore, \
                 contain only ASCII alphanumeric/underscore, and be 1-64 chars"
            ),
            Self::UnsafePath(path) => write!(
                f,
                "JSON path '{path}' must start with '$' and contain no quotes or control characters"
            ),
            Self::UnsafeValue(value) => {
                write!(f, "Value '{value}' contains quote or backslash characters")
            },
        }
    }
}

impl std::error::Error for InvalidArgument {}
