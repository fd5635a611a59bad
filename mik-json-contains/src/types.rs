//! Core types for JSON_CONTAINS expressions.

use crate::error::InvalidArgument;
use std::fmt;
use std::str::FromStr;

/// JSON path used when a field is given without one.
pub const DEFAULT_PATH: &str = "$";

/// Boolean operator joining the clauses of a combined request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Mode {
    /// All values must be contained: `AND`
    And,
    /// At least one value must be contained: `OR`
    Or,
}

impl Mode {
    /// SQL keyword for this mode.
    #[inline]
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidArgument;

    /// Parse `"AND"` / `"OR"`, ignoring ASCII case.
    ///
    /// ```
    /// use mik_json_contains::Mode;
    ///
    /// assert_eq!("or".parse::<Mode>(), Ok(Mode::Or));
    /// assert_eq!("And".parse::<Mode>(), Ok(Mode::And));
    /// assert!("XOR".parse::<Mode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Self::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Self::Or)
        } else {
            Err(InvalidArgument::UnknownMode(s.to_string()))
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A JSON column and the path searched inside it.
///
/// Both parts are guaranteed non-empty; the constructors are the only way
/// to obtain a `FieldSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: String,
    path: String,
}

impl FieldSpec {
    /// Create a field searched at the document root (`$`).
    ///
    /// ```
    /// use mik_json_contains::FieldSpec;
    ///
    /// let field = FieldSpec::new("tags").unwrap();
    /// assert_eq!(field.path(), "$");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidArgument> {
        Self::with_path(name, DEFAULT_PATH)
    }

    /// Create a field searched at the given JSON path.
    ///
    /// ```
    /// use mik_json_contains::{FieldSpec, InvalidArgument};
    ///
    /// let field = FieldSpec::with_path("meta", "$.tags").unwrap();
    /// assert_eq!(field.name(), "meta");
    ///
    /// assert_eq!(FieldSpec::with_path("meta", ""), Err(InvalidArgument::EmptyPath));
    /// ```
    pub fn with_path(
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidArgument::EmptyFieldName);
        }

        let path = path.into();
        if path.is_empty() {
            return Err(InvalidArgument::EmptyPath);
        }

        Ok(Self { name, path })
    }

    /// Column name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// JSON path inside the column.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl TryFrom<&str> for FieldSpec {
    type Error = InvalidArgument;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<String> for FieldSpec {
    type Error = InvalidArgument;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<(&str, &str)> for FieldSpec {
    type Error = InvalidArgument;

    fn try_from((name, path): (&str, &str)) -> Result<Self, Self::Error> {
        Self::with_path(name, path)
    }
}

impl TryFrom<(String, String)> for FieldSpec {
    type Error = InvalidArgument;

    fn try_from((name, path): (String, String)) -> Result<Self, Self::Error> {
        Self::with_path(name, path)
    }
}

/// A value searched for inside the JSON document.
///
/// Displayed the way the value is spliced into the SQL template:
/// `true` as `1`, `false` and `null` as nothing, integers as-is, floats
/// with 14 significant digits (`0.3`, `2`, `1.0E+20`, `1.0E-7`).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, *x),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// Significant digits kept when a float is written as text.
const FLOAT_DIGITS: i32 = 14;

/// Write a float like a `%.14G` conversion: fixed notation for exponents in
/// `-4..14`, otherwise `<mantissa>E<sign><exp>` with at least one decimal.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NAN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "INF" } else { "-INF" });
    }

    let sci = format!("{x:.13e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or_default();

    if (-4..FLOAT_DIGITS).contains(&exp) {
        let decimals = usize::try_from(FLOAT_DIGITS - 1 - exp).unwrap_or_default();
        f.write_str(trim_fraction(&format!("{x:.decimals$}")))
    } else {
        let mantissa = trim_fraction(mantissa);
        let point = if mantissa.contains('.') { "" } else { ".0" };
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}{point}E{sign}{}", exp.unsigned_abs())
    }
}

/// Drop trailing fractional zeros and a dangling decimal point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<u32> for Scalar {
    fn from(i: u32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// What to search for and how to combine it.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Request {
    /// One value, one clause, no parentheses.
    Single {
        /// Column and path.
        field: FieldSpec,
        /// Value searched for.
        value: Scalar,
    },
    /// One clause per value, joined by `mode` and parenthesized.
    Combined {
        /// Operator joining the clauses.
        mode: Mode,
        /// Column and path.
        field: FieldSpec,
        /// Values searched for, in output order. Must not be empty.
        values: Vec<Scalar>,
    },
}

impl Request {
    /// Match a single value.
    pub fn single(field: FieldSpec, value: impl Into<Scalar>) -> Self {
        Self::Single {
            field,
            value: value.into(),
        }
    }

    /// Match values combined with `mode`.
    pub fn combined<I, V>(mode: Mode, field: FieldSpec, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::Combined {
            mode,
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Match when any of the values is contained (`OR`).
    pub fn any<I, V>(field: FieldSpec, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::combined(Mode::Or, field, values)
    }

    /// Match when all of the values are contained (`AND`).
    pub fn all<I, V>(field: FieldSpec, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        Self::combined(Mode::And, field, values)
    }

    /// The field this request searches.
    #[must_use]
    pub const fn field(&self) -> &FieldSpec {
        match self {
            Self::Single { field, .. } | Self::Combined { field, .. } => field,
        }
    }
}

/// A finished SQL fragment, ready to embed in a larger statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "Expression must be embedded in a query"]
pub struct Expression(String);

impl Expression {
    pub(crate) const fn new(sql: String) -> Self {
        Self(sql)
    }

    /// SQL text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the SQL text.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Expression> for String {
    fn from(expr: Expression) -> Self {
        expr.0
    }
}
