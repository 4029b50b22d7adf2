//! Runtime values produced by evaluating notebook code.
//!
//! The [`Value`] enum is a closed, tagged representation of whatever an
//! evaluation produced. Renderers never probe fields at run time; they match
//! on the variant (and on the shape helpers in [`crate::shape`]).

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::host::HostObject;

/// An insertion-ordered string-keyed map, the object form of a [`Value`].
pub type Object = IndexMap<String, Value>;

/// A dynamically-typed evaluation result.
///
/// # Example
///
/// ```
/// use cellout_value::{Value, ValueKind};
///
/// let v = Value::from(vec![Value::from(1), Value::from("two")]);
/// assert_eq!(v.kind(), ValueKind::Array);
/// assert_eq!(v.as_array().map(|a| a.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value (distinct from `Null`).
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar. All numbers are doubles, as in the evaluating runtime.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Key/value object with insertion-ordered keys.
    Object(Object),
    /// A point in time.
    Date(DateTime<Utc>),
    /// A callable, described by its name (empty for anonymous functions).
    Function {
        /// Declared name of the function.
        name: String,
    },
    /// A thrown or constructed error object.
    Error {
        /// Constructor name, e.g. `TypeError`.
        name: String,
        /// Error message.
        message: String,
    },
    /// A unique symbol with an optional description.
    Symbol(Option<String>),
    /// An opaque object owned by the embedding runtime.
    Host(Rc<dyn HostObject>),
}

/// The variant tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Date,
    Function,
    Error,
    Symbol,
    Host,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Date => "date",
            ValueKind::Function => "function",
            ValueKind::Error => "error",
            ValueKind::Symbol => "symbol",
            ValueKind::Host => "host",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the variant tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Date(_) => ValueKind::Date,
            Value::Function { .. } => ValueKind::Function,
            Value::Error { .. } => ValueKind::Error,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Host(_) => ValueKind::Host,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for numbers.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_host(&self) -> Option<&Rc<dyn HostObject>> {
        match self {
            Value::Host(host) => Some(host),
            _ => None,
        }
    }

    /// Wraps a host object.
    pub fn host<H: HostObject + 'static>(object: H) -> Self {
        Value::Host(Rc::new(object))
    }

    /// The runtime's default string conversion for dates.
    ///
    /// ```
    /// use cellout_value::Value;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let date = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
    /// assert_eq!(
    ///     Value::date_string(&date),
    ///     "Sat Mar 09 2024 14:05:00 GMT+0000 (Coordinated Universal Time)"
    /// );
    /// ```
    pub fn date_string(date: &DateTime<Utc>) -> String {
        date.format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            .to_string()
    }
}

/// Formats a number the way the evaluating runtime prints it.
///
/// Integral values print without a fractional part, non-finite values print
/// as `NaN`, `Infinity` and `-Infinity`, and negative zero prints as `0`.
///
/// ```
/// use cellout_value::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Function { name: a }, Value::Function { name: b }) => a == b,
            (
                Value::Error {
                    name: an,
                    message: am,
                },
                Value::Error {
                    name: bn,
                    message: bm,
                },
            ) => an == bn && am == bm,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            // Host objects have identity, not structure.
            (Value::Host(a), Value::Host(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::Date(dt)
    }
}

impl<V: Into<Value>> FromIterator<(String, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
