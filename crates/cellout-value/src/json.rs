//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON cannot express every runtime type, so two single-key tagged objects
//! are recognized on the way in:
//!
//! | JSON | Value |
//! |------|-------|
//! | `{"$date": "2024-03-09T14:05:00Z"}` | [`Value::Date`] |
//! | `{"$undefined": true}` | [`Value::Undefined`] |
//!
//! On the way out, [`Value::to_json`] projects every variant onto plain JSON.
//! The projection is what template-backed renderers see.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as Json};

use crate::error::ValueError;
use crate::value::{Object, Value};

/// Tag key marking an RFC 3339 date payload.
pub const DATE_TAG: &str = "$date";

/// Tag key marking an explicit `undefined`.
pub const UNDEFINED_TAG: &str = "$undefined";

impl Value {
    /// Converts JSON into a value, rejecting malformed tagged payloads.
    ///
    /// ```
    /// use cellout_value::{Value, ValueKind};
    /// use serde_json::json;
    ///
    /// let v = Value::try_from_json(json!({"$date": "2024-03-09T14:05:00Z"})).unwrap();
    /// assert_eq!(v.kind(), ValueKind::Date);
    ///
    /// assert!(Value::try_from_json(json!({"$date": "yesterday"})).is_err());
    /// ```
    pub fn try_from_json(json: Json) -> Result<Value, ValueError> {
        convert(json, true)
    }

    /// Projects this value onto plain JSON.
    ///
    /// Undefined becomes `null`, non-finite numbers become `null`, dates become
    /// RFC 3339 strings, and host objects become an object of their properties.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Value::Date(dt) => Json::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Function { name } => Json::String(format!("function {}()", name)),
            Value::Error { name, message } => {
                let mut map = Map::new();
                map.insert("name".to_string(), Json::String(name.clone()));
                map.insert("message".to_string(), Json::String(message.clone()));
                Json::Object(map)
            }
            Value::Symbol(desc) => {
                Json::String(format!("Symbol({})", desc.as_deref().unwrap_or("")))
            }
            Value::Host(host) => Json::Object(
                host.properties()
                    .into_iter()
                    .map(|(k, v)| (k, v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Lenient conversion: malformed tagged payloads stay plain objects.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match convert(json, false) {
            Ok(value) => value,
            // Lenient mode never reports tag errors.
            Err(_) => Value::Undefined,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Integral numbers project as JSON integers so templates print `1`, not `1.0`.
fn number_to_json(n: f64) -> Json {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .unwrap_or(Json::Null)
}

fn convert(json: Json, strict: bool) -> Result<Value, ValueError> {
    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert(item, strict))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(map) => match tagged(&map) {
            Some(Ok(value)) => value,
            Some(Err(err)) if strict => return Err(err),
            _ => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, convert(v, strict)?)))
                    .collect::<Result<Object, ValueError>>()?,
            ),
        },
    };
    Ok(value)
}

fn tagged(map: &Map<String, Json>) -> Option<Result<Value, ValueError>> {
    if map.len() != 1 {
        return None;
    }
    if let Some(raw) = map.get(DATE_TAG) {
        let parsed = match raw.as_str() {
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| Value::Date(dt.with_timezone(&Utc)))
                .map_err(|source| ValueError::InvalidDate {
                    input: text.to_string(),
                    source,
                }),
            None => Err(ValueError::InvalidTag {
                tag: DATE_TAG,
                expected: "an RFC 3339 string",
            }),
        };
        return Some(parsed);
    }
    if let Some(raw) = map.get(UNDEFINED_TAG) {
        let parsed = match raw {
            Json::Bool(true) => Ok(Value::Undefined),
            _ => Err(ValueError::InvalidTag {
                tag: UNDEFINED_TAG,
                expected: "true",
            }),
        };
        return Some(parsed);
    }
    None
}
