//! Dynamic evaluation-result values for notebook output rendering.
//!
//! `cellout-value` provides the data model that the `cellout` renderer
//! dispatches over:
//!
//! - [`Value`]: a closed sum type covering primitives, arrays, ordered objects,
//!   dates, functions, errors, symbols and opaque host objects
//! - [`HostObject`]: trait for objects owned by the embedding runtime, including
//!   the optional self-render routine
//! - [`shape`]: structural predicates for tabular and matrix data
//! - JSON interop via `From<serde_json::Value>` and [`Value::to_json`]
//!
//! # Example
//!
//! ```rust
//! use cellout_value::{shape, Value, ValueKind};
//! use serde_json::json;
//!
//! let result = Value::from(json!([{"name": "ada", "age": 36}, {"name": "alan", "age": 41}]));
//!
//! assert_eq!(result.kind(), ValueKind::Array);
//! assert!(shape::is_row_collection(&result));
//! // object keys keep their document order
//! assert_eq!(shape::column_keys(&result), ["name", "age"]);
//! ```

mod error;
mod host;
mod json;
pub mod shape;
mod value;

pub use error::ValueError;
pub use host::HostObject;
pub use json::{DATE_TAG, UNDEFINED_TAG};
pub use value::{format_number, Object, Value, ValueKind};
