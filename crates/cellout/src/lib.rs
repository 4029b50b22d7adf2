//! # Cellout - Notebook Output Rendering
//!
//! `cellout` turns the values produced by notebook cells into display
//! elements. Each value is offered to an ordered list of output handlers; the
//! first handler whose predicate matches renders it.
//!
//! ## Core Concepts
//!
//! - [`Dispatcher`]: owns the registry and configuration, renders values
//! - [`HandlerRegistry`]: the ordered handler list; new handlers are prepended
//! - [`Handler`]: a predicate plus a render routine, see [`from_fn`]
//! - [`RenderResult`]: markup, a foreign node, a native [`Element`], or invalid
//! - [`RenderContext`]: carries the `in_container` flag for nested renders
//! - [`CellOutput`]: a cell's value and display flag, with the empty placeholder
//! - [Plugins](plugin): handlers declared as data and rendered with templates
//!
//! ## Quick Start
//!
//! ```rust
//! use cellout::{Dispatcher, Value};
//! use serde_json::json;
//!
//! let dispatcher = Dispatcher::default();
//!
//! let rows = Value::from(json!([
//!     {"name": "ada", "age": 36},
//!     {"name": "bob", "age": 41},
//! ]));
//! let table = dispatcher.render_value(&rows, false).unwrap().unwrap();
//! assert!(table.text_content().starts_with("array of objects: 2 rows, 2 columns"));
//!
//! // columns keep the key order of the first row
//! let headers: Vec<String> = table
//!     .find_all(&|el: &cellout::Element| el.tag() == "th")
//!     .iter()
//!     .map(|th| th.text_content())
//!     .collect();
//! assert_eq!(headers, ["name", "age"]);
//!
//! let html = dispatcher.render_html(&Value::Null).unwrap();
//! assert_eq!(html.as_deref(), Some("<pre>null</pre>"));
//! ```
//!
//! ## Built-in Handlers
//!
//! | Handler | Claims | Output |
//! |---------|--------|--------|
//! | `null`, `undefined` | the literal | `<pre>null</pre>` |
//! | `self-render` | host objects that render themselves | their markup |
//! | `row-collection` | top-level arrays of same-keyed objects | paged table |
//! | `matrix` | top-level numeric grids | shape summary and preview grid |
//! | `array` | top-level arrays | bracketed list, head and tail past 500 |
//! | `date` | dates | the date string |
//! | `scalar` | strings and numbers, opt-in | `<span class="array-output">` |
//! | `inspector` | everything else | expandable structured view |
//!
//! ## Custom Handlers
//!
//! ```rust
//! use cellout::{from_fn, Dispatcher, Element, RenderResult, Value};
//!
//! let mut dispatcher = Dispatcher::default();
//! dispatcher.add_handler(from_fn(
//!     "nulls-are-empty",
//!     |value, _| value.is_null(),
//!     |_, _| Ok(Element::new("em").text("nothing").into()),
//! ));
//!
//! let el = dispatcher.render_value(&Value::Null, false).unwrap().unwrap();
//! assert_eq!(el.to_html(), "<em>nothing</em>");
//! ```

mod config;
mod context;
mod dispatch;
mod error;
mod handler;
pub mod handlers;
mod markup;
mod output;
pub mod plugin;
mod registry;
mod result;
mod util;

pub use config::{
    RenderConfig, ARRAY_HEAD, ARRAY_TAIL, ARRAY_TRUNCATION_THRESHOLD, MATRIX_PREVIEW, PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
pub use context::RenderContext;
pub use dispatch::Dispatcher;
pub use error::RenderError;
pub use handler::{from_fn, FnHandler, Handler, PredicateFn, RenderFn};
pub use markup::{Element, Node};
pub use output::{empty_resultset, CellOutput};
pub use plugin::{
    parse_plugins_json, parse_plugins_yaml, register_plugins, Matcher, PluginDefinition,
    TemplateHandler,
};
pub use registry::HandlerRegistry;
pub use result::{ForeignNode, RenderResult};
pub use util::{html_escape, truncate_to_width};

pub use cellout_value::{format_number, shape, HostObject, Object, Value, ValueError, ValueKind};
