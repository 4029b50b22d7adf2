//! Render-time context passed to handlers.
//!
//! A [`RenderContext`] tells a handler two things: whether the value being
//! rendered already sits inside a container that is rendering it (the
//! `in_container` flag), and how to render nested values (through the
//! dispatcher that invoked it).
//!
//! # The `in_container` flag
//!
//! Container handlers (tables, matrices, arrays) only claim top-level values.
//! When a table cell itself holds a table-shaped value, the nested render runs
//! with `in_container = true`, so the cell falls through to a compact handler
//! instead of growing its own pagination and summary chrome.
//!
//! ```rust
//! use cellout::{Dispatcher, Value};
//! use serde_json::json;
//!
//! let dispatcher = Dispatcher::default();
//! let nested = Value::from(json!([1, 2, 3]));
//!
//! let top = dispatcher.render_value(&nested, false).unwrap().unwrap();
//! assert!(top.to_html().contains("3 element array"));
//!
//! let inner = dispatcher.render_value(&nested, true).unwrap().unwrap();
//! assert!(!inner.to_html().contains("element array"));
//! ```

use cellout_value::Value;

use crate::config::RenderConfig;
use crate::dispatch::Dispatcher;
use crate::error::RenderError;
use crate::markup::{Element, Node};

/// Information available to a handler while it renders one value.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// True when the value is nested inside a container that is rendering it.
    pub in_container: bool,

    dispatcher: &'a Dispatcher,
}

impl<'a> RenderContext<'a> {
    /// Creates a context bound to a dispatcher.
    pub fn new(dispatcher: &'a Dispatcher, in_container: bool) -> Self {
        Self {
            in_container,
            dispatcher,
        }
    }

    /// The active render configuration.
    pub fn config(&self) -> &'a RenderConfig {
        self.dispatcher.config()
    }

    pub fn dispatcher(&self) -> &'a Dispatcher {
        self.dispatcher
    }

    /// Renders a nested value with `in_container = true`.
    pub fn render_nested(&self, value: &Value) -> Result<Option<Element>, RenderError> {
        self.dispatcher.render_value(value, true)
    }

    /// Renders a nested value into child nodes: nothing when no handler
    /// produced output.
    pub fn nested_nodes(&self, value: &Value) -> Result<Vec<Node>, RenderError> {
        Ok(self
            .render_nested(value)?
            .map(Node::Element)
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_exposes_config() {
        let dispatcher = Dispatcher::default();
        let cx = RenderContext::new(&dispatcher, false);
        assert_eq!(cx.config().page_size, 10);
        assert!(!cx.in_container);
    }

    #[test]
    fn render_nested_sets_in_container() {
        let dispatcher = Dispatcher::default();
        let cx = RenderContext::new(&dispatcher, false);
        let el = cx
            .render_nested(&Value::from(vec![Value::from(1)]))
            .unwrap()
            .unwrap();
        // arrays inside a container go to the inspector, not the array view
        assert!(el.find_by_class("data-set-info").is_empty());
    }

    #[test]
    fn nested_nodes_wraps_output() {
        let dispatcher = Dispatcher::default();
        let cx = RenderContext::new(&dispatcher, true);
        assert_eq!(cx.nested_nodes(&Value::Null).unwrap().len(), 1);
    }
}
