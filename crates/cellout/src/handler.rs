//! Output handler abstraction.
//!
//! A [`Handler`] is a named rendering strategy with two parts:
//!
//! - [`should_handle`](Handler::should_handle): a pure predicate over the
//!   value's shape and the render context. It must not mutate anything or
//!   force evaluation beyond inspecting structure.
//! - [`render`](Handler::render): produces a [`RenderResult`]. Returning
//!   [`RenderResult::Invalid`] asks the dispatcher to try the next handler;
//!   returning `Err` aborts the whole render.
//!
//! Handlers are usually unit structs implementing the trait. For quick,
//! one-off handlers (tests, plugin glue) use [`from_fn`]:
//!
//! ```rust
//! use cellout::{from_fn, Dispatcher, Element, RenderResult, Value};
//!
//! let mut dispatcher = Dispatcher::default();
//! dispatcher.add_handler(from_fn(
//!     "shout",
//!     |value, _cx| value.as_str().is_some(),
//!     |value, _cx| {
//!         let text = value.as_str().unwrap_or_default().to_uppercase();
//!         Ok(RenderResult::Element(Element::new("strong").text(text)))
//!     },
//! ));
//!
//! let el = dispatcher.render_value(&Value::from("hi"), false).unwrap().unwrap();
//! assert_eq!(el.to_html(), "<strong>HI</strong>");
//! ```

use std::fmt;

use cellout_value::Value;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::result::RenderResult;

/// A rendering strategy consulted by the dispatcher in registry order.
///
/// # Single-Threaded Design
///
/// Rendering runs on the UI thread, so handlers don't require `Send + Sync`.
pub trait Handler {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Whether this handler claims the value.
    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool;

    /// Renders a value this handler claimed.
    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError>;
}

/// Predicate half of a closure-built handler.
pub type PredicateFn = Box<dyn Fn(&Value, &RenderContext<'_>) -> bool>;

/// Render half of a closure-built handler.
pub type RenderFn = Box<dyn Fn(&Value, &RenderContext<'_>) -> Result<RenderResult, RenderError>>;

/// A handler built from a pair of closures. See [`from_fn`].
pub struct FnHandler {
    name: String,
    predicate: PredicateFn,
    render: RenderFn,
}

impl Handler for FnHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool {
        (self.predicate)(value, cx)
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        (self.render)(value, cx)
    }
}

impl fmt::Debug for FnHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Creates a handler from a predicate closure and a render closure.
pub fn from_fn<P, R>(name: impl Into<String>, predicate: P, render: R) -> FnHandler
where
    P: Fn(&Value, &RenderContext<'_>) -> bool + 'static,
    R: Fn(&Value, &RenderContext<'_>) -> Result<RenderResult, RenderError> + 'static,
{
    FnHandler {
        name: name.into(),
        predicate: Box::new(predicate),
        render: Box::new(render),
    }
}
