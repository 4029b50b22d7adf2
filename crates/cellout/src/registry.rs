//! Ordered handler registry.
//!
//! [`HandlerRegistry`] holds the handlers the dispatcher consults, in priority
//! order. Order is the only ranking: the dispatcher takes the first handler
//! whose predicate matches, never scoring or combining candidates.
//!
//! # Built-in Order
//!
//! | Priority | Handler | Claims |
//! |----------|---------|--------|
//! | 1 | `null` | `null` |
//! | 2 | `undefined` | `undefined` |
//! | 3 | `self-render` | host objects with their own render routine |
//! | 4 | `row-collection` | top-level arrays of same-keyed objects |
//! | 5 | `matrix` | top-level rectangular numeric grids |
//! | 6 | `array` | top-level arrays |
//! | 7 | `date` | dates |
//! | 8 | `scalar` | strings and numbers (only with `scalar_spans`) |
//! | 9 | `inspector` | everything |
//!
//! # Growth Only
//!
//! The registry only grows. [`add_handler`](HandlerRegistry::add_handler)
//! always prepends, so the newest handler outranks all earlier ones, built-ins
//! included. There is no removal or reset, which keeps the catch-all inspector
//! at the bottom for the registry's whole lifetime.

use std::collections::VecDeque;
use std::fmt;

use crate::config::RenderConfig;
use crate::handler::Handler;
use crate::handlers::{
    ArrayHandler, DateHandler, InspectorHandler, MatrixHandler, NullHandler, RowCollectionHandler,
    ScalarHandler, SelfRenderHandler, UndefinedHandler,
};

/// The ordered set of handlers a dispatcher walks.
pub struct HandlerRegistry {
    handlers: VecDeque<Box<dyn Handler>>,
}

impl HandlerRegistry {
    /// Creates a registry seeded with the built-in handlers.
    pub fn new(config: &RenderConfig) -> Self {
        let mut handlers: VecDeque<Box<dyn Handler>> = VecDeque::new();
        handlers.push_back(Box::new(NullHandler));
        handlers.push_back(Box::new(UndefinedHandler));
        handlers.push_back(Box::new(SelfRenderHandler));
        handlers.push_back(Box::new(RowCollectionHandler));
        handlers.push_back(Box::new(MatrixHandler));
        handlers.push_back(Box::new(ArrayHandler));
        handlers.push_back(Box::new(DateHandler));
        if config.scalar_spans {
            handlers.push_back(Box::new(ScalarHandler));
        }
        handlers.push_back(Box::new(InspectorHandler));
        Self { handlers }
    }

    /// Registers a handler ahead of every handler already present.
    pub fn add_handler<H: Handler + 'static>(&mut self, handler: H) {
        self.add_boxed(Box::new(handler));
    }

    /// Registers an already-boxed handler ahead of every handler already present.
    pub fn add_boxed(&mut self, handler: Box<dyn Handler>) {
        log::debug!("registering output handler '{}'", handler.name());
        self.handlers.push_front(handler);
    }

    /// Handlers in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Handler> {
        self.handlers.iter().map(|h| h.as_ref())
    }

    /// Handler names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always `false` for registries built with [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}
