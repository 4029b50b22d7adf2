//! The render dispatcher.
//!
//! [`Dispatcher::render_value`] walks the registry in order. For each handler
//! whose predicate matches it calls `render` and classifies the result:
//!
//! | Result | Outcome |
//! |--------|---------|
//! | `Markup` | wrapped in a `<div>` as raw markup |
//! | `Node` | its outer markup wrapped in a `<div>` |
//! | `Element` | returned as-is |
//! | `Invalid` | diagnostic logged, next handler tried |
//! | `Err(_)` | returned immediately, no further handlers tried |
//!
//! When every handler is exhausted the dispatcher returns `Ok(None)` and the
//! caller shows an empty placeholder. With the built-in catch-all at the
//! bottom of the registry that only happens if a custom handler breaks the
//! chain.

use std::fmt;

use cellout_value::Value;

use crate::config::RenderConfig;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::registry::HandlerRegistry;

/// Selects and runs a handler for each value.
///
/// The dispatcher owns its registry and configuration. Construct one at
/// startup, register plugin handlers with [`add_handler`](Self::add_handler),
/// then render with [`render_value`](Self::render_value). Registration takes
/// `&mut self`, so it cannot overlap an in-flight render.
pub struct Dispatcher {
    registry: HandlerRegistry,
    config: RenderConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the built-in handlers for this configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(&config),
            config,
        }
    }

    /// Creates a dispatcher around an existing registry.
    pub fn with_registry(registry: HandlerRegistry, config: RenderConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Registers a handler with priority over every existing handler.
    pub fn add_handler<H: Handler + 'static>(&mut self, handler: H) {
        self.registry.add_handler(handler);
    }

    /// Renders a value with the first matching handler that yields output.
    ///
    /// `in_container` is true when the value is an element of a container
    /// that is already rendering it.
    pub fn render_value(
        &self,
        value: &Value,
        in_container: bool,
    ) -> Result<Option<Element>, RenderError> {
        let cx = RenderContext::new(self, in_container);
        for handler in self.registry.iter() {
            if !handler.should_handle(value, &cx) {
                continue;
            }
            match handler.render(value, &cx)?.into_element() {
                Some(el) => {
                    log::trace!("'{}' rendered {} value", handler.name(), value.kind());
                    return Ok(Some(el));
                }
                None => {
                    log::warn!(
                        "unknown output handler result from '{}' for {} value; trying next handler",
                        handler.name(),
                        value.kind()
                    );
                }
            }
        }
        Ok(None)
    }

    /// Renders a top-level value straight to HTML.
    pub fn render_html(&self, value: &Value) -> Result<Option<String>, RenderError> {
        Ok(self.render_value(value, false)?.map(|el| el.to_html()))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}
