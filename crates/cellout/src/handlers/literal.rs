//! Fixed literals for `null` and `undefined`.

use cellout_value::Value;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::result::RenderResult;

/// Renders `null` as a fixed literal, nested or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl Handler for NullHandler {
    fn name(&self) -> &str {
        "null"
    }

    fn should_handle(&self, value: &Value, _cx: &RenderContext<'_>) -> bool {
        value.is_null()
    }

    fn render(&self, _value: &Value, _cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        Ok(Element::new("pre").text("null").into())
    }
}

/// Renders `undefined` as a fixed literal, nested or not.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedHandler;

impl Handler for UndefinedHandler {
    fn name(&self) -> &str {
        "undefined"
    }

    fn should_handle(&self, value: &Value, _cx: &RenderContext<'_>) -> bool {
        value.is_undefined()
    }

    fn render(&self, _value: &Value, _cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        Ok(Element::new("pre").text("undefined").into())
    }
}
