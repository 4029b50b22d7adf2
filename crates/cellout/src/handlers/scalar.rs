//! Plain spans for strings and numbers.
//!
//! Registered only when [`RenderConfig::scalar_spans`](crate::RenderConfig)
//! is set; by default scalars go to the inspector.

use cellout_value::{format_number, Value};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::result::RenderResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarHandler;

impl Handler for ScalarHandler {
    fn name(&self) -> &str {
        "scalar"
    }

    fn should_handle(&self, value: &Value, _cx: &RenderContext<'_>) -> bool {
        matches!(value, Value::String(_) | Value::Number(_))
    }

    fn render(&self, value: &Value, _cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            _ => return Ok(RenderResult::Invalid),
        };
        Ok(Element::new("span").class("array-output").text(text).into())
    }
}
