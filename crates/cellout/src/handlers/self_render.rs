//! Host objects that render themselves.

use cellout_value::Value;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::result::RenderResult;

/// Delegates to a host object's own render routine.
///
/// Only a string of markup is accepted. Any other return value is reported as
/// [`RenderResult::Invalid`] so the dispatcher moves on; a failing routine
/// propagates its error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfRenderHandler;

impl Handler for SelfRenderHandler {
    fn name(&self) -> &str {
        "self-render"
    }

    fn should_handle(&self, value: &Value, _cx: &RenderContext<'_>) -> bool {
        value.as_host().is_some_and(|host| host.has_render())
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let Some(host) = value.as_host() else {
            return Ok(RenderResult::Invalid);
        };
        Ok(match host.render(cx.in_container)? {
            Value::String(markup) => RenderResult::Markup(markup),
            _ => RenderResult::Invalid,
        })
    }
}
