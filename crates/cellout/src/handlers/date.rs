//! Dates, rendered with the runtime's default string conversion.

use cellout_value::Value;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::result::RenderResult;
use crate::util::html_escape;

#[derive(Debug, Clone, Copy, Default)]
pub struct DateHandler;

impl Handler for DateHandler {
    fn name(&self) -> &str {
        "date"
    }

    fn should_handle(&self, value: &Value, _cx: &RenderContext<'_>) -> bool {
        value.as_date().is_some()
    }

    fn render(&self, value: &Value, _cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        Ok(match value.as_date() {
            Some(date) => RenderResult::Markup(html_escape(&Value::date_string(date))),
            None => RenderResult::Invalid,
        })
    }
}
