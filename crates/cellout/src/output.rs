//! Cell output display.
//!
//! A [`CellOutput`] is what a notebook cell hands to the renderer once its code
//! has run: whether output should be shown at all, and the value produced.
//! Cells with nothing to show get an empty placeholder so the layout keeps a
//! slot for them.

use cellout_value::Value;

use crate::dispatch::Dispatcher;
use crate::error::RenderError;
use crate::markup::Element;

/// The result of running one cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellOutput {
    /// Whether the cell's output is displayed.
    pub render: bool,
    /// The evaluated value; `None` before the cell has run.
    pub value: Option<Value>,
}

impl CellOutput {
    /// Output of a cell that ran and should be displayed.
    pub fn shown(value: Value) -> Self {
        Self {
            render: true,
            value: Some(value),
        }
    }

    /// Renders the cell's value at top level, or the empty placeholder when
    /// output is hidden, missing, undefined or unclaimed by every handler.
    pub fn to_element(&self, dispatcher: &Dispatcher) -> Result<Element, RenderError> {
        let value = match &self.value {
            Some(value) if self.render && !value.is_undefined() => value,
            _ => return Ok(empty_resultset()),
        };
        Ok(dispatcher
            .render_value(value, false)?
            .unwrap_or_else(empty_resultset))
    }
}

/// The placeholder shown for cells without output.
pub fn empty_resultset() -> Element {
    Element::new("div").class("empty-resultset")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_fn, HandlerRegistry, RenderConfig, RenderResult};

    const EMPTY: &str = r#"<div class="empty-resultset"></div>"#;

    #[test]
    fn hidden_output_is_empty() {
        let output = CellOutput {
            render: false,
            value: Some(Value::from(1)),
        };
        let html = output.to_element(&Dispatcher::default()).unwrap().to_html();
        assert_eq!(html, EMPTY);
    }

    #[test]
    fn missing_and_undefined_are_empty() {
        let dispatcher = Dispatcher::default();
        assert_eq!(CellOutput::default().to_element(&dispatcher).unwrap().to_html(), EMPTY);
        let undefined = CellOutput::shown(Value::Undefined);
        assert_eq!(undefined.to_element(&dispatcher).unwrap().to_html(), EMPTY);
    }

    #[test]
    fn shown_value_renders_top_level() {
        let output = CellOutput::shown(Value::from(vec![Value::from(1)]));
        let el = output.to_element(&Dispatcher::default()).unwrap();
        assert!(el.text_content().starts_with("1 element array"));
    }

    #[test]
    fn declined_value_reaches_builtin() {
        let mut dispatcher =
            Dispatcher::with_registry(HandlerRegistry::default(), RenderConfig::default());
        dispatcher.add_handler(from_fn(
            "null-only",
            |value, _| value.is_null(),
            |_, _| Ok(RenderResult::Invalid),
        ));
        let el = CellOutput::shown(Value::Null)
            .to_element(&dispatcher)
            .unwrap();
        assert_eq!(el.to_html(), "<pre>null</pre>");
    }
}
