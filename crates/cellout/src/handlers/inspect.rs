//! Structured value inspector, the catch-all handler.
//!
//! Any value no other handler claims ends up here. Primitives render in long
//! form inside a typed span:
//!
//! | Value | Shown as |
//! |-------|----------|
//! | string | `"quoted"` |
//! | number | `1.5`, `NaN`, `-Infinity` |
//! | function | `function name()` |
//! | error | `TypeError: message` |
//! | symbol | `Symbol(desc)` |
//! | date | the date string |
//!
//! Arrays, objects and host objects render as collapsible `<details>` nodes
//! whose `<summary>` is a one-line preview. Expansion stops at
//! `inspector_depth` levels and each node lists at most `inspector_max_props`
//! entries, so every value renders in bounded size.

use std::borrow::Cow;

use cellout_value::{format_number, Value};

use crate::config::RenderConfig;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::result::RenderResult;

/// Entries shown in a one-line preview.
const PREVIEW_ENTRIES: usize = 5;

/// Builds inspector trees for arbitrary values.
#[derive(Debug, Clone, Copy)]
pub struct Inspector {
    max_depth: usize,
    max_props: usize,
}

impl Inspector {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            max_depth: config.inspector_depth,
            max_props: config.inspector_max_props.max(1),
        }
    }

    /// Renders `value` under a `div.object-inspector` root.
    pub fn inspect(&self, value: &Value) -> Element {
        Element::new("div")
            .class("object-inspector")
            .child(self.node(value, 0))
    }

    fn node(&self, value: &Value, depth: usize) -> Element {
        let Some(total) = entry_count(value) else {
            return Element::new("span")
                .class(format!("objectBox objectBox-{}", value.kind()))
                .text(long_form(value));
        };
        if total == 0 || depth >= self.max_depth {
            return Element::new("span")
                .class(format!("objectBox objectBox-{}", value.kind()))
                .text(preview(value));
        }

        let mut list = Element::new("ul");
        for (key, child) in entries(value, self.max_props) {
            list.push(
                Element::new("li")
                    .child(Element::new("span").class("key").text(key))
                    .text(": ")
                    .child(self.node(&child, depth + 1)),
            );
        }
        if total > self.max_props {
            list.push(
                Element::new("li")
                    .class("more")
                    .text(format!("… {} more", total - self.max_props)),
            );
        }

        Element::new("details")
            .class("inspector-node")
            .attr("data-depth", depth.to_string())
            .child(Element::new("summary").text(preview(value)))
            .child(list)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InspectorHandler;

impl Handler for InspectorHandler {
    fn name(&self) -> &str {
        "inspector"
    }

    fn should_handle(&self, _value: &Value, _cx: &RenderContext<'_>) -> bool {
        true
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        Ok(Inspector::new(cx.config()).inspect(value).into())
    }
}

/// Number of expandable entries, or `None` for primitives.
fn entry_count(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(obj) => Some(obj.len()),
        Value::Host(host) => Some(host.properties().len()),
        _ => None,
    }
}

/// The first `limit` entries of a container as key/value pairs.
fn entries(value: &Value, limit: usize) -> Vec<(String, Cow<'_, Value>)> {
    match value {
        Value::Array(items) => items
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, v)| (i.to_string(), Cow::Borrowed(v)))
            .collect(),
        Value::Object(obj) => obj
            .iter()
            .take(limit)
            .map(|(k, v)| (k.clone(), Cow::Borrowed(v)))
            .collect(),
        Value::Host(host) => host
            .properties()
            .into_iter()
            .take(limit)
            .map(|(k, v)| (k, Cow::Owned(v)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Full text of a primitive.
fn long_form(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".into(),
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(s) => format!("{:?}", s),
        Value::Date(d) => Value::date_string(d),
        Value::Function { name } => format!("function {}()", name),
        Value::Error { name, message } if message.is_empty() => name.clone(),
        Value::Error { name, message } => format!("{}: {}", name, message),
        Value::Symbol(Some(desc)) => format!("Symbol({})", desc),
        Value::Symbol(None) => "Symbol()".into(),
        Value::Array(_) | Value::Object(_) | Value::Host(_) => short_form(value),
    }
}

/// Compact text used inside previews; containers are not expanded.
fn short_form(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("Array({})", items.len()),
        Value::Object(obj) if obj.is_empty() => "{}".into(),
        Value::Object(_) => "{…}".into(),
        Value::Host(host) => host.class_name().to_string(),
        _ => long_form(value),
    }
}

/// One-line summary of a container.
fn preview(value: &Value) -> String {
    let (label, open, close, total) = match value {
        Value::Array(items) => (format!("Array({})", items.len()), "[", "]", items.len()),
        Value::Object(obj) => ("Object".to_string(), "{", "}", obj.len()),
        Value::Host(host) => (
            host.class_name().to_string(),
            "{",
            "}",
            host.properties().len(),
        ),
        _ => return long_form(value),
    };
    if total == 0 {
        return format!("{} {}{}", label, open, close);
    }

    let is_array = matches!(value, Value::Array(_));
    let mut parts: Vec<String> = entries(value, PREVIEW_ENTRIES)
        .into_iter()
        .map(|(key, child)| {
            if is_array {
                short_form(&child)
            } else {
                format!("{}: {}", key, short_form(&child))
            }
        })
        .collect();
    if total > PREVIEW_ENTRIES {
        parts.push("…".into());
    }
    format!("{} {} {} {}", label, open, parts.join(", "), close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellout_value::HostObject;
    use serde_json::json;

    fn inspect(value: &Value) -> Element {
        Inspector::new(&RenderConfig::default()).inspect(value)
    }

    fn summaries(el: &Element) -> Vec<String> {
        el.find_all(&|e: &Element| e.tag() == "summary")
            .iter()
            .map(|s| s.text_content())
            .collect()
    }

    #[derive(Debug)]
    struct Point;

    impl HostObject for Point {
        fn class_name(&self) -> &str {
            "Point"
        }

        fn properties(&self) -> Vec<(String, Value)> {
            vec![("x".into(), Value::from(1)), ("y".into(), Value::from(2))]
        }
    }

    #[test]
    fn primitives_in_long_form() {
        let cases = [
            (Value::from("hi \"there\""), r#""hi \"there\"""#),
            (Value::from(1.5), "1.5"),
            (Value::Number(f64::NEG_INFINITY), "-Infinity"),
            (Value::Bool(true), "true"),
            (
                Value::Function {
                    name: "render".into(),
                },
                "function render()",
            ),
            (
                Value::Error {
                    name: "TypeError".into(),
                    message: "x is not a function".into(),
                },
                "TypeError: x is not a function",
            ),
            (Value::Symbol(Some("tag".into())), "Symbol(tag)"),
            (Value::Symbol(None), "Symbol()"),
        ];
        for (value, expected) in cases {
            assert_eq!(inspect(&value).text_content(), expected);
        }
    }

    #[test]
    fn primitive_spans_carry_kind() {
        let el = inspect(&Value::from("s"));
        assert_eq!(el.find_by_class("objectBox-string").len(), 1);
    }

    #[test]
    fn objects_expand_with_preview() {
        let el = inspect(&Value::from(json!({"a": 1, "b": "x"})));
        assert_eq!(summaries(&el), [r#"Object { a: 1, b: "x" }"#]);
        let keys: Vec<String> = el
            .find_by_class("key")
            .iter()
            .map(|k| k.text_content())
            .collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn nested_containers_collapse_at_depth() {
        let value = Value::from(json!({"outer": {"inner": {"deep": [1, 2]}}}));
        let el = inspect(&value);
        // depth 0 and 1 expand; depth 2 is a summary span
        assert_eq!(el.find_all(&|e: &Element| e.tag() == "details").len(), 2);
        assert!(el.text_content().contains("Object { deep: Array(2) }"));
    }

    #[test]
    fn long_arrays_are_elided() {
        let value = Value::Array((0..25).map(Value::from).collect());
        let el = inspect(&value);
        assert_eq!(el.find_all(&|e: &Element| e.tag() == "li").len(), 11);
        assert_eq!(el.find_by_class("more")[0].text_content(), "… 15 more");
        assert_eq!(summaries(&el), ["Array(25) [ 0, 1, 2, 3, 4, … ]"]);
    }

    #[test]
    fn empty_containers_do_not_expand() {
        assert!(!inspect(&Value::Array(vec![])).to_html().contains("details"));
        assert_eq!(inspect(&Value::from(json!({}))).text_content(), "Object {}");
    }

    #[test]
    fn host_objects_use_class_name() {
        let el = inspect(&Value::host(Point));
        assert_eq!(summaries(&el), ["Point { x: 1, y: 2 }"]);
    }

    #[test]
    fn handler_claims_everything() {
        let dispatcher = crate::Dispatcher::default();
        let cx = RenderContext::new(&dispatcher, false);
        assert!(InspectorHandler.should_handle(&Value::Undefined, &cx));
        let out = InspectorHandler.render(&Value::from("x"), &cx).unwrap();
        assert!(matches!(out, RenderResult::Element(ref el) if el.has_class("object-inspector")));
    }
}
