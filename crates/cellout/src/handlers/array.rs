//! Generic array rendering with head/tail truncation.

use std::ops::Range;

use cellout_value::Value;

use super::data_set_info;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::{Element, Node};
use crate::result::RenderResult;

/// Placed between the head and tail of a truncated array.
pub const ELISION_MARKER: &str = " … ";

/// Renders top-level arrays as a bracketed, comma-separated list.
///
/// Each element is rendered nested inside a `<span class="array-item">`
/// carrying its index. Arrays with at least `array_threshold` elements show
/// only the first `array_head` and last `array_tail` elements; the middle is
/// never rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayHandler;

impl Handler for ArrayHandler {
    fn name(&self) -> &str {
        "array"
    }

    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool {
        !cx.in_container && value.as_array().is_some()
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let Some(items) = value.as_array() else {
            return Ok(RenderResult::Invalid);
        };
        let config = cx.config();
        let len = items.len();

        let mut out = Element::new("div").child(data_set_info(format!("{} element array", len)));
        out.push("[");
        if len < config.array_threshold {
            push_items(&mut out, items, 0..len, cx)?;
        } else {
            let head = config.array_head.min(len);
            let tail_start = len.saturating_sub(config.array_tail).max(head);
            push_items(&mut out, items, 0..head, cx)?;
            out.push(ELISION_MARKER);
            push_items(&mut out, items, tail_start..len, cx)?;
        }
        out.push("]");
        Ok(out.into())
    }
}

fn push_items(
    out: &mut Element,
    items: &[Value],
    range: Range<usize>,
    cx: &RenderContext<'_>,
) -> Result<(), RenderError> {
    let last = range.end.saturating_sub(1);
    for i in range {
        let item = Element::new("span")
            .class("array-item")
            .attr("data-index", i.to_string())
            .children(cx.nested_nodes(&items[i])?);
        out.push(item);
        if i != last {
            out.push(Node::Text(", ".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dispatcher, RenderConfig};

    fn numbers(n: usize) -> Value {
        Value::Array((0..n).map(Value::from).collect())
    }

    fn render(dispatcher: &Dispatcher, value: &Value) -> Element {
        dispatcher.render_value(value, false).unwrap().unwrap()
    }

    fn indices(el: &Element) -> Vec<usize> {
        el.find_by_class("array-item")
            .iter()
            .filter_map(|item| item.get_attr("data-index"))
            .filter_map(|i| i.parse().ok())
            .collect()
    }

    #[test]
    fn short_arrays_render_everything() {
        let el = render(&Dispatcher::default(), &numbers(3));
        assert_eq!(
            el.find_by_class("data-set-info")[0].text_content(),
            "3 element array"
        );
        assert_eq!(indices(&el), [0, 1, 2]);
        assert_eq!(el.text_content(), "3 element array[0, 1, 2]");
    }

    #[test]
    fn empty_array() {
        let el = render(&Dispatcher::default(), &numbers(0));
        assert_eq!(el.text_content(), "0 element array[]");
    }

    #[test]
    fn below_threshold_is_complete() {
        let el = render(&Dispatcher::default(), &numbers(499));
        assert_eq!(indices(&el), (0..499).collect::<Vec<_>>());
        assert!(!el.text_content().contains('…'));
    }

    #[test]
    fn at_threshold_keeps_head_and_tail() {
        let el = render(&Dispatcher::default(), &numbers(500));
        let shown = indices(&el);
        assert_eq!(shown.len(), 200);
        assert_eq!(&shown[..100], (0..100).collect::<Vec<_>>());
        assert_eq!(&shown[100..], (400..500).collect::<Vec<_>>());
        assert_eq!(el.text_content().matches('…').count(), 1);
    }

    #[test]
    fn elision_sits_between_head_and_tail() {
        let el = render(&Dispatcher::default(), &numbers(1000));
        let text = el.text_content();
        assert!(text.contains("98, 99 … 900, 901"));
        assert!(text.ends_with("998, 999]"));
    }

    #[test]
    fn limits_follow_config() {
        let config = RenderConfig {
            array_threshold: 6,
            array_head: 2,
            array_tail: 1,
            ..RenderConfig::default()
        };
        let el = render(&Dispatcher::new(config), &numbers(6));
        assert_eq!(indices(&el), [0, 1, 5]);
    }

    #[test]
    fn elements_render_in_container() {
        let value = Value::from(vec![numbers(2), numbers(1)]);
        // ragged nested arrays are not a matrix
        let el = render(&Dispatcher::default(), &Value::from(vec![value, Value::from(1)]));
        assert_eq!(el.find_by_class("data-set-info").len(), 1);
    }
}
