//! End-to-end rendering through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use cellout::{
    from_fn, parse_plugins_yaml, register_plugins, CellOutput, Dispatcher, Element, ForeignNode,
    HostObject, RenderConfig, RenderError, RenderResult, Value, ValueError,
};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug)]
struct Svg(&'static str);

impl ForeignNode for Svg {
    fn outer_html(&self) -> String {
        format!("<svg>{}</svg>", self.0)
    }
}

#[derive(Debug)]
struct Chart {
    title: &'static str,
}

impl HostObject for Chart {
    fn class_name(&self) -> &str {
        "Chart"
    }

    fn properties(&self) -> Vec<(String, Value)> {
        vec![("title".into(), Value::from(self.title))]
    }

    fn has_render(&self) -> bool {
        true
    }

    fn render(&self, in_container: bool) -> Result<Value, ValueError> {
        if self.title.is_empty() {
            return Err(ValueError::host("Chart", "missing title"));
        }
        let class = if in_container { "chart mini" } else { "chart" };
        Ok(Value::from(format!(
            "<figure class=\"{}\">{}</figure>",
            class, self.title
        )))
    }
}

fn rows(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| Value::from(json!({"a": i, "b": i * 2})))
            .collect(),
    )
}

// ============================================================================
// Built-in handlers
// ============================================================================

#[test]
fn twenty_five_rows_page_by_ten() {
    let el = Dispatcher::default()
        .render_value(&rows(25), false)
        .unwrap()
        .unwrap();
    assert_eq!(
        el.find_by_class("data-set-info")[0].text_content(),
        "array of objects: 25 rows, 2 columns"
    );
    let paged = el.find_by_class("paged-table")[0];
    assert_eq!(paged.get_attr("data-page-size"), Some("10"));
    assert_eq!(
        el.find_by_class("page-info")[0].text_content(),
        "Page 1 of 3"
    );
}

#[test]
fn mixed_key_sets_are_plain_arrays() {
    let value = Value::from(json!([{"a": 1}, {"b": 2}]));
    let el = Dispatcher::default()
        .render_value(&value, false)
        .unwrap()
        .unwrap();
    assert_eq!(
        el.find_by_class("data-set-info")[0].text_content(),
        "2 element array"
    );
}

#[test]
fn ragged_grids_are_plain_arrays() {
    let value = Value::from(json!([[1, 2], [3]]));
    let html = Dispatcher::default().render_html(&value).unwrap().unwrap();
    assert!(html.contains("2 element array"));
    assert!(!html.contains("matrix"));
}

#[test]
fn dates_use_default_string() {
    let date = Value::try_from_json(json!({"$date": "2021-01-02T03:04:05Z"})).unwrap();
    let html = Dispatcher::default().render_html(&date).unwrap().unwrap();
    assert_eq!(
        html,
        "<div>Sat Jan 02 2021 03:04:05 GMT+0000 (Coordinated Universal Time)</div>"
    );
}

#[test]
fn scalar_spans_when_enabled() {
    let config = RenderConfig {
        scalar_spans: true,
        ..RenderConfig::default()
    };
    let html = Dispatcher::new(config)
        .render_html(&Value::from(42))
        .unwrap()
        .unwrap();
    assert_eq!(html, r#"<span class="array-output">42</span>"#);
}

// ============================================================================
// Host objects
// ============================================================================

#[test]
fn host_objects_render_themselves() {
    let chart = Value::host(Chart { title: "Sales" });
    let dispatcher = Dispatcher::default();
    assert_eq!(
        dispatcher.render_html(&chart).unwrap().unwrap(),
        r#"<div><figure class="chart">Sales</figure></div>"#
    );

    // inside a table cell the host sees in_container = true
    let table = Value::from(vec![Value::from_iter([("chart".to_string(), chart)])]);
    let html = dispatcher.render_html(&table).unwrap().unwrap();
    assert!(html.contains(r#"<figure class="chart mini">"#));
}

#[test]
fn host_render_errors_propagate() {
    let broken = Value::host(Chart { title: "" });
    let err = Dispatcher::default().render_value(&broken, false).unwrap_err();
    assert!(matches!(err, RenderError::Value(_)));
    assert_eq!(err.to_string(), "Chart: missing title");
}

// ============================================================================
// Custom handlers
// ============================================================================

#[test]
fn custom_handler_beats_null_builtin() {
    let mut dispatcher = Dispatcher::default();
    dispatcher.add_handler(from_fn(
        "dash",
        |value, _| value.is_null(),
        |_, _| Ok(RenderResult::Markup("&mdash;".into())),
    ));
    assert_eq!(
        dispatcher.render_html(&Value::Null).unwrap().unwrap(),
        "<div>&mdash;</div>"
    );
}

#[test]
fn foreign_nodes_embed_outer_html() {
    let mut dispatcher = Dispatcher::default();
    dispatcher.add_handler(from_fn(
        "svg",
        |value, _| value.as_str() == Some("circle"),
        |_, _| Ok(RenderResult::Node(Box::new(Svg("<circle/>")))),
    ));
    assert_eq!(
        dispatcher.render_html(&Value::from("circle")).unwrap().unwrap(),
        "<div><svg><circle/></svg></div>"
    );
}

#[test]
fn handlers_see_nested_renders() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let mut dispatcher = Dispatcher::default();
    dispatcher.add_handler(from_fn(
        "spy",
        move |value, cx| {
            if value.is_number() {
                log.borrow_mut().push(cx.in_container);
            }
            false
        },
        |_, _| Ok(RenderResult::Invalid),
    ));
    dispatcher
        .render_value(&Value::from(json!([1, "x", 2])), false)
        .unwrap();
    assert_eq!(*seen.borrow(), [true, true]);
}

#[test]
fn error_from_nested_cell_aborts_table() {
    let mut dispatcher = Dispatcher::default();
    dispatcher.add_handler(from_fn(
        "no-sevens",
        |value, cx| cx.in_container && value.as_f64() == Some(7.0),
        |_, _| Err(RenderError::handler("no-sevens", "saw a seven")),
    ));
    let value = Value::from(json!([{"n": 1}, {"n": 7}]));
    let err = dispatcher.render_value(&value, false).unwrap_err();
    assert_eq!(err.to_string(), "handler 'no-sevens' failed: saw a seven");
}

// ============================================================================
// Plugins and cell output
// ============================================================================

#[test]
fn plugin_cell_registers_template_handler() {
    let defs = parse_plugins_yaml(
        r#"
- name: money
  match:
    kind: object
    keys: [amount, currency]
  template: "<b>{{ value.amount | number }} {{ value.currency }}</b>"
- name: money-nested
  match:
    keys: [amount, currency]
    in_container: true
  template: "{{ value.amount | number }}"
"#,
    )
    .unwrap();
    let mut dispatcher = Dispatcher::default();
    assert_eq!(register_plugins(&mut dispatcher, defs).unwrap(), 2);

    let price = Value::from(json!({"amount": 9.5, "currency": "EUR"}));
    let el = CellOutput::shown(price.clone()).to_element(&dispatcher).unwrap();
    assert_eq!(el.to_html(), "<div><b>9.5 EUR</b></div>");

    let nested = Value::from(vec![price.clone(), Value::from(1), price]);
    let html = dispatcher.render_html(&nested).unwrap().unwrap();
    assert!(html.contains("3 element array"));
    assert_eq!(html.matches("<div>9.5</div>").count(), 2);
}

#[test]
fn hidden_cells_show_placeholder() {
    let output = CellOutput {
        render: false,
        value: Some(rows(3)),
    };
    let el: Element = output.to_element(&Dispatcher::default()).unwrap();
    assert!(el.has_class("empty-resultset"));
}
