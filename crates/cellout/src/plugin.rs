//! Declarative output handlers loaded from plugin definitions.
//!
//! A plugin cell cannot hand the renderer a closure, so plugins describe their
//! handler as data: a name, a structural match, and a MiniJinja template that
//! produces HTML. Definitions are written in YAML or JSON:
//!
//! ```yaml
//! name: point
//! match:
//!   kind: object
//!   keys: [x, y]
//! template: "<b>({{ value.x }}, {{ value.y }})</b>"
//! ```
//!
//! # Matching
//!
//! | Field | Meaning when present |
//! |-------|----------------------|
//! | `kind` | the value's kind must equal this (`object`, `array`, `number`, ...) |
//! | `keys` | the value must be an object containing every listed key |
//! | `in_container` | the render context must have this flag |
//!
//! An empty match claims every value.
//!
//! # Templates
//!
//! Templates see two variables: `value` (the value's JSON projection) and
//! `in_container`. Interpolated values are HTML-escaped. Two filters are
//! available beyond MiniJinja's built-ins:
//!
//! - `number`: formats a number the way the inspector does (`3`, `0.5`, `NaN`)
//! - `fit(width)`: truncates text to a display width, ending in `…`
//!
//! A template that renders only whitespace declines the value, and the
//! dispatcher moves on to the next handler.
//!
//! ```rust
//! use cellout::{parse_plugins_yaml, register_plugins, Dispatcher, Value};
//! use serde_json::json;
//!
//! let defs = parse_plugins_yaml(r#"
//! name: point
//! match: { keys: [x, y] }
//! template: "<b>({{ value.x }}, {{ value.y }})</b>"
//! "#).unwrap();
//!
//! let mut dispatcher = Dispatcher::default();
//! register_plugins(&mut dispatcher, defs).unwrap();
//!
//! let html = dispatcher.render_html(&Value::from(json!({"x": 1, "y": 2}))).unwrap();
//! assert_eq!(html.as_deref(), Some("<div><b>(1, 2)</b></div>"));
//! ```

use std::fmt;

use cellout_value::{format_number, Value, ValueKind};
use minijinja::{context, AutoEscape, Environment};
use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::dispatch::Dispatcher;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::result::RenderResult;
use crate::util::truncate_to_width;

/// Structural conditions a value must meet for a plugin to claim it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Matcher {
    pub kind: Option<ValueKind>,
    pub keys: Vec<String>,
    pub in_container: Option<bool>,
}

impl Matcher {
    pub fn matches(&self, value: &Value, in_container: bool) -> bool {
        if self.kind.is_some_and(|kind| kind != value.kind()) {
            return false;
        }
        if self.in_container.is_some_and(|flag| flag != in_container) {
            return false;
        }
        if self.keys.is_empty() {
            return true;
        }
        value
            .as_object()
            .is_some_and(|obj| self.keys.iter().all(|k| obj.contains_key(k)))
    }
}

/// A plugin's handler, as written in its definition cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginDefinition {
    pub name: String,
    #[serde(rename = "match", default)]
    pub matcher: Matcher,
    pub template: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<PluginDefinition>),
    One(PluginDefinition),
}

impl From<OneOrMany> for Vec<PluginDefinition> {
    fn from(defs: OneOrMany) -> Self {
        match defs {
            OneOrMany::Many(defs) => defs,
            OneOrMany::One(def) => vec![def],
        }
    }
}

/// Parses one definition or a list of definitions from YAML.
pub fn parse_plugins_yaml(source: &str) -> Result<Vec<PluginDefinition>, RenderError> {
    let defs: OneOrMany = serde_yaml::from_str(source)?;
    Ok(defs.into())
}

/// Parses one definition or a list of definitions from JSON.
pub fn parse_plugins_json(source: &str) -> Result<Vec<PluginDefinition>, RenderError> {
    let defs: OneOrMany = serde_json::from_str(source)?;
    Ok(defs.into())
}

/// A handler that renders matching values through a compiled template.
pub struct TemplateHandler {
    name: String,
    matcher: Matcher,
    env: Environment<'static>,
}

impl TemplateHandler {
    /// Validates the definition and compiles its template.
    pub fn new(def: PluginDefinition) -> Result<Self, RenderError> {
        let name = def.name.trim().to_string();
        if name.is_empty() {
            return Err(RenderError::Plugin("plugin name must not be empty".into()));
        }

        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        register_filters(&mut env);
        env.add_template_owned(name.clone(), def.template)?;

        Ok(Self {
            name,
            matcher: def.matcher,
            env,
        })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

impl Handler for TemplateHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool {
        self.matcher.matches(value, cx.in_container)
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let tmpl = self.env.get_template(&self.name)?;
        let out = tmpl.render(context! {
            value => value.to_json(),
            in_container => cx.in_container,
        })?;
        if out.trim().is_empty() {
            return Ok(RenderResult::Invalid);
        }
        Ok(RenderResult::Markup(out))
    }
}

impl fmt::Debug for TemplateHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateHandler")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("number", |n: f64| -> String { format_number(n) });
    env.add_filter("fit", |text: String, width: usize| -> String {
        truncate_to_width(&text, width)
    });
}

/// Compiles every definition and registers them with the dispatcher.
///
/// Definitions are added in order, so the last one ends up with the highest
/// priority. Nothing is registered unless every definition compiles.
/// Returns the number of handlers added.
pub fn register_plugins<I>(dispatcher: &mut Dispatcher, defs: I) -> Result<usize, RenderError>
where
    I: IntoIterator<Item = PluginDefinition>,
{
    let handlers = defs
        .into_iter()
        .map(TemplateHandler::new)
        .collect::<Result<Vec<_>, _>>()?;
    let count = handlers.len();
    for handler in handlers {
        log::info!("loaded output plugin '{}'", handler.name);
        dispatcher.add_handler(handler);
    }
    Ok(count)
}
