//! What a handler's render routine produces.

use std::fmt::Debug;

use crate::markup::Element;

/// A node from a foreign document model that can serialize itself.
///
/// Handlers that build output with some other DOM library return it through
/// [`RenderResult::Node`]; the dispatcher embeds its outer markup.
pub trait ForeignNode: Debug {
    /// The node's serialized form, including its own tag.
    fn outer_html(&self) -> String;
}

/// The result of a single handler render attempt.
///
/// Only the first three variants are usable output. [`RenderResult::Invalid`]
/// tells the dispatcher to log a diagnostic and try the next handler.
#[derive(Debug)]
pub enum RenderResult {
    /// Pre-sanitized markup.
    Markup(String),
    /// A foreign document node.
    Node(Box<dyn ForeignNode>),
    /// A native element, returned as-is.
    Element(Element),
    /// No usable output.
    Invalid,
}

impl RenderResult {
    /// Classifies this result into a native element.
    ///
    /// Markup and foreign nodes are wrapped in a `<div>` holding their markup;
    /// elements pass through; invalid results yield `None`.
    pub fn into_element(self) -> Option<Element> {
        match self {
            RenderResult::Markup(markup) => Some(Element::new("div").raw(markup)),
            RenderResult::Node(node) => Some(Element::new("div").raw(node.outer_html())),
            RenderResult::Element(el) => Some(el),
            RenderResult::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, RenderResult::Invalid)
    }
}

impl From<Element> for RenderResult {
    fn from(el: Element) -> Self {
        RenderResult::Element(el)
    }
}

impl From<String> for RenderResult {
    fn from(markup: String) -> Self {
        RenderResult::Markup(markup)
    }
}

impl From<Option<Element>> for RenderResult {
    fn from(el: Option<Element>) -> Self {
        el.map_or(RenderResult::Invalid, RenderResult::Element)
    }
}
