//! Native UI element tree.
//!
//! [`Element`] is the renderer's own output type: a tag with attributes and
//! child [`Node`]s. Text children are escaped on serialization; [`Node::Raw`]
//! children are pre-sanitized markup emitted verbatim.
//!
//! ```rust
//! use cellout::Element;
//!
//! let el = Element::new("div")
//!     .class("data-set-info")
//!     .text("3 element array");
//! assert_eq!(el.to_html(), r#"<div class="data-set-info">3 element array</div>"#);
//! ```

use std::fmt;

use crate::util::html_escape;

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Plain text, escaped when serialized.
    Text(String),
    /// Pre-sanitized markup, emitted as-is.
    Raw(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element in the rendered output tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), Some(value.into()));
        self
    }

    /// Sets a valueless boolean attribute such as `hidden` or `selected`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_attr(name.into(), None);
        self
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Appends a raw markup child.
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// Appends a child node.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends every node from the iterator.
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns an attribute's value. Boolean attributes report `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, skipping text and raw nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// All descendant elements (including `self`) matching the predicate, in
    /// document order.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect(pred, found);
        }
    }

    /// Descendant elements (including `self`) carrying the given class.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el: &Element| el.has_class(class))
    }

    /// Concatenated text of this subtree. Raw markup is included verbatim.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_text(out),
                Node::Text(text) | Node::Raw(text) => out.push_str(text),
            }
        }
    }

    /// Serializes the subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serializes the subtree into an existing buffer.
    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&html_escape(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
