//! HTML node tree.
//!
//! A document is represented as an ownership tree: every node is either
//! a raw text leaf or an element that exclusively owns its children.
//! Trees are built bottom-up and append-only; once a node has been
//! attached to a parent nothing mutates it again.

use indexmap::IndexMap;

/// A node in the HTML output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Raw text, rendered verbatim with no surrounding markup.
    Text(String),

    /// An element with a tag, attributes and child nodes.
    Element(Element),
}

impl HtmlNode {
    /// Create a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        HtmlNode::Text(content.into())
    }

    /// Check if this is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, HtmlNode::Text(_))
    }

    /// Get all text content from this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            HtmlNode::Text(text) => text.clone(),
            HtmlNode::Element(element) => element
                .children()
                .map(|child| child.text_content())
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

impl From<Element> for HtmlNode {
    fn from(element: Element) -> Self {
        HtmlNode::Element(element)
    }
}

/// An HTML element: a tag name, insertion-ordered attributes and
/// exclusively owned children.
///
/// Attributes keep insertion order so rendering is deterministic;
/// `IndexMap` preserves the order keys were first set in.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) children: Vec<HtmlNode>,
}

impl Element {
    /// Create an element with the given tag and no attributes.
    ///
    /// # Panics
    ///
    /// Asserts that `tag` is non-empty. Every call site passes a
    /// compile-time constant, so an empty tag is a contract violation,
    /// not a recoverable condition.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        assert!(!tag.is_empty(), "structural node requires a tag");
        Self {
            tag,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with attributes, in insertion order.
    pub fn with_attrs(tag: impl Into<String>, attrs: &[(&str, &str)]) -> Self {
        let mut element = Self::new(tag);
        for (key, value) in attrs {
            element.set_attr(key, value);
        }
        element
    }

    /// Get the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute. Setting an existing key overwrites the value
    /// but keeps its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: HtmlNode) {
        self.children.push(child);
    }

    /// Iterate over child nodes in document order.
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        self.children.iter()
    }
}
