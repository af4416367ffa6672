//! HTML tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string.

use crate::node::{Element, HtmlNode};

/// Render a node tree to an HTML string.
///
/// Text leaves are emitted verbatim and attribute values are emitted
/// as-is: no entity escaping is performed anywhere. Callers own the
/// safety of the text and attribute values they put in the tree.
///
/// An element with no children renders as `<tag></tag>`, never as a
/// self-closing tag.
pub fn render(node: &HtmlNode) -> String {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output);
    output
}

fn render_node(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Text(text) => out.push_str(text),
        HtmlNode::Element(element) => render_element(element, out),
    }
}

fn render_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');

    for child in &element.children {
        render_node(child, out);
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
