//! markup-core - HTML node tree and serialization
//!
//! This crate provides the output-side data structures for markup:
//! an ownership tree of HTML element and text nodes, and the renderer
//! that turns a tree into an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──markup──▶ ┌───────────┐
//!                             │           │
//!                             │ HtmlNode  │ ──▶ HTML String
//!                             │   tree    │
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use markup_core::{Element, HtmlNode, render};
//!
//! let mut p = Element::new("p");
//! p.push_child(HtmlNode::text("Hello "));
//! let mut b = Element::new("b");
//! b.push_child(HtmlNode::text("World"));
//! p.push_child(b.into());
//!
//! assert_eq!(render(&p.into()), "<p>Hello <b>World</b></p>");
//! ```

mod node;
mod serialize;

pub use node::{Element, HtmlNode};
pub use serialize::render;
