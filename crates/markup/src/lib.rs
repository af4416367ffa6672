//! # markup
//!
//! Convert Markdown documents to HTML node trees.
//!
//! The conversion runs in three layers: an inline lexer that splits a
//! text span into typed fragments (plain, bold, italic, code, link,
//! image), a block classifier that decides the structural kind of each
//! blank-line-separated block, and a document assembler that composes
//! both into an [`HtmlNode`] tree rooted at a `div`.
//!
//! ## Example
//!
//! ```rust
//! use markup::assemble;
//! use markup_core::render;
//!
//! let tree = assemble("# Title\n\nThis is **bold** text.").unwrap();
//! assert_eq!(
//!     render(&tree),
//!     "<div><h1>Title</h1><p>This is <b>bold</b> text.</p></div>"
//! );
//! ```
//!
//! Intentionally not CommonMark: inline spans do not nest, link labels
//! and URLs reject brackets and parens, and no HTML escaping is done.

mod assemble;
mod block;
mod inline;

pub use assemble::{assemble, extract_title};
pub use block::{classify, BlockKind};
pub use inline::{lex, FragmentKind, TextFragment};
pub use markup_core::{render, Element, HtmlNode};

/// Error type for markup conversions
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// An inline formatting delimiter was opened but never closed.
    #[error("unmatched `{delimiter}` delimiter in {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// No `# ` heading line to take the document title from.
    #[error("document has no h1 title line")]
    MissingTitle,
}

pub type Result<T> = std::result::Result<T, MarkupError>;
