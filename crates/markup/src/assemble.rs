//! Document assembler.
//!
//! Splits a Markdown document into blank-line-separated blocks,
//! classifies each one, lexes its inline content and builds the final
//! [`HtmlNode`] tree. Every block is processed on its own: converting
//! block N never looks at block N-1 or N+1, and root children come out
//! in block order.

use markup_core::{Element, HtmlNode};

use crate::block::{classify, BlockKind};
use crate::inline::{lex, FragmentKind, TextFragment};
use crate::{MarkupError, Result};

/// Convert a Markdown document into an HTML tree rooted at a `div`.
///
/// Propagates inline-lexer delimiter errors.
pub fn assemble(markdown: &str) -> Result<HtmlNode> {
    let mut root = Element::new("div");

    for block in split_blocks(markdown) {
        let node = match classify(block) {
            BlockKind::Paragraph => paragraph_node(block)?,
            BlockKind::Heading(level) => heading_node(block, level)?,
            BlockKind::Code => code_node(block),
            BlockKind::Quote => quote_node(block)?,
            BlockKind::UnorderedList => list_node(block, "ul")?,
            BlockKind::OrderedList => list_node(block, "ol")?,
        };
        root.push_child(node);
    }

    Ok(root.into())
}

/// Extract the document title: the trimmed remainder of the first
/// `# ` line.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(MarkupError::MissingTitle)
}

/// Split a document on blank lines; blocks are trimmed and empty ones
/// dropped, so any run of blank lines acts as a single separator.
fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

fn paragraph_node(block: &str) -> Result<HtmlNode> {
    Ok(element_with_inlines("p", block)?.into())
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode> {
    let text = block[level as usize..].trim_start();
    Ok(element_with_inlines(&format!("h{level}"), text)?.into())
}

/// Code blocks keep their content verbatim: fences are stripped but the
/// inline lexer never runs.
fn code_node(block: &str) -> HtmlNode {
    let mut code = Element::new("code");
    code.push_child(HtmlNode::text(block.trim_matches('`').trim()));

    let mut pre = Element::new("pre");
    pre.push_child(code.into());
    pre.into()
}

fn quote_node(block: &str) -> Result<HtmlNode> {
    let text = block
        .lines()
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(element_with_inlines("blockquote", &text)?.into())
}

fn list_node(block: &str, tag: &str) -> Result<HtmlNode> {
    let mut list = Element::new(tag);

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let item_text = strip_list_marker(line, tag == "ol");
        list.push_child(element_with_inlines("li", item_text)?.into());
    }

    Ok(list.into())
}

/// Strip the list marker from one item line: `- ` or `* ` for
/// unordered items, the `N. ` prefix for ordered ones.
fn strip_list_marker(line: &str, ordered: bool) -> &str {
    let rest = if ordered {
        line.split_once(". ").map(|(_, rest)| rest).unwrap_or(line)
    } else {
        line.strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line)
    };
    rest.trim()
}

/// Lex `text` and wrap the resulting fragments in `tag`.
fn element_with_inlines(tag: &str, text: &str) -> Result<Element> {
    let mut element = Element::new(tag);
    for fragment in lex(text)? {
        element.push_child(fragment_node(fragment));
    }
    Ok(element)
}

/// Convert one lexed fragment into its HTML node, 1:1.
fn fragment_node(fragment: TextFragment) -> HtmlNode {
    let destination = fragment.destination.unwrap_or_default();
    match fragment.kind {
        FragmentKind::Plain => HtmlNode::text(fragment.content),
        FragmentKind::Bold => wrap_text("b", fragment.content),
        FragmentKind::Italic => wrap_text("i", fragment.content),
        FragmentKind::Code => wrap_text("code", fragment.content),
        FragmentKind::Link => {
            let mut a = Element::with_attrs("a", &[("href", &destination)]);
            a.push_child(HtmlNode::text(fragment.content));
            a.into()
        }
        FragmentKind::Image => {
            Element::with_attrs("img", &[("src", &destination), ("alt", &fragment.content)])
                .into()
        }
    }
}

fn wrap_text(tag: &str, content: String) -> HtmlNode {
    let mut element = Element::new(tag);
    element.push_child(HtmlNode::text(content));
    element.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_core::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_and_bold_paragraph() {
        let tree = assemble("# Title\n\nThis is **bold** text.").unwrap();
        assert_eq!(
            render(&tree),
            "<div><h1>Title</h1><p>This is <b>bold</b> text.</p></div>"
        );
    }

    #[test]
    fn test_empty_document_is_an_empty_div() {
        assert_eq!(render(&assemble("").unwrap()), "<div></div>");
    }

    #[test]
    fn test_block_order_is_preserved() {
        let tree = assemble("first\n\nsecond\n\nthird").unwrap();
        assert_eq!(
            render(&tree),
            "<div><p>first</p><p>second</p><p>third</p></div>"
        );
    }

    #[test]
    fn test_runs_of_blank_lines_are_one_separator() {
        let tree = assemble("a\n\n\n\nb").unwrap();
        assert_eq!(render(&tree), "<div><p>a</p><p>b</p></div>");
    }

    #[test]
    fn test_heading_levels() {
        let tree = assemble("## Section\n\n###### Fine print").unwrap();
        assert_eq!(
            render(&tree),
            "<div><h2>Section</h2><h6>Fine print</h6></div>"
        );
    }

    #[test]
    fn test_code_block_content_is_not_lexed() {
        let tree = assemble("```\nlet x = **not bold**;\n```").unwrap();
        assert_eq!(
            render(&tree),
            "<div><pre><code>let x = **not bold**;</code></pre></div>"
        );
    }

    #[test]
    fn test_quote() {
        let tree = assemble("> to be\n> or not to be").unwrap();
        assert_eq!(
            render(&tree),
            "<div><blockquote>to be or not to be</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let tree = assemble("- a\n- b").unwrap();
        assert_eq!(render(&tree), "<div><ul><li>a</li><li>b</li></ul></div>");
    }

    #[test]
    fn test_ordered_list() {
        let tree = assemble("1. first\n2. second").unwrap();
        assert_eq!(
            render(&tree),
            "<div><ol><li>first</li><li>second</li></ol></div>"
        );
    }

    #[test]
    fn test_list_items_are_lexed() {
        let tree = assemble("- plain\n- **bold**").unwrap();
        assert_eq!(
            render(&tree),
            "<div><ul><li>plain</li><li><b>bold</b></li></ul></div>"
        );
    }

    #[test]
    fn test_link_and_image_nodes() {
        let tree = assemble("![alt](http://x/a.png) and [link](http://x)").unwrap();
        assert_eq!(
            render(&tree),
            "<div><p><img src=\"http://x/a.png\" alt=\"alt\"></img> and \
             <a href=\"http://x\">link</a></p></div>"
        );
    }

    #[test]
    fn test_delimiter_error_propagates() {
        assert!(assemble("an **unclosed delimiter").is_err());
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let source = "# T\n\n- a\n- b\n\n> q";
        let first = render(&assemble(source).unwrap());
        let second = render(&assemble(source).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(extract_title("# My Page\n\nbody").unwrap(), "My Page");
    }

    #[test]
    fn test_extract_title_skips_deeper_headings() {
        assert_eq!(extract_title("## nope\n\n# Yes\n").unwrap(), "Yes");
    }

    #[test]
    fn test_extract_title_missing_is_an_error() {
        assert!(matches!(
            extract_title("no heading here"),
            Err(MarkupError::MissingTitle)
        ));
    }
}
