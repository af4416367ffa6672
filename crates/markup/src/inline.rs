//! Inline lexer.
//!
//! Splits a plain-text span into an ordered sequence of typed
//! fragments. The lexer is a series of whole-text passes, one per
//! syntax kind, in fixed precedence: bold, italic, code, image, link.
//! Each pass only re-splits fragments still classified [`Plain`];
//! already-typed fragments pass through untouched, so spans never nest
//! (a bold fragment is not re-scanned for italics, code content stays
//! verbatim).
//!
//! [`Plain`]: FragmentKind::Plain

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MarkupError, Result};

/// `![alt](url)` - neither part may contain brackets or parens.
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]()]*)\]\(([^\[\]()]*)\)").expect("image pattern compiles"));

/// `[text](url)` - same bracket/paren restriction as images.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]()]*)\]\(([^\[\]()]*)\)").expect("link pattern compiles"));

/// The syntax kind of a lexed fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A leaf unit of inline content.
///
/// For links and images `content` holds the link text or alt text and
/// `destination` holds the target URL; for every other kind
/// `destination` is `None`. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    pub content: String,
    pub kind: FragmentKind,
    pub destination: Option<String>,
}

impl TextFragment {
    /// Create a fragment without a destination.
    pub fn new(content: impl Into<String>, kind: FragmentKind) -> Self {
        Self {
            content: content.into(),
            kind,
            destination: None,
        }
    }

    /// Create a plain-text fragment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, FragmentKind::Plain)
    }

    /// Create a link fragment from its text and URL.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: FragmentKind::Link,
            destination: Some(url.into()),
        }
    }

    /// Create an image fragment from its alt text and URL.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: FragmentKind::Image,
            destination: Some(url.into()),
        }
    }
}

/// Lex a text span into typed fragments.
///
/// Text without any Markdown syntax comes back as a single plain
/// fragment equal to the input. An opening `**`, `_` or `` ` `` with no
/// matching close fails with [`MarkupError::UnmatchedDelimiter`].
pub fn lex(text: &str) -> Result<Vec<TextFragment>> {
    let mut fragments = vec![TextFragment::plain(text)];
    fragments = split_delimiter(fragments, "**", FragmentKind::Bold)?;
    fragments = split_delimiter(fragments, "_", FragmentKind::Italic)?;
    fragments = split_delimiter(fragments, "`", FragmentKind::Code)?;
    fragments = split_images(fragments);
    fragments = split_links(fragments);
    Ok(fragments)
}

/// Re-split every plain fragment on a paired delimiter.
///
/// Splitting on the delimiter leaves typed text at the odd indices and
/// plain text at the even ones; an even piece count means a delimiter
/// was left unmatched. Empty pieces are dropped.
fn split_delimiter(
    fragments: Vec<TextFragment>,
    delimiter: &'static str,
    kind: FragmentKind,
) -> Result<Vec<TextFragment>> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain || !fragment.content.contains(delimiter) {
            result.push(fragment);
            continue;
        }

        let pieces: Vec<&str> = fragment.content.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(MarkupError::UnmatchedDelimiter {
                delimiter,
                text: fragment.content,
            });
        }

        for (i, piece) in pieces.iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextFragment::plain(*piece));
            } else {
                result.push(TextFragment::new(*piece, kind));
            }
        }
    }

    Ok(result)
}

/// Split `![alt](url)` images out of every plain fragment.
fn split_images(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain || !IMAGE_RE.is_match(&fragment.content) {
            result.push(fragment);
            continue;
        }

        let text = fragment.content.as_str();
        let mut cursor = 0;
        for caps in IMAGE_RE.captures_iter(text) {
            let whole = caps.get(0).expect("match has a whole-pattern group");
            push_plain(&mut result, &text[cursor..whole.start()]);
            result.push(TextFragment::image(&caps[1], &caps[2]));
            cursor = whole.end();
        }
        push_plain(&mut result, &text[cursor..]);
    }

    result
}

/// Split `[text](url)` links out of every plain fragment.
///
/// Runs after the image pass; a match directly preceded by `!` is image
/// syntax and is left alone.
fn split_links(fragments: Vec<TextFragment>) -> Vec<TextFragment> {
    let mut result = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.kind != FragmentKind::Plain || !LINK_RE.is_match(&fragment.content) {
            result.push(fragment);
            continue;
        }

        let text = fragment.content.as_str();
        let mut cursor = 0;
        for caps in LINK_RE.captures_iter(text) {
            let whole = caps.get(0).expect("match has a whole-pattern group");
            if text[..whole.start()].ends_with('!') {
                continue;
            }
            push_plain(&mut result, &text[cursor..whole.start()]);
            result.push(TextFragment::link(&caps[1], &caps[2]));
            cursor = whole.end();
        }
        push_plain(&mut result, &text[cursor..]);
    }

    result
}

fn push_plain(result: &mut Vec<TextFragment>, text: &str) {
    if !text.is_empty() {
        result.push(TextFragment::plain(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_round_trips() {
        let fragments = lex("no special syntax here").unwrap();
        assert_eq!(fragments, vec![TextFragment::plain("no special syntax here")]);
    }

    #[test]
    fn test_empty_input_is_one_plain_fragment() {
        assert_eq!(lex("").unwrap(), vec![TextFragment::plain("")]);
    }

    #[test]
    fn test_bold() {
        let fragments = lex("This is **bold** text.").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::plain("This is "),
                TextFragment::new("bold", FragmentKind::Bold),
                TextFragment::plain(" text."),
            ]
        );
    }

    #[test]
    fn test_italic() {
        let fragments = lex("an _italic_ word").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::plain("an "),
                TextFragment::new("italic", FragmentKind::Italic),
                TextFragment::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_code() {
        let fragments = lex("run `cargo check` first").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::plain("run "),
                TextFragment::new("cargo check", FragmentKind::Code),
                TextFragment::plain(" first"),
            ]
        );
    }

    #[test]
    fn test_delimiter_at_span_edges_drops_empty_segments() {
        let fragments = lex("**bold**").unwrap();
        assert_eq!(fragments, vec![TextFragment::new("bold", FragmentKind::Bold)]);
    }

    #[test]
    fn test_two_bold_spans() {
        let fragments = lex("**a** and **b**").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::new("a", FragmentKind::Bold),
                TextFragment::plain(" and "),
                TextFragment::new("b", FragmentKind::Bold),
            ]
        );
    }

    #[test]
    fn test_unmatched_bold_delimiter() {
        let err = lex("this **never closes").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnmatchedDelimiter { delimiter: "**", .. }
        ));
    }

    #[test]
    fn test_odd_delimiter_count_is_an_error() {
        // Three `**` runs: one pair plus a dangling opener.
        assert!(lex("**a** and **b").is_err());
    }

    #[test]
    fn test_unmatched_code_delimiter() {
        let err = lex("tick ` only").unwrap_err();
        assert!(matches!(
            err,
            MarkupError::UnmatchedDelimiter { delimiter: "`", .. }
        ));
    }

    #[test]
    fn test_bold_content_is_not_rescanned_for_italic() {
        let fragments = lex("**bold_with_underscores**").unwrap();
        assert_eq!(
            fragments,
            vec![TextFragment::new("bold_with_underscores", FragmentKind::Bold)]
        );
    }

    #[test]
    fn test_image() {
        let fragments = lex("![alt](http://x/a.png)").unwrap();
        assert_eq!(fragments, vec![TextFragment::image("alt", "http://x/a.png")]);
    }

    #[test]
    fn test_link() {
        let fragments = lex("see [docs](http://x) now").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::plain("see "),
                TextFragment::link("docs", "http://x"),
                TextFragment::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_image_then_link() {
        let fragments = lex("![alt](http://x/a.png) and [link](http://x)").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::image("alt", "http://x/a.png"),
                TextFragment::plain(" and "),
                TextFragment::link("link", "http://x"),
            ]
        );
    }

    #[test]
    fn test_nested_brackets_do_not_match() {
        let fragments = lex("[a[b]](c)").unwrap();
        // The outer label contains a bracket, so nothing matches.
        assert_eq!(fragments, vec![TextFragment::plain("[a[b]](c)")]);
    }

    #[test]
    fn test_paren_in_label_does_not_match() {
        assert_eq!(lex("[a(b](c)").unwrap(), vec![TextFragment::plain("[a(b](c)")]);
    }

    #[test]
    fn test_bracket_in_url_does_not_match() {
        assert_eq!(lex("[a](b[c)").unwrap(), vec![TextFragment::plain("[a](b[c)")]);
        assert_eq!(
            lex("![a](b]c)").unwrap(),
            vec![TextFragment::plain("![a](b]c)")]
        );
    }

    #[test]
    fn test_pattern_free_fragments_survive_the_image_and_link_passes() {
        // An empty fragment in particular must not be swallowed.
        assert_eq!(lex("").unwrap(), vec![TextFragment::plain("")]);
        assert_eq!(
            lex("[orphan bracket").unwrap(),
            vec![TextFragment::plain("[orphan bracket")]
        );
    }

    #[test]
    fn test_mixed_inline_syntax() {
        let fragments = lex("**bold** then `code` then [x](http://y)").unwrap();
        assert_eq!(
            fragments,
            vec![
                TextFragment::new("bold", FragmentKind::Bold),
                TextFragment::plain(" then "),
                TextFragment::new("code", FragmentKind::Code),
                TextFragment::plain(" then "),
                TextFragment::link("x", "http://y"),
            ]
        );
    }
}
