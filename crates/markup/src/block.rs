//! Block classifier.
//!
//! Decides the structural kind of a single Markdown block using purely
//! syntactic rules. Classification is total: anything that fails a
//! rule, even on a single line, falls back to a paragraph.

/// The structural kind of a Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading with level 1-6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classify a block of Markdown text.
///
/// Rules are checked in precedence order; the first match wins:
///
/// 1. heading: 1-6 `#` followed by a space (7+ is not a heading)
/// 2. code: the whole block is fenced with ```` ``` ````
/// 3. quote: every line starts with `>`
/// 4. unordered list: every line starts with `- `
/// 5. ordered list: line *i* starts with `"{i+1}. "`, no gaps
/// 6. paragraph: everything else, including the empty block
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }

    if !block.is_empty() {
        if block.lines().all(|line| line.starts_with('>')) {
            return BlockKind::Quote;
        }
        if block.lines().all(|line| line.starts_with("- ")) {
            return BlockKind::UnorderedList;
        }
        if block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
        {
            return BlockKind::OrderedList;
        }
    }

    BlockKind::Paragraph
}

/// Heading level of a block, if it is one: a run of 1-6 `#` followed
/// by a single space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}
