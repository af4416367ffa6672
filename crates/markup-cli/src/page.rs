//! Page rendering.
//!
//! Turns one markdown document plus the shared page template into a
//! finished HTML page: convert, substitute the two placeholder tokens,
//! then rewrite root-relative asset paths for the configured base path.

use markup::{assemble, extract_title, render};

/// Placeholder for the document title in the template.
const TITLE_TOKEN: &str = "{{ Title }}";
/// Placeholder for the rendered document body in the template.
const CONTENT_TOKEN: &str = "{{ Content }}";

/// Render a markdown document through the page template.
///
/// Substitution is literal string replacement, not a templating pass.
/// Fails if the document has no title line or the inline lexer finds
/// an unmatched delimiter.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> markup::Result<String> {
    let title = extract_title(markdown)?;
    let content = render(&assemble(markdown)?);

    let page = template
        .replace(TITLE_TOKEN, &title)
        .replace(CONTENT_TOKEN, &content);

    Ok(rewrite_base_path(&page, base_path))
}

/// Rewrite root-relative `href`/`src` attributes to start with
/// `base_path`, so the site works when deployed under a non-root path.
/// The default base path `/` leaves the page unchanged.
fn rewrite_base_path(page: &str, base_path: &str) -> String {
    page.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
