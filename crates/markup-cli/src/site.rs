//! Site generation.
//!
//! Walks the content tree, renders every markdown file through the
//! page template, and copies static assets unchanged. Generation is
//! fail-fast: the first unreadable file or conversion error aborts the
//! run with a message naming the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::page::render_page;

/// Recursively copy `src` into `dst`, preserving structure.
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("creating {}", dst.display()))?;

    let entries =
        fs::read_dir(src).with_context(|| format!("reading directory {}", src.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("reading directory {}", src.display()))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_static(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)
                .with_context(|| format!("copying {}", src_path.display()))?;
            log::info!("copied {} -> {}", src_path.display(), dst_path.display());
        }
    }

    Ok(())
}

/// Walk `content` and generate an HTML page under `output` for every
/// `.md` file, mirroring the directory structure.
pub fn generate_pages(
    content: &Path,
    template: &str,
    output: &Path,
    base_path: &str,
) -> Result<()> {
    let entries =
        fs::read_dir(content).with_context(|| format!("reading directory {}", content.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("reading directory {}", content.display()))?;
        let path = entry.path();

        if path.is_dir() {
            generate_pages(&path, template, &output.join(entry.file_name()), base_path)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = output.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest, base_path)?;
        }
    }

    Ok(())
}

/// Generate one page: read the markdown source, render it through the
/// template and write the result, creating parent directories.
fn generate_page(source: &Path, template: &str, dest: &Path, base_path: &str) -> Result<()> {
    let markdown =
        fs::read_to_string(source).with_context(|| format!("reading {}", source.display()))?;

    let page = render_page(&markdown, template, base_path)
        .with_context(|| format!("generating {}", source.display()))?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("writing {}", dest.display()))?;
    log::info!("generated {} -> {}", source.display(), dest.display());

    Ok(())
}
