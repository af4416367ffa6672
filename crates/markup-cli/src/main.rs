//! markup - generate a static HTML site from a markdown content tree.
//!
//! Reads `content/` and `static/` from the current directory, renders
//! every markdown file through `template.html`, and writes the result
//! to `public/`. The single optional argument is the base URL path for
//! deployments under a non-root prefix.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

mod page;
mod site;

#[derive(Parser)]
#[command(name = "markup", version, about = "Generate a static HTML site from markdown")]
struct Cli {
    /// Base URL path prefix rewritten into root-relative links
    #[arg(default_value = "/")]
    base_path: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let content = Path::new("content");
    let static_dir = Path::new("static");
    let output = Path::new("public");

    // Start from a clean output directory.
    if output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("removing {}", output.display()))?;
    }
    fs::create_dir_all(output).with_context(|| format!("creating {}", output.display()))?;

    if static_dir.exists() {
        site::copy_static(static_dir, output)?;
    }

    let template = fs::read_to_string("template.html").context("reading template.html")?;
    site::generate_pages(content, &template, output, &cli.base_path)?;

    Ok(())
}
