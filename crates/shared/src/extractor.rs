use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

/// Extract the plain text of every page of a PDF, in page order.
///
/// Scanned or image-only pages yield no text; they contribute an empty
/// segment rather than failing the whole document. The document handle is
/// dropped once all pages have been read.
pub fn extract_text(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .with_context(|| format!("Failed to load PDF {}", path.display()))?;

    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let text = doc.extract_text(&[page_num]).unwrap_or_default();
        pages.push(text);
    }

    Ok(join_page_texts(&pages))
}

/// Concatenate page texts with a newline separator, preserving page order
/// and empty pages as empty segments.
fn join_page_texts(pages: &[String]) -> String {
    pages.join("\n")
}
