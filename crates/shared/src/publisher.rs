use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::date::GazetteDate;

/// Where published articles land, relative to the working directory.
/// The static site generator picks up content from here.
const DEFAULT_CONTENT_DIR: &str = "site/src/content";

pub struct Publisher {
    content_dir: PathBuf,
}

impl Publisher {
    pub fn new() -> Self {
        Self::with_content_dir(DEFAULT_CONTENT_DIR)
    }

    pub fn with_content_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: dir.into(),
        }
    }

    /// Render the article: front matter (title, pubDate, description)
    /// followed by the summary body.
    pub fn render(summary: &str, date: &GazetteDate) -> String {
        format!(
            "---\n\
             title: Luxembourg Official Gazette – {date}\n\
             pubDate: {date}\n\
             description: AI-generated English summary of the Luxembourg Government Gazette dated {date}\n\
             ---\n\
             \n\
             {summary}\n"
        )
    }

    /// Write the article for `date`, overwriting any previous run's output.
    pub fn publish(&self, summary: &str, date: &GazetteDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.content_dir).with_context(|| {
            format!(
                "Failed to create content directory {}",
                self.content_dir.display()
            )
        })?;

        let filepath = self.content_dir.join(date.document_filename());
        fs::write(&filepath, Self::render(summary, date))
            .with_context(|| format!("Failed to write {}", filepath.display()))?;

        Ok(filepath)
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> GazetteDate {
        GazetteDate::parse("2024-03-01").unwrap()
    }

    #[test]
    fn test_render_front_matter_fields() {
        let doc = Publisher::render("- A new fund law entered into force.", &date());

        assert!(doc.starts_with("---\n"));
        assert!(doc.contains("title: Luxembourg Official Gazette – 2024-03-01\n"));
        assert!(doc.contains("pubDate: 2024-03-01\n"));
        assert!(doc.contains(
            "description: AI-generated English summary of the Luxembourg Government Gazette dated 2024-03-01\n"
        ));
    }

    #[test]
    fn test_render_body_carries_summary_verbatim() {
        let summary = "- Point one\n- Point two";
        let doc = Publisher::render(summary, &date());

        let body = doc.splitn(3, "---\n").nth(2).unwrap();
        assert_eq!(body, "\n- Point one\n- Point two\n");
    }

    #[test]
    fn test_publish_writes_file_keyed_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = Publisher::with_content_dir(dir.path().join("content"));

        let filepath = publisher.publish("- Something happened.", &date()).unwrap();

        assert_eq!(filepath, dir.path().join("content").join("2024-03-01.md"));
        let written = fs::read_to_string(&filepath).unwrap();
        assert!(written.contains("title: Luxembourg Official Gazette – 2024-03-01"));
        assert!(written.contains("- Something happened."));
    }

    #[test]
    fn test_publish_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = Publisher::with_content_dir(dir.path());

        publisher.publish("first summary", &date()).unwrap();
        let filepath = publisher.publish("second summary", &date()).unwrap();

        let written = fs::read_to_string(&filepath).unwrap();
        assert!(written.contains("second summary"));
        assert!(!written.contains("first summary"));
    }

    #[test]
    fn test_publish_creates_nested_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("src").join("content");
        let publisher = Publisher::with_content_dir(&nested);

        publisher.publish("- ok", &date()).unwrap();

        assert!(nested.join("2024-03-01.md").exists());
    }
}
