use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::fmt;

/// A validated gazette publication date in `YYYY-MM-DD` form.
///
/// Legilux keys gazettes by calendar date; the same string names the local
/// PDF cache file and the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteDate(String);

impl GazetteDate {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Ok(Self(date.format("%Y-%m-%d").to_string())),
            Err(_) => anyhow::bail!(
                "Invalid date '{}'. Expected YYYY-MM-DD, e.g. 2024-03-01",
                input
            ),
        }
    }

    /// Today's date in the host's local timezone.
    pub fn today() -> Self {
        Self(Local::now().format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename of the local PDF cache for this date.
    pub fn pdf_filename(&self) -> String {
        format!("gazette_{}.pdf", self.0)
    }

    /// Filename of the published article for this date.
    pub fn document_filename(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for GazetteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
