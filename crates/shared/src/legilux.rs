use anyhow::{Context, Result};
use reqwest::Client;
use std::fs;
use std::path::Path;

use crate::date::GazetteDate;

const BASE_URL: &str = "https://legilux.public.lu/eli/etat/leg";

/// Result of a gazette download attempt.
///
/// Legilux publishes no gazette on many calendar days, so a 404 (or any
/// response that is not a PDF) is a normal outcome, not an error. Transport
/// problems are likewise reported as a value so the caller can skip the run
/// cleanly instead of unwinding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The PDF was downloaded and written to the destination path.
    Fetched,
    /// No gazette published for this date (non-success status or non-PDF body).
    Unavailable,
    /// Connection error or timeout before a usable response arrived.
    TransportError(String),
}

/// Whether a previously downloaded PDF already exists for a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

pub fn cache_status(path: &Path) -> CacheStatus {
    if path.exists() {
        CacheStatus::Hit
    } else {
        CacheStatus::Miss
    }
}

pub struct LegiluxClient {
    client: Client,
}

impl LegiluxClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub fn gazette_url(date: &GazetteDate) -> String {
        format!("{}/{}.pdf", BASE_URL, date)
    }

    /// Download the gazette PDF for `date` into `dest`.
    ///
    /// Writes the file only on a confirmed PDF response; an unavailable
    /// gazette leaves the filesystem untouched.
    pub async fn fetch(&self, date: &GazetteDate, dest: &Path) -> Result<FetchOutcome> {
        let url = Self::gazette_url(date);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Ok(FetchOutcome::TransportError(e.to_string())),
        };

        let status_success = response.status().is_success();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_gazette_pdf(status_success, &content_type) {
            return Ok(FetchOutcome::Unavailable);
        }

        let body = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Ok(FetchOutcome::TransportError(e.to_string())),
        };

        fs::write(dest, &body)
            .with_context(|| format!("Failed to write {}", dest.display()))?;

        Ok(FetchOutcome::Fetched)
    }
}

/// A response counts as a published gazette only when the status indicates
/// success and the declared content type is a PDF.
fn is_gazette_pdf(status_success: bool, content_type: &str) -> bool {
    let media_type = content_type.split(';').next().unwrap_or("").trim();
    status_success && media_type.eq_ignore_ascii_case("application/pdf")
}
