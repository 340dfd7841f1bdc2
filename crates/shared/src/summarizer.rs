use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<Content>,
}

#[derive(Deserialize)]
struct Content {
    text: String,
}

pub struct ClaudeSummarizer {
    client: Client,
    api_key: String,
    truncate_chars: usize,
}

impl ClaudeSummarizer {
    pub fn new(api_key: String, truncate_chars: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            truncate_chars,
        })
    }

    /// Truncate the gazette text, then interpolate it into the fixed prompt.
    /// Truncation happens before prompt construction so the instructions are
    /// never cut off, and respects UTF-8 boundaries.
    fn build_prompt(&self, text: &str) -> String {
        let truncated = if text.len() > self.truncate_chars {
            let mut end = self.truncate_chars;
            while end > 0 && !text.is_char_boundary(end) {
                end -= 1;
            }
            &text[..end]
        } else {
            text
        };

        format!(
            r#"You are a professional legal/finance journalist.
Summarize the following Luxembourg Official Gazette
in concise English bullet points (max 200 words),
emphasising changes relevant to business, finance, and law.

TEXT:
{}"#,
            truncated
        )
    }

    /// Summarize the gazette text with a single Claude API call.
    ///
    /// No retries: an auth, rate-limit, or network failure here is fatal for
    /// the run and propagates to the caller.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = self.build_prompt(text);

        let request = ClaudeRequest {
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 1024,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Claude API")?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Claude API error: {}", error_text);
        }

        let claude_response = response
            .json::<ClaudeResponse>()
            .await
            .context("Failed to parse Claude API response")?;

        let summary = claude_response
            .content
            .first()
            .map(|c| c.text.trim())
            .unwrap_or("")
            .to_string();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer(truncate_chars: usize) -> ClaudeSummarizer {
        ClaudeSummarizer::new("test-key".to_string(), truncate_chars).unwrap()
    }

    #[test]
    fn test_short_text_is_sent_whole() {
        let prompt = summarizer(12_000).build_prompt("New AML regulation in force.");
        assert!(prompt.contains("New AML regulation in force."));
        assert!(prompt.contains("legal/finance journalist"));
        assert!(prompt.contains("max 200 words"));
    }

    #[test]
    fn test_long_text_is_cut_before_prompt_construction() {
        let text = format!("{}BEYOND-THE-LIMIT", "a".repeat(12_000));
        let prompt = summarizer(12_000).build_prompt(&text);

        assert!(!prompt.contains("BEYOND-THE-LIMIT"));
        assert!(prompt.contains(&"a".repeat(12_000)));
    }

    #[test]
    fn test_truncation_respects_utf8_boundaries() {
        // 'é' is two bytes, so a byte limit of 5 lands mid-character.
        let text = "ééééé";
        let prompt = summarizer(5).build_prompt(text);
        assert!(prompt.contains("éé"));
        assert!(!prompt.contains("ééé"));
    }

    #[test]
    fn test_truncated_payload_never_exceeds_limit() {
        let text = "gazette ".repeat(3_000);
        let s = summarizer(1_000);
        let prompt = s.build_prompt(&text);

        let request = ClaudeRequest {
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 1024,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };
        let payload = serde_json::to_string(&request).unwrap();

        // The payload holds the fixed template plus at most 1000 bytes of
        // gazette text; well under the raw 24000-byte input.
        assert!(payload.len() < 2_000);
    }
}
