use anyhow::{Context, Result};
use clap::Parser;
use shared::{
    legilux, CacheStatus, ClaudeSummarizer, Config, FetchOutcome, GazetteDate, LegiluxClient,
    Publisher,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "summarize-gazette")]
#[command(about = "Fetch, summarize, and publish the Luxembourg Official Gazette for a date")]
struct Args {
    /// Gazette date in YYYY-MM-DD form (defaults to today)
    date: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let date = match args.date {
        Some(raw) => GazetteDate::parse(&raw)?,
        None => GazetteDate::today(),
    };
    println!("✓ Gazette date: {}", date);

    let pdf_path = PathBuf::from(date.pdf_filename());

    match legilux::cache_status(&pdf_path) {
        CacheStatus::Hit => {
            println!("✓ Using cached PDF: {}", pdf_path.display());
        }
        CacheStatus::Miss => {
            println!("\n📥 Downloading gazette PDF...");
            let client = LegiluxClient::new()?;
            match client.fetch(&date, &pdf_path).await? {
                FetchOutcome::Fetched => {
                    println!("✓ Saved {}", pdf_path.display());
                }
                FetchOutcome::Unavailable => {
                    println!("No gazette published for {}. Nothing to do.", date);
                    return Ok(());
                }
                FetchOutcome::TransportError(reason) => {
                    println!(
                        "⚠ Could not reach legilux.public.lu ({}). Skipping {}.",
                        reason, date
                    );
                    return Ok(());
                }
            }
        }
    }

    println!("\n📄 Extracting text...");
    let text = shared::extractor::extract_text(&pdf_path)
        .context("Failed to extract text from gazette PDF")?;
    println!("✓ Extracted {} characters", text.len());

    println!("\n🤖 Summarizing with Claude AI...");
    let summarizer = ClaudeSummarizer::new(config.anthropic_api_key, config.truncate_chars)?;
    let summary = summarizer
        .summarize(&text)
        .await
        .context("Failed to summarize gazette")?;

    println!("\n📝 Writing article...");
    let publisher = Publisher::new();
    let filepath = publisher
        .publish(&summary, &date)
        .context("Failed to write article")?;

    println!("\n✅ Article generated: {}", filepath.display());

    Ok(())
}
