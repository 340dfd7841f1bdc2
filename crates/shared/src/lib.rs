// Public modules
pub mod config;
pub mod date;
pub mod extractor;
pub mod legilux;
pub mod publisher;
pub mod summarizer;

// Re-export commonly used types
pub use config::Config;
pub use date::GazetteDate;
pub use legilux::{CacheStatus, FetchOutcome, LegiluxClient};
pub use publisher::Publisher;
pub use summarizer::ClaudeSummarizer;
