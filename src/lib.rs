//! Docscrape: a documentation-site statistics scraper
//!
//! This crate crawls a documentation website starting from a base URL, caches
//! every downloaded page on disk, and extracts four statistics from the parsed
//! HTML: Linux/Unix-only functions, the most linked-to page, per-version change
//! counts, and functions with many parameters.

pub mod cache;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod graph;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for docscrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Graph serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot pick a most-visited page from an empty URL graph")]
    EmptyGraph,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for docscrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use cache::{HttpPageCache, PageSource};
pub use config::Config;
pub use graph::UrlGraph;
pub use report::FullScrap;
