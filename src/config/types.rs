use serde::Deserialize;

/// Main configuration structure for docscrape
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Fixed delay applied before each network fetch (milliseconds).
    /// Not applied when a page is served from the cache.
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            user_agent: "docscrape/0.1".to_string(),
        }
    }
}

/// Page cache configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding one file per fetched page
    pub dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: "./site".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the persisted URL graph (JSON mapping of URL to inbound count)
    #[serde(rename = "graph-path")]
    pub graph_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            graph_path: "./all_url.json".to_string(),
        }
    }
}
