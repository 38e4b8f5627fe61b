//! Disk-backed HTTP page cache
//!
//! Cache hits are read straight from the cache directory with no delay and no
//! network traffic. Misses sleep the configured throttle delay, issue a GET,
//! persist the re-serialized parse, and return it. There is no invalidation,
//! no TTL, and no integrity check: presence of a cache file is ground truth.

use crate::cache::{cache_file_name, PageSource};
use crate::config::Config;
use crate::{Result, ScrapeError};
use reqwest::Client;
use scraper::Html;
use std::path::PathBuf;
use std::time::Duration;

/// Disk-backed page cache over a reqwest client
pub struct HttpPageCache {
    client: Client,
    dir: PathBuf,
    delay: Duration,
}

impl HttpPageCache {
    /// Creates a page cache from the configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration (cache directory, delay, user agent)
    ///
    /// # Returns
    ///
    /// * `Ok(HttpPageCache)` - Ready-to-use cache
    /// * `Err(ScrapeError)` - Failed to build the HTTP client
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(&config.crawler.user_agent)?;

        Ok(Self {
            client,
            dir: PathBuf::from(&config.cache.dir),
            delay: Duration::from_millis(config.crawler.delay_ms),
        })
    }

    fn cache_path(&self, url: &str) -> PathBuf {
        self.dir.join(cache_file_name(url))
    }

    /// Downloads a URL over the network, applying the fixed throttle delay first
    ///
    /// Any transport error or non-success status is fatal. No retry.
    async fn download(&self, url: &str) -> Result<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        tracing::info!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Http {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ScrapeError::Http {
            url: url.to_string(),
            source: e,
        })
    }
}

impl PageSource for HttpPageCache {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let path = self.cache_path(url);
        if path.exists() {
            tracing::debug!("cache hit for {}", url);
            return Ok(std::fs::read_to_string(&path)?);
        }

        let body = self.download(url).await?;

        // Store the re-serialized parse so cached runs read the same bytes
        // the first run extracted from.
        let html = Html::parse_document(&body).root_element().html();
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, &html)?;

        Ok(html)
    }
}

/// Builds the HTTP client used for page downloads
///
/// # Arguments
///
/// * `user_agent` - User agent string sent with every request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
