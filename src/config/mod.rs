//! Configuration module for docscrape
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every field has a default, so running without a config
//! file is equivalent to loading an empty one.
//!
//! # Example
//!
//! ```no_run
//! use docscrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("docscrape.toml")).unwrap();
//! println!("Cache directory: {}", config.cache.dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, CrawlerConfig, OutputConfig};

// Re-export parser functions
pub use parser::load_config;
