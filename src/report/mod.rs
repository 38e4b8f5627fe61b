//! Report module
//!
//! Orchestrates one scrape run: load or build the URL graph (persisting it on
//! first build so subsequent runs skip crawling entirely), run the four field
//! extractors against it, and bundle the results into one output record.

mod assembler;
mod record;

pub use assembler::{load_or_build_graph, scrape_all};
pub use record::FullScrap;
