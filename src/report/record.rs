//! The extraction result record

use crate::Result;
use serde::Serialize;

/// The full extraction result of one scrape run
///
/// Four independent results, built once and read-only afterwards. The record
/// is serialized to a single JSON document at the end of a run; tuple fields
/// serialize as two-element arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullScrap {
    /// Functions whose availability note lists only Linux/Unix platforms
    pub linux_only_availability: Vec<String>,

    /// The graph entry with the maximum inbound count
    pub most_visited_webpage: (u64, String),

    /// Per-version-code annotation counts, sorted by count descending
    pub changes: Vec<(u64, String)>,

    /// Functions with more than 10 parameters, sorted by count descending
    pub params: Vec<(u64, String)>,
}

impl FullScrap {
    /// Serializes the record as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
