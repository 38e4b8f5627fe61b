//! Field extractors over the discovered page set
//!
//! Four independent passes, each re-deriving its own parse per URL through the
//! page cache (redundant parsing is accepted):
//! - Availability scanner: functions available only on Linux/Unix
//! - Most-visited lookup: the graph entry with the maximum inbound count
//! - Change tally: per-version counts of "changed"/"added" annotations
//! - Parameter scanner: functions declaring more than 10 parameters
//!
//! Pages follow the Sphinx documentation layout: each function is documented
//! in a `<dl class="function">` block whose first `<dt id=...>` carries the
//! fully qualified function identifier.

mod availability;
mod changes;
mod most_visited;
mod params;

pub use availability::linux_only_availability;
pub use changes::get_changes;
pub use most_visited::get_most_visited_webpage;
pub use params::get_most_params;

use scraper::{ElementRef, Selector};

/// Returns the identifier of a function block: the `id` attribute of its
/// first `<dt id=...>`. Blocks without one are skipped by the scanners.
pub(crate) fn block_id(block: &ElementRef) -> Option<String> {
    let selector = Selector::parse("dt[id]").ok()?;
    block
        .select(&selector)
        .next()
        .and_then(|dt| dt.value().attr("id"))
        .map(str::to_string)
}
