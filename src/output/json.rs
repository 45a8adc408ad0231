//! Public JSON shape of page records
//!
//! The core keeps a missing title or description as `None`. This is the one
//! place where display defaults are applied, shared by the HTTP API and the
//! CLI.

use crate::state::PageRecord;
use serde::{Deserialize, Serialize};

/// Title reported for pages without a usable `<title>`
pub const DEFAULT_TITLE: &str = "No Title";

/// Description reported for pages without a meta description
pub const DEFAULT_DESCRIPTION: &str = "";

/// A page record as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub depth: u32,
}

impl From<PageRecord> for PageSummary {
    fn from(record: PageRecord) -> Self {
        Self {
            url: record.url,
            title: record.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: record
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            keywords: record.keywords,
            depth: record.depth,
        }
    }
}

/// Converts page records into their public shape, keeping order
pub fn render_pages(records: Vec<PageRecord>) -> Vec<PageSummary> {
    records.into_iter().map(PageSummary::from).collect()
}
