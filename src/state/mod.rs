//! State module for tracking crawl progress
//!
//! This module provides the per-run state of a crawl.
//!
//! # Components
//!
//! - `VisitOutcome`: What happened to one frontier entry (recorded, skipped, failed)
//! - `CrawlState`: Visited set and accumulated page records, owned by a single run
//! - `PageRecord`: Metadata reported for one fetched page

mod crawl_state;
mod visit_outcome;

// Re-export main types
pub use crawl_state::{CrawlState, PageRecord};
pub use visit_outcome::VisitOutcome;
