//! Output module for presenting crawl results
//!
//! This module handles:
//! - Rendering page records in their public JSON shape
//! - Recording and reporting crawl statistics

mod json;
pub mod stats;

pub use json::{render_pages, PageSummary, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
pub use stats::{print_statistics, CrawlStatistics};
