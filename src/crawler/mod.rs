//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded timeout
//! - HTML analysis (text, title, description, links)
//! - Keyword extraction
//! - The depth-first frontier
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod keywords;
mod parser;
mod scheduler;

pub use coordinator::{crawl, CrawlReport, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_LIMIT};
pub use parser::{analyze, PageView};
pub use scheduler::{QueuedUrl, Scheduler};
