//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates a single run:
//! - Validating the seed and loading its robots.txt once
//! - Taking entries off the depth-first frontier
//! - Applying the depth, visited, page-ceiling and robots checks
//! - Fetching, analyzing and recording pages
//! - Queueing same-site links one level deeper

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::keywords::extract_keywords;
use crate::crawler::parser::analyze;
use crate::crawler::scheduler::{QueuedUrl, Scheduler};
use crate::output::CrawlStatistics;
use crate::robots::{self, ParsedRobots};
use crate::state::{CrawlState, PageRecord, VisitOutcome};
use crate::url::{is_same_site, normalize_url};
use crate::CrawlError;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Pages and statistics produced by one crawl run
#[derive(Debug)]
pub struct CrawlReport {
    /// Page records in traversal order
    pub pages: Vec<PageRecord>,

    /// Per-outcome counters for the run
    pub statistics: CrawlStatistics,
}

/// Main crawler coordinator structure
///
/// A coordinator holds only configuration and the HTTP client; all mutable
/// crawl state lives inside a single call to [`Coordinator::run`], so one
/// coordinator can serve any number of independent runs.
#[derive(Debug, Clone)]
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
}

/// Everything one run mutates
struct CrawlRun {
    seed: Url,
    max_depth: u32,
    robots: ParsedRobots,
    state: CrawlState,
    scheduler: Scheduler,
    statistics: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance with its own HTTP client
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let client = build_http_client(&config.user_agent, &config.crawler)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a coordinator that reuses an existing HTTP client
    pub fn with_client(config: Config, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// Returns the configuration this coordinator crawls with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Crawls from `seed` down to `max_depth` and returns the page records
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PageRecord>)` - Records in depth-first pre-order; empty if
    ///   the seed itself could not be fetched
    /// * `Err(CrawlError::InvalidRequest)` - The seed is not an absolute
    ///   http(s) URL
    pub async fn run(&self, seed: &str, max_depth: u32) -> Result<Vec<PageRecord>, CrawlError> {
        Ok(self.run_report(seed, max_depth).await?.pages)
    }

    /// Same as [`Coordinator::run`], also returning the run's statistics
    pub async fn run_report(&self, seed: &str, max_depth: u32) -> Result<CrawlReport, CrawlError> {
        let seed = normalize_url(seed)
            .map_err(|e| CrawlError::InvalidRequest(format!("Invalid URL '{}': {}", seed, e)))?;

        tracing::info!("Starting crawl of {} (max depth {})", seed, max_depth);
        let start_time = Instant::now();
        // A deadline too far out to represent is no deadline
        let deadline = self
            .config
            .crawler
            .crawl_deadline_secs
            .and_then(|secs| start_time.checked_add(Duration::from_secs(secs)));

        let robots = robots::prepare(&self.client, &seed).await;

        let mut run = CrawlRun {
            scheduler: Scheduler::new(seed.clone()),
            seed,
            max_depth,
            robots,
            state: CrawlState::new(self.config.crawler.max_pages),
            statistics: CrawlStatistics::default(),
        };

        while let Some(entry) = run.scheduler.next_url() {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::warn!(
                    "Crawl deadline reached with {} URLs still queued; returning {} pages",
                    run.scheduler.frontier_size() + 1,
                    run.state.page_count()
                );
                run.statistics.deadline_hit = true;
                break;
            }

            let outcome = self.visit(&mut run, entry).await;
            run.statistics.record(outcome);
        }

        run.statistics.elapsed = start_time.elapsed();
        run.statistics.log_summary();

        Ok(CrawlReport {
            pages: run.state.into_results(),
            statistics: run.statistics,
        })
    }

    /// Processes a single frontier entry
    ///
    /// This method:
    /// 1. Applies the depth, visited and page-ceiling checks
    /// 2. Checks robots.txt
    /// 3. Fetches the page
    /// 4. Analyzes it and appends its record
    /// 5. Queues same-site links at the next depth
    async fn visit(&self, run: &mut CrawlRun, queued: QueuedUrl) -> VisitOutcome {
        let url_str = queued.url.as_str();

        if queued.depth > run.max_depth {
            return VisitOutcome::DepthExceeded;
        }
        if run.state.is_visited(url_str) {
            return VisitOutcome::AlreadyVisited;
        }
        if run.state.is_full() {
            return VisitOutcome::PageLimitHit;
        }

        if !robots::is_allowed(&run.robots, &queued.url) {
            tracing::info!("Skipping {}: disallowed by robots.txt", url_str);
            return VisitOutcome::RobotsDenied;
        }

        tracing::debug!("Fetching {} (depth {})", url_str, queued.depth);
        let body = match fetch_url(&self.client, &queued.url).await {
            FetchResult::Success { final_url, body } => {
                if final_url != url_str {
                    tracing::debug!("{} redirected to {}", url_str, final_url);
                }
                body
            }
            FetchResult::HttpError { status_code } => {
                tracing::debug!("Skipping {}: HTTP {}", url_str, status_code);
                return VisitOutcome::FetchFailed;
            }
            FetchResult::NetworkError {
                timed_out: true, ..
            } => {
                tracing::warn!("Timed out fetching {}", url_str);
                return VisitOutcome::FetchFailed;
            }
            FetchResult::NetworkError { error, .. } => {
                tracing::warn!("Failed to fetch {}: {}", url_str, error);
                return VisitOutcome::FetchFailed;
            }
        };

        let page = analyze(&queued.url, &body);
        let keywords = extract_keywords(&page.text, self.config.crawler.keyword_limit);

        let recorded = run.state.record(PageRecord {
            url: url_str.to_string(),
            title: page.title,
            description: page.description,
            keywords,
            depth: queued.depth,
        });
        if !recorded {
            return if run.state.is_full() {
                VisitOutcome::PageLimitHit
            } else {
                VisitOutcome::AlreadyVisited
            };
        }

        let (same_site, off_site): (Vec<Url>, Vec<Url>) = page
            .links
            .into_iter()
            .partition(|link| is_same_site(&run.seed, link));

        run.statistics.record_many(VisitOutcome::OffSite, off_site.len());
        run.scheduler.push_links(same_site, queued.depth + 1);

        VisitOutcome::Recorded
    }
}

/// Runs a single crawl with a fresh coordinator
///
/// # Example
///
/// ```no_run
/// use seed_crawl::config::Config;
/// use seed_crawl::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pages = crawl(Config::default(), "https://example.com/", 2).await?;
/// for page in pages {
///     println!("{} (depth {})", page.url, page.depth);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config, seed: &str, max_depth: u32) -> Result<Vec<PageRecord>, CrawlError> {
    Coordinator::new(config)?.run(seed, max_depth).await
}
