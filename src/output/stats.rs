//! Statistics for a single crawl run
//!
//! This module counts visit outcomes during a run and reports them through
//! tracing (always) or stdout (CLI on request).

use crate::state::VisitOutcome;
use std::collections::HashMap;
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default)]
pub struct CrawlStatistics {
    /// Count of visit attempts by outcome
    pub outcomes: HashMap<VisitOutcome, u64>,

    /// Wall-clock duration of the run
    pub elapsed: Duration,

    /// Whether the run stopped because its deadline passed
    pub deadline_hit: bool,
}

impl CrawlStatistics {
    /// Counts one occurrence of `outcome`
    pub fn record(&mut self, outcome: VisitOutcome) {
        self.record_many(outcome, 1);
    }

    /// Counts `n` occurrences of `outcome`
    pub fn record_many(&mut self, outcome: VisitOutcome, n: usize) {
        if n > 0 {
            *self.outcomes.entry(outcome).or_insert(0) += n as u64;
        }
    }

    /// Returns how often `outcome` occurred
    pub fn count(&self, outcome: VisitOutcome) -> u64 {
        self.outcomes.get(&outcome).copied().unwrap_or(0)
    }

    /// Number of pages that ended up in the results
    pub fn pages_recorded(&self) -> u64 {
        self.count(VisitOutcome::Recorded)
    }

    /// Number of requests that failed or returned a status other than 200
    pub fn fetch_failures(&self) -> u64 {
        VisitOutcome::all()
            .into_iter()
            .filter(VisitOutcome::is_error)
            .map(|o| self.count(o))
            .sum()
    }

    /// Number of frontier entries and links dropped without a request
    pub fn skipped(&self) -> u64 {
        VisitOutcome::all()
            .into_iter()
            .filter(VisitOutcome::is_skipped)
            .map(|o| self.count(o))
            .sum()
    }

    /// Logs a one-line summary of the run
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl finished: {} pages recorded, {} fetch failures, {} skipped ({} by robots.txt) in {:?}",
            self.pages_recorded(),
            self.fetch_failures(),
            self.skipped(),
            self.count(VisitOutcome::RobotsDenied),
            self.elapsed
        );

        for outcome in VisitOutcome::all() {
            let count = self.count(outcome);
            if count > 0 {
                tracing::debug!("  {}: {}", outcome, count);
            }
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Outcomes:");
    let mut counts: Vec<_> = stats.outcomes.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.as_str().cmp(b.0.as_str())));
    for (outcome, count) in counts {
        println!("  {}: {}", outcome, count);
    }
    println!();

    println!("Pages recorded: {}", stats.pages_recorded());
    println!("Skipped: {}", stats.skipped());
    println!("Elapsed: {:.2}s", stats.elapsed.as_secs_f64());
    if stats.deadline_hit {
        println!("Stopped early: crawl deadline reached");
    }
}
