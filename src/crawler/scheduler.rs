//! Scheduler for managing the crawl frontier
//!
//! The frontier is a LIFO stack of `(url, depth)` entries. Links of a page are
//! pushed in reverse, so popping yields them in markup order and the whole
//! walk visits pages in the same depth-first pre-order a recursive crawl
//! would, without growing the call stack.

use url::Url;

/// A URL queued for fetching with its depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// The URL to fetch
    pub url: Url,

    /// Link hops from the seed (the seed is depth 1)
    pub depth: u32,
}

/// Scheduler manages the frontier stack
#[derive(Debug, Default)]
pub struct Scheduler {
    frontier: Vec<QueuedUrl>,
}

impl Scheduler {
    /// Creates a scheduler whose frontier holds only the seed at depth 1
    pub fn new(seed: Url) -> Self {
        Self {
            frontier: vec![QueuedUrl { url: seed, depth: 1 }],
        }
    }

    /// Gets the next URL to visit
    ///
    /// # Returns
    ///
    /// * `Some(QueuedUrl)` - The next entry in depth-first order
    /// * `None` - The frontier is empty
    pub fn next_url(&mut self) -> Option<QueuedUrl> {
        self.frontier.pop()
    }

    /// Queues the links found on one page, all at `depth`
    ///
    /// The first link in `links` is the next one returned by [`next_url`].
    ///
    /// [`next_url`]: Scheduler::next_url
    pub fn push_links<I>(&mut self, links: I, depth: u32)
    where
        I: IntoIterator<Item = Url>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.frontier.extend(
            links
                .into_iter()
                .rev()
                .map(|url| QueuedUrl { url, depth }),
        );
    }

    /// Returns the current size of the frontier
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }
}
