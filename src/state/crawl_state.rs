use std::collections::HashSet;

/// Metadata gathered for one successfully fetched page
///
/// Missing title and description are kept as `None`; display defaults are
/// applied by the output layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Normalized URL that was fetched
    pub url: String,

    /// Trimmed text of the first `<title>` element
    pub title: Option<String>,

    /// Trimmed `content` of `<meta name="description">`
    pub description: Option<String>,

    /// Most frequent words on the page, most frequent first
    pub keywords: Vec<String>,

    /// Link hops from the seed; the seed itself is depth 1
    pub depth: u32,
}

/// Mutable state of a single crawl run
///
/// Created at the start of a run and consumed when it finishes. A URL enters
/// `visited` only when its fetch succeeded, at the same moment its record is
/// appended, so `page_count()` always equals the number of records.
#[derive(Debug)]
pub struct CrawlState {
    visited: HashSet<String>,
    results: Vec<PageRecord>,
    max_pages: usize,
}

impl CrawlState {
    /// Creates empty state with the given page ceiling
    pub fn new(max_pages: usize) -> Self {
        Self {
            visited: HashSet::new(),
            results: Vec::new(),
            max_pages,
        }
    }

    /// Returns true if `url` was already recorded in this run
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of pages recorded so far
    pub fn page_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns true once the page ceiling has been reached
    pub fn is_full(&self) -> bool {
        self.page_count() >= self.max_pages
    }

    /// Marks the record's URL visited and appends the record
    ///
    /// Returns false, leaving the state untouched, if the URL was already
    /// visited or the ceiling has been reached.
    pub fn record(&mut self, record: PageRecord) -> bool {
        if self.is_full() || self.visited.contains(&record.url) {
            return false;
        }
        self.visited.insert(record.url.clone());
        self.results.push(record);
        true
    }

    /// Consumes the state and returns the records in traversal order
    pub fn into_results(self) -> Vec<PageRecord> {
        self.results
    }
}
