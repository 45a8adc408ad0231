/// Visit outcome definitions for tracking crawl progress
///
/// Every URL taken off the frontier ends in exactly one of these outcomes.
use std::fmt;

/// Represents what happened to a single visit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitOutcome {
    // ===== Success =====
    /// Page was fetched, analyzed and appended to the results
    Recorded,

    // ===== Terminate checks =====
    /// Page is deeper than the requested maximum depth
    DepthExceeded,

    /// Page was already recorded earlier in this run
    AlreadyVisited,

    /// The run already fetched its maximum number of pages
    PageLimitHit,

    // ===== Policy =====
    /// Robots.txt disallows the page for the wildcard agent
    RobotsDenied,

    /// Link points at a different host than the seed (never queued)
    OffSite,

    // ===== Errors =====
    /// Network failure, timeout, or a status other than 200
    FetchFailed,
}

impl VisitOutcome {
    /// Returns true if this outcome produced a page record
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Recorded)
    }

    /// Returns true if the visit was cut off before any request was made
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::DepthExceeded
                | Self::AlreadyVisited
                | Self::PageLimitHit
                | Self::RobotsDenied
                | Self::OffSite
        )
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }

    /// Short snake_case label used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recorded => "recorded",
            Self::DepthExceeded => "depth_exceeded",
            Self::AlreadyVisited => "already_visited",
            Self::PageLimitHit => "page_limit_hit",
            Self::RobotsDenied => "robots_denied",
            Self::OffSite => "off_site",
            Self::FetchFailed => "fetch_failed",
        }
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 7] {
        [
            Self::Recorded,
            Self::DepthExceeded,
            Self::AlreadyVisited,
            Self::PageLimitHit,
            Self::RobotsDenied,
            Self::OffSite,
            Self::FetchFailed,
        ]
    }
}

impl fmt::Display for VisitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
