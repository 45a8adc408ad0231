//! URL handling module for Seed-Crawl
//!
//! This module provides URL normalization, domain extraction and the
//! same-site test that keeps a crawl on its seed's host.

mod domain;
mod normalize;

use url::Url;

// Re-export main functions
pub use domain::{extract_domain, site_key};
pub use normalize::{normalize_parsed, normalize_url};

/// Checks whether `candidate` lives on the same site as `seed`
///
/// The comparison is an exact match of [`site_key`]: subdomains of the seed's
/// host are treated as other sites.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seed_crawl::url::is_same_site;
///
/// let seed = Url::parse("http://example.com/").unwrap();
/// assert!(is_same_site(&seed, &Url::parse("http://EXAMPLE.com/about").unwrap()));
/// assert!(!is_same_site(&seed, &Url::parse("http://blog.example.com/").unwrap()));
/// ```
pub fn is_same_site(seed: &Url, candidate: &Url) -> bool {
    match (site_key(seed), site_key(candidate)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
