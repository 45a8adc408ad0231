//! Robots.txt handling module
//!
//! This module fetches and parses a site's robots.txt once per crawl run and
//! answers whether a URL may be fetched. A robots.txt that cannot be fetched
//! never stops a crawl: the run continues as if no rules were published.

mod parser;

pub use parser::{ParsedRobots, WILDCARD_AGENT};

use crate::CrawlError;
use reqwest::{Client, StatusCode};
use url::Url;

/// Builds the robots.txt location for the site serving `site_url`
///
/// The scheme, host and port are kept; path, query and fragment are replaced.
///
/// # Examples
///
/// ```
/// use seed_crawl::robots::robots_url;
/// use url::Url;
///
/// let site = Url::parse("http://example.com:8080/docs/index.html?x=1").unwrap();
/// assert_eq!(robots_url(&site).unwrap().as_str(), "http://example.com:8080/robots.txt");
/// ```
pub fn robots_url(site_url: &Url) -> Result<Url, CrawlError> {
    Ok(site_url.join("/robots.txt")?)
}

/// Fetches robots.txt for a site
///
/// Every status other than 200 is an error here, and [`prepare`] turns every
/// error into "allow all". That includes 401/403 and 5xx, which some robots
/// parsers read as "disallow everything": this crawler treats an unreadable
/// robots.txt the same as a missing one.
///
/// # Returns
///
/// * `Ok(ParsedRobots)` - Successfully fetched and parsed robots.txt
/// * `Err(CrawlError)` - Transport failure or a status other than 200
pub async fn fetch_robots(client: &Client, site_url: &Url) -> Result<ParsedRobots, CrawlError> {
    let location = robots_url(site_url)?;

    let response = client
        .get(location.clone())
        .send()
        .await
        .map_err(|source| CrawlError::Http {
            url: location.to_string(),
            source,
        })?;

    if response.status() != StatusCode::OK {
        return Err(CrawlError::Robots(format!(
            "{} returned HTTP {}",
            location,
            response.status().as_u16()
        )));
    }

    let body = response.text().await.map_err(|source| CrawlError::Http {
        url: location.to_string(),
        source,
    })?;

    Ok(ParsedRobots::from_content(&body))
}

/// Prepares the robots gate for one crawl run
///
/// Any failure is logged and replaced by a permissive [`ParsedRobots`].
pub async fn prepare(client: &Client, site_url: &Url) -> ParsedRobots {
    match fetch_robots(client, site_url).await {
        Ok(robots) => {
            tracing::debug!("Loaded robots.txt for {}", site_url);
            robots
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load robots.txt for {}: {}; crawling without restrictions",
                site_url,
                e
            );
            ParsedRobots::allow_all()
        }
    }
}

/// Checks if a URL is allowed by robots.txt for the wildcard user agent
pub fn is_allowed(robots: &ParsedRobots, url: &Url) -> bool {
    robots.is_allowed(url.as_str(), WILDCARD_AGENT)
}
