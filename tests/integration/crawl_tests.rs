//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use seed_crawl::config::Config;
use seed_crawl::crawler::Coordinator;
use seed_crawl::{PageRecord, VisitOutcome};
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short fetch timeout
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.crawler.fetch_timeout_secs = 2;
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Page with a title and one anchor per link
fn page_with_links(title: &str, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|l| format!(r#"<a href="{}">{}</a>"#, l, l))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, anchors
    )
}

fn paths(pages: &[PageRecord]) -> Vec<String> {
    pages
        .iter()
        .map(|p| url::Url::parse(&p.url).unwrap().path().to_string())
        .collect()
}

async fn run(server: &MockServer, config: Config, depth: u32) -> Vec<PageRecord> {
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    coordinator.run(&server.uri(), depth).await.expect("Crawl failed")
}

#[tokio::test]
async fn test_single_page_without_links() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;
    mount_page(
        &mock_server,
        "/",
        "<html><head><title>Lonely</title></head><body>Nothing links anywhere</body></html>",
    )
    .await;

    let pages = run(&mock_server, create_test_config(), 2).await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].url, format!("{}/", mock_server.uri()));
    assert_eq!(pages[0].title.as_deref(), Some("Lonely"));
    assert_eq!(pages[0].description, None);
    assert_eq!(pages[0].depth, 1);
}

#[tokio::test]
async fn test_robots_txt_respect() {
    let mock_server = MockServer::start().await;
    mount_robots(&mock_server, "User-agent: *\nDisallow: /private").await;

    mount_page(
        &mock_server,
        "/",
        &page_with_links("Home", &["/private", "/allowed"]),
    )
    .await;
    mount_page(
        &mock_server,
        "/allowed",
        &page_with_links("Allowed", &["/private/deeper"]),
    )
    .await;

    // Disallowed pages should never be requested
    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links(
            "Private",
            &["/allowed"],
        )))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/private/deeper"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 3).await;

    assert_eq!(paths(&pages), vec!["/", "/allowed"]);
    // Wiremock verifies the expect(0) mocks when mock_server drops
}

#[tokio::test]
async fn test_robots_fetched_once_per_run() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/a", "/b"])).await;
    mount_page(&mock_server, "/a", &page_with_links("A", &[])).await;
    mount_page(&mock_server, "/b", &page_with_links("B", &[])).await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert_eq!(pages.len(), 3);
}

#[tokio::test]
async fn test_unavailable_robots_is_permissive() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/admin"])).await;
    mount_page(&mock_server, "/admin", &page_with_links("Admin", &[])).await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert_eq!(paths(&pages), vec!["/", "/admin"]);
}

#[tokio::test]
async fn test_forbidden_robots_is_permissive() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/members"])).await;
    mount_page(&mock_server, "/members", &page_with_links("Members", &[])).await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert_eq!(paths(&pages), vec!["/", "/members"]);
}

#[tokio::test]
async fn test_seed_not_found_returns_empty() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert!(pages.is_empty());
}

#[tokio::test]
async fn test_shared_link_recorded_once() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/a", "/b"])).await;
    mount_page(&mock_server, "/a", &page_with_links("A", &["/c"])).await;
    mount_page(&mock_server, "/b", &page_with_links("B", &["/c"])).await;

    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links("C", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 3).await;

    assert_eq!(paths(&pages), vec!["/", "/a", "/c", "/b"]);
    let depths: Vec<u32> = pages.iter().map(|p| p.depth).collect();
    assert_eq!(depths, vec![1, 2, 3, 2]);
}

#[tokio::test]
async fn test_depth_first_pre_order() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/a", "/b"])).await;
    mount_page(&mock_server, "/a", &page_with_links("A", &["/a1", "/a2"])).await;
    mount_page(&mock_server, "/a1", &page_with_links("A1", &[])).await;
    mount_page(&mock_server, "/a2", &page_with_links("A2", &[])).await;
    mount_page(&mock_server, "/b", &page_with_links("B", &["/b1"])).await;
    mount_page(&mock_server, "/b1", &page_with_links("B1", &[])).await;

    let pages = run(&mock_server, create_test_config(), 3).await;

    assert_eq!(paths(&pages), vec!["/", "/a", "/a1", "/a2", "/b", "/b1"]);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/level1"])).await;
    mount_page(&mock_server, "/level1", &page_with_links("L1", &["/level2"])).await;

    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links("L2", &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 2).await;

    assert_eq!(paths(&pages), vec!["/", "/level1"]);
    assert!(pages.iter().all(|p| p.depth <= 2));
}

#[tokio::test]
async fn test_off_site_links_not_followed() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links("Other", &[])))
        .expect(0)
        .mount(&other_server)
        .await;

    let other_link = format!("{}/page", other_server.uri());
    mount_page(
        &mock_server,
        "/",
        &page_with_links("Home", &[other_link.as_str(), "/local"]),
    )
    .await;
    mount_page(&mock_server, "/local", &page_with_links("Local", &[])).await;

    let pages = run(&mock_server, create_test_config(), 3).await;

    assert_eq!(paths(&pages), vec!["/", "/local"]);
    let seed_host = url::Url::parse(&mock_server.uri()).unwrap();
    for page in &pages {
        let page_url = url::Url::parse(&page.url).unwrap();
        assert_eq!(page_url.host_str(), seed_host.host_str());
        assert_eq!(page_url.port(), seed_host.port());
    }
}

#[tokio::test]
async fn test_page_ceiling() {
    let mock_server = MockServer::start().await;
    let links: Vec<String> = (0..10).map(|i| format!("/p{}", i)).collect();
    let link_refs: Vec<&str> = links.iter().map(String::as_str).collect();
    mount_page(&mock_server, "/", &page_with_links("Home", &link_refs)).await;
    for link in &links {
        mount_page(&mock_server, link, &page_with_links(link, &[])).await;
    }

    let mut config = create_test_config();
    config.crawler.max_pages = 3;
    let coordinator = Coordinator::new(config).unwrap();
    let report = coordinator.run_report(&mock_server.uri(), 2).await.unwrap();

    assert_eq!(paths(&report.pages), vec!["/", "/p0", "/p1"]);
    assert_eq!(report.statistics.count(VisitOutcome::PageLimitHit), 8);

    // Only robots.txt and the three recorded pages were requested
    let requests = mock_server.received_requests().await.unwrap();
    let page_requests = requests
        .iter()
        .filter(|r| r.url.path() != "/robots.txt")
        .count();
    assert_eq!(page_requests, 3);
}

#[tokio::test]
async fn test_link_cycle_terminates() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/a", "/"])).await;
    mount_page(&mock_server, "/a", &page_with_links("A", &["/", "/a"])).await;

    let pages = run(&mock_server, create_test_config(), 50).await;

    assert_eq!(paths(&pages), vec!["/", "/a"]);
}

#[tokio::test]
async fn test_failed_fetch_is_not_marked_visited() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        &page_with_links("Home", &["/broken", "/ok", "/broken"]),
    )
    .await;
    mount_page(&mock_server, "/ok", &page_with_links("Ok", &[])).await;

    // A failing URL is attempted again when it is reached again
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert_eq!(paths(&pages), vec!["/", "/ok"]);
}

#[tokio::test]
async fn test_fragment_links_deduplicated() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        &page_with_links("Home", &["#top", "/a#one", "/a#two"]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links("A", &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pages = run(&mock_server, create_test_config(), 2).await;
    assert_eq!(paths(&pages), vec!["/", "/a"]);
}

#[tokio::test]
async fn test_results_invariants() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", &page_with_links("Home", &["/x", "/y", "/x"])).await;
    mount_page(&mock_server, "/x", &page_with_links("X", &["/y", "/z", "/"])).await;
    mount_page(&mock_server, "/y", &page_with_links("Y", &["/z", "/x"])).await;
    mount_page(&mock_server, "/z", &page_with_links("Z", &["/", "/y"])).await;

    for depth in 0..4 {
        let pages = run(&mock_server, create_test_config(), depth).await;

        assert!(pages.iter().all(|p| p.depth >= 1 && p.depth <= depth));
        let unique: HashSet<_> = pages.iter().map(|p| p.url.clone()).collect();
        assert_eq!(unique.len(), pages.len(), "duplicate URL at depth {}", depth);
        assert!(pages.len() <= 100);
    }
}

#[tokio::test]
async fn test_keywords_and_description() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<html><head>
            <title>Garden</title>
            <meta name="description" content="All about tomatoes">
            <script>var tomatoes = "ignored ignored ignored ignored";</script>
        </head><body>
            <p>tomatoes basil tomatoes basil tomatoes peppers</p>
        </body></html>"#,
    )
    .await;

    let pages = run(&mock_server, create_test_config(), 1).await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].description.as_deref(), Some("All about tomatoes"));
    assert_eq!(
        pages[0].keywords,
        vec!["tomatoes", "basil", "garden", "peppers"]
    );
}

#[tokio::test]
async fn test_crawl_deadline_stops_early() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page_with_links("Slow", &["/next"]))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_links("Next", &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.crawler.crawl_deadline_secs = Some(1);
    let coordinator = Coordinator::new(config).unwrap();
    let report = coordinator.run_report(&mock_server.uri(), 3).await.unwrap();

    assert_eq!(paths(&report.pages), vec!["/"]);
    assert!(report.statistics.deadline_hit);
}
