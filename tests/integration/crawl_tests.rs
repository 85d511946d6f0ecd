//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl-then-aggregate cycle end-to-end over real HTTP.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordfreq_crawler::config::{Config, CrawlConfig, FailurePolicy, HttpConfig};
use wordfreq_crawler::crawler::{
    crawl, run_crawl, word_frequencies, Crawler, Fetcher, HttpFetcher,
};
use wordfreq_crawler::CrawlError;

fn test_fetcher() -> HttpFetcher {
    HttpFetcher::new(&HttpConfig {
        user_agent: "TestBot/1.0.0".to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    })
    .expect("Failed to build HTTP client")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "text/html"),
        )
        .mount(server)
        .await;
}

fn ngrams(table: &wordfreq_crawler::FrequencyTable, length: usize) -> Vec<(String, u64)> {
    table
        .get(length)
        .expect("Missing n-gram length")
        .iter()
        .map(|entry| (entry.ngram.clone(), entry.count))
        .collect()
}

#[tokio::test]
async fn test_fetcher_reports_page_metadata() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/page", mock_server.uri());

    mount_page(&mock_server, "/page", "<p>hi</p>".to_string()).await;

    let page = test_fetcher().get(&url).await.expect("Fetch failed");

    assert_eq!(page.final_url, url);
    assert_eq!(page.status_code, 200);
    assert_eq!(page.content_type.as_deref(), Some("text/html"));
    assert_eq!(page.body, "<p>hi</p>");
}

#[tokio::test]
async fn test_single_page_without_links() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <h1>Hello world</h1>
            <p>hello again world</p>
        </body></html>"#
            .to_string(),
    )
    .await;

    let fetcher = test_fetcher();
    let mut crawler = Crawler::new(CrawlConfig::new(seed.clone()), &fetcher);
    let state = crawler.run().await.expect("Crawl failed");

    assert_eq!(state.visited(), [seed.as_str()]);
    assert_eq!(state.tokens(), ["Hello", "world", "hello", "again", "world"]);
}

#[tokio::test]
async fn test_full_crawl_one_level_deep() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let seed = format!("{}/", base_url);

    // Every page links to /a and /b
    let body = format!(
        r#"<p><a href="{}/a">This</a> is <a href="{}/b">URL2</a></p>"#,
        base_url, base_url
    );
    for page in ["/", "/a", "/b"] {
        mount_page(&mock_server, page, body.clone()).await;
    }

    let config = CrawlConfig::new(seed.clone())
        .with_max_depth(1)
        .with_ngram_lengths([1, 2]);
    let fetcher = test_fetcher();
    let report = run_crawl(&config, &fetcher).await.expect("Crawl failed");

    assert_eq!(
        report.pages_visited,
        vec![seed, format!("{}/a", base_url), format!("{}/b", base_url)]
    );
    assert_eq!(report.token_count, 9);
    assert_eq!(
        ngrams(&report.frequencies, 1),
        vec![
            ("This".to_string(), 3),
            ("is".to_string(), 3),
            ("URL2".to_string(), 3)
        ]
    );
    assert_eq!(
        ngrams(&report.frequencies, 2),
        vec![
            ("This is".to_string(), 3),
            ("is URL2".to_string(), 3),
            ("URL2 This".to_string(), 2)
        ]
    );
}

#[tokio::test]
async fn test_depth_zero_ignores_internal_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<body><a href="{0}/a">first</a> <a href="{0}/b">second</a></body>"#,
            base_url
        ),
    )
    .await;

    // Linked pages must never be requested
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = CrawlConfig::new(format!("{}/", base_url));
    let table = word_frequencies(&config, &test_fetcher())
        .await
        .expect("Crawl failed");

    assert_eq!(
        ngrams(&table, 1),
        vec![("first".to_string(), 1), ("second".to_string(), 1)]
    );
}

#[tokio::test]
async fn test_each_page_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<p><a href="{0}/a">a</a> <a href="{0}/a">again</a> <a href="{0}/">home</a></p>"#,
            base_url
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"<p><a href="{}/">back</a></p>"#, base_url)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = CrawlConfig::new(format!("{}/", base_url)).with_max_depth(3);
    let report = run_crawl(&config, &test_fetcher())
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages_visited.len(), 2);
}

#[tokio::test]
async fn test_http_error_aborts_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(r#"<p><a href="{}/missing">gone</a></p>"#, base_url),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = CrawlConfig::new(format!("{}/", base_url)).with_max_depth(1);
    let err = word_frequencies(&config, &test_fetcher())
        .await
        .expect_err("Crawl should fail");

    assert!(matches!(err, CrawlError::HttpStatus { status: 404, .. }));
    assert_eq!(err.url(), Some(format!("{}/missing", base_url).as_str()));
}

#[tokio::test]
async fn test_skip_policy_reports_remaining_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<p><a href="{0}/broken">broken</a> <a href="{0}/ok">ok</a></p>"#,
            base_url
        ),
    )
    .await;
    mount_page(&mock_server, "/ok", "<p>fine page</p>".to_string()).await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = CrawlConfig::new(format!("{}/", base_url))
        .with_max_depth(1)
        .with_failure_policy(FailurePolicy::Skip);
    let report = run_crawl(&config, &test_fetcher())
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages_visited.len(), 3);
    assert_eq!(report.token_count, 4);
}

#[tokio::test]
async fn test_crawl_from_config() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/", mock_server.uri());

    mount_page(&mock_server, "/", "<div>one two two</div>".to_string()).await;

    let mut config = Config::for_seed(seed);
    config.crawler.most_frequent = 1;

    let report = crawl(&config).await.expect("Crawl failed");

    assert_eq!(ngrams(&report.frequencies, 1), vec![("two".to_string(), 2)]);
}
