//! End-to-end tests for the scraper
//!
//! These tests use wiremock to serve a small documentation site and exercise
//! the full pipeline: crawl, disk cache, graph persistence, and extraction.

use docscrape::cache::{cache_file_name, HttpPageCache, PageSource};
use docscrape::config::Config;
use docscrape::crawler::crawl;
use docscrape::report::scrape_all;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a zero throttle delay and the given
/// cache directory
fn create_test_config(cache_dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.crawler.delay_ms = 0;
    config.cache.dir = cache_dir.to_str().unwrap().to_string();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a three-page documentation site shaped like Sphinx output:
/// the index links to both module pages (one of them twice), and the os
/// page links back to the index.
async fn mount_docs_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><body>
            <a href="/os.html">os</a>
            <a href="/io.html">io</a>
            <a href="/os.html">os again</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/os.html",
        r#"<html><body>
            <a href="/">home</a>
            <a href="/io.html">io</a>
            <dl class="function">
                <dt id="os.fork">os.fork()</dt>
                <dd>
                    <p class="availability">Availability: Unix, Linux.</p>
                    <span class="versionmodified changed">Changed in version 3.9: audited.</span>
                </dd>
            </dl>
            <dl class="function">
                <dt id="os.spawn">os.spawn(<em class="sig-param">a</em><em class="sig-param">b</em><em class="sig-param">c</em><em class="sig-param">d</em><em class="sig-param">e</em><em class="sig-param">f</em><em class="sig-param">g</em><em class="sig-param">h</em><em class="sig-param">i</em><em class="sig-param">j</em><em class="sig-param">k</em>)</dt>
                <dd><p class="availability">Availability: Unix, Windows.</p></dd>
            </dl>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/io.html",
        r#"<html><body>
            <dl class="function">
                <dt id="io.open_code">io.open_code()</dt>
                <dd><span class="versionmodified added">New in version 3.10.</span></dd>
            </dl>
        </body></html>"#,
    )
    .await;
}

#[tokio::test]
async fn test_full_scrape_of_mock_site() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;

    let cache_dir = TempDir::new().unwrap();
    let graph_dir = TempDir::new().unwrap();
    let graph_path = graph_dir.path().join("all_url.json");

    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();

    let scrap = scrape_all(&cache, &base_url, &graph_path, false)
        .await
        .unwrap();

    // Only os.fork is restricted to Linux/Unix.
    assert_eq!(scrap.linux_only_availability, vec!["os.fork".to_string()]);

    // os.html and io.html both have two inbound links; the tie resolves to
    // the lexicographically earlier key.
    let (count, url) = &scrap.most_visited_webpage;
    assert_eq!(*count, 2);
    assert!(url.ends_with("/io.html"));

    // "3.9" stays exact, "3.10" truncates to "3.1".
    assert_eq!(
        scrap.changes,
        vec![(1, "3.1".to_string()), (1, "3.9".to_string())]
    );

    // os.spawn declares 11 parameters; os.fork declares none.
    assert_eq!(scrap.params, vec![(11, "os.spawn".to_string())]);

    // The graph was persisted for the next run.
    assert!(graph_path.exists());
}

#[tokio::test]
async fn test_crawl_cycle_fetches_each_page_once() {
    let server = MockServer::start().await;

    // A -> B, B -> C, C -> A. expect(1) makes wiremock verify on drop that
    // the cycle did not cause a second fetch of any page.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<a href="/b.html">b</a>"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"<a href="/c.html">c</a>"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c.html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<a href="/">a</a>"#))
        .expect(1)
        .mount(&server)
        .await;

    let cache_dir = TempDir::new().unwrap();
    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();

    let graph = crawl(&cache, &base_url).await.unwrap();

    assert_eq!(graph.get(&format!("{}/b.html", server.uri())), Some(&1));
    assert_eq!(graph.get(&format!("{}/c.html", server.uri())), Some(&1));
    assert_eq!(graph.get(&format!("{}/", server.uri())), Some(&1));
}

#[tokio::test]
async fn test_cached_page_shadows_changed_content() {
    let server = MockServer::start().await;
    let url = format!("{}/page.html", server.uri());

    let cache_dir = TempDir::new().unwrap();

    // The cache file already exists for this URL; the server would answer
    // with different content, but must never be asked.
    std::fs::write(
        cache_dir.path().join(cache_file_name(&url)),
        "<html><body>first</body></html>",
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/page.html"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>second</body></html>"),
        )
        .expect(0)
        .mount(&server)
        .await;

    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let html = cache.fetch_html(&url).await.unwrap();

    assert_eq!(html, "<html><body>first</body></html>");
}

#[tokio::test]
async fn test_network_fetch_populates_cache() {
    let server = MockServer::start().await;
    mount_page(&server, "/page.html", "<html><body>content</body></html>").await;

    let cache_dir = TempDir::new().unwrap();
    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let url = format!("{}/page.html", server.uri());

    let first = cache.fetch_html(&url).await.unwrap();

    // One file per distinct URL.
    assert!(cache_dir.path().join(cache_file_name(&url)).exists());

    // The second fetch is a cache hit and returns identical content.
    let second = cache.fetch_html(&url).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_http_error_aborts_run() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/missing.html">gone</a></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let cache_dir = TempDir::new().unwrap();
    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();

    let result = crawl(&cache, &base_url).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_persisted_graph_reused_without_network() {
    let server = MockServer::start().await;
    mount_docs_site(&server).await;

    let cache_dir = TempDir::new().unwrap();
    let graph_dir = TempDir::new().unwrap();
    let graph_path = graph_dir.path().join("all_url.json");
    let base_url = Url::parse(&format!("{}/", server.uri())).unwrap();

    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let first = scrape_all(&cache, &base_url, &graph_path, false)
        .await
        .unwrap();

    // Same cache dir, same graph file: the second run rebuilds the same
    // report from disk alone.
    let cache = HttpPageCache::new(&create_test_config(cache_dir.path())).unwrap();
    let second = scrape_all(&cache, &base_url, &graph_path, false)
        .await
        .unwrap();

    assert_eq!(first, second);
}
