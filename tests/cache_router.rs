mod common;

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use armortrack_offline::application::ports::notification::ClientWindow;
use armortrack_offline::application::ports::HttpCache;
use armortrack_offline::domain::entities::{
    HttpMethod, HttpRequest, HttpResponse, RequestDestination,
};
use armortrack_offline::infrastructure::cache::MemoryHttpCache;
use armortrack_offline::shared::config::{AppConfig, CacheConfig};
use armortrack_offline::worker::CacheRouter;

use common::{MockGateway, RecordingSink, RecordingWindows};

const ORIGIN: &str = "https://app.armortrack.example";

fn config() -> CacheConfig {
    CacheConfig {
        api_timeout_ms: 50,
        ..AppConfig::default().cache
    }
}

fn html(body: &'static str) -> HttpResponse {
    HttpResponse::new(
        200,
        vec![("content-type".to_string(), "text/html".to_string())],
        Bytes::from_static(body.as_bytes()),
    )
}

fn get(url: &str, destination: RequestDestination) -> HttpRequest {
    HttpRequest::new(HttpMethod::Get, url, destination).unwrap()
}

async fn router_with_shell() -> (CacheRouter, Arc<MemoryHttpCache>, Arc<MockGateway>) {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());

    for path in &config().static_assets {
        gateway
            .respond_with(&format!("{ORIGIN}{path}"), html("<html>shell</html>"))
            .await;
    }

    let router = CacheRouter::new(config(), cache.clone(), gateway.clone());
    (router, cache, gateway)
}

#[tokio::test]
async fn install_prepopulates_the_static_bucket() {
    let (router, cache, _gateway) = router_with_shell().await;

    router.handle_install().await.unwrap();

    let bucket = config().static_bucket();
    assert_eq!(
        cache.entry_count(&bucket).await.unwrap(),
        config().static_assets.len()
    );
}

/// Scenario: the shell keeps rendering offline after a completed install.
#[tokio::test]
async fn navigation_offline_is_served_from_the_static_bucket() {
    let (router, _cache, gateway) = router_with_shell().await;
    router.handle_install().await.unwrap();

    gateway.set_offline(true);

    let response = router
        .handle_fetch(&get(
            &format!("{ORIGIN}/projects/42"),
            RequestDestination::Document,
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, Bytes::from_static(b"<html>shell</html>"));
}

#[tokio::test]
async fn navigation_offline_without_shell_degrades_to_503() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    gateway.set_offline(true);

    let router = CacheRouter::new(config(), cache, gateway);
    let response = router
        .handle_fetch(&get(
            &format!("{ORIGIN}/projects/42"),
            RequestDestination::Document,
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
}

/// Scenario: a version rollover deletes every bucket of the old generation.
#[tokio::test]
async fn activation_deletes_buckets_from_older_versions() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());

    let old = CacheConfig {
        version: "v2".to_string(),
        ..config()
    };
    for bucket in old.known_buckets() {
        cache.put(&bucket, "k", html("old")).await.unwrap();
    }
    let current = config();
    cache
        .put(&current.api_bucket(), "k", html("fresh"))
        .await
        .unwrap();

    let router = CacheRouter::new(current.clone(), cache.clone(), gateway);
    let removed = router.handle_activate().await.unwrap();

    assert_eq!(removed, 3);
    let remaining = cache.bucket_names().await.unwrap();
    assert_eq!(remaining, vec![current.api_bucket()]);
}

/// Scenario: an API timeout with an empty cache yields the synthetic
/// offline body, not an unhandled error.
#[tokio::test]
async fn api_timeout_without_cache_yields_offline_json() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = "https://abc.supabase.co/rest/v1/projects";
    gateway.respond_with(url, html("slow")).await;
    gateway.set_delay(Some(Duration::from_millis(500))).await;

    let router = CacheRouter::new(config(), cache, gateway);
    let response = router
        .handle_fetch(&get(url, RequestDestination::Other))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["error"], "offline");
}

#[tokio::test]
async fn api_failure_falls_back_to_the_cached_copy() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = "https://abc.supabase.co/rest/v1/projects";
    gateway.respond_with(url, html("projects")).await;

    let router = CacheRouter::new(config(), cache, gateway.clone());
    let request = get(url, RequestDestination::Other);

    // Warm pass stores a copy in the API bucket.
    let fresh = router.handle_fetch(&request).await.unwrap();
    assert_eq!(fresh.body, Bytes::from_static(b"projects"));

    gateway.set_offline(true);
    let fallback = router.handle_fetch(&request).await.unwrap();
    assert_eq!(fallback.status, 200);
    assert_eq!(fallback.body, Bytes::from_static(b"projects"));
}

#[tokio::test]
async fn images_are_served_cache_first() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = &format!("{ORIGIN}/photos/door.jpg");
    gateway.respond_with(url, html("jpeg-bytes")).await;

    let router = CacheRouter::new(config(), cache, gateway.clone());
    let request = get(url, RequestDestination::Image);

    router.handle_fetch(&request).await.unwrap();
    let second = router.handle_fetch(&request).await.unwrap();

    assert_eq!(second.body, Bytes::from_static(b"jpeg-bytes"));
    assert_eq!(gateway.fetch_count(), 1, "second hit never left the cache");
}

#[tokio::test]
async fn image_failure_without_cache_degrades_to_408() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    gateway.set_offline(true);

    let router = CacheRouter::new(config(), cache, gateway);
    let response = router
        .handle_fetch(&get(
            &format!("{ORIGIN}/photos/door.jpg"),
            RequestDestination::Image,
        ))
        .await
        .unwrap();

    assert_eq!(response.status, 408);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn scripts_use_stale_while_revalidate() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = &format!("{ORIGIN}/assets/index.js");
    gateway.respond_with(url, html("bundle-v1")).await;

    let router = CacheRouter::new(config(), cache, gateway.clone());
    let request = get(url, RequestDestination::Script);

    // Cold: waits on the network and seeds the cache.
    let cold = router.handle_fetch(&request).await.unwrap();
    assert_eq!(cold.body, Bytes::from_static(b"bundle-v1"));

    // Deploy a new bundle; the stale copy is still what this request sees.
    gateway.respond_with(url, html("bundle-v2")).await;
    let stale = router.handle_fetch(&request).await.unwrap();
    assert_eq!(stale.body, Bytes::from_static(b"bundle-v1"));

    // The background revalidation lands eventually.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fresh = router.handle_fetch(&request).await.unwrap();
    assert_eq!(fresh.body, Bytes::from_static(b"bundle-v2"));
}

#[tokio::test]
async fn non_get_requests_are_passed_through_uncached() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = "https://abc.supabase.co/rest/v1/projects";
    gateway.respond_with(url, html("created")).await;

    let router = CacheRouter::new(config(), cache.clone(), gateway);
    let request = HttpRequest::new(HttpMethod::Post, url, RequestDestination::Other).unwrap();

    let response = router.handle_fetch(&request).await.unwrap();

    assert_eq!(response.body, Bytes::from_static(b"created"));
    assert_eq!(
        cache.entry_count(&config().api_bucket()).await.unwrap(),
        0,
        "mutations never enter the cache"
    );
}

#[tokio::test]
async fn cross_origin_misc_traffic_bypasses_the_cache() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let url = "https://telemetry.thirdparty.example/collect?e=pageview";
    gateway.respond_with(url, html("ok")).await;

    let router = CacheRouter::new(config(), cache.clone(), gateway.clone());
    let request = get(url, RequestDestination::Other);

    router.handle_fetch(&request).await.unwrap();
    router.handle_fetch(&request).await.unwrap();

    assert_eq!(gateway.fetch_count(), 2, "every hit goes to the network");
    assert_eq!(
        cache.entry_count(&config().static_bucket()).await.unwrap(),
        0,
        "third-party responses never enter the static bucket"
    );
}

#[tokio::test]
async fn push_event_shows_the_merged_notification() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let sink = RecordingSink::default();

    let router = CacheRouter::new(config(), cache, gateway);
    router
        .handle_push(
            Some(br#"{"title":"Step approved","data":{"url":"/projects/7"}}"#),
            &sink,
        )
        .await
        .unwrap();

    let shown = sink.shown.lock().await;
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "Step approved");
    assert_eq!(shown[0].url, "/projects/7");
}

#[tokio::test]
async fn notification_click_reuses_an_open_app_window() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let windows = RecordingWindows::with_windows(vec![
        ClientWindow {
            id: "w-mail".to_string(),
            url: "https://mail.example.com/inbox".to_string(),
        },
        ClientWindow {
            id: "w-app".to_string(),
            url: format!("{ORIGIN}/dashboard"),
        },
    ]);

    let router = CacheRouter::new(config(), cache, gateway);
    router
        .handle_notification_click("open", Some("/projects/7"), &windows)
        .await
        .unwrap();

    assert_eq!(
        *windows.navigations.lock().await,
        vec![("w-app".to_string(), "/projects/7".to_string())]
    );
    assert!(windows.opened.lock().await.is_empty());
}

#[tokio::test]
async fn notification_click_opens_a_window_when_none_matches() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let windows = RecordingWindows::default();

    let router = CacheRouter::new(config(), cache, gateway);
    router
        .handle_notification_click("open", None, &windows)
        .await
        .unwrap();

    assert_eq!(*windows.opened.lock().await, vec!["/dashboard"]);
}

#[tokio::test]
async fn close_action_only_dismisses() {
    let cache = Arc::new(MemoryHttpCache::new());
    let gateway = Arc::new(MockGateway::new());
    let windows = RecordingWindows::with_windows(vec![ClientWindow {
        id: "w-app".to_string(),
        url: format!("{ORIGIN}/dashboard"),
    }]);

    let router = CacheRouter::new(config(), cache, gateway);
    router
        .handle_notification_click("close", Some("/projects/7"), &windows)
        .await
        .unwrap();

    assert!(windows.navigations.lock().await.is_empty());
    assert!(windows.opened.lock().await.is_empty());
}
