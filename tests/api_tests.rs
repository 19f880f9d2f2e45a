//! # API Tests
//!
//! Exercise the server router end to end with in-process requests: catalog
//! listing, choice validation and persistence, and the server-rendered
//! index page.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tower::ServiceExt;

use backdrop::choice::DEFAULT_IMAGE;
use backdrop::server::{AppState, ServerConfig, router};
use backdrop::wire::{CurrentResponse, Listing, SetResponse};

/// A state dir with two catalog images and no saved choice.
fn fixture() -> (TempDir, Arc<AppState>) {
    let dir = TempDir::new().unwrap();
    let img_dir = dir.path().join("img");
    std::fs::create_dir(&img_dir).unwrap();
    std::fs::write(img_dir.join("backdrop.png"), b"png").unwrap();
    std::fs::write(img_dir.join("backdrop2.jpg"), b"jpg").unwrap();

    let state = Arc::new(AppState::new(ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        img_dir,
        state_file: dir.path().join("ui.json"),
    }));
    (dir, state)
}

fn save_choice(dir: &TempDir, choice: &str) {
    std::fs::write(
        dir.path().join("ui.json"),
        serde_json::json!({ "bg": choice }).to_string(),
    )
    .unwrap();
}

async fn get_json<T: serde::de::DeserializeOwned>(state: Arc<AppState>, uri: &str) -> T {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn post_set(state: Arc<AppState>, choice: &str) -> SetResponse {
    let body = serde_json::json!({ "file": choice }).to_string();
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bg/set")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn list_returns_catalog_with_numbered_labels() {
    let (_dir, state) = fixture();
    let listing: Listing = get_json(state, "/bg/list").await;

    assert!(listing.ok);
    assert_eq!(
        listing.files,
        ["/static/img/backdrop.png", "/static/img/backdrop2.jpg"]
    );
    assert_eq!(listing.labels["/static/img/backdrop.png"], "Background 1");
    assert_eq!(listing.labels["/static/img/backdrop2.jpg"], "Background 2");
    // nothing saved yet: the default image is the current choice
    assert_eq!(listing.current.as_deref(), Some(DEFAULT_IMAGE));
}

#[tokio::test]
async fn list_falls_back_when_saved_image_left_the_catalog() {
    let (dir, state) = fixture();
    save_choice(&dir, "/static/img/gone.png");

    let listing: Listing = get_json(state, "/bg/list").await;
    assert_eq!(listing.current.as_deref(), Some("/static/img/backdrop.png"));
}

#[tokio::test]
async fn list_never_overrides_a_solid_choice() {
    let (dir, state) = fixture();
    save_choice(&dir, "solid:#123abc");

    let listing: Listing = get_json(state, "/bg/list").await;
    assert_eq!(listing.current.as_deref(), Some("solid:#123abc"));
}

#[tokio::test]
async fn set_persists_a_catalog_image() {
    let (_dir, state) = fixture();
    let set: SetResponse = post_set(state.clone(), "/static/img/backdrop2.jpg").await;
    assert!(set.ok);
    assert_eq!(set.current.as_deref(), Some("/static/img/backdrop2.jpg"));

    let current: CurrentResponse = get_json(state, "/bg/current").await;
    assert_eq!(current.current, "/static/img/backdrop2.jpg");
}

#[tokio::test]
async fn set_persists_a_well_formed_solid() {
    let (_dir, state) = fixture();
    let set: SetResponse = post_set(state.clone(), "solid:#0f172a").await;
    assert!(set.ok);

    let current: CurrentResponse = get_json(state, "/bg/current").await;
    assert_eq!(current.current, "solid:#0f172a");
}

#[tokio::test]
async fn set_rejects_everything_else() {
    let (_dir, state) = fixture();
    for bad in ["/etc/passwd", "solid:#fff", "solid:red", ""] {
        let set: SetResponse = post_set(state.clone(), bad).await;
        assert!(!set.ok, "accepted {bad:?}");
        assert!(set.error.is_some());
    }

    // nothing was saved
    let current: CurrentResponse = get_json(state, "/bg/current").await;
    assert_eq!(current.current, DEFAULT_IMAGE);
}

#[tokio::test]
async fn current_reverts_to_default_when_the_file_is_gone() {
    let (dir, state) = fixture();
    save_choice(&dir, "/static/img/gone.png");

    let current: CurrentResponse = get_json(state, "/bg/current").await;
    assert_eq!(current.current, DEFAULT_IMAGE);
}

#[tokio::test]
async fn current_passes_solids_through() {
    let (dir, state) = fixture();
    save_choice(&dir, "solid:#0a0a0a");

    let current: CurrentResponse = get_json(state, "/bg/current").await;
    assert_eq!(current.current, "solid:#0a0a0a");
}

#[tokio::test]
async fn index_injects_style_presets_and_cache_busting() {
    let (dir, state) = fixture();
    save_choice(&dir, "solid:#111827");

    let response = router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("--bg-solid: #111827;"));
    assert!(html.contains("--bg-url: none;"));
    assert!(html.contains("window.__SOLID_PRESETS"));
    assert!(html.contains("solid:#0b1226"));
    assert!(html.contains(".js?v="));
    assert!(html.contains(".css?v="));
}

#[tokio::test]
async fn assets_are_served_with_long_cache_headers() {
    let (_dir, state) = fixture();
    let response = router(state)
        .oneshot(
            Request::builder()
                .uri("/assets/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=31536000"
    );
}
