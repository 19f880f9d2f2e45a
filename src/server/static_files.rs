//! Static file serving for the embedded demo page.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use include_dir::{Dir, include_dir};
use std::sync::Arc;

use crate::catalog::SOLID_PRESETS;
use crate::choice::Background;
use crate::style::BackdropStyle;

use super::state::AppState;

/// Embedded frontend files.
static WEB_DIST: Dir = include_dir!("$CARGO_MANIFEST_DIR/web/dist");

/// Serve index.html with cache-busted assets, the current backdrop's
/// `:root` block rendered server-side (so the first paint doesn't wait for
/// the /bg/list round-trip), and the solid presets injected as static data
/// (avoids an API round-trip).
pub async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match WEB_DIST.get_file("index.html") {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.contents());
            let cache_bust = format!("?v={}", state.boot_time);
            let busted = contents
                .replace(".js\"", &format!(".js{}\"", cache_bust))
                .replace(".css\"", &format!(".css{}\"", cache_bust));

            let mut style = BackdropStyle::new();
            style.apply(&Background::parse(&state.store.read_choice().await));

            let presets: Vec<serde_json::Value> = SOLID_PRESETS
                .iter()
                .map(|preset| {
                    serde_json::json!({
                        "value": preset.wire_value(),
                        "label": preset.label,
                    })
                })
                .collect();
            let head = format!(
                "<style>{}</style><script>window.__SOLID_PRESETS={}</script></head>",
                style.css_root(),
                serde_json::to_string(&presets).unwrap()
            );
            let busted = busted.replace("</head>", &head);

            Html(busted).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Frontend not built").into_response(),
    }
}

/// Serve static assets from the embedded assets directory.
pub async fn asset_handler(Path(path): Path<String>) -> impl IntoResponse {
    // Strip query params if present
    let clean_path = path.split('?').next().unwrap_or(&path);
    let file_path = format!("assets/{}", clean_path);

    match WEB_DIST.get_file(&file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(clean_path)
                .first_or_octet_stream()
                .to_string();
            // Set long cache headers since we use cache busting
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
