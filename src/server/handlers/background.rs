//! Background preference API handlers.

use axum::{Json, extract::State};
use std::sync::Arc;

use crate::catalog::numbered_label;
use crate::choice::{Background, DEFAULT_IMAGE};
use crate::wire::{CurrentResponse, Listing, SetRequest, SetResponse};

use super::super::state::AppState;
use super::super::store::IMG_WEB_PREFIX;

/// GET /bg/list - Catalog of available backdrops plus the active choice.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Listing> {
    let files = state.store.list_images().await;
    let mut current = state.store.read_choice().await;

    // A saved image that has dropped out of a non-empty catalog falls back
    // to the first file. Solid choices are never overridden.
    if current.starts_with(IMG_WEB_PREFIX) && !files.is_empty() && !files.contains(&current) {
        current = files[0].clone();
    }

    let labels = files
        .iter()
        .enumerate()
        .map(|(index, file)| (file.clone(), numbered_label(index)))
        .collect();

    Json(Listing {
        ok: true,
        files,
        labels,
        current: Some(current),
    })
}

/// POST /bg/set - Validate and persist a new choice.
///
/// Accepts a file from the catalog or a well-formed `solid:#rrggbb`.
/// Rejections come back as `ok: false` with HTTP 200, like the rest of the
/// API.
pub async fn set(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetRequest>,
) -> Json<SetResponse> {
    let files = state.store.list_images().await;
    let accepted =
        files.contains(&request.file) || Background::is_well_formed_solid(&request.file);
    if !accepted {
        return Json(SetResponse {
            ok: false,
            current: None,
            error: Some("invalid choice".to_string()),
        });
    }

    match state.store.write_choice(&request.file).await {
        Ok(()) => Json(SetResponse {
            ok: true,
            current: Some(request.file),
            error: None,
        }),
        Err(e) => Json(SetResponse {
            ok: false,
            current: None,
            error: Some(e.to_string()),
        }),
    }
}

/// GET /bg/current - The saved choice, normalized against the disk.
pub async fn current(State(state): State<Arc<AppState>>) -> Json<CurrentResponse> {
    let mut current = state.store.read_choice().await;

    // An image whose file has disappeared reverts to the default.
    if current.starts_with(IMG_WEB_PREFIX) && !state.store.image_exists(&current).await {
        current = DEFAULT_IMAGE.to_string();
    }

    Json(CurrentResponse { ok: true, current })
}
