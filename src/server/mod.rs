//! # HTTP Server for the Backdrop Preference
//!
//! Provides the read/write endpoints the page controller depends on, the
//! backdrop images themselves, and an embedded demo page.
//!
//! ## Usage
//!
//! ```bash
//! backdrop serve --listen 0.0.0.0:8080 --img-dir static/img
//! ```
//!
//! Then open http://localhost:8080 in a browser to pick a backdrop.

mod handlers;
mod state;
mod static_files;
mod store;

pub use state::{AppState, ServerConfig};
pub use store::{IMG_WEB_PREFIX, PreferenceStore};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::error::BackdropError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let img_dir = state.config.img_dir.clone();
    Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Background API
        .route("/bg/list", get(handlers::background::list))
        .route("/bg/set", post(handlers::background::set))
        .route("/bg/current", get(handlers::background::current))
        // Backdrop images from disk
        .nest_service("/static/img", ServeDir::new(img_dir))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use backdrop::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), backdrop::error::BackdropError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     img_dir: "static/img".into(),
///     state_file: "/var/lib/backdrop/ui.json".into(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), BackdropError> {
    let app_state = Arc::new(AppState::new(config.clone()));
    let app = router(app_state);

    println!("Backdrop HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!("Image directory: {}", config.img_dir.display());
    println!("State file: {}", config.state_file.display());
    println!();
    println!(
        "Open http://{}/ in your browser to pick a backdrop",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            BackdropError::Http(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| BackdropError::Http(format!("Server error: {}", e)))?;

    Ok(())
}
