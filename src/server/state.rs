//! Server state and configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use super::store::PreferenceStore;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Directory scanned for backdrop images
    pub img_dir: PathBuf,
    /// JSON file the chosen backdrop is persisted to
    pub state_file: PathBuf,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub store: PreferenceStore,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = PreferenceStore::new(config.state_file.clone(), config.img_dir.clone());
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        Self {
            config,
            store,
            boot_time,
        }
    }
}
