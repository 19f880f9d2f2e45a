//! Preference persistence and image discovery.
//!
//! The saved choice lives in a small JSON state file (`{"bg": "..."}`), the
//! catalog comes from scanning an image directory. Writes go through a
//! temp-file-then-rename so a crash mid-write never leaves a torn file.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::choice::DEFAULT_IMAGE;
use crate::error::BackdropError;

/// Web path prefix under which catalog images are served.
pub const IMG_WEB_PREFIX: &str = "/static/img/";

/// Filename prefix an image must carry to appear in the catalog.
const IMG_NAME_PREFIX: &str = "backdrop";

/// File-backed store for the saved choice plus the image directory scan.
///
/// The state file is re-read on every request so edits from outside the
/// server are picked up. Concurrent writes are last-writer-wins; the rename
/// keeps the file itself consistent either way.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    state_file: PathBuf,
    img_dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(state_file: PathBuf, img_dir: PathBuf) -> Self {
        Self {
            state_file,
            img_dir,
        }
    }

    /// The saved choice, or the default image when the state file is
    /// missing, unreadable, or malformed.
    pub async fn read_choice(&self) -> String {
        match tokio::fs::read(&self.state_file).await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|state| {
                    state
                        .get("bg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            Err(_) => DEFAULT_IMAGE.to_string(),
        }
    }

    /// Persist a new choice, keeping any unrelated keys in the state file.
    pub async fn write_choice(&self, choice: &str) -> Result<(), BackdropError> {
        let mut state = match tokio::fs::read(&self.state_file).await {
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            Err(_) => Map::new(),
        };
        state.insert("bg".to_string(), Value::String(choice.to_string()));

        if let Some(parent) = self.state_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.state_file.with_extension("tmp");
        tokio::fs::write(&tmp, serde_json::to_vec(&Value::Object(state))?).await?;
        tokio::fs::rename(&tmp, &self.state_file).await?;
        Ok(())
    }

    /// Scan the image directory for catalog entries.
    ///
    /// Only `backdrop*.png` / `backdrop*.jpg` files count, sorted by
    /// lowercased name, returned as web paths. A missing directory is an
    /// empty catalog, not an error.
    pub async fn list_images(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let Ok(mut entries) = tokio::fs::read_dir(&self.img_dir).await else {
            return names;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if is_catalog_image(name) {
                names.push(name.to_string());
            }
        }
        names.sort_by_key(|name| name.to_lowercase());
        names
            .into_iter()
            .map(|name| format!("{IMG_WEB_PREFIX}{name}"))
            .collect()
    }

    /// Whether the image behind a web path still exists on disk.
    pub async fn image_exists(&self, web_path: &str) -> bool {
        let name = web_path.rsplit('/').next().unwrap_or(web_path);
        if name.is_empty() {
            return false;
        }
        tokio::fs::try_exists(self.img_dir.join(name))
            .await
            .unwrap_or(false)
    }
}

fn is_catalog_image(name: &str) -> bool {
    name.starts_with(IMG_NAME_PREFIX) && (name.ends_with(".png") || name.ends_with(".jpg"))
}

// ============================================================================
// TESTS
// ============================================================================
