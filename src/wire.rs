//! # Endpoint Payloads
//!
//! JSON bodies exchanged with the read (`GET /bg/list`) and write
//! (`POST /bg/set`) endpoints. Decoding is lenient on purpose: a missing or
//! mistyped field degrades to an empty default instead of failing the whole
//! response, matching the controller's best-effort error policy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Read-endpoint response: the catalog plus the active choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default = "default_true")]
    pub ok: bool,
    /// Ordered image paths.
    #[serde(default)]
    pub files: Vec<String>,
    /// Path → display label.
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// The saved choice, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
}

/// Write-endpoint request: the newly chosen backdrop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRequest {
    /// Wire-format choice string (image path or `solid:#rrggbb`).
    pub file: String,
}

/// Write-endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /bg/current` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub ok: bool,
    pub current: String,
}
