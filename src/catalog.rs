//! # Option Catalog
//!
//! The set of selectable backdrops: image paths discovered by the server
//! plus a fixed group of solid-color presets. The catalog is read-only per
//! page load; the only mutation anywhere is the selector synthesizing an
//! entry for a saved choice that no longer appears here.

use std::collections::HashMap;

use serde::Serialize;

use crate::choice::SOLID_TAG;

/// Display label of the solid-color option group.
pub const SOLID_GROUP_LABEL: &str = "Solid colors";

/// A built-in flat-color option.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SolidPreset {
    /// CSS color value.
    pub color: &'static str,
    /// Display label.
    pub label: &'static str,
}

impl SolidPreset {
    /// The preset's wire-format choice string.
    pub fn wire_value(&self) -> String {
        format!("{SOLID_TAG}{}", self.color)
    }
}

/// The fixed solid-color presets, offered on every page.
pub const SOLID_PRESETS: [SolidPreset; 4] = [
    SolidPreset { color: "#0b1226", label: "Dark blue" },
    SolidPreset { color: "#111827", label: "Graphite" },
    SolidPreset { color: "#0f172a", label: "Slate" },
    SolidPreset { color: "#0a0a0a", label: "Black" },
];

/// Label for the image at `index` when the label map has no entry.
pub fn numbered_label(index: usize) -> String {
    format!("Background {}", index + 1)
}

/// The image backdrops available on the server.
///
/// `files` keeps the server's ordering. Duplicate paths are tolerated and
/// rendered as separate entries; nothing deduplicates them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Ordered image paths.
    pub files: Vec<String>,
    /// Path → display label. Sparse: missing entries get a numbered label.
    pub labels: HashMap<String, String>,
}

impl Catalog {
    pub fn new(files: Vec<String>, labels: HashMap<String, String>) -> Self {
        Self { files, labels }
    }

    /// Display label for `file` at position `index`.
    pub fn label_for(&self, file: &str, index: usize) -> String {
        self.labels
            .get(file)
            .cloned()
            .unwrap_or_else(|| numbered_label(index))
    }
}
