//! # Selection Control Model
//!
//! An in-memory model of the page's backdrop picker (`<select id="bgSelect">`
//! on the embedded page). The controller populates it from the catalog and
//! keeps its value in step with the applied choice; the page mirrors this
//! model into the real DOM.

use crate::catalog::{Catalog, SOLID_PRESETS};
use crate::choice::SOLID_TAG;

/// Label given to a synthesized entry for a saved custom color.
pub const CUSTOM_SOLID_LABEL: &str = "Custom solid color";

/// One entry in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    /// Wire-format choice string.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Whether the entry belongs to the grouped solid-color sub-list.
    pub solid_group: bool,
}

/// The picker's option list and current value.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    options: Vec<SelectorOption>,
    value: String,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    /// The currently selected wire value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Build the option list: one entry per catalog image, then the grouped
    /// solid presets. Does nothing if the control already has entries.
    pub fn populate(&mut self, catalog: &Catalog) {
        if !self.options.is_empty() {
            return;
        }
        for (index, file) in catalog.files.iter().enumerate() {
            self.options.push(SelectorOption {
                value: file.clone(),
                label: catalog.label_for(file, index),
                solid_group: false,
            });
        }
        for preset in SOLID_PRESETS {
            self.options.push(SelectorOption {
                value: preset.wire_value(),
                label: preset.label.to_string(),
                solid_group: true,
            });
        }
    }

    /// Select `current`, synthesizing an entry when no option matches.
    ///
    /// A previously saved custom solid (or an image gone from the catalog)
    /// still has to show up as the selected entry, so exactly one new option
    /// is appended for it.
    pub fn sync(&mut self, current: &str) {
        if !self.has_option(current) {
            let label = if current.starts_with(SOLID_TAG) {
                CUSTOM_SOLID_LABEL.to_string()
            } else {
                current.to_string()
            };
            self.options.push(SelectorOption {
                value: current.to_string(),
                label,
                solid_group: false,
            });
        }
        self.value = current.to_string();
    }

    fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
