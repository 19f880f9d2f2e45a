//! # Backdrop Choice
//!
//! The persisted preference value: either a flat color or an image.
//!
//! ## Wire Format
//!
//! The two endpoints exchange a choice as a single string:
//!
//! | Variant | Encoding | Example |
//! |---------|----------|---------|
//! | Solid color | `solid:` + CSS color | `solid:#0f172a` |
//! | Image | the path/URL itself | `/static/img/backdrop2.png` |
//!
//! [`Background::parse`] and [`Background::to_wire`] round-trip this format
//! exactly. An empty string stands for "no preference" and parses to the
//! default image.
//!
//! ## Usage
//!
//! ```
//! use backdrop::choice::Background;
//!
//! let bg = Background::parse("solid:#0b1226");
//! assert_eq!(bg, Background::Solid("#0b1226".to_string()));
//! assert_eq!(bg.to_wire(), "solid:#0b1226");
//! ```

/// Wire prefix marking a flat-color choice.
pub const SOLID_TAG: &str = "solid:";

/// Image applied when no preference is stored or the fetch fails.
pub const DEFAULT_IMAGE: &str = "/static/img/backdrop.png";

/// A page background choice.
///
/// Colors are carried uninterpreted: a malformed color value applies as-is
/// and simply renders to an invalid CSS declaration. Well-formedness is only
/// enforced where the write endpoint accepts new choices, via
/// [`Background::is_well_formed_solid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// A flat color, normally `#rrggbb`.
    Solid(String),
    /// An image path or URL, served alongside the pages.
    Image(String),
}

impl Background {
    /// Parse a wire-format choice string.
    ///
    /// Never fails: anything without the solid tag is an image reference,
    /// and the empty string means the default image.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(SOLID_TAG) {
            Some(color) => Self::Solid(color.to_string()),
            None if raw.is_empty() => Self::default_image(),
            None => Self::Image(raw.to_string()),
        }
    }

    /// Encode back to the wire format.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Solid(color) => format!("{SOLID_TAG}{color}"),
            Self::Image(path) => path.clone(),
        }
    }

    /// The hardcoded fallback image.
    pub fn default_image() -> Self {
        Self::Image(DEFAULT_IMAGE.to_string())
    }

    /// Whether a wire string is a well-formed solid choice (`solid:#rrggbb`).
    ///
    /// Used by the write endpoint: images must come from the catalog, solids
    /// must be exactly six hex digits.
    pub fn is_well_formed_solid(wire: &str) -> bool {
        let Some(color) = wire.strip_prefix(SOLID_TAG) else {
            return false;
        };
        let Some(hex) = color.strip_prefix('#') else {
            return false;
        };
        hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
    }
}

// ============================================================================
// TESTS
// ============================================================================
