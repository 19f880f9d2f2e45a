//! # Backdrop Style State
//!
//! The visual half of the preference: three CSS custom properties that the
//! page stylesheet consumes. This struct is the single owner of those
//! properties. Every apply overwrites all three, so they can never drift
//! into a partial state.
//!
//! | Property | Solid choice | Image choice |
//! |----------|--------------|--------------|
//! | `--bg-solid` | the color | `transparent` |
//! | `--bg-url` | `none` | `url("path")` |
//! | `--bg-deep` | the color | `#081a3a` |
//!
//! `--bg-deep` is the base layer painted behind everything; for a flat-color
//! backdrop it tracks the color so both layers agree.

use crate::choice::{Background, DEFAULT_IMAGE};

/// Custom property holding the flat-color layer.
pub const VAR_SOLID: &str = "--bg-solid";
/// Custom property holding the image layer.
pub const VAR_URL: &str = "--bg-url";
/// Custom property holding the deep base color.
pub const VAR_DEEP: &str = "--bg-deep";

/// Sentinel for "no image layer".
pub const NO_IMAGE: &str = "none";
/// Sentinel for "no solid layer".
pub const TRANSPARENT: &str = "transparent";
/// Base color used underneath image backdrops.
pub const DEEP_FALLBACK: &str = "#081a3a";

/// The applied style state.
///
/// Starts out with the default image applied, so a freshly constructed state
/// is already consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackdropStyle {
    solid: String,
    url: String,
    deep: String,
}

impl BackdropStyle {
    pub fn new() -> Self {
        let mut style = Self {
            solid: String::new(),
            url: String::new(),
            deep: String::new(),
        };
        style.apply(&Background::default_image());
        style
    }

    /// Apply a choice, overwriting all three properties.
    ///
    /// Idempotent: applying the same choice twice leaves the same state.
    /// An empty image path falls back to the default image.
    pub fn apply(&mut self, choice: &Background) {
        match choice {
            Background::Solid(color) => {
                self.solid = color.clone();
                self.url = NO_IMAGE.to_string();
                // keep the base layer in step with the flat color
                self.deep = color.clone();
            }
            Background::Image(path) => {
                let path = if path.is_empty() { DEFAULT_IMAGE } else { path };
                self.solid = TRANSPARENT.to_string();
                self.url = format!("url(\"{path}\")");
                self.deep = DEEP_FALLBACK.to_string();
            }
        }
    }

    /// Current `--bg-solid` value.
    pub fn solid(&self) -> &str {
        &self.solid
    }

    /// Current `--bg-url` value.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Current `--bg-deep` value.
    pub fn deep(&self) -> &str {
        &self.deep
    }

    /// The three properties as (name, value) pairs, in declaration order.
    pub fn declarations(&self) -> [(&'static str, &str); 3] {
        [
            (VAR_SOLID, self.solid.as_str()),
            (VAR_URL, self.url.as_str()),
            (VAR_DEEP, self.deep.as_str()),
        ]
    }

    /// Render a `:root { ... }` block, ready for a `<style>` tag.
    pub fn css_root(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.declarations() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn solid_sets_all_three_properties() {
        let mut style = BackdropStyle::new();
        style.apply(&Background::parse("solid:#123abc"));

        assert_eq!(style.solid(), "#123abc");
        assert_eq!(style.url(), NO_IMAGE);
        assert_eq!(style.deep(), "#123abc");
    }

    #[test]
    fn image_sets_all_three_properties() {
        let mut style = BackdropStyle::new();
        style.apply(&Background::parse("/static/img/backdrop2.png"));

        assert_eq!(style.solid(), TRANSPARENT);
        assert_eq!(style.url(), "url(\"/static/img/backdrop2.png\")");
        assert_eq!(style.deep(), DEEP_FALLBACK);
    }

    #[test]
    fn empty_choice_behaves_like_default_image() {
        let mut from_empty = BackdropStyle::new();
        from_empty.apply(&Background::parse(""));

        let mut from_default = BackdropStyle::new();
        from_default.apply(&Background::Image(DEFAULT_IMAGE.to_string()));

        assert_eq!(from_empty, from_default);

        // Same for an Image variant holding an empty path.
        let mut from_empty_path = BackdropStyle::new();
        from_empty_path.apply(&Background::Image(String::new()));
        assert_eq!(from_empty_path, from_default);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut once = BackdropStyle::new();
        once.apply(&Background::parse("solid:#0a0a0a"));

        let mut twice = BackdropStyle::new();
        twice.apply(&Background::parse("solid:#0a0a0a"));
        twice.apply(&Background::parse("solid:#0a0a0a"));

        assert_eq!(once, twice);
    }

    #[test]
    fn switching_back_and_forth_never_leaves_partial_state() {
        let mut style = BackdropStyle::new();
        style.apply(&Background::parse("solid:#111827"));
        style.apply(&Background::parse("/static/img/backdrop.png"));

        assert_eq!(style.solid(), TRANSPARENT);
        assert_eq!(style.url(), "url(\"/static/img/backdrop.png\")");
        assert_eq!(style.deep(), DEEP_FALLBACK);
    }

    #[test]
    fn css_root_block() {
        let mut style = BackdropStyle::new();
        style.apply(&Background::parse("solid:#0f172a"));
        let css = style.css_root();

        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--bg-solid: #0f172a;"));
        assert!(css.contains("--bg-url: none;"));
        assert!(css.contains("--bg-deep: #0f172a;"));
    }

    #[test]
    fn new_starts_with_default_image() {
        let style = BackdropStyle::new();
        assert_eq!(style.url(), format!("url(\"{DEFAULT_IMAGE}\")"));
        assert_eq!(style.solid(), TRANSPARENT);
        assert_eq!(style.deep(), DEEP_FALLBACK);
    }
}
