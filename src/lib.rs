//! # Backdrop - Page Background Preference Library
//!
//! Backdrop manages a user-selected page background (a solid color or an
//! image) for a self-hosted site. It provides:
//!
//! - **Choice model**: a sum type for the two kinds of backdrop, with a
//!   parse/unparse pair for the wire encoding (`solid:#rrggbb` or a path)
//! - **Style state**: the three CSS custom properties every page consumes
//! - **Controller**: fetches the saved choice, applies it, drives the
//!   selection control, and persists changes
//! - **Server**: the read/write endpoints backing the controller, with an
//!   embedded demo page
//!
//! ## Quick Start
//!
//! ```
//! use backdrop::{choice::Background, style::BackdropStyle};
//!
//! let mut style = BackdropStyle::new();
//! style.apply(&Background::parse("solid:#0f172a"));
//!
//! assert_eq!(style.solid(), "#0f172a");
//! println!("{}", style.css_root());
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`choice`] | Backdrop choice sum type and wire codec |
//! | [`style`] | The three CSS custom properties |
//! | [`catalog`] | Image catalog and solid-color presets |
//! | [`selector`] | Selection-control model |
//! | [`controller`] | Preference controller and HTTP client |
//! | [`server`] | Read/write endpoints and embedded page |
//! | [`wire`] | Endpoint payload types |
//! | [`error`] | Error types |

pub mod catalog;
pub mod choice;
pub mod controller;
pub mod error;
pub mod selector;
pub mod server;
pub mod style;
pub mod wire;

// Re-exports for convenience
pub use choice::Background;
pub use controller::Controller;
pub use error::BackdropError;
pub use style::BackdropStyle;
