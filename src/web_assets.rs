//! Stylesheets compiled into the binary.
//!
//! Both files are embedded via `include_str!` so an installed binary needs no
//! asset files next to it.

/// Base stylesheet, emitted as the first CSS block.
///
/// Loaded from `resources/style.min.css` at compile time.
pub const BASE_CSS: &str = include_str!("../resources/style.min.css");

/// The shipped, untouched custom stylesheet that user copies are compared
/// against.
///
/// Loaded from `resources/custom/custom.css` at compile time.
pub const DEFAULT_CUSTOM_CSS: &str = include_str!("../resources/custom/custom.css");
