//! Syntax-highlighting stylesheet generation.
//!
//! Renders syntect's class-based CSS for a theme and scopes every rule under a
//! root class selector, so `.highlight .keyword { ... }` only applies inside
//! highlighted code regions.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{css_for_theme_with_class_style, ClassStyle};

use crate::error::{HeaderError, Result};

/// Theme the highlighting rules are generated from.
pub const THEME_NAME: &str = "InspiredGitHub";

/// Selector syntect uses for the theme's base foreground/background rule.
const BASE_SELECTOR: &str = ".code";

/// Load [`THEME_NAME`] from syntect's bundled theme set.
pub fn load_theme() -> Result<Theme> {
    let mut set = ThemeSet::load_defaults();
    set.themes.remove(THEME_NAME).ok_or_else(|| {
        HeaderError::Configuration(format!("highlighting theme '{THEME_NAME}' is not bundled"))
    })
}

/// Generate the highlighting stylesheet for `theme`, scoped under `root_class`.
///
/// Pure: the same theme and class always produce the same text.
pub fn stylesheet(theme: &Theme, root_class: &str) -> Result<String> {
    let css = css_for_theme_with_class_style(theme, ClassStyle::Spaced)?;
    Ok(scope_rules(&css, root_class))
}

/// Prefix every rule selector in `css` with `root_class`.
///
/// Works line by line on syntect's output shape: a selector list ends with
/// `{` on its own line, declarations follow, and the rule closes with `}`.
fn scope_rules(css: &str, root_class: &str) -> String {
    let mut out = String::with_capacity(css.len() + css.len() / 4);
    let mut in_comment = false;
    let mut in_rule = false;

    for line in css.lines() {
        let trimmed = line.trim();
        if in_comment {
            in_comment = !trimmed.ends_with("*/");
            out.push_str(line);
        } else if trimmed.starts_with("/*") {
            in_comment = !trimmed.ends_with("*/");
            out.push_str(line);
        } else if in_rule {
            in_rule = !trimmed.ends_with('}');
            out.push_str(line);
        } else if let Some(selectors) = trimmed.strip_suffix('{') {
            in_rule = true;
            out.push_str(&scope_selector_list(selectors.trim(), root_class));
            out.push_str(" {");
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn scope_selector_list(selectors: &str, root_class: &str) -> String {
    selectors
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == BASE_SELECTOR {
                root_class.to_owned()
            } else {
                format!("{root_class} {s}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
