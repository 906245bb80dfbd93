//! Assembler configuration.
//!
//! Stylesheets come either from the copies embedded in the binary (see
//! [`crate::web_assets`]) or from a file the host points at:
//!
//! - base stylesheet: always emitted first, embedded by default.
//! - default custom stylesheet: the untouched copy that user custom
//!   stylesheets are compared against. Absent by default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HeaderError, Result};
use crate::web_assets;

/// Root class that scopes the highlighting rules when none is configured.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = ".highlight";

/// Where a stylesheet's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesheetSource {
    /// Compiled into the binary.
    Embedded(&'static str),
    /// Read from disk on every use.
    File(PathBuf),
}

impl StylesheetSource {
    /// Read the stylesheet as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        match self {
            StylesheetSource::Embedded(css) => Ok((*css).to_owned()),
            StylesheetSource::File(path) => {
                fs::read_to_string(path).map_err(|e| HeaderError::not_found(path, e))
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            StylesheetSource::Embedded(_) => None,
            StylesheetSource::File(path) => Some(path.as_path()),
        }
    }
}

/// Inputs the host supplies to a [`crate::HeaderAssembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Stylesheet emitted as the first CSS block.
    pub base_stylesheet: StylesheetSource,
    /// CSS selector every highlighting rule is scoped under.
    pub highlight_class: String,
    /// Untouched default custom stylesheet. `None` means there is no baseline
    /// to compare against and any present custom stylesheet is included.
    pub default_custom_css: Option<StylesheetSource>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            base_stylesheet: StylesheetSource::Embedded(web_assets::BASE_CSS),
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            default_custom_css: None,
        }
    }
}

impl AssemblerConfig {
    pub fn with_base_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_stylesheet = StylesheetSource::File(path.into());
        self
    }

    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    pub fn with_default_custom_css(mut self, path: Option<PathBuf>) -> Self {
        self.default_custom_css = path.map(StylesheetSource::File);
        self
    }

    /// Compare custom stylesheets against the embedded shipped default.
    pub fn with_bundled_default_custom_css(mut self) -> Self {
        self.default_custom_css = Some(StylesheetSource::Embedded(
            web_assets::DEFAULT_CUSTOM_CSS,
        ));
        self
    }
}
