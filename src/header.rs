//! CSS header assembly for HTML exports.
//!
//! Produces the ordered CSS blocks inlined at the top of a generated page:
//!
//! 1. the base stylesheet,
//! 2. the highlighting stylesheet scoped under the configured root class,
//! 3. the user's `<config_dir>/custom/custom.css`, only when it differs from
//!    the shipped default.
//!
//! Block order is cascade order and never changes.

use std::fs;
use std::path::{Path, PathBuf};

use syntect::highlighting::Theme;

use crate::config::{AssemblerConfig, StylesheetSource};
use crate::error::{HeaderError, Result};
use crate::hash::{Blake3Hasher, ContentHash, ContentHasher};
use crate::highlight;
use crate::resources::{self, Resources};

/// Location of the custom stylesheet relative to the config directory.
pub fn custom_css_path(config_dir: &Path) -> PathBuf {
    config_dir.join("custom").join("custom.css")
}

/// Run-scoped assembler.
///
/// The default stylesheet's hash is computed on first need and reused for the
/// lifetime of the instance; it is never refreshed. Create a new assembler if
/// the default may change mid-run.
pub struct HeaderAssembler<H = Blake3Hasher> {
    config: AssemblerConfig,
    theme: Theme,
    hasher: H,
    cached_default_hash: Option<ContentHash>,
}

impl HeaderAssembler<Blake3Hasher> {
    pub fn new(config: AssemblerConfig) -> Result<Self> {
        Self::with_hasher(config, Blake3Hasher)
    }
}

impl<H: ContentHasher> HeaderAssembler<H> {
    /// Build an assembler that hashes files with `hasher`.
    pub fn with_hasher(config: AssemblerConfig, hasher: H) -> Result<Self> {
        if config.highlight_class.trim().is_empty() {
            return Err(HeaderError::Configuration(
                "highlight class must not be empty".to_string(),
            ));
        }
        let theme = highlight::load_theme()?;
        Ok(Self {
            config,
            theme,
            hasher,
            cached_default_hash: None,
        })
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Hash of the default custom stylesheet, once it has been computed.
    pub fn cached_default_hash(&self) -> Option<&ContentHash> {
        self.cached_default_hash.as_ref()
    }

    /// Host-facing entry point: store the CSS header into `resources` and hand
    /// `nb` back untouched.
    pub fn preprocess<N>(&mut self, nb: N, resources: Resources) -> Result<(N, Resources)> {
        let (_, resources) = self.assemble(resources)?;
        Ok((nb, resources))
    }

    /// Assemble the header and store it at `resources["inlining"]["css"]`.
    ///
    /// Returns the blocks alongside the updated mapping. On error nothing is
    /// written.
    pub fn assemble(&mut self, mut resources: Resources) -> Result<(Vec<String>, Resources)> {
        let header = self.generate_header(&resources)?;
        resources::store_inlined_css(&mut resources, &header);
        Ok((header, resources))
    }

    /// Build the ordered CSS blocks without touching `resources`.
    pub fn generate_header(&mut self, resources: &Resources) -> Result<Vec<String>> {
        let config_dir = resources::config_dir(resources)?;
        let mut header = Vec::with_capacity(3);

        header.push(self.config.base_stylesheet.read()?);
        header.push(highlight::stylesheet(
            &self.theme,
            &self.config.highlight_class,
        )?);

        let custom = custom_css_path(&config_dir);
        if !custom.is_file() {
            tracing::debug!(path = %custom.display(), "no custom stylesheet");
        } else if self.is_modified(&custom)? {
            header.push(read_stylesheet(&custom)?);
        } else {
            tracing::debug!(path = %custom.display(), "custom stylesheet matches default, skipping");
        }

        tracing::info!(
            config_dir = %config_dir.display(),
            blocks = header.len(),
            "assembled css header"
        );
        Ok(header)
    }

    /// Whether `candidate` should be inlined.
    ///
    /// Without a default to compare against every present file counts as
    /// modified. The candidate is hashed on every call.
    fn is_modified(&mut self, candidate: &Path) -> Result<bool> {
        let Some(default_hash) = self.default_hash()? else {
            tracing::debug!("no default custom stylesheet configured, including custom css");
            return Ok(true);
        };
        let candidate_hash = self.hasher.hash_file(candidate)?;
        Ok(candidate_hash != default_hash)
    }

    fn default_hash(&mut self) -> Result<Option<ContentHash>> {
        if let Some(hash) = self.cached_default_hash {
            return Ok(Some(hash));
        }
        let hash = match &self.config.default_custom_css {
            None => return Ok(None),
            Some(StylesheetSource::Embedded(css)) => {
                let hash = self.hasher.hash_bytes(css.as_bytes());
                tracing::debug!(%hash, "cached embedded default custom stylesheet hash");
                hash
            }
            Some(StylesheetSource::File(path)) => {
                let hash = self.hasher.hash_file(path)?;
                tracing::debug!(path = %path.display(), %hash, "cached default custom stylesheet hash");
                hash
            }
        };
        self.cached_default_hash = Some(hash);
        Ok(Some(hash))
    }
}

fn read_stylesheet(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| HeaderError::not_found(path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
