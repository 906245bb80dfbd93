//! Inline CSS header assembly for HTML exports.
//!
//! [`HeaderAssembler`] concatenates a base stylesheet, a syntax-highlighting
//! stylesheet, and the user's custom stylesheet (when it has actually been
//! customized) and stores the blocks in the host's resources mapping under
//! `inlining.css`.
//!
//! ```no_run
//! use nbcss::{AssemblerConfig, HeaderAssembler, Resources};
//!
//! let mut resources = Resources::new();
//! resources.insert("config_dir".into(), "/home/me/.jupyter".into());
//!
//! let config = AssemblerConfig::default().with_bundled_default_custom_css();
//! let mut assembler = HeaderAssembler::new(config)?;
//! let (blocks, resources) = assembler.assemble(resources)?;
//! assert_eq!(nbcss::resources::inlined_css(&resources), Some(blocks));
//! # Ok::<(), nbcss::HeaderError>(())
//! ```

pub mod config;
pub mod error;
pub mod hash;
pub mod header;
pub mod highlight;
pub mod resources;
pub mod web_assets;

pub use config::{AssemblerConfig, StylesheetSource};
pub use error::{HeaderError, Result};
pub use hash::{Blake3Hasher, ContentHash, ContentHasher};
pub use header::HeaderAssembler;
pub use resources::Resources;
