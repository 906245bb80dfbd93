//! Error taxonomy for header assembly.
//!
//! Every failure aborts the assembly for the run; there is no partial output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    /// A required input (config directory, highlight class, theme) is missing
    /// or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A stylesheet that was expected to be readable could not be read.
    #[error("cannot read stylesheet '{}'", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The highlighting library failed to render its stylesheet.
    #[error("highlighting stylesheet generation failed: {0}")]
    Highlight(#[from] syntect::Error),
}

pub type Result<T> = std::result::Result<T, HeaderError>;

impl HeaderError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HeaderError::ResourceNotFound {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_not_found_names_path_and_chains_io_error() {
        let err = HeaderError::not_found(
            "/tmp/missing.css",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.css"), "got: {msg}");
        // The io error is reachable through `source()`, not repeated in Display.
        assert!(!msg.contains("no such file"), "got: {msg}");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no such file"));
    }

    #[test]
    fn configuration_message_is_prefixed() {
        let err = HeaderError::Configuration("config_dir is missing".into());
        assert_eq!(err.to_string(), "configuration error: config_dir is missing");
    }
}
