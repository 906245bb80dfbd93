//! Content hashing used to tell a customized stylesheet from a shipped copy.
//!
//! Digests are taken over the raw file bytes. No decoding or newline
//! normalization happens, so a file that differs only in line endings from
//! the default hashes differently and is treated as modified.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{HeaderError, Result};

/// Fixed-length digest of a file's bytes. Only ever compared for equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        ContentHash(*blake3::hash(bytes).as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({self})")
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(blake3::Hash::from(self.0).to_hex().as_str())
    }
}

/// Computes the [`ContentHash`] of a file on disk.
pub trait ContentHasher {
    fn hash_file(&self, path: &Path) -> Result<ContentHash>;

    /// Hash content that is already in memory, such as an embedded stylesheet.
    fn hash_bytes(&self, bytes: &[u8]) -> ContentHash {
        ContentHash::of_bytes(bytes)
    }
}

/// Default hasher: BLAKE3 over the file's raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl ContentHasher for Blake3Hasher {
    fn hash_file(&self, path: &Path) -> Result<ContentHash> {
        let bytes = fs::read(path).map_err(|e| HeaderError::not_found(path, e))?;
        let hash = ContentHash::of_bytes(&bytes);
        tracing::trace!(path = %path.display(), len = bytes.len(), %hash, "hashed file");
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bytes_hash_equal() {
        assert_eq!(ContentHash::of_bytes(b"X{}"), ContentHash::of_bytes(b"X{}"));
    }

    #[test]
    fn single_byte_difference_changes_hash() {
        assert_ne!(ContentHash::of_bytes(b"X{}"), ContentHash::of_bytes(b"Y{}"));
        assert_ne!(ContentHash::of_bytes(b"X{}"), ContentHash::of_bytes(b"X{} "));
    }

    #[test]
    fn line_endings_are_not_normalized() {
        assert_ne!(
            ContentHash::of_bytes(b"a{}\nb{}\n"),
            ContentHash::of_bytes(b"a{}\r\nb{}\r\n")
        );
    }

    #[test]
    fn display_is_lowercase_hex() {
        let shown = ContentHash::of_bytes(b"").to_string();
        assert_eq!(shown, blake3::hash(b"").to_hex().to_string());
        assert_eq!(shown.len(), 64);
    }

    #[test]
    fn hash_file_reads_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.css");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();
        let hash = Blake3Hasher.hash_file(&path).unwrap();
        assert_eq!(hash, ContentHash::of_bytes(&[0xff, 0xfe, b'{', b'}']));
    }

    #[test]
    fn hash_file_missing_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Blake3Hasher
            .hash_file(&dir.path().join("nope.css"))
            .unwrap_err();
        assert!(matches!(err, HeaderError::ResourceNotFound { .. }));
    }
}
