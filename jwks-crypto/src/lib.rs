//! Hashing of raw bytes.
//!
//! This crate provides the digests the key set conversion relies on: SHA-256
//! for key identifiers and FNV-1a for cheap content fingerprints. It has been
//! separated into its own crate so the cryptographic components stay apart
//! from key parsing and serialization.

use thiserror::Error;

pub mod imp;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum HasherError {
    #[error("Could not hash")]
    CouldNotHash,
}

/// Provides hashing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    /// Digest of `input`, base64url encoded without padding.
    fn hash_base64(&self, input: &[u8]) -> Result<String, HasherError>;

    /// Raw digest of `input`.
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError>;
}
