//! Error types for string-keyed vector lookups.

use thiserror::Error;

/// Errors produced when resolving a vector from textual harness input.
///
/// These cover lookup failures only. Negative derivation cases (zero
/// iterations, lengths that are not a multiple of 8, usage mismatches) are
/// the consuming harness's responsibility and carry no vector data here.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Password name is not one of `empty`, `short`, `long`.
    #[error("unknown password name: {0:?}")]
    UnknownPassword(String),

    /// Salt name is not one of `empty`, `short`, `long`.
    #[error("unknown salt name: {0:?}")]
    UnknownSalt(String),

    /// Hash name is not a digest covered by the vector set
    /// (`SHA-1`, `SHA-256`, `SHA-384`, `SHA-512`).
    #[error("unsupported hash algorithm: {0:?}")]
    UnsupportedHash(String),

    /// No vectors exist for this iteration count (only 1, 1000, 100000).
    #[error("unsupported iteration count: {0}")]
    UnsupportedIterations(u32),
}
