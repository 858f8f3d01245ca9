//! Error types for key configuration and generation.

use crate::algorithm::Algorithm;
use thiserror::Error;

/// Errors raised while validating a key configuration or generating a key pair.
#[derive(Debug, Clone, Error)]
pub enum KeyError {
    /// The requested algorithm label is not in the registry.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The requested key size is not permitted for the algorithm.
    #[error("unsupported key size {key_size} for algorithm {algorithm}")]
    UnsupportedKeySize {
        /// The algorithm the caller asked for.
        algorithm: Algorithm,
        /// The rejected key size, in bits.
        key_size: u32,
    },

    /// The entropy source or crypto backend failed during generation.
    ///
    /// Fatal to the call; the caller may retry.
    #[error("key generation failed: {0}")]
    Generation(String),
}
