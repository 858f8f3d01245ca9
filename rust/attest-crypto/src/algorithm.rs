//! Signature algorithm registry.
//!
//! The set of supported algorithms is closed: dispatch happens over the
//! [`Algorithm`] enum, and adding an algorithm means adding a variant plus
//! its entry in the key-size and label tables here. The registry is fixed
//! at compile time and never mutated at runtime.

pub mod ecdsa;
pub mod eddsa;
pub mod rsa;

use crate::error::KeyError;
use std::{fmt, str::FromStr};

/// A signature algorithm supported by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSA with PKCS#1 v1.5 padding and SHA-256.
    Rsa,

    /// ECDSA over NIST P-256 (SHA-256) or P-384 (SHA-384).
    Ecdsa,

    /// Ed25519 (RFC 8032).
    Ed25519,
}

impl Algorithm {
    /// All algorithms in the registry.
    pub const ALL: [Algorithm; 3] = [Algorithm::Rsa, Algorithm::Ecdsa, Algorithm::Ed25519];

    /// Permitted key sizes for this algorithm, in bits.
    ///
    /// RSA sizes are modulus lengths; ECDSA sizes select the curve;
    /// Ed25519 has a single fixed size.
    #[must_use]
    pub const fn key_sizes(&self) -> &'static [u32] {
        match self {
            Algorithm::Rsa => &[2048, 3072, 4096],
            Algorithm::Ecdsa => &[256, 384],
            Algorithm::Ed25519 => &[256],
        }
    }

    /// Returns `true` if `key_size` is a permitted size for this algorithm.
    #[must_use]
    pub fn supports(&self, key_size: u32) -> bool {
        self.key_sizes().contains(&key_size)
    }

    /// The header label identifying this algorithm/key-size combination
    /// in a compact token's `alg` field.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] if the combination is not
    /// in the registry.
    pub fn label(&self, key_size: u32) -> Result<&'static str, KeyError> {
        match (self, key_size) {
            (Algorithm::Rsa, 2048) => Ok("RS2048"),
            (Algorithm::Rsa, 3072) => Ok("RS3072"),
            (Algorithm::Rsa, 4096) => Ok("RS4096"),
            (Algorithm::Ecdsa, 256) => Ok("ES256"),
            (Algorithm::Ecdsa, 384) => Ok("ES384"),
            (Algorithm::Ed25519, 256) => Ok("ED25519"),
            _ => Err(KeyError::UnsupportedKeySize {
                algorithm: *self,
                key_size,
            }),
        }
    }

    /// Parse a header label back into its algorithm/key-size combination.
    ///
    /// Returns `None` for labels the registry does not know.
    #[must_use]
    pub fn from_label(label: &str) -> Option<(Algorithm, u32)> {
        match label {
            "RS2048" => Some((Algorithm::Rsa, 2048)),
            "RS3072" => Some((Algorithm::Rsa, 3072)),
            "RS4096" => Some((Algorithm::Rsa, 4096)),
            "ES256" => Some((Algorithm::Ecdsa, 256)),
            "ES384" => Some((Algorithm::Ecdsa, 384)),
            "ED25519" => Some((Algorithm::Ed25519, 256)),
            _ => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = KeyError;

    /// Parse an algorithm name as it appears in key-generation
    /// configuration (`"RSA"`, `"ECDSA"`, `"Ed25519"`).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "RSA" => Ok(Algorithm::Rsa),
            "ECDSA" => Ok(Algorithm::Ecdsa),
            "Ed25519" => Ok(Algorithm::Ed25519),
            _ => Err(KeyError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Rsa => write!(f, "RSA"),
            Algorithm::Ecdsa => write!(f, "ECDSA"),
            Algorithm::Ed25519 => write!(f, "Ed25519"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_size_table() {
        assert!(Algorithm::Rsa.supports(2048));
        assert!(Algorithm::Rsa.supports(4096));
        assert!(!Algorithm::Rsa.supports(512));
        assert!(Algorithm::Ecdsa.supports(256));
        assert!(!Algorithm::Ecdsa.supports(521));
        assert!(Algorithm::Ed25519.supports(256));
        assert!(!Algorithm::Ed25519.supports(448));
    }

    #[test]
    fn test_label_round_trip() {
        for algorithm in Algorithm::ALL {
            for &key_size in algorithm.key_sizes() {
                let label = algorithm.label(key_size).expect("registry combination");
                assert_eq!(Algorithm::from_label(label), Some((algorithm, key_size)));
            }
        }
    }

    #[test]
    fn test_label_rejects_unregistered_size() {
        let err = Algorithm::Rsa.label(1024).unwrap_err();
        assert!(matches!(
            err,
            KeyError::UnsupportedKeySize {
                algorithm: Algorithm::Rsa,
                key_size: 1024
            }
        ));
    }

    #[test]
    fn test_name_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().ok(), Some(algorithm));
        }
        assert!(matches!(
            "DSA".parse::<Algorithm>(),
            Err(KeyError::UnsupportedAlgorithm(name)) if name == "DSA"
        ));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Algorithm::from_label("HS256"), None);
        assert_eq!(Algorithm::from_label(""), None);
    }
}
