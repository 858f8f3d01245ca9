//! Key pair value types.
//!
//! A [`KeyPair`] is produced once by [`crate::generate_keypair`] and reused
//! for any number of sign/verify calls. Both halves are immutable and hold
//! no shared state, so they can be cloned and moved across threads freely.

use crate::{
    algorithm::{Algorithm, ecdsa, eddsa, rsa as rsa_alg},
    error::KeyError,
};
use rsa::traits::PublicKeyParts as _;
use std::fmt;

/// A verifying (public) key for one of the registry's algorithms.
#[derive(Debug, Clone)]
pub enum PublicKey {
    /// RSA public key (PKCS#1 v1.5, SHA-256).
    Rsa(rsa::RsaPublicKey),

    /// ECDSA P-256 verifying key.
    P256(p256::ecdsa::VerifyingKey),

    /// ECDSA P-384 verifying key.
    P384(p384::ecdsa::VerifyingKey),

    /// Ed25519 verifying key.
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl PublicKey {
    /// The algorithm this key belongs to.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            PublicKey::Rsa(_) => Algorithm::Rsa,
            PublicKey::P256(_) | PublicKey::P384(_) => Algorithm::Ecdsa,
            PublicKey::Ed25519(_) => Algorithm::Ed25519,
        }
    }

    /// The key size in bits (modulus length for RSA, curve size otherwise).
    #[must_use]
    pub fn key_size(&self) -> u32 {
        match self {
            PublicKey::Rsa(key) => (key.size() * 8) as u32,
            PublicKey::P256(_) => 256,
            PublicKey::P384(_) => 384,
            PublicKey::Ed25519(_) => 256,
        }
    }

    /// The header label for this key's algorithm/key-size combination.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] for a key whose size is not
    /// in the registry (possible only for keys constructed from parts, not
    /// for generated ones).
    pub fn label(&self) -> Result<&'static str, KeyError> {
        self.algorithm().label(self.key_size())
    }

    /// Verify a raw signature over `msg`.
    ///
    /// # Errors
    ///
    /// Returns `signature::Error` if the signature bytes cannot be parsed
    /// for this algorithm or the signature does not match.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<(), signature::Error> {
        match self {
            PublicKey::Rsa(key) => rsa_alg::verify(key, msg, signature),
            PublicKey::P256(key) => ecdsa::verify_p256(key, msg, signature),
            PublicKey::P384(key) => ecdsa::verify_p384(key, msg, signature),
            PublicKey::Ed25519(key) => eddsa::verify(key, msg, signature),
        }
    }
}

/// A signing (secret) key for one of the registry's algorithms.
///
/// The key material is never printed: `Debug` is redacted and `Display`
/// is intentionally not implemented.
#[derive(Clone)]
pub enum SecretKey {
    /// RSA private key.
    Rsa(rsa::RsaPrivateKey),

    /// ECDSA P-256 signing key.
    P256(p256::ecdsa::SigningKey),

    /// ECDSA P-384 signing key.
    P384(p384::ecdsa::SigningKey),

    /// Ed25519 signing key.
    Ed25519(ed25519_dalek::SigningKey),
}

impl SecretKey {
    /// The algorithm this key belongs to.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SecretKey::Rsa(_) => Algorithm::Rsa,
            SecretKey::P256(_) | SecretKey::P384(_) => Algorithm::Ecdsa,
            SecretKey::Ed25519(_) => Algorithm::Ed25519,
        }
    }

    /// The key size in bits.
    #[must_use]
    pub fn key_size(&self) -> u32 {
        match self {
            SecretKey::Rsa(key) => (key.size() * 8) as u32,
            SecretKey::P256(_) => 256,
            SecretKey::P384(_) => 384,
            SecretKey::Ed25519(_) => 256,
        }
    }

    /// The header label for this key's algorithm/key-size combination.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::UnsupportedKeySize`] for a key whose size is not
    /// in the registry.
    pub fn label(&self) -> Result<&'static str, KeyError> {
        self.algorithm().label(self.key_size())
    }

    /// The verifying key corresponding to this secret key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        match self {
            SecretKey::Rsa(key) => PublicKey::Rsa(key.to_public_key()),
            SecretKey::P256(key) => PublicKey::P256(*key.verifying_key()),
            SecretKey::P384(key) => PublicKey::P384(*key.verifying_key()),
            SecretKey::Ed25519(key) => PublicKey::Ed25519(key.verifying_key()),
        }
    }

    /// Sign `msg`, returning the raw algorithm-specific signature bytes.
    ///
    /// RSA PKCS#1 v1.5 and RFC 6979 ECDSA are deterministic; the same
    /// inputs always produce the same signature.
    ///
    /// # Errors
    ///
    /// Returns `signature::Error` if the backend fails to sign.
    pub fn sign(&self, msg: &[u8]) -> Result<Vec<u8>, signature::Error> {
        match self {
            SecretKey::Rsa(key) => rsa_alg::sign(key, msg),
            SecretKey::P256(key) => ecdsa::sign_p256(key, msg),
            SecretKey::P384(key) => ecdsa::sign_p384(key, msg),
            SecretKey::Ed25519(key) => eddsa::sign(key, msg),
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &self.algorithm())
            .field("key_size", &self.key_size())
            .finish_non_exhaustive()
    }
}

/// A matched public/secret key pair.
///
/// Invariant: both halves were generated together and agree on algorithm
/// and key size.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The verifying half.
    pub public_key: PublicKey,

    /// The signing half.
    pub secret_key: SecretKey,
}

impl KeyPair {
    /// The algorithm of both halves.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.secret_key.algorithm()
    }

    /// The key size in bits of both halves.
    #[must_use]
    pub fn key_size(&self) -> u32 {
        self.secret_key.key_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_debug_is_redacted() {
        let key = SecretKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[7u8; 32]));
        let rendered = format!("{key:?}");
        assert!(rendered.contains("Ed25519"));
        assert!(!rendered.contains("7, 7"));
    }

    #[test]
    fn test_public_key_matches_secret_key() {
        let secret = SecretKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[42u8; 32]));
        let public = secret.public_key();
        assert_eq!(public.algorithm(), Algorithm::Ed25519);
        assert_eq!(public.key_size(), 256);
        assert_eq!(public.label().unwrap(), "ED25519");
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let secret = SecretKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[1u8; 32]));
        let public = secret.public_key();
        let signature = secret.sign(b"hello").expect("signing succeeds");
        assert!(public.verify(b"hello", &signature).is_ok());
        assert!(public.verify(b"goodbye", &signature).is_err());
    }

    #[test]
    fn test_truncated_signature_rejected() {
        let secret = SecretKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&[1u8; 32]));
        let public = secret.public_key();
        let signature = secret.sign(b"hello").expect("signing succeeds");
        assert!(public.verify(b"hello", &signature[..32]).is_err());
    }
}
