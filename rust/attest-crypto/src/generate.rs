//! Asynchronous key pair generation.
//!
//! Generation for large RSA moduli is CPU-bound, so the work is dispatched
//! to the blocking thread pool rather than run on the async executor.
//! Dropping the returned future detaches the in-flight generation; it is
//! not cancelled.

use crate::{
    algorithm::Algorithm,
    error::KeyError,
    key::{KeyPair, PublicKey, SecretKey},
};
use rand::rngs::OsRng;

/// Requested algorithm and key size for [`generate_keypair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPairConfig {
    /// The signature algorithm.
    pub algorithm: Algorithm,

    /// The key size in bits. Must be one of
    /// [`Algorithm::key_sizes`] for the algorithm.
    pub key_size: u32,
}

/// Generate a fresh key pair for the given configuration.
///
/// # Errors
///
/// - [`KeyError::UnsupportedKeySize`] if the algorithm/key-size combination
///   is not in the registry.
/// - [`KeyError::Generation`] if the entropy source or crypto backend
///   fails, or the worker task is lost. The caller may retry.
pub async fn generate_keypair(config: KeyPairConfig) -> Result<KeyPair, KeyError> {
    if !config.algorithm.supports(config.key_size) {
        return Err(KeyError::UnsupportedKeySize {
            algorithm: config.algorithm,
            key_size: config.key_size,
        });
    }

    tracing::debug!(
        algorithm = %config.algorithm,
        key_size = config.key_size,
        "generating keypair"
    );

    let pair = tokio::task::spawn_blocking(move || generate_blocking(config))
        .await
        .map_err(|e| KeyError::Generation(format!("keygen task failed: {e}")))??;

    tracing::debug!(algorithm = %config.algorithm, "keypair ready");
    Ok(pair)
}

/// Generation body, run on the blocking pool.
///
/// The configuration has already been validated against the registry.
fn generate_blocking(config: KeyPairConfig) -> Result<KeyPair, KeyError> {
    match (config.algorithm, config.key_size) {
        (Algorithm::Rsa, bits) => {
            let secret = rsa::RsaPrivateKey::new(&mut OsRng, bits as usize)
                .map_err(|e| KeyError::Generation(e.to_string()))?;
            let public = rsa::RsaPublicKey::from(&secret);
            Ok(KeyPair {
                public_key: PublicKey::Rsa(public),
                secret_key: SecretKey::Rsa(secret),
            })
        }
        (Algorithm::Ecdsa, 256) => {
            let secret = p256::ecdsa::SigningKey::random(&mut OsRng);
            let public = *secret.verifying_key();
            Ok(KeyPair {
                public_key: PublicKey::P256(public),
                secret_key: SecretKey::P256(secret),
            })
        }
        (Algorithm::Ecdsa, _) => {
            let secret = p384::ecdsa::SigningKey::random(&mut OsRng);
            let public = *secret.verifying_key();
            Ok(KeyPair {
                public_key: PublicKey::P384(public),
                secret_key: SecretKey::P384(secret),
            })
        }
        (Algorithm::Ed25519, _) => {
            let mut seed = [0u8; 32];
            getrandom::getrandom(&mut seed).map_err(|e| KeyError::Generation(e.to_string()))?;
            let secret = ed25519_dalek::SigningKey::from_bytes(&seed);
            let public = secret.verifying_key();
            Ok(KeyPair {
                public_key: PublicKey::Ed25519(public),
                secret_key: SecretKey::Ed25519(secret),
            })
        }
    }
}
