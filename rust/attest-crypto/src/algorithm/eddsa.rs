//! Ed25519 signing and verification.

use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
use signature::{Signer, Verifier};

/// Sign `msg`, returning the raw 64-byte signature.
pub(crate) fn sign(key: &SigningKey, msg: &[u8]) -> Result<Vec<u8>, signature::Error> {
    let signature = key.try_sign(msg)?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify a raw 64-byte Ed25519 signature.
pub(crate) fn verify(
    key: &VerifyingKey,
    msg: &[u8],
    signature: &[u8],
) -> Result<(), signature::Error> {
    let signature = Signature::from_slice(signature)?;
    key.verify(msg, &signature)
}
