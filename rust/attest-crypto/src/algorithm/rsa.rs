//! RSA PKCS#1 v1.5 signing and verification.

use rsa::{RsaPrivateKey, RsaPublicKey, pkcs1v15};
use sha2::Sha256;
use signature::{SignatureEncoding, Signer, Verifier};

/// Sign `msg` with PKCS#1 v1.5 over SHA-256.
///
/// The returned signature is the raw modulus-length byte string
/// (256 bytes for RSA-2048, 384 for RSA-3072, 512 for RSA-4096).
pub(crate) fn sign(key: &RsaPrivateKey, msg: &[u8]) -> Result<Vec<u8>, signature::Error> {
    let signing_key = pkcs1v15::SigningKey::<Sha256>::new(key.clone());
    let signature = signing_key.try_sign(msg)?;
    Ok(signature.to_vec())
}

/// Verify a raw PKCS#1 v1.5 signature over SHA-256.
pub(crate) fn verify(
    key: &RsaPublicKey,
    msg: &[u8],
    signature: &[u8],
) -> Result<(), signature::Error> {
    let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(key.clone());
    let signature = pkcs1v15::Signature::try_from(signature)?;
    verifying_key.verify(msg, &signature)
}
