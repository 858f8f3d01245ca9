//! ECDSA signing and verification over the NIST P-256 and P-384 curves.
//!
//! Signatures are the fixed-size `r || s` encoding (64 bytes for P-256,
//! 96 bytes for P-384). Signing uses RFC 6979 deterministic nonces, so no
//! entropy is consumed after key generation.

use signature::{SignatureEncoding, Signer, Verifier};

pub(crate) fn sign_p256(
    key: &p256::ecdsa::SigningKey,
    msg: &[u8],
) -> Result<Vec<u8>, signature::Error> {
    let signature: p256::ecdsa::Signature = key.try_sign(msg)?;
    Ok(signature.to_vec())
}

pub(crate) fn verify_p256(
    key: &p256::ecdsa::VerifyingKey,
    msg: &[u8],
    signature: &[u8],
) -> Result<(), signature::Error> {
    let signature = p256::ecdsa::Signature::from_slice(signature)?;
    key.verify(msg, &signature)
}

pub(crate) fn sign_p384(
    key: &p384::ecdsa::SigningKey,
    msg: &[u8],
) -> Result<Vec<u8>, signature::Error> {
    let signature: p384::ecdsa::Signature = key.try_sign(msg)?;
    Ok(signature.to_vec())
}

pub(crate) fn verify_p384(
    key: &p384::ecdsa::VerifyingKey,
    msg: &[u8],
    signature: &[u8],
) -> Result<(), signature::Error> {
    let signature = p384::ecdsa::Signature::from_slice(signature)?;
    key.verify(msg, &signature)
}
