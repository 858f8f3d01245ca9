//! Generic compact token signing and verification.
//!
//! This layer is claim-agnostic: it signs and checks an opaque payload
//! mapping. Temporal semantics live one level up in [`crate::assertion`].

use crate::{
    codec::{self, Header, Payload},
    error::TokenError,
};
use attest_crypto::{PublicKey, SecretKey};

/// Sign `payload` with `secret_key`, producing a three-segment compact token.
///
/// The header is derived from the key; callers cannot influence it.
/// Signing a single token is cheap, so the work runs inline within the
/// async call.
///
/// # Errors
///
/// - [`TokenError::Key`] if the key's algorithm/key-size combination is
///   not in the registry.
/// - [`TokenError::Signing`] if the crypto backend fails to sign.
#[allow(clippy::unused_async)]
pub async fn sign(payload: &Payload, secret_key: &SecretKey) -> Result<String, TokenError> {
    let header = Header {
        alg: secret_key.label()?.to_string(),
    };
    let signing_input = codec::signing_input(&header, payload)?;
    let signature = secret_key
        .sign(signing_input.as_bytes())
        .map_err(|e| TokenError::Signing(e.to_string()))?;
    Ok(format!(
        "{signing_input}.{}",
        codec::encode_segment(&signature)
    ))
}

/// Verify `token` against `public_key` and return the decoded payload.
///
/// No side effects; safe to call concurrently and repeatedly with the
/// same token. The returned payload includes every claim as signed —
/// use [`crate::assertion::verify`] to also enforce the validity window.
///
/// # Errors
///
/// - [`TokenError::Malformed`] if the token fails to decode.
/// - [`TokenError::AlgorithmMismatch`] if the header's algorithm label
///   differs from the verifying key's (unknown labels included).
/// - [`TokenError::SignatureInvalid`] if cryptographic verification fails.
#[allow(clippy::unused_async)]
pub async fn verify(token: &str, public_key: &PublicKey) -> Result<Payload, TokenError> {
    let decoded = codec::decode(token)?;

    let key_label = public_key.label()?;
    if decoded.header.alg != key_label {
        return Err(TokenError::AlgorithmMismatch {
            header: decoded.header.alg,
            key: key_label.to_string(),
        });
    }

    public_key
        .verify(&decoded.signing_input, &decoded.signature)
        .map_err(|_| TokenError::SignatureInvalid)?;

    tracing::trace!(alg = %key_label, "token signature verified");
    Ok(decoded.payload)
}
