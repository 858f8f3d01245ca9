//! Error taxonomy for token and assertion verification.

use attest_crypto::KeyError;
use thiserror::Error;

/// Errors raised while signing or verifying compact tokens and assertions.
///
/// The `Expired` and `FutureIssued` messages are a wire-level contract:
/// callers match on them, so the strings are stable.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token does not split into exactly three non-empty segments, or
    /// a segment fails base64url/JSON decoding, or a claim has the wrong
    /// JSON type.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The header's algorithm label does not match the verifying key.
    #[error("algorithm mismatch: token header says {header}, key is {key}")]
    AlgorithmMismatch {
        /// The `alg` label found in the token header.
        header: String,
        /// The label of the verifying key.
        key: String,
    },

    /// Cryptographic verification failed: tampered content, wrong key, or
    /// corrupted signature bytes.
    #[error("signature verification failed")]
    SignatureInvalid,

    /// A required claim is absent from the payload.
    #[error("missing required claim: {0}")]
    MissingClaim(&'static str),

    /// Verification time exceeds `exp` by more than the expiry tolerance.
    #[error("assertion has expired")]
    Expired,

    /// `iat` exceeds verification time by more than the issuance tolerance.
    #[error("assertion issued later than verification date")]
    FutureIssued,

    /// The signing backend failed to produce a signature.
    #[error("signing failed: {0}")]
    Signing(String),

    /// A key configuration error propagated from the crypto layer.
    #[error(transparent)]
    Key(#[from] KeyError),
}
