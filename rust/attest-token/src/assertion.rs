//! Time-bounded assertions on top of the generic token layer.
//!
//! An assertion is a compact token whose payload carries the standard
//! temporal/identity claims (`iss`, `aud`, `exp`, `iat`). Verification
//! enforces the validity window with asymmetric clock-skew tolerances:
//! a generous post-expiry window (verifiers legitimately run slightly
//! behind due to network and processing delay) and a tight pre-issuance
//! window (an `iat` far in the future signals clock manipulation).

use crate::{
    codec::Payload,
    error::TokenError,
    token,
};
use attest_crypto::{PublicKey, SecretKey};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// How far past `exp` a token is still accepted, in milliseconds.
pub const EXPIRY_TOLERANCE_MS: i64 = 120_000;

/// How far ahead of the verifier's clock an `iat` may lie, in milliseconds.
pub const ISSUED_AT_TOLERANCE_MS: i64 = 10_000;

/// Identity and validity-window parameters for signing an assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionParams {
    /// The issuing party, stored in the `iss` claim.
    pub issuer: String,

    /// The intended audience, stored in the `aud` claim when present.
    pub audience: Option<String>,

    /// When the assertion expires. Mandatory; stored in `exp` as integer
    /// milliseconds since the epoch.
    pub expires_at: DateTime<Utc>,

    /// When the assertion was issued, stored in `iat` (epoch milliseconds)
    /// when present.
    pub issued_at: Option<DateTime<Utc>>,
}

/// The temporal/identity claims of a successfully verified assertion,
/// returned separately from the payload so callers can inspect them
/// without re-parsing claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAssertion {
    /// The assertion's expiration instant, from `exp`.
    pub expires_at: DateTime<Utc>,

    /// The issuer, from `iss` when present.
    pub issuer: Option<String>,

    /// The audience, from `aud` when present.
    pub audience: Option<String>,

    /// The issuance instant, from `iat` when present.
    pub issued_at: Option<DateTime<Utc>>,
}

/// Sign `payload` as an assertion.
///
/// Merges `iss` and `exp` into the payload, plus `aud`/`iat` when the
/// corresponding parameters are present, then delegates to [`token::sign`].
/// Reserved claim keys always reflect `params`, overwriting any
/// caller-supplied values of the same name.
///
/// # Errors
///
/// Propagates [`token::sign`] errors unchanged.
pub async fn sign(
    payload: &Payload,
    params: &AssertionParams,
    secret_key: &SecretKey,
) -> Result<String, TokenError> {
    let mut claims = payload.clone();
    claims.insert("iss".to_string(), Value::String(params.issuer.clone()));
    claims.insert(
        "exp".to_string(),
        Value::from(params.expires_at.timestamp_millis()),
    );
    if let Some(audience) = &params.audience {
        claims.insert("aud".to_string(), Value::String(audience.clone()));
    }
    if let Some(issued_at) = params.issued_at {
        claims.insert("iat".to_string(), Value::from(issued_at.timestamp_millis()));
    }
    token::sign(&claims, secret_key).await
}

/// Verify `token` as an assertion at the instant `now`.
///
/// Checks run in order, each short-circuiting with its specific error:
///
/// 1. signature and format, via [`token::verify`]
/// 2. the `exp` claim must be present
/// 3. expiry: `now` may exceed `exp` by at most [`EXPIRY_TOLERANCE_MS`]
/// 4. issuance (only when `iat` is present): `iat` may exceed `now` by at
///    most [`ISSUED_AT_TOLERANCE_MS`]
///
/// On success the reserved claims are split out of the payload: the
/// returned [`Payload`] holds exactly the caller's original fields and the
/// [`VerifiedAssertion`] holds the claims.
///
/// # Errors
///
/// - [`TokenError::Malformed`] / [`TokenError::AlgorithmMismatch`] /
///   [`TokenError::SignatureInvalid`], propagated unchanged from
///   [`token::verify`].
/// - [`TokenError::MissingClaim`] (`"exp"`) when the claim is absent.
/// - [`TokenError::Malformed`] when a claim has the wrong JSON type.
/// - [`TokenError::Expired`] / [`TokenError::FutureIssued`] on validity
///   window violations.
pub async fn verify(
    token: &str,
    public_key: &PublicKey,
    now: DateTime<Utc>,
) -> Result<(Payload, VerifiedAssertion), TokenError> {
    let mut payload = token::verify(token, public_key).await?;
    let now_ms = now.timestamp_millis();

    let exp = match payload.get("exp") {
        None => return Err(TokenError::MissingClaim("exp")),
        Some(value) => integer_claim(value, "exp")?,
    };
    // Saturating: `exp` is attacker-controlled and may sit at the i64 edge.
    if now_ms > exp.saturating_add(EXPIRY_TOLERANCE_MS) {
        tracing::debug!(exp, now_ms, "assertion expired");
        return Err(TokenError::Expired);
    }

    let issued_at = match payload.get("iat") {
        None => None,
        Some(value) => Some(integer_claim(value, "iat")?),
    };
    if let Some(iat) = issued_at {
        if iat > now_ms.saturating_add(ISSUED_AT_TOLERANCE_MS) {
            tracing::debug!(iat, now_ms, "assertion issued in the future");
            return Err(TokenError::FutureIssued);
        }
    }

    // The window checks passed; split the claims back out of the payload.
    payload.remove("exp");
    payload.remove("iat");
    let issuer = match payload.remove("iss") {
        None => None,
        Some(value) => Some(string_claim(value, "iss")?),
    };
    let audience = match payload.remove("aud") {
        None => None,
        Some(value) => Some(string_claim(value, "aud")?),
    };

    let verified = VerifiedAssertion {
        expires_at: datetime_claim(exp, "exp")?,
        issuer,
        audience,
        issued_at: issued_at
            .map(|iat| datetime_claim(iat, "iat"))
            .transpose()?,
    };
    Ok((payload, verified))
}

fn integer_claim(value: &Value, claim: &str) -> Result<i64, TokenError> {
    value
        .as_i64()
        .ok_or_else(|| TokenError::Malformed(format!("{claim} claim must be an integer")))
}

fn string_claim(value: Value, claim: &str) -> Result<String, TokenError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(TokenError::Malformed(format!(
            "{claim} claim must be a string"
        ))),
    }
}

fn datetime_claim(millis: i64, claim: &str) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| TokenError::Malformed(format!("{claim} claim is out of range")))
}
