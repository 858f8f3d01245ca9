//! Compact token codec.
//!
//! Owns the byte-exact mapping between `(header, payload)` and the two
//! leading base64url segments. The signing input is the literal byte
//! string `segment1 "." segment2`; verification re-derives it from the
//! received token text so that signing and verifying hash identical bytes.

use crate::error::TokenError;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Token header: minimal metadata identifying how to verify.
///
/// Derived from the signing key, never caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm label, e.g. `RS2048` or `ES256`.
    pub alg: String,
}

/// An open mapping of caller-supplied claim fields.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// A parsed compact token, split into its trusted-on-verify parts.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// The decoded header segment.
    pub header: Header,

    /// The decoded payload segment. Untrusted until the signature checks out.
    pub payload: Payload,

    /// The exact bytes that were signed: `segment1 "." segment2`.
    pub signing_input: Vec<u8>,

    /// The raw signature bytes from the third segment.
    pub signature: Vec<u8>,
}

/// Encode a single segment: unpadded, URL-safe base64.
pub(crate) fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

fn decode_segment(segment: &str, what: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Malformed(format!("{what} segment is not valid base64url: {e}")))
}

/// Build the signing input for a header/payload pair.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] if the payload cannot be serialized
/// to JSON (e.g. a non-finite number smuggled into a claim value).
pub fn signing_input(header: &Header, payload: &Payload) -> Result<String, TokenError> {
    let header_json = serde_json::to_vec(header)
        .map_err(|e| TokenError::Malformed(format!("header serialization failed: {e}")))?;
    let payload_json = serde_json::to_vec(payload)
        .map_err(|e| TokenError::Malformed(format!("payload serialization failed: {e}")))?;
    Ok(format!(
        "{}.{}",
        encode_segment(&header_json),
        encode_segment(&payload_json)
    ))
}

/// Parse a compact token into its segments.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] if the token does not split into
/// exactly three non-empty segments, a segment is not valid unpadded
/// base64url, or the decoded header/payload bytes are not JSON of the
/// expected shape.
pub fn decode(token: &str) -> Result<DecodedToken, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header_segment, payload_segment, signature_segment] = segments.as_slice() else {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(TokenError::Malformed("empty segment".to_string()));
    }

    let header_bytes = decode_segment(header_segment, "header")?;
    let payload_bytes = decode_segment(payload_segment, "payload")?;
    let signature = decode_segment(signature_segment, "signature")?;

    let header: Header = serde_json::from_slice(&header_bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not valid JSON: {e}")))?;
    let payload: Payload = serde_json::from_slice(&payload_bytes)
        .map_err(|e| TokenError::Malformed(format!("payload is not a JSON object: {e}")))?;

    // Everything before the final dot, byte-for-byte as received.
    let signing_input = token[..header_segment.len() + 1 + payload_segment.len()]
        .as_bytes()
        .to_vec();

    Ok(DecodedToken {
        header,
        payload,
        signing_input,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Payload {
        let mut payload = Payload::new();
        payload.insert("foo".to_string(), json!("bar"));
        payload
    }

    #[test]
    fn test_signing_input_round_trips_through_decode() {
        let header = Header {
            alg: "ED25519".to_string(),
        };
        let payload = sample_payload();
        let input = signing_input(&header, &payload).expect("encodes");

        let token = format!("{input}.{}", encode_segment(b"sig"));
        let decoded = decode(&token).expect("decodes");

        assert_eq!(decoded.header, header);
        assert_eq!(decoded.payload, payload);
        assert_eq!(decoded.signing_input, input.as_bytes());
        assert_eq!(decoded.signature, b"sig");
    }

    #[test]
    fn test_token_has_exactly_three_segments() {
        let header = Header {
            alg: "ES256".to_string(),
        };
        let input = signing_input(&header, &sample_payload()).expect("encodes");
        let token = format!("{input}.{}", encode_segment(&[0u8; 64]));
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_rejects_wrong_segment_count() {
        assert!(matches!(decode("a.b"), Err(TokenError::Malformed(_))));
        assert!(matches!(decode("a.b.c.d"), Err(TokenError::Malformed(_))));
        assert!(matches!(decode(""), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_rejects_empty_segments() {
        assert!(matches!(decode("..c"), Err(TokenError::Malformed(_))));
        assert!(matches!(decode("a..c"), Err(TokenError::Malformed(_))));
        assert!(matches!(decode("a.b."), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_rejects_invalid_base64url() {
        // '!' is outside the URL-safe alphabet; '=' padding is not allowed.
        assert!(matches!(decode("!!.b.c"), Err(TokenError::Malformed(_))));
        let padded = format!("{}=.b.c", encode_segment(b"{}"));
        assert!(matches!(decode(&padded), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_rejects_non_json_segments() {
        let not_json = encode_segment(b"not json");
        let object = encode_segment(b"{\"alg\":\"ES256\"}");
        let array = encode_segment(b"[1,2,3]");

        let token = format!("{not_json}.{object}.{object}");
        assert!(matches!(decode(&token), Err(TokenError::Malformed(_))));

        // Payload must be a JSON object, not any JSON value.
        let token = format!("{object}.{array}.{object}");
        assert!(matches!(decode(&token), Err(TokenError::Malformed(_))));
    }
}
