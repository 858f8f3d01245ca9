//! Sign/verify round trips and tamper detection across the full
//! algorithm/key-size registry.

use attest_crypto::{Algorithm, KeyPairConfig, generate_keypair};
use attest_token::{Payload, TokenError, token};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::json;
use testresult::TestResult;

fn sample_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("foo".to_string(), json!("bar"));
    payload.insert("nested".to_string(), json!({"n": 1, "flag": true}));
    payload.insert("list".to_string(), json!(["a", "b"]));
    payload
}

fn all_configs() -> impl Iterator<Item = KeyPairConfig> {
    Algorithm::ALL.into_iter().flat_map(|algorithm| {
        algorithm
            .key_sizes()
            .iter()
            .map(move |&key_size| KeyPairConfig {
                algorithm,
                key_size,
            })
    })
}

/// Re-encode a token with one bit flipped in the given segment.
fn flip_bit_in_segment(token: &str, index: usize) -> String {
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    let mut bytes = URL_SAFE_NO_PAD
        .decode(&segments[index])
        .expect("valid segment");
    bytes[0] ^= 0x01;
    segments[index] = URL_SAFE_NO_PAD.encode(&bytes);
    segments.join(".")
}

#[tokio::test]
async fn test_round_trip_all_registry_combinations() -> TestResult {
    let payload = sample_payload();
    for config in all_configs() {
        let pair = generate_keypair(config).await?;
        let signed = token::sign(&payload, &pair.secret_key).await?;
        assert_eq!(
            signed.split('.').count(),
            3,
            "{} {}",
            config.algorithm,
            config.key_size
        );

        let verified = token::verify(&signed, &pair.public_key).await?;
        assert_eq!(
            verified, payload,
            "{} {}",
            config.algorithm, config.key_size
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_flipped_signature_bit_is_rejected() -> TestResult {
    // One representative per algorithm; the signature math differs per
    // variant, the rejection path must not.
    for (algorithm, key_size) in [
        (Algorithm::Rsa, 2048),
        (Algorithm::Ecdsa, 256),
        (Algorithm::Ed25519, 256),
    ] {
        let pair = generate_keypair(KeyPairConfig {
            algorithm,
            key_size,
        })
        .await?;
        let signed = token::sign(&sample_payload(), &pair.secret_key).await?;

        let corrupted = flip_bit_in_segment(&signed, 2);
        let result = token::verify(&corrupted, &pair.public_key).await;
        assert!(
            matches!(result, Err(TokenError::SignatureInvalid)),
            "{algorithm} {key_size}"
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_flipped_payload_bit_is_rejected() -> TestResult {
    let pair = generate_keypair(KeyPairConfig {
        algorithm: Algorithm::Ed25519,
        key_size: 256,
    })
    .await?;
    let signed = token::sign(&sample_payload(), &pair.secret_key).await?;

    let corrupted = flip_bit_in_segment(&signed, 1);
    let result = token::verify(&corrupted, &pair.public_key).await;
    assert!(matches!(
        result,
        Err(TokenError::SignatureInvalid | TokenError::Malformed(_))
    ));
    Ok(())
}
