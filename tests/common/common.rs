#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};
use ed25519_dalek::Signer;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use collab_action::auth::ecdsa::personal_message_digest;
use collab_action::auth::verify::{
    ECDSA_SIGNATURE_HEADER, ED25519_SIGNATURE_HEADER, SIGNATURE_TIMESTAMP_HEADER,
};
use collab_action::auth::Authenticator;
use collab_action::config::Config;
use collab_action::trust::TrustMaterial;
use collab_action::AppState;

/// Deterministic Ed25519 signing key for tests.
pub fn ed25519_signer() -> ed25519_dalek::SigningKey {
    ed25519_dalek::SigningKey::from_bytes(&[7u8; 32])
}

pub fn ed25519_public_hex(key: &ed25519_dalek::SigningKey) -> String {
    hex::encode(key.verifying_key().to_bytes())
}

/// Deterministic secp256k1 signing key for tests.
pub fn ecdsa_signer() -> k256::ecdsa::SigningKey {
    k256::ecdsa::SigningKey::from_slice(&[0x11u8; 32]).unwrap()
}

pub fn ecdsa_public_hex(key: &k256::ecdsa::SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    format!("0x{}", hex::encode(point.as_bytes()))
}

/// Sign `timestamp + body` the way the action platform does for Ed25519.
pub fn sign_ed25519(key: &ed25519_dalek::SigningKey, timestamp: i64, body: &str) -> String {
    let message = format!("{}{}", timestamp, body);
    hex::encode(key.sign(message.as_bytes()).to_bytes())
}

/// Sign `timestamp + body` Ethereum personal-sign style: 65-byte
/// `r||s||v` signature with v in 27/28 form.
pub fn sign_ecdsa(key: &k256::ecdsa::SigningKey, timestamp: i64, body: &str) -> String {
    let message = format!("{}{}", timestamp, body);
    let digest = personal_message_digest(&message);
    let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte() + 27);
    format!("0x{}", hex::encode(bytes))
}

pub fn headers(
    ecdsa_signature: Option<&str>,
    ed25519_signature: Option<&str>,
    timestamp: Option<i64>,
) -> HeaderMap {
    let mut map = HeaderMap::new();
    if let Some(sig) = ecdsa_signature {
        map.insert(ECDSA_SIGNATURE_HEADER, HeaderValue::from_str(sig).unwrap());
    }
    if let Some(sig) = ed25519_signature {
        map.insert(ED25519_SIGNATURE_HEADER, HeaderValue::from_str(sig).unwrap());
    }
    if let Some(ts) = timestamp {
        map.insert(
            SIGNATURE_TIMESTAMP_HEADER,
            HeaderValue::from_str(&ts.to_string()).unwrap(),
        );
    }
    map
}

pub fn trust(ecdsa_public_key: &str, ed25519_public_key: &str) -> Arc<TrustMaterial> {
    Arc::new(TrustMaterial {
        ecdsa_public_key: ecdsa_public_key.to_string(),
        ed25519_public_key: ed25519_public_key.to_string(),
    })
}

/// Test AppState with injected trust material, no network involved.
pub fn create_state(trust: Arc<TrustMaterial>, skip_verification: bool) -> AppState {
    AppState {
        config: Config {
            skip_verification,
            collabland_env: "qa".into(),
            host: "127.0.0.1".into(),
            port: 0,
        },
        auth: Authenticator::new(trust, skip_verification),
    }
}
