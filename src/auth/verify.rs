use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::HeaderMap;
use tracing::debug;

use crate::auth::ecdsa::EcdsaVerifier;
use crate::auth::ed25519::Ed25519Verifier;
use crate::error::{Error, Result};
use crate::trust::TrustMaterial;

pub const ECDSA_SIGNATURE_HEADER: &str = "x-collabland-action-signature";
pub const ED25519_SIGNATURE_HEADER: &str = "x-collabland-action-signature-ed25519";
pub const SIGNATURE_TIMESTAMP_HEADER: &str = "x-collabland-action-signature-timestamp";

/// Signatures whose timestamp is this many milliseconds away from the
/// server clock, in either direction, are rejected.
pub const SIGNATURE_MAX_AGE_MS: i64 = 5 * 60 * 1000;

/// Which of the two supported schemes signed a request. When both
/// signature headers are present, ECDSA wins the tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    Ecdsa,
    Ed25519,
}

impl SignatureScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Ecdsa => "ecdsa",
            SignatureScheme::Ed25519 => "ed25519",
        }
    }
}

/// Error while decoding key or signature material. Callers collapse this
/// to `verified = false`; it never crosses the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("unexpected signature length: {0}")]
    SignatureLength(usize),
    #[error("unexpected key length: {0}")]
    KeyLength(usize),
    #[error("malformed key or signature: {0}")]
    Crypto(String),
}

/// One signature scheme's verification primitive. `Ok(false)` means the
/// signature is well-formed but wrong; `Err` means it never parsed.
pub trait SignatureVerifier {
    fn verify(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> std::result::Result<bool, DecodeError>;
}

/// Hex decode that tolerates an optional `0x` prefix.
pub(crate) fn decode_hex(input: &str) -> std::result::Result<Vec<u8>, hex::FromHexError> {
    hex::decode(input.strip_prefix("0x").unwrap_or(input))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Decides whether an inbound webhook request carries a valid, fresh
/// signature from the action platform. Stateless per call; shares the
/// immutable trust material across all requests.
#[derive(Clone)]
pub struct Authenticator {
    trust: Arc<TrustMaterial>,
    skip_verification: bool,
}

impl Authenticator {
    pub fn new(trust: Arc<TrustMaterial>, skip_verification: bool) -> Self {
        Self {
            trust,
            skip_verification,
        }
    }

    pub fn trust(&self) -> &TrustMaterial {
        &self.trust
    }

    /// Verify `body` against the signature headers using the system clock.
    pub fn verify(&self, headers: &HeaderMap, body: &str) -> Result<()> {
        self.verify_at(headers, body, now_ms())
    }

    /// Clock-injected variant of [`verify`](Self::verify).
    ///
    /// The signed message is the decimal timestamp concatenated with the
    /// raw body string, exactly as the signer produced it — `body` must be
    /// the bytes received on the wire, not a re-serialized payload.
    pub fn verify_at(&self, headers: &HeaderMap, body: &str, now_ms: i64) -> Result<()> {
        // Test-harness override, not a security feature.
        if self.skip_verification {
            debug!("SKIP_VERIFICATION set, accepting request unverified");
            return Ok(());
        }

        let ecdsa_signature = header_str(headers, ECDSA_SIGNATURE_HEADER);
        let ed25519_signature = header_str(headers, ED25519_SIGNATURE_HEADER);

        let (scheme, signature) = match (ecdsa_signature, ed25519_signature) {
            (Some(sig), _) => (SignatureScheme::Ecdsa, sig),
            (None, Some(sig)) => (SignatureScheme::Ed25519, sig),
            (None, None) => {
                debug!(
                    ecdsa_header = ECDSA_SIGNATURE_HEADER,
                    ed25519_header = ED25519_SIGNATURE_HEADER,
                    "no signature header on request"
                );
                return Err(Error::MissingSignature);
            }
        };

        let public_key = match scheme {
            SignatureScheme::Ecdsa => &self.trust.ecdsa_public_key,
            SignatureScheme::Ed25519 => &self.trust.ed25519_public_key,
        };
        if public_key.is_empty() {
            debug!(scheme = scheme.as_str(), "no public key configured");
            return Err(Error::MissingPublicKey);
        }

        let timestamp: i64 = header_str(headers, SIGNATURE_TIMESTAMP_HEADER)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        if (now_ms - timestamp).abs() >= SIGNATURE_MAX_AGE_MS {
            debug!(scheme = scheme.as_str(), timestamp, "signature timestamp out of window");
            return Err(Error::ExpiredSignature);
        }

        let message = format!("{}{}", timestamp, body);
        let verified = match scheme {
            SignatureScheme::Ecdsa => EcdsaVerifier.verify(&message, signature, public_key),
            SignatureScheme::Ed25519 => Ed25519Verifier.verify(&message, signature, public_key),
        }
        // Malformed material fails closed.
        .unwrap_or_else(|e| {
            debug!(scheme = scheme.as_str(), error = %e, "signature decode failed");
            false
        });

        debug!(scheme = scheme.as_str(), verified, "action signature checked");

        if !verified {
            return Err(Error::InvalidSignature);
        }
        Ok(())
    }
}
