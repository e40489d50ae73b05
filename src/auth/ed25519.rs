use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::auth::verify::{decode_hex, DecodeError, SignatureVerifier};

/// Ed25519 detached-signature verification over the raw message bytes.
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> Result<bool, DecodeError> {
        let key_bytes: [u8; 32] = decode_hex(public_key)?
            .try_into()
            .map_err(|v: Vec<u8>| DecodeError::KeyLength(v.len()))?;
        let sig_bytes: [u8; 64] = decode_hex(signature)?
            .try_into()
            .map_err(|v: Vec<u8>| DecodeError::SignatureLength(v.len()))?;

        let key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| DecodeError::Crypto(e.to_string()))?;
        let signature = Signature::from_bytes(&sig_bytes);

        Ok(key.verify(message.as_bytes(), &signature).is_ok())
    }
}
