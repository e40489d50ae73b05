use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

use crate::auth::verify::{decode_hex, DecodeError, SignatureVerifier};

/// Keccak-256 over the Ethereum personal-message envelope. The length in
/// the prefix is the UTF-8 byte length of the message.
pub fn personal_message_digest(message: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n");
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

/// ECDSA-over-secp256k1 verification, Ethereum personal-sign style:
/// recover the public key from a 65-byte `r||s||v` signature and compare
/// it against the configured uncompressed key.
pub struct EcdsaVerifier;

impl SignatureVerifier for EcdsaVerifier {
    fn verify(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> Result<bool, DecodeError> {
        let sig_bytes = decode_hex(signature)?;
        if sig_bytes.len() != 65 {
            return Err(DecodeError::SignatureLength(sig_bytes.len()));
        }

        // v is 27/28 in Ethereum signatures, 0/1 in raw recovery ids.
        let v = sig_bytes[64];
        let recovery_id = RecoveryId::from_byte(if v >= 27 { v - 27 } else { v })
            .ok_or_else(|| DecodeError::Crypto(format!("invalid recovery id: {}", v)))?;
        let signature = Signature::from_slice(&sig_bytes[..64])
            .map_err(|e| DecodeError::Crypto(e.to_string()))?;

        let digest = personal_message_digest(message);
        let recovered = VerifyingKey::recover_from_prehash(&digest, &signature, recovery_id)
            .map_err(|e| DecodeError::Crypto(e.to_string()))?;

        let recovered_hex = format!(
            "0x{}",
            hex::encode(recovered.to_encoded_point(false).as_bytes())
        );
        Ok(recovered_hex.eq_ignore_ascii_case(public_key))
    }
}
