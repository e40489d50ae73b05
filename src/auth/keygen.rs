//! Keypair generation for test and ops tooling. Not used on the
//! verification path.

use ed25519_dalek::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;

#[derive(Debug)]
pub struct KeyPair {
    pub private_key: String,
    pub public_key: String,
}

/// Generate a fresh Ed25519 keypair, both halves hex-encoded.
pub fn generate_ed25519_keypair() -> KeyPair {
    let signing_key = SigningKey::generate(&mut OsRng);
    KeyPair {
        private_key: hex::encode(signing_key.to_bytes()),
        public_key: hex::encode(signing_key.verifying_key().to_bytes()),
    }
}

/// Generate a fresh secp256k1 keypair: `0x`-hex private key and
/// uncompressed `0x04…` public key.
pub fn generate_ecdsa_keypair() -> KeyPair {
    let signing_key = k256::ecdsa::SigningKey::random(&mut OsRng);
    let public = signing_key.verifying_key().to_encoded_point(false);
    KeyPair {
        private_key: format!("0x{}", hex::encode(signing_key.to_bytes())),
        public_key: format!("0x{}", hex::encode(public.as_bytes())),
    }
}
