use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};

/// Public keys the action platform signs webhook requests with.
///
/// Populated once at bootstrap by [`fetch_trust_material`] and never
/// mutated afterwards; verification reads it concurrently behind an `Arc`.
/// Both keys are stored hex-encoded.
#[derive(Debug, Default, Clone)]
pub struct TrustMaterial {
    /// Uncompressed secp256k1 public key, `0x04…` hex.
    pub ecdsa_public_key: String,
    /// Raw 32-byte Ed25519 public key, hex.
    pub ed25519_public_key: String,
}

/// Wire shape of `GET {api}/config`. The response also carries
/// `jwtPublicKey` and `discordClientId`, which this service does not use.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionConfig {
    action_ecdsa_public_key: String,
    action_ed25519_public_key: String,
}

/// Fetch the action public keys from the Collab.Land API.
///
/// Any failure here is fatal to bootstrap: the service must not accept
/// webhook traffic without trust material. No retries; restarting the
/// process is the retry.
pub async fn fetch_trust_material(base_url: &str) -> Result<TrustMaterial> {
    let url = format!("{}/config", base_url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| fetch_error(&url, e))?;

    let config: ActionConfig = client
        .get(&url)
        .send()
        .await
        .map_err(|e| fetch_error(&url, e))?
        .error_for_status()
        .map_err(|e| fetch_error(&url, e))?
        .json()
        .await
        .map_err(|e| fetch_error(&url, e))?;

    // The Ed25519 key is published base58-encoded; everything internal is
    // hex, so decode and re-encode it once here.
    let ed25519_bytes = bs58::decode(&config.action_ed25519_public_key)
        .into_vec()
        .map_err(|e| fetch_error(&url, e))?;

    info!(
        ecdsa_key_len = config.action_ecdsa_public_key.len(),
        ed25519_key_len = ed25519_bytes.len(),
        "fetched action trust material"
    );

    Ok(TrustMaterial {
        ecdsa_public_key: config.action_ecdsa_public_key,
        ed25519_public_key: hex::encode(ed25519_bytes),
    })
}

fn fetch_error(url: &str, cause: impl std::fmt::Display) -> Error {
    Error::ConfigFetch {
        url: url.to_string(),
        cause: cause.to_string(),
    }
}
