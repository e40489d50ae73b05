pub mod auth;
pub mod config;
pub mod discord;
pub mod error;
pub mod trust;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::discord::commands::handle_interaction;
use axum::{
    routing::{get, post},
    Json, Router,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth: Authenticator,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "collab-action",
        "version": VERSION
    }))
}

pub async fn root() -> &'static str {
    "⚡ collab-action - Discord actions via Collab.Land"
}

use axum::extract::State;

pub async fn debug_env(State(state): State<AppState>) -> Json<serde_json::Value> {
    let trust = state.auth.trust();
    Json(serde_json::json!({
        "ecdsa_public_key_len": trust.ecdsa_public_key.len(),
        "ecdsa_public_key_prefix": &trust.ecdsa_public_key[..8.min(trust.ecdsa_public_key.len())],
        "ed25519_public_key_len": trust.ed25519_public_key.len(),
        "collabland_env": state.config.collabland_env,
        "skip_verification": state.config.skip_verification,
    }))
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/debug", get(debug_env))
        .route("/hello-action/interactions", post(handle_interaction))
        .with_state(state)
}
