use axum::routing::get;
use axum::{Json, Router};

use collab_action::error::Error;
use collab_action::trust::fetch_trust_material;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn fetch_decodes_base58_ed25519_key() {
    let ed25519_bytes = [1u8; 32];
    let ed25519_base58 = bs58::encode(ed25519_bytes).into_string();
    let router = Router::new().route(
        "/config",
        get(move || async move {
            Json(serde_json::json!({
                "actionEcdsaPublicKey": "0x04aabb",
                "actionEd25519PublicKey": ed25519_base58,
                "jwtPublicKey": "unused",
                "discordClientId": "123",
            }))
        }),
    );
    let base_url = serve(router).await;

    let trust = fetch_trust_material(&base_url).await.unwrap();

    assert_eq!(trust.ecdsa_public_key, "0x04aabb");
    assert_eq!(trust.ed25519_public_key, hex::encode(ed25519_bytes));
}

#[tokio::test]
async fn non_2xx_response_is_config_fetch_error() {
    let router = Router::new().route(
        "/config",
        get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = serve(router).await;

    let err = fetch_trust_material(&base_url).await.unwrap_err();
    match err {
        Error::ConfigFetch { url, .. } => assert_eq!(url, format!("{}/config", base_url)),
        other => panic!("expected ConfigFetch, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_is_config_fetch_error() {
    let router = Router::new().route("/config", get(|| async { "not json" }));
    let base_url = serve(router).await;

    let err = fetch_trust_material(&base_url).await.unwrap_err();
    assert!(matches!(err, Error::ConfigFetch { .. }));
}

#[tokio::test]
async fn unreachable_host_is_config_fetch_error() {
    // Port 1 on localhost refuses connections.
    let err = fetch_trust_material("http://127.0.0.1:1").await.unwrap_err();
    assert!(matches!(err, Error::ConfigFetch { .. }));
}
