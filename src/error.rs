use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch action config from {url}: {cause}")]
    ConfigFetch { url: String, cause: String },
    #[error(
        "x-collabland-action-signature or x-collabland-action-signature-ed25519 header is required"
    )]
    MissingSignature,
    #[error("public key is not set")]
    MissingPublicKey,
    #[error("signature timestamp is expired")]
    ExpiredSignature,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::MissingSignature | Error::MissingPublicKey => StatusCode::UNAUTHORIZED,
            Error::ExpiredSignature | Error::InvalidSignature => StatusCode::FORBIDDEN,
            Error::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Error::ConfigFetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
