use axum::{body::Bytes, extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: Option<InteractionData>,
    pub member: Option<Member>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    pub options: Option<Vec<CommandOption>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

#[derive(Debug, Serialize)]
pub struct ResponseData {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
}

pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>> {
    // Verify the exact bytes received on the wire; parsing happens only
    // after the signature checks out.
    let raw_body = std::str::from_utf8(&body)
        .map_err(|_| Error::InvalidPayload("body is not valid utf-8".into()))?;

    if let Err(e) = state.auth.verify(&headers, raw_body) {
        warn!(error = %e, "rejected action request");
        return Err(e);
    }

    let interaction: Interaction =
        serde_json::from_slice(&body).map_err(|e| Error::InvalidPayload(e.to_string()))?;

    // Type 1 = PING
    if interaction.kind == 1 {
        return Ok(Json(InteractionResponse {
            kind: 1,
            data: None,
        }));
    }

    // Type 2 = APPLICATION_COMMAND
    if interaction.kind == 2 {
        let data = interaction
            .data
            .as_ref()
            .ok_or(Error::InvalidPayload("missing data".into()))?;

        let content = match data.name.as_str() {
            "hello-action" => hello(&interaction, data),
            _ => "Unknown command".to_string(),
        };

        return Ok(Json(InteractionResponse {
            kind: 4, // CHANNEL_MESSAGE_WITH_SOURCE
            data: Some(ResponseData {
                content,
                flags: Some(64), // Ephemeral
            }),
        }));
    }

    Ok(Json(InteractionResponse {
        kind: 1,
        data: None,
    }))
}

/// `/hello-action <your-name>` — greet the option value, falling back to
/// the invoking user's name.
fn hello(interaction: &Interaction, data: &InteractionData) -> String {
    let your_name = data
        .options
        .as_ref()
        .and_then(|opts| opts.iter().find(|o| o.name == "your-name"))
        .and_then(|o| o.value.as_str());

    let username = interaction
        .member
        .as_ref()
        .map(|m| m.user.username.as_str())
        .or(interaction.user.as_ref().map(|u| u.username.as_str()));

    format!("Hello, {}!", your_name.or(username).unwrap_or("World"))
}
