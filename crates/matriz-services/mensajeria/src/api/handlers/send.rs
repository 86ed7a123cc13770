use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::info;

use crate::api::dto::{SendRequest, SendResponse};
use crate::api::state::AppState;
use crate::error::{MatrizError, Result};
use matriz_channels::MensajeriaMessage;

/// Relay an outbound text message through the Graph API.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendRequest>,
) -> Result<Json<SendResponse>> {
    if request.to.trim().is_empty() || !request.to.chars().all(|c| c.is_ascii_digit()) {
        return Err(MatrizError::invalid_input(
            "to",
            "must be a phone number in digits-only international form",
        ));
    }
    if request.body.trim().is_empty() {
        return Err(MatrizError::invalid_input("body", "must not be empty"));
    }

    let outcome = state.graph.send_text(&request.to, &request.body).await?;

    info!(to = %request.to, message_id = %outcome.message_id, "Message relayed");
    state.publish_saliente(MensajeriaMessage::Saliente {
        para: request.to,
        message_id: outcome.message_id.clone(),
    });

    Ok(Json(SendResponse {
        message_id: outcome.message_id,
    }))
}
