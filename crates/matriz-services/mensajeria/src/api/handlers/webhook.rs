use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::dto::{VerifyParams, WebhookPayload};
use crate::api::state::AppState;
use matriz_channels::MensajeriaMessage;

/// Verification handshake Meta performs when the webhook URL is saved.
///
/// On a token match the raw challenge string goes back as the body;
/// anything else is a 403 so Meta marks the subscription as failed.
pub async fn verify_webhook(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyParams>,
) -> (StatusCode, String) {
    let mode_ok = params.mode.as_deref() == Some("subscribe");
    let token_ok = params.verify_token.as_deref() == Some(state.config.verify_token.as_str());

    if mode_ok && token_ok {
        if let Some(challenge) = params.challenge {
            info!("Webhook verification accepted");
            return (StatusCode::OK, challenge);
        }
    }

    info!("Webhook verification rejected");
    (StatusCode::FORBIDDEN, String::new())
}

/// Inbound notification relay.
///
/// Always answers 200; a non-2xx makes Meta retry with backoff and
/// eventually disable the subscription, so parse failures are only logged.
pub async fn receive_webhook(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WebhookPayload>,
) -> StatusCode {
    for entry in payload.entry {
        for change in entry.changes {
            for message in change.value.messages {
                if message.message_type != "text" {
                    debug!(
                        from = %message.from,
                        tipo = %message.message_type,
                        "Ignoring non-text inbound message"
                    );
                    continue;
                }

                let cuerpo = match message.text {
                    Some(text) => text.body,
                    None => continue,
                };

                info!(from = %message.from, "Inbound text message received");
                state.publish_entrante(MensajeriaMessage::Entrante {
                    de: message.from,
                    cuerpo,
                    recibido_en: Utc::now(),
                });
            }
        }
    }

    StatusCode::OK
}
