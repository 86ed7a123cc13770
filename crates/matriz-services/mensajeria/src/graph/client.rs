use crate::config::MensajeriaConfig;
use crate::error::{MatrizError, MensajeriaErrorExt, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const GRAPH_API_VERSION: &str = "v22.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin client for the Meta Graph API messages endpoint.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
    phone_number_id: String,
    access_token: String,
}

/// Result of a successful send, carrying the wamid Meta assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOutcome {
    pub message_id: String,
}

#[derive(Debug, Serialize)]
struct TextMessageRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    message_type: &'static str,
    text: TextBody<'a>,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    messages: Vec<MessageId>,
}

#[derive(Debug, Deserialize)]
struct MessageId {
    id: String,
}

impl GraphClient {
    pub fn new(config: &MensajeriaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MatrizError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.graph_api_base.trim_end_matches('/').to_string(),
            phone_number_id: config.phone_number_id.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Send a plain text message to a phone number in E.164 digits form.
    pub async fn send_text(&self, to: &str, body: &str) -> Result<SendOutcome> {
        let url = format!(
            "{}/{}/{}/messages",
            self.base_url, GRAPH_API_VERSION, self.phone_number_id
        );

        let request = TextMessageRequest {
            messaging_product: "whatsapp",
            to,
            message_type: "text",
            text: TextBody { body },
        };

        debug!(to, "Sending text message via Graph API");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Graph API rejected the message");
            return Err(MatrizError::graph_api(status.as_u16(), body));
        }

        let parsed: MessagesResponse = response.json().await?;
        let message_id = parsed
            .messages
            .into_iter()
            .next()
            .map(|m| m.id)
            .ok_or_else(|| {
                MatrizError::network("Graph API response contained no message id")
            })?;

        Ok(SendOutcome { message_id })
    }
}
