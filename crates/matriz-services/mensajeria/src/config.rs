use serde::{Deserialize, Serialize};

/// Runtime configuration for the mensajeria service.
///
/// The verify token is shared with the Meta app dashboard; the access
/// token and phone number id come from the WhatsApp Business account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MensajeriaConfig {
    pub host: String,
    pub port: u16,
    pub verify_token: String,
    pub access_token: String,
    pub phone_number_id: String,
    pub graph_api_base: String,
}

impl Default for MensajeriaConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("MENSAJERIA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("MENSAJERIA_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            verify_token: std::env::var("WHATSAPP_VERIFY_TOKEN").unwrap_or_default(),
            access_token: std::env::var("WHATSAPP_ACCESS_TOKEN").unwrap_or_default(),
            phone_number_id: std::env::var("WHATSAPP_PHONE_NUMBER_ID").unwrap_or_default(),
            graph_api_base: std::env::var("GRAPH_API_BASE")
                .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
        }
    }
}
