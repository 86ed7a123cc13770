//! Mensajeria service: WhatsApp Business webhook relay.
//!
//! Handles the Meta verification handshake, receives inbound message
//! notifications and relays outbound text messages through the Graph API.

pub mod api;
pub mod config;
pub mod error;
pub mod graph;

pub use api::{create_router, AppState};
pub use config::MensajeriaConfig;
pub use error::{MatrizError, MensajeriaErrorExt, Result};
pub use graph::GraphClient;
