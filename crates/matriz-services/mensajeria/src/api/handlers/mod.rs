pub mod health;
pub mod send;
pub mod webhook;

pub use health::health;
pub use send::send_message;
pub use webhook::{receive_webhook, verify_webhook};
