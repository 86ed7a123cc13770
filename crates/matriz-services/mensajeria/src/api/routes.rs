use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::{handlers, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/webhook", get(handlers::verify_webhook))
        .route("/webhook", post(handlers::receive_webhook))
        .route("/send", post(handlers::send_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
