use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use matriz_mensajeria::{create_router, AppState, GraphClient, MensajeriaConfig};
use matriz_channels::MensajeriaMessage;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn test_state() -> Arc<AppState> {
    let config = MensajeriaConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        verify_token: "token-de-prueba".to_string(),
        access_token: "EAAG-test".to_string(),
        phone_number_id: "123456789".to_string(),
        graph_api_base: "http://127.0.0.1:1".to_string(),
    };
    let graph = GraphClient::new(&config).expect("client");
    Arc::new(AppState::new(config, graph))
}

#[tokio::test]
async fn test_health() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_verify_echoes_challenge_on_token_match() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .uri("/webhook?hub.mode=subscribe&hub.verify_token=token-de-prueba&hub.challenge=42abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"42abc");
}

#[tokio::test]
async fn test_verify_rejects_wrong_token() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .uri("/webhook?hub.mode=subscribe&hub.verify_token=equivocado&hub.challenge=42abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_verify_rejects_wrong_mode() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .uri("/webhook?hub.mode=unsubscribe&hub.verify_token=token-de-prueba&hub.challenge=42abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_verify_rejects_missing_params() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .uri("/webhook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_inbound_text_message_is_published() {
    let state = test_state();
    let mut rx = state.entrantes.subscribe();

    let payload = json!({
        "object": "whatsapp_business_account",
        "entry": [{
            "id": "1029384756",
            "changes": [{
                "field": "messages",
                "value": {
                    "messaging_product": "whatsapp",
                    "messages": [{
                        "from": "573001112233",
                        "id": "wamid.abc",
                        "timestamp": "1693497600",
                        "type": "text",
                        "text": { "body": "Buenos días, necesito la matriz" }
                    }]
                }
            }]
        }]
    });

    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    match rx.try_recv().unwrap() {
        MensajeriaMessage::Entrante { de, cuerpo, .. } => {
            assert_eq!(de, "573001112233");
            assert_eq!(cuerpo, "Buenos días, necesito la matriz");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_inbound_non_text_message_is_ignored() {
    let state = test_state();
    let mut rx = state.entrantes.subscribe();

    let payload = json!({
        "entry": [{
            "changes": [{
                "field": "messages",
                "value": {
                    "messages": [{
                        "from": "573001112233",
                        "type": "image"
                    }]
                }
            }]
        }]
    });

    let response = create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_status_only_notification_is_acknowledged() {
    // Delivery status callbacks have no messages array at all.
    let payload = json!({
        "entry": [{
            "changes": [{
                "field": "messages",
                "value": {
                    "statuses": [{ "id": "wamid.abc", "status": "delivered" }]
                }
            }]
        }]
    });

    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_send_rejects_non_numeric_recipient() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send")
                .header("content-type", "application/json")
                .body(
                    Body::from(
                        serde_json::to_string(&json!({ "to": "+57 300 111", "body": "hola" }))
                            .unwrap(),
                    ),
                )
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_rejects_empty_body() {
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send")
                .header("content-type", "application/json")
                .body(
                    Body::from(
                        serde_json::to_string(&json!({ "to": "573001112233", "body": "  " }))
                            .unwrap(),
                    ),
                )
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_send_upstream_failure_is_bad_gateway() {
    // Port 1 refuses connections, so the Graph call fails fast.
    let response = create_router(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send")
                .header("content-type", "application/json")
                .body(
                    Body::from(
                        serde_json::to_string(&json!({ "to": "573001112233", "body": "hola" }))
                            .unwrap(),
                    ),
                )
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
