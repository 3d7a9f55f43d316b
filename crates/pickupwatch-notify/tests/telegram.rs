//! Integration tests for the Telegram notifier using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pickupwatch_core::TelegramConfig;
use pickupwatch_notify::{Channel, Notifier, NotifyError, TelegramNotifier};

fn test_notifier(server: &MockServer) -> TelegramNotifier {
    let config = TelegramConfig {
        api_url: server.uri(),
        bot_token: "123:abc".to_string(),
        chat_id: "-5015233395".to_string(),
        operator_chat_id: "777".to_string(),
    };
    TelegramNotifier::new(&config, 5).expect("notifier construction should not fail")
}

#[tokio::test]
async fn general_channel_posts_to_group_chat() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({ "chat_id": "-5015233395", "text": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": {} })))
        .expect(1)
        .mount(&server)
        .await;

    test_notifier(&server)
        .send(Channel::General, "hello")
        .await
        .expect("send should succeed");
}

#[tokio::test]
async fn operator_channel_posts_to_operator_chat() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_json(json!({ "chat_id": "777", "text": "cookie expired" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    test_notifier(&server)
        .send(Channel::Operator, "cookie expired")
        .await
        .expect("send should succeed");
}

#[tokio::test]
async fn api_rejection_is_reported_with_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = test_notifier(&server)
        .send(Channel::General, "hello")
        .await
        .unwrap_err();

    assert!(
        matches!(err, NotifyError::Api { status: 400, ref description } if description.contains("chat not found")),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn ok_false_with_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": false })))
        .mount(&server)
        .await;

    let err = test_notifier(&server)
        .send(Channel::General, "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Api { status: 200, .. }), "got: {err:?}");
}

#[tokio::test]
async fn transport_error_does_not_leak_token() {
    let config = TelegramConfig {
        api_url: "http://127.0.0.1:1".to_string(),
        bot_token: "123:secret-token".to_string(),
        chat_id: "-1".to_string(),
        operator_chat_id: "-1".to_string(),
    };
    let notifier = TelegramNotifier::new(&config, 2).unwrap();

    let err = notifier.send(Channel::General, "hello").await.unwrap_err();
    assert!(matches!(err, NotifyError::Http(_)), "got: {err:?}");
    assert!(!err.to_string().contains("secret-token"));
}
