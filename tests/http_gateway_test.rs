use httpmock::prelude::*;
use interview_helper::adapters::gateway_from_config;
use interview_helper::core::session::SESSION_SLOT;
use interview_helper::core::{SessionStore, VerificationGateway};
use interview_helper::domain::contact::default_country;
use interview_helper::{
    AppConfig, AppError, Contact, HttpGateway, MemorySessionStore, SessionGuard,
};
use serde_json::json;

fn contact() -> Contact {
    Contact::parse(default_country(), "13800138000").unwrap()
}

#[tokio::test]
async fn test_send_code_posts_phone_template_and_region() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/sms/send")
            .json_body(json!({
                "phoneNumber": "+8613800138000",
                "templateId": "1234567",
                "region": "ap-beijing"
            }));
        then.status(200).json_body(json!({"ok": true}));
    });

    let gateway = HttpGateway::new(server.base_url(), "1234567", "ap-beijing");
    let guard = SessionGuard::new(MemorySessionStore::new(), gateway);

    guard.request_code(&contact()).await.unwrap();
    send_mock.assert();
    assert!(!guard.is_authenticated());
}

#[tokio::test]
async fn test_send_code_failure_is_delivery_error() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path("/api/sms/send");
        then.status(500).body("quota exhausted");
    });

    let gateway = HttpGateway::new(server.base_url(), "tpl", "ap-beijing");
    let err = gateway.send_code("+8613800138000").await.unwrap_err();

    send_mock.assert();
    match err {
        AppError::DeliveryFailed { reason } => assert!(reason.contains("quota exhausted")),
        other => panic!("expected delivery failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_verify_accepted_signs_in() {
    let server = MockServer::start();
    let verify_mock = server.mock(|when, then| {
        when.method(POST).path("/api/sms/verify").json_body(json!({
            "phoneNumber": "+8613800138000",
            "code": "482913"
        }));
        then.status(200);
    });

    let store = MemorySessionStore::new();
    let gateway = HttpGateway::new(server.base_url(), "tpl", "ap-beijing");
    let mut guard = SessionGuard::new(store.clone(), gateway);

    guard.verify(&contact(), "482913").await.unwrap();
    verify_mock.assert();
    assert!(guard.is_authenticated());
    assert!(store.load(SESSION_SLOT).await.unwrap().is_some());
}

#[tokio::test]
async fn test_verify_rejected_and_server_error_are_distinct() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/sms/verify")
            .json_body(json!({"phoneNumber": "+8613800138000", "code": "000000"}));
        then.status(400);
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/sms/verify")
            .json_body(json!({"phoneNumber": "+8613800138000", "code": "999999"}));
        then.status(503);
    });

    let gateway = HttpGateway::new(server.base_url(), "tpl", "ap-beijing");
    let mut guard = SessionGuard::new(MemorySessionStore::new(), gateway);

    let rejected = guard.verify(&contact(), "000000").await.unwrap_err();
    assert!(matches!(rejected, AppError::VerificationRejected));

    let unavailable = guard.verify(&contact(), "999999").await.unwrap_err();
    assert!(matches!(unavailable, AppError::DeliveryFailed { .. }));

    assert!(!guard.is_authenticated());
}

#[tokio::test]
async fn test_verify_rate_limited_is_delivery_error() {
    let server = MockServer::start();
    let verify_mock = server.mock(|when, then| {
        when.method(POST).path("/api/sms/verify");
        then.status(429).body("slow down");
    });

    let store = MemorySessionStore::new();
    let gateway = HttpGateway::new(server.base_url(), "tpl", "ap-beijing");
    let mut guard = SessionGuard::new(store.clone(), gateway);

    let err = guard.verify(&contact(), "482913").await.unwrap_err();
    verify_mock.assert();
    assert!(matches!(err, AppError::DeliveryFailed { .. }));
    assert!(!matches!(err, AppError::VerificationRejected));
    assert!(!guard.is_authenticated());
    assert!(store.load(SESSION_SLOT).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unreachable_gateway_is_delivery_error() {
    // 保留埠號，未啟動服務
    let gateway = HttpGateway::new("http://127.0.0.1:9", "tpl", "ap-beijing");
    let err = gateway.send_code("+8613800138000").await.unwrap_err();
    assert!(matches!(err, AppError::DeliveryFailed { .. }));
}

#[tokio::test]
async fn test_gateway_selected_from_config() {
    let server = MockServer::start();
    let send_mock = server.mock(|when, then| {
        when.method(POST).path("/api/sms/send");
        then.status(204);
    });

    let config = AppConfig::from_toml_str(&format!(
        "[auth]\nbackend = \"http\"\nendpoint = \"{}\"\ntemplate_id = \"tpl\"\n",
        server.base_url()
    ))
    .unwrap();

    let guard = SessionGuard::new(MemorySessionStore::new(), gateway_from_config(&config))
        .with_timeout(config.gateway_timeout());
    guard.request_code(&contact()).await.unwrap();
    send_mock.assert();
}
