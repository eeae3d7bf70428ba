#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpKeyApi` tests against a local mock server.

mod common;

use common::{TEST_TOKEN, api_for, key_record_json};
use mockito::Matcher;
use project_keys_api::{ApiError, EditableFields, HttpKeyApi, KeyApi, KeyLocator, SaveRoute};

fn locator() -> KeyLocator {
    KeyLocator::new("acme", "web", "k1")
}

// ============ GET ============

#[tokio::test]
async fn get_key_parses_record_and_sends_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/acme/web/keys/k1/")
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(key_record_json().to_string())
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let record = require_ok!(api.get_key(&locator()).await);

    assert_eq!(record.id, "k1");
    assert_eq!(record.name, "Prod");
    assert!(record.is_active);
    assert_eq!(record.project_id, "proj1");
    assert_eq!(record.dsn.public, "https://pub@o1.ingest.example.com/1");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_key_without_token_sends_no_authorization() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/projects/acme/web/keys/k1/")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(key_record_json().to_string())
        .create_async()
        .await;

    let api = HttpKeyApi::new(server.url()).expect("client");
    require_ok!(api.get_key(&locator()).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_key_not_found_is_http_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/projects/acme/web/keys/k1/")
        .with_status(404)
        .with_body(r#"{"detail":"Not found"}"#)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let result = api.get_key(&locator()).await;

    assert!(
        matches!(&result, Err(ApiError::Http { status: 404, .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn get_key_malformed_body_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/projects/acme/web/keys/k1/")
        .with_status(200)
        .with_body("{\"id\": ")
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let result = api.get_key(&locator()).await;

    assert!(
        matches!(&result, Err(ApiError::ParseError { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // nothing listens on port 1
    let api = HttpKeyApi::new("http://127.0.0.1:1").expect("client");
    let result = api.get_key(&locator()).await;

    assert!(
        matches!(
            &result,
            Err(ApiError::NetworkError { .. } | ApiError::Timeout { .. })
        ),
        "unexpected result: {result:?}"
    );
}

// ============ PUT ============

#[tokio::test]
async fn update_key_uses_project_route_by_default() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/projects/acme/web/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(
            serde_json::json!({"name": "Prod", "isActive": false}),
        ))
        .with_status(200)
        .with_body(r#"{"isActive": false}"#)
        .expect(1)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let fields = EditableFields {
        name: "Prod".to_string(),
        is_active: false,
    };
    let patch = require_ok!(api.update_key(&locator(), &fields).await);

    assert_eq!(patch.is_active, Some(false));
    assert!(patch.name.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn update_key_can_target_key_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/projects/acme/web/keys/k1/")
        .with_status(200)
        .with_body(r#"{"name": "new", "isActive": true}"#)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Key).expect("client");
    let fields = EditableFields {
        name: "new".to_string(),
        is_active: true,
    };
    let patch = require_ok!(api.update_key(&locator(), &fields).await);

    assert_eq!(patch.name.as_deref(), Some("new"));
    mock.assert_async().await;
}

#[tokio::test]
async fn update_key_empty_success_body_is_empty_patch() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/projects/acme/web/")
        .with_status(204)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let patch = require_ok!(api.update_key(&locator(), &EditableFields::default()).await);
    assert_eq!(patch, project_keys_api::KeyPatch::default());
}

#[tokio::test]
async fn update_key_validation_failure_exposes_field_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/projects/acme/web/")
        .with_status(400)
        .with_body(r#"{"name": ["too long"]}"#)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let fields = EditableFields {
        name: "x".repeat(500),
        is_active: true,
    };
    let err = api
        .update_key(&locator(), &fields)
        .await
        .expect_err("400 must fail");

    assert_eq!(err.status(), Some(400));
    assert!(err.is_expected());
    assert_eq!(err.field_errors().get("name"), Some("too long"));
}

// ============ DELETE ============

#[tokio::test]
async fn delete_key_succeeds_on_no_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/projects/acme/web/keys/k1/")
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    require_ok!(api.delete_key(&locator()).await);
    mock.assert_async().await;
}

#[tokio::test]
async fn delete_key_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/projects/acme/web/keys/k1/")
        .with_status(500)
        .create_async()
        .await;

    let api = api_for(&server, SaveRoute::Project).expect("client");
    let result = api.delete_key(&locator()).await;

    assert!(
        matches!(&result, Err(e) if e.status() == Some(500) && !e.is_expected()),
        "unexpected result: {result:?}"
    );
}
