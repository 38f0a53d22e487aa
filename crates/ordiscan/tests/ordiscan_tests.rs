// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `OrdiscanClient` and `OrdiscanGateway`
//!
//! These tests use wiremock to mock HTTP responses and exercise the client's
//! status mapping and the gateway's null-sentinel contract.

use std::str::FromStr;
use std::sync::Arc;

use api_client::{ApiError, HealthStatus, InscriptionApi};
use ordiscan::{OrdiscanClient, OrdiscanConfig, OrdiscanGateway};
use serde_json::json;
use shared_types::InscriptionId;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

mod fixtures;
use fixtures::*;

const TEST_TIMEOUT_SECONDS: u64 = 10;
const TEST_HEALTH_CHECK_TIMEOUT_SECONDS: u64 = 5;

/// Create a test `OrdiscanConfig` with the mock server URL
fn create_test_config(base_url: String) -> OrdiscanConfig {
    OrdiscanConfig {
        base_url,
        api_key: "test-api-key".to_string(),
        timeout_seconds: TEST_TIMEOUT_SECONDS,
        health_check_timeout_seconds: TEST_HEALTH_CHECK_TIMEOUT_SECONDS,
    }
}

fn create_test_client(base_url: String) -> OrdiscanClient {
    OrdiscanClient::new(create_test_config(base_url)).unwrap()
}

/// Test successful inscription retrieval with bearer auth
#[tokio::test]
async fn inscription_info_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96591617"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inscription_envelope(96_591_617)))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("96591617").unwrap();
    let result = client.inscription_info(&id).await.unwrap();

    let info = result.expect("inscription should be present");
    assert_eq!(info.inscription_number, Some(96_591_617));
    assert_eq!(info.content_type.as_deref(), Some("image/webp"));
    assert!(info.additional_data.contains_key("timestamp"));
}

/// Test inscription not found maps to the null sentinel
#[tokio::test]
async fn inscription_info_not_found() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/404404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("404404").unwrap();
    let result = client.inscription_info(&id).await.unwrap();
    assert!(result.is_none());
}

/// Test authentication failure
#[tokio::test]
async fn get_inscription_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96591617"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("96591617").unwrap();
    let result = client.get_inscription(&id).await;

    match result.unwrap_err() {
        ApiError::Authentication { .. } => {}
        other => panic!("Expected Authentication error, got: {other:?}"),
    }
}

/// Test rate limiting
#[tokio::test]
async fn get_inscription_rate_limited() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96591617"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("96591617").unwrap();
    let result = client.get_inscription(&id).await;

    match result.unwrap_err() {
        ApiError::RateLimitExceeded { .. } => {}
        other => panic!("Expected RateLimitExceeded error, got: {other:?}"),
    }
}

/// Test a body outside the data envelope maps to invalid response
#[tokio::test]
async fn get_inscription_invalid_envelope() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96591617"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("96591617").unwrap();
    let result = client.get_inscription(&id).await;

    match result.unwrap_err() {
        ApiError::InvalidResponse { .. } => {}
        other => panic!("Expected InvalidResponse error, got: {other:?}"),
    }
}

/// Test pagination is forwarded untouched
#[tokio::test]
async fn rune_list_forwards_page() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/runes"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rune_list_envelope()))
        .mount(&mock_server)
        .await;

    let runes = client.rune_list(Some(3)).await.unwrap().unwrap();
    assert_eq!(runes.len(), 2);
    assert_eq!(runes[0].name, "UNCOMMONGOODS");
}

/// Test the per-tick BRC-20 lookup
#[tokio::test]
async fn brc20_token_info_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/brc20/ordi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(brc20_envelope("ordi")))
        .mount(&mock_server)
        .await;

    let token = client.brc20_token_info("ordi").await.unwrap().unwrap();
    assert_eq!(token.tick, "ordi");
    assert_eq!(token.holders, Some(4321));
}

/// Test the gateway converts a server error to the null sentinel
#[tokio::test]
async fn gateway_swallows_server_errors() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());
    let gateway = OrdiscanGateway::new(Arc::new(client));

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96591617"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let id = InscriptionId::from_str("96591617").unwrap();
    assert!(gateway.inscription_info(&id).await.is_none());
}

/// Test the gateway passes successful payloads through unchanged
#[tokio::test]
async fn gateway_forwards_successful_payloads() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());
    let gateway = OrdiscanGateway::new(Arc::new(client));

    Mock::given(method("GET"))
        .and(path("/v1/address/bc1pholder/runes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"name": "UNCOMMONGOODS", "balance": "12345"}]
        })))
        .mount(&mock_server)
        .await;

    let balances = gateway.address_rune_balances("bc1pholder").await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].balance, "12345");
}

/// Test health check success
#[tokio::test]
async fn health_check_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96587318"))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(inscription_envelope(96_587_318)))
        .mount(&mock_server)
        .await;

    let status = client.health_check().await.unwrap();
    assert_eq!(status, HealthStatus::Up);
}

/// Test health check reports authentication failure as down
#[tokio::test]
async fn health_check_unauthorized_is_down() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96587318"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let status = client.health_check().await.unwrap();
    assert!(status.is_down());
}

/// Test health check reports other errors as degraded
#[tokio::test]
async fn health_check_server_error_is_degraded() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/inscription/96587318"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let status = client.health_check().await.unwrap();
    assert!(matches!(status, HealthStatus::Degraded { .. }));
    assert!(status.is_available());
}
