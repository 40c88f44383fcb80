//! End-to-end flows against the mock CertCentral server.
//!
//! Each test starts its own mock on a random port and drives it through
//! `CertCentralClient` over real HTTP, so request composition, the status
//! table and response decoding are checked together.

mod common;

use certcentral_core::types::{IdRef, SslCertificate, SslOrderRequest};
use certcentral_core::api::PEM_CONTENT_TYPE;
use certcentral_core::{ApiError, Call, Envelope};
use common::{client_for, spawn_mock_server, API_KEY};

const SEEDED_ORDER_ID: u64 = 1001;
const SEEDED_CERTIFICATE_ID: u64 = 5001;

#[test]
fn api_key_lifecycle() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);

    // Step 1: create a key for user 10.
    let created = client.new_api_key(10, "deploy").unwrap().into_checked().unwrap();
    assert!(created.id > 0);
    assert_eq!(created.api_key.len(), 32);

    // Step 2: view it.
    let key = client.view_api_key(created.id).unwrap();
    assert_eq!(key.name, "deploy");
    assert_eq!(key.status, "active");
    assert_eq!(key.user.id, 10);
    assert!(key.create_date.is_some());

    // Step 3: revoke it.
    client.update_api_key_status(created.id, "revoked").unwrap();
    assert_eq!(client.view_api_key(created.id).unwrap().status, "revoked");

    // Step 4: it shows up in the listing.
    let keys = client.list_api_keys().unwrap().api_keys;
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].status, "revoked");
}

#[test]
fn rejected_create_carries_error_list() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);

    let response = client.new_api_key(10, "").unwrap();
    assert!(response.has_errors());
    match response.into_checked().unwrap_err() {
        ApiError::Validation(errors) => assert_eq!(errors[0].code, "invalid_name"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn order_lifecycle() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);

    // Step 1: place a Standard SSL order.
    let request = SslOrderRequest {
        certificate: SslCertificate {
            common_name: "shop.example.com".to_string(),
            dns_names: vec!["www.shop.example.com".to_string()],
            csr: "-----BEGIN CERTIFICATE REQUEST-----".to_string(),
            ..Default::default()
        },
        organization: IdRef::new(4),
        validity_years: 2,
        ..Default::default()
    };
    let placed = client.order_standard_ssl(&request).unwrap().into_checked().unwrap();
    assert_eq!(placed.requests[0].status, "pending");

    // Step 2: view it.
    let order = client.view_order(placed.id).unwrap();
    assert_eq!(order.status, "pending");
    assert_eq!(order.certificate.common_name, "shop.example.com");

    // Step 3: cancel it.
    client.cancel_order(placed.id, "ordered by mistake").unwrap();

    // Step 4: the listing shows both orders; the seeded one sends `[]`
    // for its organization.
    let list = client.list_orders(10, 0).unwrap();
    assert_eq!(list.page.total, 2);
    let seeded = list.orders.iter().find(|o| o.id == SEEDED_ORDER_ID).unwrap();
    assert_eq!(seeded.organization.id, 0);
    let canceled = list.orders.iter().find(|o| o.id == placed.id).unwrap();
    assert_eq!(canceled.status, "canceled");
    assert_eq!(canceled.organization.id, 4);

    // Step 5: canceling an unknown order is NotFound.
    let err = client.cancel_order(999_999, "gone").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn order_with_missing_csr_reports_errors() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);

    let request = SslOrderRequest {
        certificate: SslCertificate {
            common_name: "shop.example.com".to_string(),
            ..Default::default()
        },
        organization: IdRef::new(4),
        validity_years: 1,
        ..Default::default()
    };
    let response = client.order_standard_ssl(&request).unwrap();
    assert_eq!(response.errors[0].code, "missing_csr");
}

#[test]
fn missing_order_is_not_found() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);
    assert!(matches!(client.view_order(424242).unwrap_err(), ApiError::NotFound));
}

#[test]
fn pem_download_requires_pem_content_type() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);

    let pem = client.download_certificate(SEEDED_CERTIFICATE_ID).unwrap();
    assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
    assert!(pem.contains(&SEEDED_CERTIFICATE_ID.to_string()));

    // The server labels the PEM it returns.
    let path = format!("certificate/{SEEDED_CERTIFICATE_ID}/download/platform");
    let response = client
        .dispatch(Call::get(path.as_str()).header("Content-Type", PEM_CONTENT_TYPE))
        .unwrap();
    assert_eq!(response.content_type.as_deref(), Some(PEM_CONTENT_TYPE));

    // Without the PEM content type the server answers 406.
    let err = client.dispatch(Call::get(path)).unwrap_err();
    assert!(matches!(err, ApiError::NotAcceptable));
}

#[test]
fn bad_api_key_is_unauthorized() {
    let base = spawn_mock_server();
    let client = client_for(&base, "not-the-key");

    assert!(matches!(client.list_api_keys().unwrap_err(), ApiError::Unauthorized));
    assert!(matches!(
        client.update_api_key_status(1, "active").unwrap_err(),
        ApiError::Unauthorized
    ));
}

#[test]
fn guarded_arguments_never_reach_the_server() {
    // Nothing listens on this port; a sent request would be a transport error.
    let client = client_for("http://127.0.0.1:9/services/v2/", API_KEY);
    assert!(matches!(
        client.update_api_key_status(1, "paused").unwrap_err(),
        ApiError::InvalidArgument { .. }
    ));
    assert!(matches!(
        client.list_requests("archived").unwrap_err(),
        ApiError::InvalidArgument { .. }
    ));
    assert!(matches!(client.list_api_keys().unwrap_err(), ApiError::Transport(_)));
}

#[test]
fn username_availability() {
    let base = spawn_mock_server();
    let client = client_for(&base, API_KEY);
    assert!(!client.check_username("admin").unwrap());
    assert!(client.check_username("newcomer").unwrap());
}
