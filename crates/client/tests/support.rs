//! Shared helpers for the wiremock-based integration tests.
//!
//! Every test points the whole endpoint registry at one `MockServer`, so a
//! service named `Foo` answers at `/Foo.asmx` and operations are routed by
//! their `SOAPAction` header.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Once;

use twentyfour_client::{ApiClient, ServiceEndpoints};
use twentyfour_domain::ClientConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID: &str = "sess-4fd2a91c";

static TRACING: Once = Once::new();

/// Install a test subscriber once per binary; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Wrap a body fragment in a SOAP 1.1 response envelope.
pub fn soap_body(inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/"><soap:Body>{inner}</soap:Body></soap:Envelope>"#
    )
}

/// `SOAPAction` header value for a vendor operation.
pub fn action(operation: &str) -> String {
    format!("\"http://24sevenOffice.com/webservices/{operation}\"")
}

/// Mount a successful `Login` responder.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/Authenticate.asmx"))
        .and(header("SOAPAction", action("Login").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_body(&format!(
            "<LoginResponse><LoginResult>{SESSION_ID}</LoginResult></LoginResponse>"
        ))))
        .mount(server)
        .await;
}

/// Mount a plain 200 SOAP response for one operation on one service path.
pub async fn mount_operation(server: &MockServer, service: &str, operation: &str, inner: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/{service}.asmx")))
        .and(header("SOAPAction", action(operation).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_body(inner)))
        .mount(server)
        .await;
}

/// Test credentials with an overridden chunk size.
pub fn test_config(chunk_size: usize) -> ClientConfig {
    let mut config = ClientConfig::new("user@example.com", "secret", "app-id");
    config.chunk_size = chunk_size;
    config
}

/// Authenticate a client against the mock server.
pub async fn connect(server: &MockServer, chunk_size: usize) -> ApiClient {
    init_tracing();
    mount_login(server).await;
    ApiClient::connect_with_endpoints(
        test_config(chunk_size),
        ServiceEndpoints::uniform(&server.uri()),
    )
    .await
    .expect("client should authenticate against the mock server")
}

/// Requests received for one operation, in arrival order, as UTF-8 bodies.
pub async fn requests_for(server: &MockServer, operation: &str) -> Vec<String> {
    let expected = action(operation);
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| {
            request
                .headers
                .get("SOAPAction")
                .map(|value| value.to_str().unwrap_or_default() == expected)
                .unwrap_or(false)
        })
        .map(|request| String::from_utf8(request.body.clone()).expect("utf-8 request body"))
        .collect()
}
