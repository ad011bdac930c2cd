#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a service wired the same way as the binary
//! - Making HTTP requests
//! - Asserting on responses

use std::sync::Arc;

use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use contoso_test::app::api::negotiate::{FormatterSet, OutputFormattersHandler};
use contoso_test::app::config::ConfigHandler;
use contoso_test::app::store::InMemoryContactStore;
use contoso_test::app::store_handler::ContactStoreHandler;
use contoso_test::component::config::Settings;
use contoso_test::component::contact::Contact;

pub use contoso_test::rfc::rfc::vcard::TextEncoding;

/// The contacts every service starts with, in list order.
#[must_use]
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "Carson", "Alexander"),
        Contact::new("2", "Meredith", "Alonso"),
        Contact::new("42", "Jane", "Doe"),
    ]
}

/// Creates a service with default settings and [`seed_contacts`].
#[must_use]
pub fn create_test_service() -> Service {
    create_test_service_with("", seed_contacts())
}

/// Creates a service from a TOML settings overlay and an initial contact set.
///
/// ## Panics
/// Panics if the settings do not parse.
#[must_use]
pub fn create_test_service_with(settings_toml: &str, contacts: Vec<Contact>) -> Service {
    let settings = Settings::from_toml_str(settings_toml).expect("Test settings should parse");
    let formatters = Arc::new(FormatterSet::from_settings(&settings));

    let router = Router::new()
        .hoop(ConfigHandler {
            settings: Arc::new(settings),
        })
        .hoop(ContactStoreHandler {
            store: Arc::new(InMemoryContactStore::with_contacts(contacts)),
        })
        .hoop(OutputFormattersHandler { formatters })
        .push(contoso_test::app::api::routes());

    Service::new(router)
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn accept(self, media_type: &str) -> Self {
        self.header("Accept", media_type)
    }

    #[must_use]
    pub fn accept_charset(self, charset: &str) -> Self {
        self.header("Accept-Charset", charset)
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(mut self, json: &str) -> Self {
        self = self.header("Content-Type", "application/json; charset=utf-8");
        self.body = Some(json.as_bytes().to_vec());
        self
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method {
            Method::POST => TestClient::post(&url),
            _ => TestClient::get(&url),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "Expected status {expected} but got {}",
            self.status
        );
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Asserts that a header exists with the expected value.
    #[must_use]
    pub fn assert_header(self, name: &str, expected: &str) -> Self {
        let value = self.header(name);
        assert!(value.is_some(), "Header '{name}' not found in response");
        assert_eq!(
            value,
            Some(expected),
            "Header '{name}' expected '{expected}'"
        );
        self
    }

    /// Body decoded as UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Body should be UTF-8")
    }

    /// Body parsed as JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Body should be JSON")
    }

    /// Asserts the body equals `expected` in the given encoding.
    #[must_use]
    pub fn assert_body_encoded(self, expected: &str, encoding: TextEncoding) -> Self {
        assert_eq!(
            self.body,
            encoding.encode(expected),
            "Body did not match {expected:?} as {encoding}"
        );
        self
    }
}

/// The vCard block the writer produces for one contact.
#[must_use]
pub fn vcard_block(first: &str, last: &str, id: &str) -> String {
    format!(
        "BEGIN:VCARD\r\nVERSION:2.1\r\nN:{last};{first}\r\nFN:{first} {last}\r\nUID:{id}\r\nEND:VCARD\r\n"
    )
}
