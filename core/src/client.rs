//! Request dispatcher for the CertCentral API.
//!
//! # Design
//! `CertCentralClient` holds an immutable `Arc<ClientConfig>` and a
//! `Transport`, nothing else. Each operation describes itself as a `Call`
//! (method, path, extra headers, optional JSON payload), which the
//! dispatcher turns into an `HttpRequest`, executes once, and checks
//! against the status table. The call, its status and its body are locals
//! of that one invocation, so a single client can serve many threads.
//!
//! Resource methods live in `crate::api`; they only choose paths, payloads
//! and decode targets and go through `fetch`, `fetch_text` or `perform`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ClientConfig, AUTH_HEADER};
use crate::error::ApiError;
use crate::http::{find_header, merge_headers, set_header, HttpMethod, HttpRequest};
use crate::transport::{Transport, UreqTransport};
use crate::types::{from_slice_lenient, ErrorList};

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// One outgoing call, before the client adds its defaults and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    method: HttpMethod,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl Call {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Add a call-level header. Replaces an earlier one of the same name.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        set_header(&mut self.headers, name, value);
        self
    }

    /// Attach a JSON payload. GET and DELETE calls drop it when dispatched.
    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> Result<Self, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A response that passed the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    /// `None` for 204 No Content.
    pub body: Option<Vec<u8>>,
}

/// Blocking CertCentral client.
///
/// Cheap to clone when the transport is; share one behind an `Arc` or by
/// reference across threads.
#[derive(Debug, Clone)]
pub struct CertCentralClient<T: Transport = UreqTransport> {
    config: Arc<ClientConfig>,
    transport: T,
}

impl CertCentralClient<UreqTransport> {
    /// Client over HTTPS using `config`.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config, transport)
    }

    /// Client for the production endpoint with the given key.
    pub fn from_api_key(api_key: &str) -> Result<Self, ApiError> {
        Ok(Self::new(ClientConfig::new(api_key)?))
    }
}

impl<T: Transport> CertCentralClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Compose the request a call would send, without sending it.
    pub fn build_request(&self, call: &Call) -> HttpRequest {
        let mut headers = merge_headers(self.config.default_headers(), &call.headers);
        if find_header(&headers, CONTENT_TYPE).is_none() {
            set_header(&mut headers, CONTENT_TYPE, JSON);
        }
        set_header(&mut headers, AUTH_HEADER, self.config.api_key());

        let body = if call.method.allows_body() {
            call.body.clone()
        } else {
            None
        };

        HttpRequest {
            method: call.method,
            url: self.config.url_for(&call.path),
            headers,
            body,
        }
    }

    /// Execute a call and apply the status table.
    ///
    /// Statuses outside the table come back as a successful `ApiResponse`
    /// so the caller can inspect the body.
    pub fn dispatch(&self, call: Call) -> Result<ApiResponse, ApiError> {
        let request = self.build_request(&call);
        debug!(method = %request.method, path = %call.path, "dispatching request");

        let response = self.transport.execute(&request)?;
        let status = response.status;
        if let Some(err) = ApiError::from_status(status) {
            warn!(method = %request.method, path = %call.path, status, "request failed");
            return Err(err);
        }

        let content_type = response.header("content-type").map(str::to_string);
        debug!(status, content_type = content_type.as_deref(), "request completed");
        let body = if status == 204 {
            None
        } else {
            Some(response.body)
        };
        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }

    /// Dispatch and decode the body. A 204 yields `R::default()`.
    pub(crate) fn fetch<R: DeserializeOwned + Default>(&self, call: Call) -> Result<R, ApiError> {
        match self.dispatch(call)?.body {
            Some(body) => decode(&body),
            None => Ok(R::default()),
        }
    }

    /// Dispatch and return the body as text.
    pub(crate) fn fetch_text(&self, call: Call) -> Result<String, ApiError> {
        let body = self.dispatch(call)?.body.unwrap_or_default();
        String::from_utf8(body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Dispatch a call that succeeds with exactly `expected` and no payload.
    pub(crate) fn perform(&self, call: Call, expected: u16) -> Result<(), ApiError> {
        let response = self.dispatch(call)?;
        if response.status == expected {
            return Ok(());
        }
        let errors = response
            .body
            .as_deref()
            .and_then(|body| from_slice_lenient::<ErrorList>(body).ok())
            .map(|list| list.errors)
            .unwrap_or_default();
        Err(ApiError::UnexpectedStatus {
            status: response.status,
            expected,
            errors,
        })
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, ApiError> {
    from_slice_lenient(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// In-memory transport for unit tests.
#[cfg(test)]
pub(crate) mod stub {
    use std::sync::Mutex;

    use super::*;
    use crate::http::HttpResponse;

    /// Answers every request with the same response and records what it saw.
    pub(crate) struct StubTransport {
        reply: HttpResponse,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        pub(crate) fn replying(status: u16, body: &str) -> Self {
            Self::answering(HttpResponse::new(status, body))
        }

        pub(crate) fn answering(reply: HttpResponse) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn requests(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }

        pub(crate) fn last(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }
    }

    impl Transport for StubTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    pub(crate) fn client(status: u16, body: &str) -> CertCentralClient<StubTransport> {
        let config = ClientConfig::new("test-key")
            .unwrap()
            .with_base_url("https://cc.test/services/v2");
        CertCentralClient::with_transport(config, StubTransport::replying(status, body))
    }
}
