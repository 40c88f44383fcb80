//! Error types for the CertCentral client.
//!
//! # Design
//! Each status code the service documents as a failure gets its own
//! variant, so callers can match on `NotFound` or `RateLimited` without
//! inspecting numbers. Statuses outside that table are not errors at the
//! dispatch layer; operations that expect a specific status report a
//! mismatch as `UnexpectedStatus` with whatever error list the body held.

use thiserror::Error;

use crate::types::ValidationError;

/// Errors returned by `CertCentralClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configuration was built without an API key.
    #[error("a CertCentral API key is required")]
    MissingApiKey,

    /// Network, DNS or TLS failure. Carries the transport's own message.
    #[error("transport error: {0}")]
    Transport(String),

    /// 401.
    #[error("unauthorized: the request did not carry a valid API key")]
    Unauthorized,

    /// 403.
    #[error("forbidden: the API key lacks permission for this action")]
    Forbidden,

    /// 404. The resource does not exist or the key cannot see it.
    #[error("resource not found")]
    NotFound,

    /// 406. The request did not name an acceptable content type.
    #[error("not acceptable: the content type was rejected")]
    NotAcceptable,

    /// 429.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// 500.
    #[error("internal server error")]
    Internal,

    /// 503.
    #[error("service unavailable")]
    ServiceUnavailable,

    /// An operation that succeeds with a fixed status got a different one.
    #[error("expected HTTP {expected}, got {status}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        errors: Vec<ValidationError>,
    },

    /// The service embedded an error list in a decoded response.
    #[error("request rejected: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// An argument was outside its allow-list. No request was sent.
    #[error("unsupported {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Map a status code to its sentinel error, if it has one.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(ApiError::Unauthorized),
            403 => Some(ApiError::Forbidden),
            404 => Some(ApiError::NotFound),
            406 => Some(ApiError::NotAcceptable),
            429 => Some(ApiError::RateLimited),
            500 => Some(ApiError::Internal),
            503 => Some(ApiError::ServiceUnavailable),
            _ => None,
        }
    }

    pub(crate) fn invalid(kind: &'static str, value: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            kind,
            value: value.into(),
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.code, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_statuses_map_to_variants() {
        assert!(matches!(ApiError::from_status(401), Some(ApiError::Unauthorized)));
        assert!(matches!(ApiError::from_status(403), Some(ApiError::Forbidden)));
        assert!(matches!(ApiError::from_status(404), Some(ApiError::NotFound)));
        assert!(matches!(ApiError::from_status(406), Some(ApiError::NotAcceptable)));
        assert!(matches!(ApiError::from_status(429), Some(ApiError::RateLimited)));
        assert!(matches!(ApiError::from_status(500), Some(ApiError::Internal)));
        assert!(matches!(ApiError::from_status(503), Some(ApiError::ServiceUnavailable)));
    }

    #[test]
    fn other_statuses_have_no_sentinel() {
        for status in [200, 201, 204, 400, 409, 502] {
            assert!(ApiError::from_status(status).is_none(), "{status}");
        }
    }

    #[test]
    fn validation_display_lists_codes() {
        let err = ApiError::Validation(vec![
            ValidationError::new("invalid_dns_name", "bad name"),
            ValidationError::new("missing_csr", "csr required"),
        ]);
        assert_eq!(
            err.to_string(),
            "request rejected: invalid_dns_name: bad name; missing_csr: csr required"
        );
    }
}
