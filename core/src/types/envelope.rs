use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// One entry of the service's error list. Entries may nest further lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// A body that holds only an error list, as sent with 4xx statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorList {
    pub errors: Vec<ValidationError>,
}

/// Access to the error list every response shape carries.
pub trait Envelope: Sized {
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Turn an embedded error list into `ApiError::Validation`.
    fn into_checked(self) -> Result<Self, ApiError> {
        if self.has_errors() {
            Err(ApiError::Validation(self.errors().to_vec()))
        } else {
            Ok(self)
        }
    }
}

impl Envelope for ErrorList {
    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Implement `Envelope` for response structs with an `errors` field.
macro_rules! envelope {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::Envelope for $ty {
                fn errors(&self) -> &[$crate::types::ValidationError] {
                    &self.errors
                }
            }
        )+
    };
}

pub(crate) use envelope;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_decode() {
        let body = r#"{"errors":[{"code":"invalid_order","message":"bad","errors":[{"code":"missing_csr","message":"csr required"}]}]}"#;
        let list: ErrorList = serde_json::from_str(body).unwrap();
        assert_eq!(list.errors.len(), 1);
        assert_eq!(list.errors[0].errors[0].code, "missing_csr");
        assert!(list.errors[0].errors[0].errors.is_empty());
    }

    #[test]
    fn absent_error_field_means_no_errors() {
        let list: ErrorList = serde_json::from_str("{}").unwrap();
        assert!(!list.has_errors());
        assert!(list.into_checked().is_ok());
    }

    #[test]
    fn into_checked_surfaces_errors() {
        let list = ErrorList {
            errors: vec![ValidationError::new("access_denied", "nope")],
        };
        match list.into_checked() {
            Err(ApiError::Validation(errors)) => assert_eq!(errors[0].code, "access_denied"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
