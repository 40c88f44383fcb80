use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::UserRef;
use super::envelope::{envelope, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewApiKeyRequest {
    pub name: String,
}

/// The key itself is returned only here, once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewApiKeyResponse {
    pub id: u64,
    pub api_key: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKeyStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiKeySummary {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub create_date: String,
    pub last_used_date: String,
    pub user: UserRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListApiKeysResponse {
    pub api_keys: Vec<ApiKeySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewApiKeyResponse {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub user: UserRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

envelope!(NewApiKeyResponse, ListApiKeysResponse, ViewApiKeyResponse);
