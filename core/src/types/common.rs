use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{"id": n}`, the service's way of referencing another resource.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: u64,
}

impl IdRef {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// A resource reference with its display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

/// A user as embedded in other resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserRef {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Organization or technical contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub telephone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerPlatform {
    pub id: i64,
    pub name: String,
    pub install_url: String,
    pub csr_url: String,
}

/// Issuing intermediate. Its id is a string on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaCert {
    pub id: String,
    pub name: String,
}

/// Container as embedded in users and container listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContainerInfo {
    pub id: u64,
    pub public_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub parent_id: u64,
    pub template_id: u64,
    pub has_logo: bool,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_domain_names: Vec<String>,
}

/// Paging metadata echoed by list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Page {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductInfo {
    pub name_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub validation_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub validation_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub validation_description: String,
}

/// Shipping address for hardware-token provisioning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShipInfo {
    pub name: String,
    pub addr1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub addr2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    /// `STANDARD` or `EXPEDITED`.
    pub method: String,
}

/// A vendor-side request record attached to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestSummary {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
}
