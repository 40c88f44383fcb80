use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    CaCert, ContactInfo, NamedRef, ProductInfo, RequestSummary, ServerPlatform, ShipInfo, UserRef,
};
use super::envelope::{envelope, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestedCertificate {
    pub common_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub csr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<RequestOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_platform: Option<ServerPlatform>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<CaCert>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestOrganization {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
}

/// Order summary embedded in a request listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestedOrder {
    pub id: u64,
    pub certificate: RequestedCertificate,
    pub organization: RequestOrganization,
    pub container: NamedRef,
    pub product: ProductInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestListing {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub requester: UserRef,
    pub processor: UserRef,
    pub order: RequestedOrder,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListRequestsResponse {
    pub requests: Vec<RequestListing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// Full order as embedded in a single request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestOrderDetails {
    pub id: u64,
    pub certificate: RequestedCertificate,
    pub status: String,
    pub is_renewal: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub organization: RequestOrganization,
    pub validity_years: u32,
    pub disable_renewal_notifications: bool,
    pub auto_renew: u32,
    pub container: NamedRef,
    pub product: ProductInfo,
    pub organization_contact: ContactInfo,
    pub technical_contact: ContactInfo,
    pub user: UserRef,
    pub requests: Vec<RequestSummary>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cs_provisioning_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_info: Option<ShipInfo>,
    pub disable_ct: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewRequestResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_processed: Option<DateTime<Utc>>,
    pub requester: UserRef,
    pub processor: UserRef,
    pub order: RequestOrderDetails,
    pub comments: String,
    pub processor_comment: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRequestStatusRequest {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_comment: Option<String>,
}

envelope!(ListRequestsResponse, ViewRequestResponse);
