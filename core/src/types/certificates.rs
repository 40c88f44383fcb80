use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdRef, ServerPlatform, UserRef};
use super::envelope::{envelope, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevokeCertificateRequest {
    pub comments: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RevokeCertificateResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub requester: UserRef,
    pub comments: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// Body of an order status update. The service accepts only `CANCELED`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub status: String,
    pub note: String,
    pub send_emails: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReissueCertificate {
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    pub csr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_platform: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_hash: Option<String>,
}

/// Used for both reissues and duplicates; the two endpoints take the same
/// body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReissueRequest {
    pub certificate: ReissueCertificate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReissueResponse {
    pub id: u64,
    pub requests: Vec<IdRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DuplicateCertificate {
    pub id: u64,
    pub thumbprint: String,
    pub serial_number: String,
    pub common_name: String,
    pub dns_names: Vec<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub valid_from: String,
    pub valid_till: String,
    pub csr: String,
    pub server_platform: ServerPlatform,
    pub signature_hash: String,
    pub key_size: u32,
    pub ca_cert_id: String,
    pub sub_id: String,
    pub public_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListDuplicatesResponse {
    pub certificates: Vec<DuplicateCertificate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderOrganization {
    pub id: u64,
    pub name: String,
    pub display_name: String,
}

/// Organizations a container may place orders for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListOrderOrganizationsResponse {
    pub organizations: Vec<OrderOrganization>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmailValidation {
    pub email: String,
    pub status: String,
    pub date_emailed: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListEmailValidationsResponse {
    pub delivery_options: Vec<String>,
    pub emails: Vec<EmailValidation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderStatusChange {
    pub order_id: u64,
    pub certificate_id: u64,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderStatusChangesResponse {
    pub orders: Vec<OrderStatusChange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DvDcvMethodRequest {
    pub dcv_method: String,
}

/// Token to publish for `dns-txt-token` and `http-token` validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DcvRandomValue {
    pub dcv_random_value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckDcvResponse {
    pub order_status: String,
    pub certificate_id: u64,
    pub dcv_status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCsrRequest {
    pub csr: String,
}

envelope!(
    RevokeCertificateResponse,
    ReissueResponse,
    ListDuplicatesResponse,
    ListOrderOrganizationsResponse,
    ListEmailValidationsResponse,
    OrderStatusChangesResponse,
    DcvRandomValue,
    CheckDcvResponse,
);
