use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};

use super::common::{
    CaCert, ContactInfo, IdRef, NamedRef, Page, ProductInfo, RequestSummary, ServerPlatform,
    ShipInfo, UserRef,
};
use super::envelope::{envelope, ValidationError};

// ---------------------------------------------------------------------------
// Viewing and listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderCertificate {
    pub id: u64,
    pub thumbprint: String,
    pub serial_number: String,
    pub common_name: String,
    pub dns_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub valid_from: String,
    pub valid_till: String,
    pub csr: String,
    pub organization: IdRef,
    pub organization_units: Vec<String>,
    pub server_platform: ServerPlatform,
    pub signature_hash: String,
    pub key_size: u32,
    pub ca_cert: CaCert,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderOrganizationDetails {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub is_active: bool,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewOrderResponse {
    pub id: u64,
    pub certificate: OrderCertificate,
    pub status: String,
    pub is_renewal: bool,
    pub is_renewed: bool,
    pub renewed_order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub organization: OrderOrganizationDetails,
    pub validity_years: u32,
    pub disable_renewal_notifications: bool,
    pub container: NamedRef,
    pub product: ProductInfo,
    pub organization_contact: ContactInfo,
    pub technical_contact: ContactInfo,
    pub user: UserRef,
    pub requests: Vec<RequestSummary>,
    pub receipt_id: u64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cs_provisioning_method: String,
    pub public_id: String,
    pub allow_duplicates: bool,
    pub user_assignments: Vec<UserRef>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payment_method: String,
    pub disable_ct: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListedCertificate {
    pub id: u64,
    pub common_name: String,
    pub dns_names: Vec<String>,
    pub valid_till: String,
    pub signature_hash: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListedOrder {
    pub id: u64,
    pub certificate: ListedCertificate,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    /// The service sends `[]` here when the order has no organization.
    #[serde(deserialize_with = "object_or_empty_array")]
    pub organization: NamedRef,
    pub validity_years: u32,
    pub container: NamedRef,
    pub product: ProductInfo,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListOrdersResponse {
    pub orders: Vec<ListedOrder>,
    pub page: Page,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// Decode an object, or treat an empty JSON array as the default value.
///
/// Any other array still fails, as does a non-object scalar.
fn object_or_empty_array<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) if items.is_empty() => Ok(T::default()),
        value => serde_json::from_value(value).map_err(D::Error::custom),
    }
}

// ---------------------------------------------------------------------------
// Placing orders
// ---------------------------------------------------------------------------

/// Certificate block shared by the SSL product endpoints. Fields a product
/// does not use stay `None` and are left out of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SslCertificate {
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    pub csr: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization_units: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_platform: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_option: Option<String>,
    /// Private CA products only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert_id: Option<String>,
}

/// OV/EV/private SSL order body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SslOrderRequest {
    pub certificate: SslCertificate,
    pub organization: IdRef,
    pub validity_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default)]
    pub disable_renewal_notifications: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_of_order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub disable_ct: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductHint {
    pub type_hint: String,
}

/// Body for the endpoint that picks the SSL product from the data given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SslDeterminatorRequest {
    pub certificate: SslCertificate,
    pub organization: IdRef,
    pub validity_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewed_thumbprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default)]
    pub disable_renewal_notifications: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_of_order_id: Option<u64>,
    #[serde(default)]
    pub disable_ct: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DcvEmail {
    pub dns_name: String,
    pub email: String,
}

/// GeoTrust and RapidSSL DV order body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DvOrderRequest {
    pub certificate: SslCertificate,
    pub validity_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_expiration_date: Option<String>,
    #[serde(default)]
    pub disable_renewal_notifications: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_contact: Option<ContactInfo>,
    #[serde(default)]
    pub disable_ct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcv_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dcv_emails: Vec<DcvEmail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DvOrderResponse {
    pub id: u64,
    pub certificate_id: u64,
    pub dcv_random_value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PendingRequest {
    pub id: u64,
    pub status: String,
}

/// Returned by every order endpoint that queues an approval request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrderRequestsResponse {
    pub id: u64,
    pub requests: Vec<PendingRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientCertificate {
    pub common_name: String,
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csr: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organization_units: Vec<String>,
    pub signature_hash: String,
}

/// Client (S/MIME, authentication, signing) certificate order body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientCertificateOrderRequest {
    pub certificate: ClientCertificate,
    pub organization: IdRef,
    pub validity_years: u32,
    #[serde(default)]
    pub auto_renew: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_of_order_id: Option<u64>,
}

/// Client certificates need no further approval, so only an id comes back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientOrderResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeSigningCertificate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_platform: Option<IdRef>,
    pub signature_hash: String,
}

/// Standard and EV code signing order body. EV orders add the
/// provisioning method and shipping details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeSigningOrderRequest {
    pub certificate: CodeSigningCertificate,
    pub organization: IdRef,
    pub validity_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_of_order_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cs_provisioning_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_info: Option<ShipInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSigningSubject {
    pub name: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSigningOrderRequest {
    pub certificate: CodeSigningCertificate,
    pub organization: IdRef,
    pub validity_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cs_provisioning_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_info: Option<ShipInfo>,
    pub subject: DocumentSigningSubject,
}

envelope!(
    ViewOrderResponse,
    ListOrdersResponse,
    DvOrderResponse,
    OrderRequestsResponse,
    ClientOrderResponse,
);
