use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{IdRef, NamedRef};
use super::envelope::{envelope, ValidationError};

/// A validation type to submit, with the approving user for OV/EV types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationSubmission {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DcvSelection {
    pub method: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDomainRequest {
    pub name: String,
    pub organization: IdRef,
    pub validations: Vec<ValidationSubmission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcv: Option<DcvSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewDomainResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VerifiedUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub job_title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub telephone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainValidation {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dcv_status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub org_status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verified_users: Vec<VerifiedUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainOrganization {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub assumed_name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewDomainResponse {
    pub id: u64,
    pub is_active: bool,
    pub status: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub organization: DomainOrganization,
    pub validations: Vec<DomainValidation>,
    pub container: NamedRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainSummary {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    pub organization: DomainOrganization,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<DomainValidation>,
    pub container: NamedRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListDomainsResponse {
    pub domains: Vec<DomainSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationType {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub requires_user: bool,
    pub requires_dcv: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListValidationTypesResponse {
    pub validation_types: Vec<ValidationType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainValidationRequest {
    pub validations: Vec<ValidationSubmission>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewDomainValidationResponse {
    pub validations: Vec<DomainValidation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DcvMethod {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub default: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListDcvMethodsResponse {
    pub methods: Vec<DcvMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DcvEmailsResponse {
    pub name_scope: String,
    pub base_emails: Vec<String>,
    pub whois_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResendDcvEmailsRequest {
    pub name_scope: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DcvInvitation {
    pub invitation_id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailApproval {
    pub method: String,
    pub name_scope: String,
    pub dcv_invitations: Vec<DcvInvitation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsApproval {
    pub method: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApprovalStatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

envelope!(
    NewDomainResponse,
    ViewDomainResponse,
    ListDomainsResponse,
    ListValidationTypesResponse,
    ViewDomainValidationResponse,
    ListDcvMethodsResponse,
    DcvEmailsResponse,
    ApprovalStatusResponse,
);
