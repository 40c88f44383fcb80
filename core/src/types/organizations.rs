use serde::{Deserialize, Serialize};

use super::common::{IdRef, Page, UserRef};
use super::envelope::{envelope, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub telephone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone_extension: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrganizationRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumed_name: Option<String>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub telephone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<IdRef>,
    pub organization_contact: OrganizationContact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationContainer {
    pub id: u64,
    pub name: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationContactDetails {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub telephone_extension: String,
}

/// Single organization, as viewed or as returned on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationDetails {
    pub id: u64,
    pub status: String,
    pub name: String,
    pub assumed_name: String,
    pub display_name: String,
    pub is_active: bool,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub telephone: String,
    pub container: OrganizationContainer,
    pub organization_contact: OrganizationContactDetails,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ev_approvers: Vec<UserRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationSummary {
    pub id: u64,
    pub status: String,
    pub name: String,
    pub display_name: String,
    pub is_active: bool,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub telephone: String,
    pub container: OrganizationContainer,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListOrganizationsResponse {
    pub organizations: Vec<OrganizationSummary>,
    pub page: Page,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationValidation {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub date_created: String,
    pub validated_until: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewOrganizationValidationResponse {
    pub validations: Vec<OrganizationValidation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationValidationSubmission {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verified_users: Vec<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOrganizationRequest {
    pub validations: Vec<OrganizationValidationSubmission>,
}

envelope!(
    OrganizationDetails,
    ListOrganizationsResponse,
    ViewOrganizationValidationResponse,
);
