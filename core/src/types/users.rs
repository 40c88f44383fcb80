use serde::{Deserialize, Serialize};

use super::common::{ContainerInfo, IdRef, NamedRef};
use super::envelope::{envelope, ValidationError};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UsernameAvailability {
    pub available: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListRolesResponse {
    pub access_roles: Vec<NamedRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// A new user is created in the caller's container unless `container`
/// names another one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<IdRef>,
    pub access_roles: Vec<IdRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_id_assignments: Vec<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewUserResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserDetails {
    pub id: u64,
    pub username: String,
    pub account_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub telephone: String,
    pub status: String,
    pub container: ContainerInfo,
    pub access_roles: Vec<NamedRef>,
    pub is_cert_central: bool,
    pub is_enterprise: bool,
    pub has_container_assignments: bool,
    pub container_visibility: Vec<ContainerInfo>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

/// `job_title` and `telephone` are required for EV approvers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRolesRequest {
    pub access_roles: Vec<IdRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub status: String,
    pub container: ContainerInfo,
    pub access_roles: Vec<NamedRef>,
    pub has_container_assignments: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListUsersResponse {
    pub users: Vec<UserSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

envelope!(
    UsernameAvailability,
    ListRolesResponse,
    NewUserResponse,
    UserDetails,
    ListUsersResponse,
);
