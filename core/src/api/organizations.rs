use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ListOrganizationsResponse, NewOrganizationRequest, OrganizationDetails,
    ValidateOrganizationRequest, ViewOrganizationValidationResponse,
};

impl<T: Transport> CertCentralClient<T> {
    pub fn view_organization(&self, organization_id: u64) -> Result<OrganizationDetails, ApiError> {
        self.fetch(Call::get(format!("organization/{organization_id}")))
    }

    pub fn list_organizations(&self) -> Result<ListOrganizationsResponse, ApiError> {
        self.fetch(Call::get("organization"))
    }

    pub fn new_organization(
        &self,
        request: &NewOrganizationRequest,
    ) -> Result<OrganizationDetails, ApiError> {
        self.fetch(Call::post("organization").json(request)?)
    }

    pub fn view_organization_validation(
        &self,
        organization_id: u64,
    ) -> Result<ViewOrganizationValidationResponse, ApiError> {
        self.fetch(Call::get(format!("organization/{organization_id}/validation")))
    }

    /// Submit the organization for OV/EV validation.
    pub fn validate_organization(
        &self,
        organization_id: u64,
        request: &ValidateOrganizationRequest,
    ) -> Result<(), ApiError> {
        let call = Call::post(format!("organization/{organization_id}/validation")).json(request)?;
        self.perform(call, 204)
    }
}
