//! Domains and their domain control validation (DCV).

use crate::allow_list::{ensure, DOMAIN_DCV_METHODS};
use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ApprovalStatusResponse, DcvEmailsResponse, DcvSelection, DnsApproval, DomainValidationRequest,
    EmailApproval, ListDcvMethodsResponse, ListDomainsResponse, ListValidationTypesResponse,
    NewDomainRequest, NewDomainResponse, ResendDcvEmailsRequest, ViewDomainResponse,
    ViewDomainValidationResponse,
};

impl<T: Transport> CertCentralClient<T> {
    pub fn new_domain(&self, request: &NewDomainRequest) -> Result<NewDomainResponse, ApiError> {
        self.fetch(Call::post("domain").json(request)?)
    }

    pub fn activate_domain(&self, domain_id: u64) -> Result<(), ApiError> {
        self.perform(Call::put(format!("domain/{domain_id}/activate")), 204)
    }

    pub fn deactivate_domain(&self, domain_id: u64) -> Result<(), ApiError> {
        self.perform(Call::put(format!("domain/{domain_id}/deactivate")), 204)
    }

    /// The domain with its DCV and validation details included.
    pub fn view_domain(&self, domain_id: u64) -> Result<ViewDomainResponse, ApiError> {
        self.fetch(Call::get(format!(
            "domain/{domain_id}?include_dcv=true&include_validation=true"
        )))
    }

    pub fn list_domains(&self, container_id: u64) -> Result<ListDomainsResponse, ApiError> {
        self.fetch(Call::get(format!("domain?container_id={container_id}")))
    }

    pub fn list_validation_types(&self) -> Result<ListValidationTypesResponse, ApiError> {
        self.fetch(Call::get("domain/validation-type"))
    }

    pub fn submit_domain_validation(
        &self,
        domain_id: u64,
        request: &DomainValidationRequest,
    ) -> Result<(), ApiError> {
        self.perform(Call::post(format!("domain/{domain_id}/validation")).json(request)?, 204)
    }

    pub fn view_domain_validation(
        &self,
        domain_id: u64,
    ) -> Result<ViewDomainValidationResponse, ApiError> {
        self.fetch(Call::get(format!("domain/{domain_id}/validation")))
    }

    pub fn list_dcv_methods(&self) -> Result<ListDcvMethodsResponse, ApiError> {
        self.fetch(Call::get("domain/dcv/method"))
    }

    /// Switch the DCV method. The service answers 200 with an empty body.
    pub fn change_domain_dcv_method(&self, domain_id: u64, method: &str) -> Result<(), ApiError> {
        ensure("DCV method", DOMAIN_DCV_METHODS, method)?;
        let payload = DcvSelection {
            method: method.to_string(),
        };
        self.perform(Call::post(format!("domain/{domain_id}/dcv/method")).json(&payload)?, 200)
    }

    /// Addresses that may approve DCV for the domain.
    pub fn get_dcv_emails(&self, domain_id: u64) -> Result<DcvEmailsResponse, ApiError> {
        self.fetch(Call::get(format!("domain/{domain_id}/dcv/emails")))
    }

    pub fn resend_dcv_emails(&self, domain_id: u64, name_scope: &str) -> Result<(), ApiError> {
        let payload = ResendDcvEmailsRequest {
            name_scope: name_scope.to_string(),
        };
        self.perform(Call::post(format!("domain/{domain_id}/dcv/emails")).json(&payload)?, 204)
    }

    pub fn approve_dcv_email(
        &self,
        domain_id: u64,
        request: &EmailApproval,
    ) -> Result<ApprovalStatusResponse, ApiError> {
        self.fetch(Call::post(format!("domain/{domain_id}/dcv")).json(request)?)
    }

    pub fn approve_dcv_dns(
        &self,
        domain_id: u64,
        request: &DnsApproval,
    ) -> Result<ApprovalStatusResponse, ApiError> {
        self.fetch(Call::post(format!("domain/{domain_id}/dcv/cname")).json(request)?)
    }

    /// Confirm DCV with the token from an approval email. The token is
    /// spliced into the path as given.
    pub fn validate_dcv_token(&self, token: &str) -> Result<ApprovalStatusResponse, ApiError> {
        self.fetch(Call::put(format!("domain/dcv/email/token/{token}")))
    }
}
