//! Issued certificates and the per-order actions around them: download,
//! revoke, cancel, reissue, duplicate and DV domain control validation.

use crate::allow_list::{ensure, status_window, DV_DCV_METHODS};
use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    AddCsrRequest, CancelOrderRequest, CheckDcvResponse, DcvRandomValue, DvDcvMethodRequest,
    ListDuplicatesResponse, ListEmailValidationsResponse, ListOrderOrganizationsResponse,
    OrderStatusChangesResponse, ReissueRequest, ReissueResponse, RevokeCertificateRequest,
    RevokeCertificateResponse,
};

pub const PEM_CONTENT_TYPE: &str = "application/x-pem-file";
pub const PKCS7_CONTENT_TYPE: &str = "application/x-pkcs7-certificates";

impl<T: Transport> CertCentralClient<T> {
    /// PEM bundle formatted for the order's server platform.
    pub fn download_certificate(&self, cert_id: u64) -> Result<String, ApiError> {
        let call = Call::get(format!("certificate/{cert_id}/download/platform"))
            .header("Content-Type", PEM_CONTENT_TYPE);
        self.fetch_text(call)
    }

    pub fn download_pkcs7_certificate(&self, cert_id: u64) -> Result<String, ApiError> {
        let call = Call::get(format!("certificate/{cert_id}/download/format/p7b"))
            .header("Content-Type", PKCS7_CONTENT_TYPE);
        self.fetch_text(call)
    }

    /// Submit a revocation request. An administrator still has to approve it.
    pub fn revoke_certificate(
        &self,
        cert_id: u64,
        comments: &str,
    ) -> Result<RevokeCertificateResponse, ApiError> {
        let payload = RevokeCertificateRequest {
            comments: comments.to_string(),
        };
        self.fetch(Call::put(format!("certificate/{cert_id}/revoke")).json(&payload)?)
    }

    pub fn cancel_order(&self, order_id: u64, note: &str) -> Result<(), ApiError> {
        let payload = CancelOrderRequest {
            status: "CANCELED".to_string(),
            note: note.to_string(),
            send_emails: true,
        };
        let call = Call::put(format!("order/certificate/{order_id}/status")).json(&payload)?;
        self.perform(call, 204)
    }

    pub fn reissue_certificate(
        &self,
        order_id: u64,
        request: &ReissueRequest,
    ) -> Result<ReissueResponse, ApiError> {
        self.fetch(Call::post(format!("order/certificate/{order_id}/reissue")).json(request)?)
    }

    pub fn duplicate_certificate(
        &self,
        order_id: u64,
        request: &ReissueRequest,
    ) -> Result<ReissueResponse, ApiError> {
        self.fetch(Call::post(format!("order/certificate/{order_id}/duplicate")).json(request)?)
    }

    pub fn list_duplicate_certificates(
        &self,
        order_id: u64,
    ) -> Result<ListDuplicatesResponse, ApiError> {
        self.fetch(Call::get(format!("order/certificate/{order_id}/duplicate")))
    }

    pub fn list_order_organizations(
        &self,
        container_id: u64,
    ) -> Result<ListOrderOrganizationsResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/order/organization")))
    }

    pub fn list_email_validations(
        &self,
        order_id: u64,
    ) -> Result<ListEmailValidationsResponse, ApiError> {
        self.fetch(Call::get(format!("order/certificate/{order_id}/email-validation")))
    }

    /// Orders whose status changed within the last `minutes` (at most a week).
    pub fn order_status_changes(&self, minutes: u32) -> Result<OrderStatusChangesResponse, ApiError> {
        let minutes = status_window(minutes)?;
        self.fetch(Call::get(format!("order/certificate/status-changes?minutes={minutes}")))
    }

    pub fn dv_change_dcv_method(
        &self,
        order_id: u64,
        method: &str,
    ) -> Result<DcvRandomValue, ApiError> {
        ensure("DCV method", DV_DCV_METHODS, method)?;
        let payload = DvDcvMethodRequest {
            dcv_method: method.to_string(),
        };
        self.fetch(Call::put(format!("order/certificate/{order_id}/dcv-method")).json(&payload)?)
    }

    pub fn dv_resend_dcv_emails(&self, order_id: u64) -> Result<(), ApiError> {
        self.perform(Call::put(format!("order/certificate/{order_id}/resend-emails")), 204)
    }

    /// Generate a fresh random value for DNS or HTTP token validation.
    pub fn dv_dcv_random_value(&self, order_id: u64) -> Result<DcvRandomValue, ApiError> {
        self.fetch(Call::put(format!("order/certificate/{order_id}/dcv-random-value")))
    }

    pub fn dv_check_dcv(&self, order_id: u64) -> Result<CheckDcvResponse, ApiError> {
        self.fetch(Call::put(format!("order/certificate/{order_id}/check-dcv")))
    }

    pub fn add_csr(&self, order_id: u64, csr: &str) -> Result<(), ApiError> {
        let payload = AddCsrRequest {
            csr: csr.to_string(),
        };
        self.perform(Call::post(format!("order/certificate/{order_id}/csr")).json(&payload)?, 204)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::stub::client;
    use crate::http::HttpMethod;
    use crate::types::ReissueCertificate;

    const BASE: &str = "https://cc.test/services/v2";

    #[test]
    fn pem_download_sends_pem_content_type() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
        let client = client(200, pem);
        assert_eq!(client.download_certificate(42).unwrap(), pem);

        let request = client.transport().last();
        assert_eq!(request.url, format!("{BASE}/certificate/42/download/platform"));
        assert_eq!(request.header("content-type"), Some(PEM_CONTENT_TYPE));
    }

    #[test]
    fn pkcs7_download_path_and_header() {
        let client = client(200, "p7b");
        client.download_pkcs7_certificate(42).unwrap();
        let request = client.transport().last();
        assert_eq!(request.url, format!("{BASE}/certificate/42/download/format/p7b"));
        assert_eq!(request.header("Content-Type"), Some(PKCS7_CONTENT_TYPE));
    }

    #[test]
    fn download_without_acceptable_type_is_not_acceptable() {
        let err = client(406, "").download_certificate(1).unwrap_err();
        assert!(matches!(err, ApiError::NotAcceptable));
    }

    #[test]
    fn revoke_sends_comments() {
        let client = client(201, r#"{"id":5,"type":"revoke","status":"pending"}"#);
        let response = client.revoke_certificate(9, "key compromise").unwrap();
        assert_eq!(response.kind, "revoke");

        let request = client.transport().last();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.body.as_deref(), Some(r#"{"comments":"key compromise"}"#));
    }

    #[test]
    fn cancel_order_body() {
        let client = client(204, "");
        client.cancel_order(77, "no longer needed").unwrap();
        let request = client.transport().last();
        assert_eq!(request.url, format!("{BASE}/order/certificate/77/status"));
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "CANCELED", "note": "no longer needed", "send_emails": true})
        );
    }

    #[test]
    fn reissue_and_duplicate_share_body_shape() {
        let request = ReissueRequest {
            certificate: ReissueCertificate {
                common_name: "example.com".to_string(),
                csr: "CSR".to_string(),
                ..Default::default()
            },
        };
        let client = client(201, r#"{"id":1,"requests":[{"id":2}]}"#);
        let reissued = client.reissue_certificate(8, &request).unwrap();
        assert_eq!(reissued.requests[0].id, 2);
        client.duplicate_certificate(8, &request).unwrap();

        let seen = client.transport().requests();
        assert_eq!(seen[0].url, format!("{BASE}/order/certificate/8/reissue"));
        assert_eq!(seen[1].url, format!("{BASE}/order/certificate/8/duplicate"));
        assert_eq!(seen[0].body, seen[1].body);
    }

    #[test]
    fn status_changes_window_is_checked_before_sending() {
        let client = client(200, r#"{"orders":[]}"#);
        assert!(matches!(
            client.order_status_changes(0).unwrap_err(),
            ApiError::InvalidArgument { .. }
        ));
        assert!(client.order_status_changes(10_081).is_err());
        assert!(client.transport().requests().is_empty());

        client.order_status_changes(60).unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE}/order/certificate/status-changes?minutes=60")
        );
    }

    #[test]
    fn dv_dcv_method_allow_list() {
        let client = client(200, r#"{"dcv_random_value":"abc123"}"#);
        assert!(client.dv_change_dcv_method(4, "dns-cname-token").is_err());
        assert!(client.transport().requests().is_empty());

        let value = client.dv_change_dcv_method(4, "dns-txt-token").unwrap();
        assert_eq!(value.dcv_random_value, "abc123");
        let request = client.transport().last();
        assert_eq!(request.url, format!("{BASE}/order/certificate/4/dcv-method"));
        assert_eq!(request.body.as_deref(), Some(r#"{"dcv_method":"dns-txt-token"}"#));
    }

    #[test]
    fn dv_actions_are_bodiless_puts() {
        let client = client(200, r#"{"order_status":"issued","certificate_id":3,"dcv_status":"complete"}"#);
        let check = client.dv_check_dcv(4).unwrap();
        assert_eq!(check.dcv_status, "complete");
        client.dv_dcv_random_value(4).unwrap();

        for request in client.transport().requests() {
            assert_eq!(request.method, HttpMethod::Put);
            assert!(request.body.is_none());
        }
    }

    #[test]
    fn add_csr_expects_no_content() {
        let client = client(204, "");
        client.add_csr(4, "CSR").unwrap();
        let request = client.transport().last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"csr":"CSR"}"#));
    }
}
