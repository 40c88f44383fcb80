use crate::allow_list::{ensure, REQUEST_FILTERS, REQUEST_STATUSES};
use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{ListRequestsResponse, UpdateRequestStatusRequest, ViewRequestResponse};

impl<T: Transport> CertCentralClient<T> {
    /// List requests, optionally filtered by status. An empty `status`
    /// lists all of them.
    pub fn list_requests(&self, status: &str) -> Result<ListRequestsResponse, ApiError> {
        ensure("request filter", REQUEST_FILTERS, status)?;
        let path = if status.is_empty() {
            "request".to_string()
        } else {
            format!("request?status={status}")
        };
        self.fetch(Call::get(path))
    }

    pub fn view_request(&self, request_id: u64) -> Result<ViewRequestResponse, ApiError> {
        self.fetch(Call::get(format!("request/{request_id}")))
    }

    /// Approve, reject or otherwise move a request, with an optional note
    /// for the requester.
    pub fn update_request_status(
        &self,
        request_id: u64,
        status: &str,
        processor_comment: Option<&str>,
    ) -> Result<(), ApiError> {
        ensure("request status", REQUEST_STATUSES, status)?;
        let payload = UpdateRequestStatusRequest {
            status: status.to_string(),
            processor_comment: processor_comment.map(str::to_string),
        };
        self.perform(Call::put(format!("request/{request_id}/status")).json(&payload)?, 204)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::stub::client;
    use crate::error::ApiError;
    use crate::http::HttpMethod;

    const BASE: &str = "https://cc.test/services/v2";

    #[test]
    fn list_requests_filter_becomes_query() {
        let client = client(200, r#"{"requests":[]}"#);
        client.list_requests("").unwrap();
        client.list_requests("pending").unwrap();

        let urls: Vec<_> = client.transport().requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![format!("{BASE}/request"), format!("{BASE}/request?status=pending")]
        );
    }

    #[test]
    fn unknown_filter_is_rejected_locally() {
        let client = client(200, r#"{"requests":[]}"#);
        assert!(matches!(
            client.list_requests("submitted").unwrap_err(),
            ApiError::InvalidArgument { .. }
        ));
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn status_update_body() {
        let client = client(204, "");
        client
            .update_request_status(12, "approved", Some("looks good"))
            .unwrap();
        client.update_request_status(12, "rejected", None).unwrap();

        let seen = client.transport().requests();
        assert_eq!(seen[0].method, HttpMethod::Put);
        assert_eq!(seen[0].url, format!("{BASE}/request/12/status"));
        assert_eq!(
            seen[0].body.as_deref(),
            Some(r#"{"status":"approved","processor_comment":"looks good"}"#)
        );
        assert_eq!(seen[1].body.as_deref(), Some(r#"{"status":"rejected"}"#));
    }

    #[test]
    fn status_update_is_guarded() {
        let client = client(204, "");
        assert!(client.update_request_status(12, "", None).is_err());
        assert!(client.update_request_status(12, "APPROVED", None).is_err());
        assert!(client.transport().requests().is_empty());
    }

    #[test]
    fn view_request_decodes_comments() {
        let body = r#"{"id":12,"type":"new_request","status":"approved","comments":"please",
            "processor_comment":"ok","order":{"id":5,"product":{"name_id":"ssl_plus"}}}"#;
        let request = client(200, body).view_request(12).unwrap();
        assert_eq!(request.comments, "please");
        assert_eq!(request.order.product.name_id, "ssl_plus");
    }
}
