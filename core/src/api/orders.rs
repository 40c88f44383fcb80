//! Viewing, listing and placing certificate orders.
//!
//! Each product has its own endpoint under `order/certificate/`. The SSL
//! products share one body (`SslOrderRequest`); client, code signing and
//! document signing products each have their own.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::allow_list::{document_signing_product, dv_product};
use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ClientCertificateOrderRequest, ClientOrderResponse, CodeSigningOrderRequest,
    DocumentSigningOrderRequest, DvOrderRequest, DvOrderResponse, ListOrdersResponse,
    OrderRequestsResponse, SslDeterminatorRequest, SslOrderRequest, ViewOrderResponse,
};

impl<T: Transport> CertCentralClient<T> {
    pub fn view_order(&self, order_id: u64) -> Result<ViewOrderResponse, ApiError> {
        self.fetch(Call::get(format!("order/certificate/{order_id}")))
    }

    /// One page of orders. No further paging is done here.
    pub fn list_orders(&self, limit: u32, offset: u32) -> Result<ListOrdersResponse, ApiError> {
        self.fetch(Call::get(format!(
            "order/certificate?limit={limit}&offset={offset}"
        )))
    }

    /// Let the service choose the SSL product from the request contents.
    pub fn order_ssl_by_determinator(
        &self,
        request: &SslDeterminatorRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl", request)
    }

    /// Order a DV certificate from `brand` (`geotrust` or `rapidssl`).
    pub fn order_dv_ssl(
        &self,
        brand: &str,
        request: &DvOrderRequest,
    ) -> Result<DvOrderResponse, ApiError> {
        let product = dv_product(brand)?;
        self.place_order(product, request)
    }

    pub fn order_standard_ssl(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_plus", request)
    }

    pub fn order_ssl_multi_domain(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_multi_domain", request)
    }

    pub fn order_wildcard_ssl(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_wildcard", request)
    }

    pub fn order_ev_plus_ssl(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_ev_plus", request)
    }

    pub fn order_ev_multi_domain_ssl(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_ev_multi_domain", request)
    }

    pub fn order_cloud_ssl(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("ssl_cloud_wildcard", request)
    }

    pub fn order_private_ssl_plus(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("private_ssl_plus", request)
    }

    pub fn order_private_ssl_wildcard(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("private_ssl_wildcard", request)
    }

    pub fn order_private_ssl_multi_domain(
        &self,
        request: &SslOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("private_ssl_multi_domain", request)
    }

    pub fn order_client_premium(
        &self,
        request: &ClientCertificateOrderRequest,
    ) -> Result<ClientOrderResponse, ApiError> {
        self.place_order("client_premium_sha2", request)
    }

    pub fn order_client_email_security_plus(
        &self,
        request: &ClientCertificateOrderRequest,
    ) -> Result<ClientOrderResponse, ApiError> {
        self.place_order("client_email_security_plus", request)
    }

    pub fn order_client_digital_signature_plus(
        &self,
        request: &ClientCertificateOrderRequest,
    ) -> Result<ClientOrderResponse, ApiError> {
        self.place_order("client_digital_signature_plus", request)
    }

    pub fn order_code_signing(
        &self,
        request: &CodeSigningOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("code_signing", request)
    }

    pub fn order_ev_code_signing(
        &self,
        request: &CodeSigningOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        self.place_order("code_signing_ev", request)
    }

    /// Order a document signing certificate with an allowance of 2000 or
    /// 5000 signatures.
    pub fn order_document_signing_organization(
        &self,
        amount: u32,
        request: &DocumentSigningOrderRequest,
    ) -> Result<OrderRequestsResponse, ApiError> {
        let product = document_signing_product(amount)?;
        self.place_order(product, request)
    }

    fn place_order<P, R>(&self, product: &str, request: &P) -> Result<R, ApiError>
    where
        P: Serialize,
        R: DeserializeOwned + Default,
    {
        self.fetch(Call::post(format!("order/certificate/{product}")).json(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::stub::{client, StubTransport};
    use crate::http::HttpMethod;
    use crate::types::{IdRef, SslCertificate};

    const BASE: &str = "https://cc.test/services/v2";
    const CREATED: &str = r#"{"id":100,"requests":[{"id":200,"status":"pending"}]}"#;

    fn ssl_request() -> SslOrderRequest {
        SslOrderRequest {
            certificate: SslCertificate {
                common_name: "example.com".to_string(),
                csr: "CSR".to_string(),
                ..Default::default()
            },
            organization: IdRef::new(3),
            validity_years: 1,
            ..Default::default()
        }
    }

    #[test]
    fn ssl_products_post_to_their_endpoints() {
        let client = client(201, CREATED);
        let request = ssl_request();
        type Client = CertCentralClient<StubTransport>;
        type Order = fn(&Client, &SslOrderRequest) -> Result<OrderRequestsResponse, ApiError>;
        let cases: [(Order, &str); 9] = [
            (Client::order_standard_ssl, "ssl_plus"),
            (Client::order_ssl_multi_domain, "ssl_multi_domain"),
            (Client::order_wildcard_ssl, "ssl_wildcard"),
            (Client::order_ev_plus_ssl, "ssl_ev_plus"),
            (Client::order_ev_multi_domain_ssl, "ssl_ev_multi_domain"),
            (Client::order_cloud_ssl, "ssl_cloud_wildcard"),
            (Client::order_private_ssl_plus, "private_ssl_plus"),
            (Client::order_private_ssl_wildcard, "private_ssl_wildcard"),
            (Client::order_private_ssl_multi_domain, "private_ssl_multi_domain"),
        ];
        for (order, product) in cases {
            let created = order(&client, &request).unwrap();
            assert_eq!(created.requests[0].id, 200);
            let sent = client.transport().last();
            assert_eq!(sent.method, HttpMethod::Post);
            assert_eq!(sent.url, format!("{BASE}/order/certificate/{product}"));
        }
    }

    #[test]
    fn dv_brand_selects_product() {
        let client = client(201, r#"{"id":1,"certificate_id":2,"dcv_random_value":"rnd"}"#);
        let request = DvOrderRequest::default();
        let created = client.order_dv_ssl("rapidssl", &request).unwrap();
        assert_eq!(created.dcv_random_value, "rnd");
        assert_eq!(
            client.transport().last().url,
            format!("{BASE}/order/certificate/ssl_dv_rapidssl")
        );

        let err = client.order_dv_ssl("thawte", &request).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument { kind: "DV brand", .. }));
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn document_signing_amount_selects_product() {
        let client = client(201, CREATED);
        let request = DocumentSigningOrderRequest::default();
        client.order_document_signing_organization(5000, &request).unwrap();
        assert_eq!(
            client.transport().last().url,
            format!("{BASE}/order/certificate/document_signing_org_2")
        );
        assert!(client.order_document_signing_organization(1000, &request).is_err());
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[test]
    fn list_orders_passes_paging_through() {
        let body = r#"{"orders":[{"id":1,"status":"issued","organization":[],"price":12.5}],
            "page":{"total":1,"limit":20,"offset":40}}"#;
        let client = client(200, body);
        let list = client.list_orders(20, 40).unwrap();
        assert_eq!(list.orders[0].organization.id, 0);
        assert_eq!(list.page.offset, 40);
        assert_eq!(
            client.transport().last().url,
            format!("{BASE}/order/certificate?limit=20&offset=40")
        );
    }

    #[test]
    fn view_order_missing_is_not_found() {
        let err = client(404, "").view_order(5).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn client_and_code_signing_endpoints() {
        let client = client(201, r#"{"id":9}"#);
        let created = client
            .order_client_premium(&ClientCertificateOrderRequest::default())
            .unwrap();
        assert_eq!(created.id, 9);
        client
            .order_client_email_security_plus(&ClientCertificateOrderRequest::default())
            .unwrap();
        client
            .order_client_digital_signature_plus(&ClientCertificateOrderRequest::default())
            .unwrap();
        client.order_code_signing(&CodeSigningOrderRequest::default()).unwrap();
        client.order_ev_code_signing(&CodeSigningOrderRequest::default()).unwrap();
        client
            .order_ssl_by_determinator(&SslDeterminatorRequest::default())
            .unwrap();

        let products: Vec<_> = client
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.url.rsplit('/').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            products,
            vec![
                "client_premium_sha2",
                "client_email_security_plus",
                "client_digital_signature_plus",
                "code_signing",
                "code_signing_ev",
                "ssl",
            ]
        );
    }
}
