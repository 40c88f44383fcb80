//! In-memory imitation of part of the CertCentral v2 API.
//!
//! Covers API keys, SSL orders (place, view, list, cancel), certificate
//! download and username availability, mounted under `/services/v2` and
//! guarded by the `X-DC-DEVKEY` header. State lives in one `RwLock`ed store
//! for the life of the process.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const AUTH_HEADER: &str = "x-dc-devkey";
pub const PEM_CONTENT_TYPE: &str = "application/x-pem-file";

/// Timestamp stamped on every record the mock creates.
const CREATED_AT: &str = "2024-01-15T09:30:00+00:00";

/// Order seeded at startup. It has no organization, which the listing
/// renders as `[]`.
pub const SEEDED_ORDER_ID: u64 = 1001;
pub const SEEDED_CERTIFICATE_ID: u64 = 5001;
pub const SEEDED_USER_ID: u64 = 10;
pub const SEEDED_USERNAME: &str = "admin";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub user_id: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub certificate_id: u64,
    pub status: String,
    pub common_name: String,
    pub dns_names: Vec<String>,
    pub product: String,
    pub organization_id: Option<u64>,
    pub validity_years: u32,
    pub note: Option<String>,
}

impl Order {
    fn summary(&self) -> Value {
        let organization = match self.organization_id {
            Some(id) => json!({"id": id, "name": format!("Organization {id}")}),
            None => json!([]),
        };
        json!({
            "id": self.id,
            "certificate": {
                "id": self.certificate_id,
                "common_name": self.common_name,
                "dns_names": self.dns_names,
                "signature_hash": "sha256",
            },
            "status": self.status,
            "date_created": CREATED_AT,
            "organization": organization,
            "validity_years": self.validity_years,
            "container": {"id": 1, "name": "Root"},
            "product": {"name_id": self.product, "name": self.product, "type": "ssl_certificate"},
            "price": 0,
        })
    }

    fn details(&self) -> Value {
        json!({
            "id": self.id,
            "certificate": {
                "id": self.certificate_id,
                "common_name": self.common_name,
                "dns_names": self.dns_names,
                "signature_hash": "sha256",
            },
            "status": self.status,
            "date_created": CREATED_AT,
            "organization": {"id": self.organization_id.unwrap_or_default()},
            "validity_years": self.validity_years,
            "container": {"id": 1, "name": "Root"},
            "product": {"name_id": self.product, "name": self.product, "type": "ssl_certificate"},
            "requests": [{"id": self.id + 1, "status": "pending"}],
        })
    }
}

#[derive(Debug)]
pub struct Store {
    next_id: u64,
    api_keys: BTreeMap<u64, ApiKey>,
    orders: BTreeMap<u64, Order>,
    usernames: HashSet<String>,
}

impl Default for Store {
    fn default() -> Self {
        let mut orders = BTreeMap::new();
        orders.insert(
            SEEDED_ORDER_ID,
            Order {
                id: SEEDED_ORDER_ID,
                certificate_id: SEEDED_CERTIFICATE_ID,
                status: "issued".to_string(),
                common_name: "seed.example.com".to_string(),
                dns_names: vec!["seed.example.com".to_string()],
                product: "ssl_plus".to_string(),
                organization_id: None,
                validity_years: 1,
                note: None,
            },
        );
        Self {
            next_id: 2000,
            api_keys: BTreeMap::new(),
            orders,
            usernames: HashSet::from([SEEDED_USERNAME.to_string()]),
        }
    }
}

impl Store {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    db: Db,
    api_key: Arc<str>,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::default())),
        api_key: Arc::from(api_key),
    };
    let api = Router::new()
        .route("/key", get(list_api_keys))
        .route("/key/user/{user_id}", post(create_api_key))
        .route("/key/{key_id}", get(view_api_key))
        .route("/key/{key_id}/status", put(update_api_key_status))
        .route("/order/certificate", get(list_orders))
        .route("/order/certificate/ssl_plus", post(order_ssl_plus))
        .route("/order/certificate/{order_id}", get(view_order))
        .route("/order/certificate/{order_id}/status", put(update_order_status))
        .route("/certificate/{certificate_id}/download/platform", get(download_platform))
        .route("/user/availability/{username}", get(username_availability))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state);
    Router::new().nest("/services/v2", api)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock CertCentral listening");
    }
    axum::serve(listener, app(api_key)).await
}

async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok());
    if presented == Some(&*state.api_key) {
        Ok(next.run(request).await)
    } else {
        warn!(path = %request.uri().path(), "rejected request without a valid API key");
        Err(StatusCode::UNAUTHORIZED)
    }
}

fn rejection(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({"errors": [{"code": code, "message": message}]});
    (status, Json(body)).into_response()
}

// --- API keys ---

#[derive(Deserialize)]
struct NewKey {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct StatusChange {
    #[serde(default)]
    status: String,
    #[serde(default)]
    note: Option<String>,
}

fn key_json(key: &ApiKey) -> Value {
    json!({
        "id": key.id,
        "name": key.name,
        "status": key.status,
        "create_date": CREATED_AT,
        "user": {"id": key.user_id, "first_name": "Mock", "last_name": "User"},
    })
}

async fn create_api_key(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(input): Json<NewKey>,
) -> Response {
    if input.name.trim().is_empty() {
        return rejection(StatusCode::BAD_REQUEST, "invalid_name", "A name is required.");
    }
    let mut db = state.db.write().await;
    let id = db.allocate_id();
    db.api_keys.insert(
        id,
        ApiKey {
            id,
            name: input.name,
            status: "active".to_string(),
            user_id,
        },
    );
    debug!(id, user_id, "created API key");
    let secret = Uuid::new_v4().simple().to_string();
    (StatusCode::CREATED, Json(json!({"id": id, "api_key": secret}))).into_response()
}

async fn list_api_keys(State(state): State<AppState>) -> Json<Value> {
    let db = state.db.read().await;
    let keys: Vec<Value> = db.api_keys.values().map(key_json).collect();
    Json(json!({"api_keys": keys}))
}

async fn view_api_key(
    State(state): State<AppState>,
    Path(key_id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let db = state.db.read().await;
    db.api_keys.get(&key_id).map(|key| Json(key_json(key))).ok_or(StatusCode::NOT_FOUND)
}

async fn update_api_key_status(
    State(state): State<AppState>,
    Path(key_id): Path<u64>,
    Json(input): Json<StatusChange>,
) -> Response {
    if !matches!(input.status.as_str(), "active" | "revoked") {
        return rejection(StatusCode::BAD_REQUEST, "invalid_status", "Unknown key status.");
    }
    let mut db = state.db.write().await;
    match db.api_keys.get_mut(&key_id) {
        Some(key) => {
            key.status = input.status;
            StatusCode::NO_CONTENT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// --- orders ---

#[derive(Deserialize)]
struct Paging {
    limit: Option<usize>,
    offset: Option<usize>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct OrderCertificate {
    common_name: String,
    dns_names: Vec<String>,
    csr: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct OrganizationId {
    id: u64,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct NewOrder {
    certificate: OrderCertificate,
    organization: OrganizationId,
    validity_years: u32,
}

async fn list_orders(State(state): State<AppState>, Query(paging): Query<Paging>) -> Json<Value> {
    let db = state.db.read().await;
    let offset = paging.offset.unwrap_or(0);
    let limit = paging.limit.filter(|l| *l > 0).unwrap_or(db.orders.len());
    let orders: Vec<Value> = db
        .orders
        .values()
        .skip(offset)
        .take(limit)
        .map(Order::summary)
        .collect();
    Json(json!({
        "orders": orders,
        "page": {"total": db.orders.len(), "limit": limit, "offset": offset},
    }))
}

async fn view_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let db = state.db.read().await;
    db.orders.get(&order_id).map(|order| Json(order.details())).ok_or(StatusCode::NOT_FOUND)
}

async fn order_ssl_plus(State(state): State<AppState>, Json(input): Json<NewOrder>) -> Response {
    if input.certificate.csr.trim().is_empty() {
        return rejection(StatusCode::BAD_REQUEST, "missing_csr", "A CSR is required.");
    }
    if input.certificate.common_name.trim().is_empty() {
        return rejection(
            StatusCode::BAD_REQUEST,
            "missing_common_name",
            "A common name is required.",
        );
    }
    let mut db = state.db.write().await;
    let id = db.allocate_id();
    let certificate_id = db.allocate_id();
    let order = Order {
        id,
        certificate_id,
        status: "pending".to_string(),
        common_name: input.certificate.common_name,
        dns_names: input.certificate.dns_names,
        product: "ssl_plus".to_string(),
        organization_id: Some(input.organization.id).filter(|id| *id != 0),
        validity_years: input.validity_years.max(1),
        note: None,
    };
    db.orders.insert(id, order);
    debug!(id, "placed ssl_plus order");
    let body = json!({"id": id, "requests": [{"id": id + 1, "status": "pending"}]});
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
    Json(input): Json<StatusChange>,
) -> Response {
    if input.status != "CANCELED" {
        return rejection(
            StatusCode::BAD_REQUEST,
            "invalid_status",
            "Orders can only be moved to CANCELED.",
        );
    }
    let mut db = state.db.write().await;
    match db.orders.get_mut(&order_id) {
        Some(order) => {
            order.status = "canceled".to_string();
            order.note = input.note;
            StatusCode::NO_CONTENT.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

// --- certificates ---

async fn download_platform(
    State(state): State<AppState>,
    Path(certificate_id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type != Some(PEM_CONTENT_TYPE) {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    let db = state.db.read().await;
    match db.orders.values().find(|o| o.certificate_id == certificate_id) {
        Some(order) => {
            let pem = pem_for(order);
            ([(header::CONTENT_TYPE, PEM_CONTENT_TYPE)], pem).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Placeholder PEM block carrying the certificate id and common name.
pub fn pem_for(order: &Order) -> String {
    format!(
        "-----BEGIN CERTIFICATE-----\nMOCK{}{}\n-----END CERTIFICATE-----\n",
        order.certificate_id,
        order.common_name.replace('.', "")
    )
}

// --- users ---

async fn username_availability(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<Value> {
    let db = state.db.read().await;
    Json(json!({"available": !db.usernames.contains(&username)}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_without_organization_lists_it_as_empty_array() {
        let store = Store::default();
        let summary = store.orders[&SEEDED_ORDER_ID].summary();
        assert_eq!(summary["organization"], json!([]));
    }

    #[test]
    fn order_with_organization_lists_an_object() {
        let order = Order {
            organization_id: Some(7),
            ..Store::default().orders[&SEEDED_ORDER_ID].clone()
        };
        assert_eq!(order.summary()["organization"]["id"], 7);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = Store::default();
        let a = store.allocate_id();
        let b = store.allocate_id();
        assert!(b > a);
        assert!(!store.orders.contains_key(&a));
    }

    #[test]
    fn pem_embeds_certificate_id() {
        let store = Store::default();
        let pem = pem_for(&store.orders[&SEEDED_ORDER_ID]);
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
        assert!(pem.contains("5001"));
    }

    #[test]
    fn status_change_note_is_optional() {
        let change: StatusChange = serde_json::from_str(r#"{"status":"revoked"}"#).unwrap();
        assert_eq!(change.status, "revoked");
        assert!(change.note.is_none());
    }
}
