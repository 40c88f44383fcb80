//! Argument allow-lists.
//!
//! Operations that splice a caller string into a path or body check it here
//! first, so an unsupported value fails with `InvalidArgument` before any
//! request is composed. Matching is exact and case-sensitive.

use crate::error::ApiError;

/// DCV methods accepted when changing the method on a DV order.
pub const DV_DCV_METHODS: &[&str] = &["email", "dns-txt-token", "http-token"];

/// DCV methods accepted when changing the method on a domain.
pub const DOMAIN_DCV_METHODS: &[&str] = &["email", "dns-txt-token", "dns-cname-token", "http-token"];

/// Filters for listing requests. The empty string lists everything.
pub const REQUEST_FILTERS: &[&str] = &["", "pending", "approved", "rejected"];

/// Statuses a request may be moved to.
pub const REQUEST_STATUSES: &[&str] = &["submitted", "pending", "approved", "rejected"];

pub const API_KEY_STATUSES: &[&str] = &["active", "revoked"];

/// DV brands and the product each orders.
pub const DV_BRANDS: &[(&str, &str)] = &[
    ("geotrust", "ssl_dv_geotrust"),
    ("rapidssl", "ssl_dv_rapidssl"),
];

/// Document signing signature allowances and the product each orders.
pub const DOCUMENT_SIGNING_AMOUNTS: &[(u32, &str)] = &[
    (2000, "document_signing_org_1"),
    (5000, "document_signing_org_2"),
];

/// Widest window `order_status_changes` accepts: one week.
pub const MAX_STATUS_CHANGE_MINUTES: u32 = 10_080;

pub(crate) fn ensure(kind: &'static str, allowed: &[&str], value: &str) -> Result<(), ApiError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::invalid(kind, value))
    }
}

/// Product name for a DV brand.
pub(crate) fn dv_product(brand: &str) -> Result<&'static str, ApiError> {
    lookup(DV_BRANDS, &brand).ok_or_else(|| ApiError::invalid("DV brand", brand))
}

/// Product name for a document signing signature allowance.
pub(crate) fn document_signing_product(amount: u32) -> Result<&'static str, ApiError> {
    lookup(DOCUMENT_SIGNING_AMOUNTS, &amount)
        .ok_or_else(|| ApiError::invalid("document signing amount", amount.to_string()))
}

fn lookup<K: PartialEq>(table: &[(K, &'static str)], key: &K) -> Option<&'static str> {
    table.iter().find(|(k, _)| k == key).map(|&(_, product)| product)
}

pub(crate) fn status_window(minutes: u32) -> Result<u32, ApiError> {
    if (1..=MAX_STATUS_CHANGE_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ApiError::invalid("status change window", minutes.to_string()))
    }
}
