//! Typed CertCentral operations, one module per resource.
//!
//! Every module adds methods to `CertCentralClient`. An operation names its
//! method, path and payload, then hands off to the dispatcher.

mod apikeys;
mod certificates;
mod containers;
mod domains;
mod orders;
mod organizations;
mod requests;
mod users;

pub use certificates::{PEM_CONTENT_TYPE, PKCS7_CONTENT_TYPE};
