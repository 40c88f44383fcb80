//! Wire DTOs for the CertCentral API.
//!
//! # Design
//! Field names follow the service's snake_case JSON keys. Response structs
//! use `#[serde(default)]` so a missing field decodes as its default rather
//! than failing, and each carries the service's `errors` list. Decode
//! bodies with `from_slice_lenient` so an explicit `null` reads the same
//! as a missing field. Request structs mark optional inputs as `Option`
//! and omit them when unset.
//!
//! Shapes that recur across resources (contacts, containers, platforms,
//! paging) live in `common`; everything else sits beside its resource.

mod apikeys;
mod certificates;
mod common;
mod containers;
mod domains;
mod envelope;
mod lenient;
mod orders;
mod organizations;
mod requests;
mod users;

pub use apikeys::*;
pub use certificates::*;
pub use common::*;
pub use containers::*;
pub use domains::*;
pub use envelope::{Envelope, ErrorList, ValidationError};
pub use lenient::from_slice_lenient;
pub use orders::*;
pub use organizations::*;
pub use requests::*;
pub use users::*;
