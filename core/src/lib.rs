//! Blocking client for the DigiCert CertCentral v2 API.
//!
//! # Overview
//! `CertCentralClient` exposes one method per CertCentral operation: API
//! keys, certificates, containers, domains, orders, organizations, requests
//! and users. Each method composes a request, sends it through a
//! `Transport`, maps the status code to an `ApiError` sentinel where the
//! service documents one, and decodes the JSON body into a typed struct.
//!
//! # Design
//! - Configuration is an immutable `ClientConfig` shared behind an `Arc`.
//!   All per-call state is local, so one client can be used from many
//!   threads at once.
//! - `Transport` is the only I/O boundary. `UreqTransport` is the HTTPS
//!   implementation; tests substitute an in-memory one.
//! - Response structs decode leniently and carry the service's `errors`
//!   list. `Envelope::into_checked` turns a non-empty list into an error
//!   when the caller wants that.
//! - Arguments with a closed set of values are checked before any request
//!   is sent.
//!
//! ```no_run
//! use certcentral_core::{CertCentralClient, ClientConfig};
//!
//! let client = CertCentralClient::new(ClientConfig::from_env()?);
//! for key in client.list_api_keys()?.api_keys {
//!     println!("{} {}", key.id, key.status);
//! }
//! # Ok::<(), certcentral_core::ApiError>(())
//! ```

pub mod allow_list;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ApiResponse, Call, CertCentralClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Envelope, ErrorList, ValidationError};
