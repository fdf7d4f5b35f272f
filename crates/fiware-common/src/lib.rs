//! Shared pieces of the FIWARE clients.
//!
//! - **Tenancy**: validation and attachment of the `fiware-service` /
//!   `fiware-servicepath` headers
//! - **Errors**: transport, protocol and decoding errors, including the
//!   structured error body returned by the services
//! - **HTTP helpers**: client construction, status checking, JSON decoding
//! - **Configuration**: base URLs and timeouts, optionally from the environment

pub mod config;
pub mod error;
pub mod http;
pub mod tenancy;

pub use config::{defaults, env_or, env_vars, ClientConfig};
pub use error::{Error, RemoteError, Result};
pub use http::{build_http_client, ensure_success, location_id, read_json};
pub use tenancy::{
    add_service_header, is_valid_service, is_valid_service_path, Tenant, SERVICE_HEADER,
    SERVICE_PATH_HEADER,
};
