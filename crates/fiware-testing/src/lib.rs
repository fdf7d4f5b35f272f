//! Testing utilities for the FIWARE clients
//!
//! This crate provides:
//! - A mock HTTP server standing in for Orion, an IoT Agent or QuantumLeap
//! - Canned payloads for the service discovery endpoints
//! - Tracing setup for test output

pub mod mock_server;
pub mod payloads;

pub use axum::http::Method;
pub use mock_server::{MockResponse, MockServer, RecordedRequest};
pub use payloads::{entry_points_body, orion_version_body};

/// Install a tracing subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
