//! Library exports.
//!
//! One import path for the workspace crates, shared by the binaries and the
//! integration tests.

pub use apidoc_actix as http;
pub use apidoc_config as config;
pub use apidoc_core as domain;
pub use apidoc_observability as observability;
pub use apidoc_openapi as openapi;
pub use apidoc_ports as ports;
pub use apidoc_server as server;

pub use apidoc_server::{run, AppState};
