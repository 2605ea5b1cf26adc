//! Framework-agnostic building blocks for the OIDC API-description document.
//!
//! This crate holds the in-memory document model, the named schema catalog and
//! the request gate. Assembly lives in `apidoc-openapi`; HTTP wiring lives in
//! `apidoc-actix`.

pub mod catalog;
pub mod gate;
pub mod models;

pub use catalog::*;
pub use gate::*;
pub use models::*;
