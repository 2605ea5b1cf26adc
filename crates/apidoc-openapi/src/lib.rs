//! Assembly of the OIDC API-description document.
//!
//! - [`EndpointRegistry`]: fixed-order endpoint table, one [`PathBuilder`] per endpoint
//! - [`DocumentAssembler`]: turns the registry and schema catalog into a [`Document`]
//! - [`render`]: Swagger 2.0 JSON for the wire
//!
//! [`PathBuilder`]: apidoc_ports::PathBuilder
//! [`Document`]: apidoc_core::Document

pub mod assembler;
pub mod builders;
pub mod form;
pub mod registry;
pub mod render;
pub mod swagger2;

pub use assembler::*;
pub use form::*;
pub use registry::*;
pub use render::*;
