//! Integration ports for the document server.
//!
//! Implement these traits in your own crate to replace a single endpoint's
//! description, or the whole generator, without forking.

pub mod builder;
pub mod generator;

pub use builder::*;
pub use generator::*;
