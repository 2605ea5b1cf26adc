pub mod document;
pub mod error;
pub mod policy;
pub mod schema;
mod validate;

pub use document::*;
pub use error::*;
pub use policy::*;
pub use schema::*;
