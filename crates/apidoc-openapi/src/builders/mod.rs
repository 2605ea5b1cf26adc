//! Default path builders, one per protocol endpoint.

mod authorize;
mod check_session;
mod common;
mod device_authorization;
mod discovery;
mod end_session;
mod introspection;
mod revocation;
mod token;
mod userinfo;

pub use authorize::{authorize_parameters, AuthorizeBuilder, RESPONSE_TYPES};
pub use check_session::CheckSessionBuilder;
pub use device_authorization::DeviceAuthorizationBuilder;
pub use discovery::{discovery_example, DiscoveryBuilder};
pub use end_session::EndSessionBuilder;
pub use introspection::IntrospectionBuilder;
pub use revocation::RevocationBuilder;
pub use token::{TokenBuilder, GRANT_TYPES};
pub use userinfo::UserInfoBuilder;
