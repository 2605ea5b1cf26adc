use std::fmt;
use std::sync::Arc;

use apidoc_ports::{BuildOutcome, DynPathBuilder, PathBuilder};

use crate::builders::{
    AuthorizeBuilder, CheckSessionBuilder, DeviceAuthorizationBuilder, DiscoveryBuilder,
    EndSessionBuilder, IntrospectionBuilder, RevocationBuilder, TokenBuilder, UserInfoBuilder,
};

/// Protocol endpoints described by the document, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolEndpoint {
    Discovery,
    Authorize,
    Token,
    UserInfo,
    DeviceAuthorization,
    Introspection,
    Revocation,
    EndSession,
    CheckSession,
}

impl ProtocolEndpoint {
    pub const ALL: [ProtocolEndpoint; 9] = [
        ProtocolEndpoint::Discovery,
        ProtocolEndpoint::Authorize,
        ProtocolEndpoint::Token,
        ProtocolEndpoint::UserInfo,
        ProtocolEndpoint::DeviceAuthorization,
        ProtocolEndpoint::Introspection,
        ProtocolEndpoint::Revocation,
        ProtocolEndpoint::EndSession,
        ProtocolEndpoint::CheckSession,
    ];

    pub fn default_path(&self) -> &'static str {
        match self {
            ProtocolEndpoint::Discovery => "/.well-known/openid-configuration",
            ProtocolEndpoint::Authorize => "/connect/authorize",
            ProtocolEndpoint::Token => "/connect/token",
            ProtocolEndpoint::UserInfo => "/connect/userinfo",
            ProtocolEndpoint::DeviceAuthorization => "/connect/deviceauthorization",
            ProtocolEndpoint::Introspection => "/connect/introspect",
            ProtocolEndpoint::Revocation => "/connect/revocation",
            ProtocolEndpoint::EndSession => "/connect/endsession",
            ProtocolEndpoint::CheckSession => "/connect/checksession",
        }
    }

    /// snake_case name, matching the configuration keys.
    pub fn name(&self) -> &'static str {
        match self {
            ProtocolEndpoint::Discovery => "discovery",
            ProtocolEndpoint::Authorize => "authorize",
            ProtocolEndpoint::Token => "token",
            ProtocolEndpoint::UserInfo => "userinfo",
            ProtocolEndpoint::DeviceAuthorization => "device_authorization",
            ProtocolEndpoint::Introspection => "introspection",
            ProtocolEndpoint::Revocation => "revocation",
            ProtocolEndpoint::EndSession => "end_session",
            ProtocolEndpoint::CheckSession => "check_session",
        }
    }

    fn default_builder(&self) -> DynPathBuilder {
        match self {
            ProtocolEndpoint::Discovery => Arc::new(DiscoveryBuilder),
            ProtocolEndpoint::Authorize => Arc::new(AuthorizeBuilder),
            ProtocolEndpoint::Token => Arc::new(TokenBuilder),
            ProtocolEndpoint::UserInfo => Arc::new(UserInfoBuilder),
            ProtocolEndpoint::DeviceAuthorization => Arc::new(DeviceAuthorizationBuilder),
            ProtocolEndpoint::Introspection => Arc::new(IntrospectionBuilder),
            ProtocolEndpoint::Revocation => Arc::new(RevocationBuilder),
            ProtocolEndpoint::EndSession => Arc::new(EndSessionBuilder),
            ProtocolEndpoint::CheckSession => Arc::new(CheckSessionBuilder),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ProtocolEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct RegistryEntry {
    endpoint: ProtocolEndpoint,
    path: String,
    enabled: bool,
    builder: DynPathBuilder,
}

impl RegistryEntry {
    pub fn endpoint(&self) -> ProtocolEndpoint {
        self.endpoint
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn build(&self) -> BuildOutcome {
        self.builder.build()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("endpoint", &self.endpoint)
            .field("path", &self.path)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// One entry per [`ProtocolEndpoint`], always iterated in [`ProtocolEndpoint::ALL`] order.
///
/// Overrides replace a single entry's path, flag or builder and leave the rest alone.
#[derive(Clone, Debug)]
pub struct EndpointRegistry {
    entries: Vec<RegistryEntry>,
}

impl EndpointRegistry {
    /// All endpoints enabled, default paths, default builders.
    pub fn with_defaults() -> Self {
        let entries = ProtocolEndpoint::ALL
            .iter()
            .map(|endpoint| RegistryEntry {
                endpoint: *endpoint,
                path: endpoint.default_path().to_string(),
                enabled: true,
                builder: endpoint.default_builder(),
            })
            .collect();
        Self { entries }
    }

    /// Substitute the builder for one endpoint.
    pub fn with_builder(mut self, endpoint: ProtocolEndpoint, builder: DynPathBuilder) -> Self {
        self.entries[endpoint.index()].builder = builder;
        self
    }

    pub fn with_path(mut self, endpoint: ProtocolEndpoint, path: impl Into<String>) -> Self {
        self.entries[endpoint.index()].path = path.into();
        self
    }

    pub fn with_enabled(mut self, endpoint: ProtocolEndpoint, enabled: bool) -> Self {
        self.set_enabled(endpoint, enabled);
        self
    }

    pub fn set_enabled(&mut self, endpoint: ProtocolEndpoint, enabled: bool) {
        self.entries[endpoint.index()].enabled = enabled;
    }

    pub fn entry(&self, endpoint: ProtocolEndpoint) -> &RegistryEntry {
        &self.entries[endpoint.index()]
    }

    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn enabled_entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    pub fn enabled_paths(&self) -> Vec<&str> {
        self.enabled_entries().map(RegistryEntry::path).collect()
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_ports::UnsupportedBuilder;

    #[test]
    fn defaults_follow_protocol_order() {
        let registry = EndpointRegistry::with_defaults();
        assert_eq!(
            registry.enabled_paths(),
            [
                "/.well-known/openid-configuration",
                "/connect/authorize",
                "/connect/token",
                "/connect/userinfo",
                "/connect/deviceauthorization",
                "/connect/introspect",
                "/connect/revocation",
                "/connect/endsession",
                "/connect/checksession",
            ]
        );
    }

    #[test]
    fn override_order_does_not_change_iteration_order() {
        let registry = EndpointRegistry::with_defaults()
            .with_path(ProtocolEndpoint::CheckSession, "/session/check")
            .with_path(ProtocolEndpoint::Discovery, "/meta");

        let endpoints: Vec<_> = registry.entries().map(RegistryEntry::endpoint).collect();
        assert_eq!(endpoints, ProtocolEndpoint::ALL);
        assert_eq!(registry.entry(ProtocolEndpoint::Discovery).path(), "/meta");
    }

    #[test]
    fn disabled_entries_are_skipped() {
        let registry = EndpointRegistry::with_defaults()
            .with_enabled(ProtocolEndpoint::Token, false)
            .with_enabled(ProtocolEndpoint::UserInfo, false);

        let paths = registry.enabled_paths();
        assert_eq!(paths.len(), 7);
        assert!(!paths.contains(&"/connect/token"));
        assert!(!paths.contains(&"/connect/userinfo"));
    }

    #[test]
    fn builder_substitution_is_local_to_one_endpoint() {
        let registry = EndpointRegistry::with_defaults()
            .with_builder(ProtocolEndpoint::Revocation, Arc::new(UnsupportedBuilder));

        assert_eq!(
            registry.entry(ProtocolEndpoint::Revocation).build(),
            BuildOutcome::Unsupported
        );
        assert!(matches!(
            registry.entry(ProtocolEndpoint::Introspection).build(),
            BuildOutcome::Built(_)
        ));
    }
}
