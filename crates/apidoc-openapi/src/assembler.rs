use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;

use apidoc_core::{
    Components, Document, DocumentError, Info, SchemaCatalog, SchemaVersion, Server,
    UnsupportedPolicy,
};
use apidoc_ports::{BuildOutcome, DocumentGenerator};

use crate::registry::EndpointRegistry;

pub const DOCUMENT_TITLE: &str = "OIDC Authorization Server";
pub const DOCUMENT_DESCRIPTION: &str =
    "OpenID Connect and OAuth 2.0 protocol endpoints exposed by this authorization server.";
pub const DOCUMENT_VERSION: &str = "v1";

/// Builds the API-description document from the endpoint registry and the schema catalog.
///
/// The assembler holds no per-request state; every call to [`generate`](Self::generate)
/// constructs a fresh document.
#[derive(Clone, Debug)]
pub struct DocumentAssembler {
    registry: Arc<EndpointRegistry>,
    schema_version: SchemaVersion,
    unsupported_policy: UnsupportedPolicy,
}

impl DocumentAssembler {
    pub fn new(registry: Arc<EndpointRegistry>) -> Self {
        Self {
            registry,
            schema_version: SchemaVersion::default(),
            unsupported_policy: UnsupportedPolicy::default(),
        }
    }

    pub fn with_schema_version(mut self, version: SchemaVersion) -> Self {
        self.schema_version = version;
        self
    }

    pub fn with_unsupported_policy(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported_policy = policy;
        self
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn unsupported_policy(&self) -> UnsupportedPolicy {
        self.unsupported_policy
    }

    /// Assemble and validate the document for `issuer_uri`.
    ///
    /// `issuer_uri` becomes the single server entry verbatim.
    pub fn generate(&self, issuer_uri: &str) -> Result<Document, DocumentError> {
        let schemas = SchemaCatalog::for_version(self.schema_version)
            .iter()
            .map(|(name, schema)| (name.to_string(), schema.clone()))
            .collect();

        let mut paths = IndexMap::new();
        for entry in self.registry.enabled_entries() {
            let descriptor = match entry.build() {
                BuildOutcome::Built(descriptor) => descriptor,
                BuildOutcome::Unsupported => match self.unsupported_policy {
                    UnsupportedPolicy::FailDocument => {
                        return Err(DocumentError::unsupported_endpoint(entry.path()));
                    }
                    UnsupportedPolicy::OmitPath => {
                        tracing::warn!(
                            endpoint = %entry.endpoint(),
                            path = entry.path(),
                            "No description builder for endpoint, omitting path"
                        );
                        continue;
                    }
                },
            };

            if paths.insert(entry.path().to_string(), descriptor).is_some() {
                return Err(DocumentError::invalid(
                    &format!("paths.{}", entry.path()),
                    format!("path is configured for more than one endpoint ({})", entry.endpoint()),
                ));
            }
        }

        let document = Document {
            info: Info {
                title: DOCUMENT_TITLE.to_string(),
                description: DOCUMENT_DESCRIPTION.to_string(),
                version: DOCUMENT_VERSION.to_string(),
            },
            servers: vec![Server {
                url: issuer_uri.to_string(),
            }],
            components: Components { schemas },
            paths,
        };

        document.validate()?;

        tracing::debug!(
            issuer = issuer_uri,
            paths = document.paths.len(),
            schema_version = ?self.schema_version,
            "Assembled API description document"
        );
        Ok(document)
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(Arc::new(EndpointRegistry::with_defaults()))
    }
}

#[async_trait]
impl DocumentGenerator for DocumentAssembler {
    async fn create_document(&self, issuer_uri: &str) -> Result<Document, DocumentError> {
        self.generate(issuer_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ProtocolEndpoint;
    use apidoc_core::content_type::APPLICATION_JSON;
    use apidoc_core::{
        HttpMethod, MediaType, Operation, PathDescriptor, Response, Schema, DISCOVERY_DOCUMENT,
    };
    use apidoc_ports::UnsupportedBuilder;

    const ISSUER: &str = "https://idp.example.com";

    fn assembler(registry: EndpointRegistry) -> DocumentAssembler {
        DocumentAssembler::new(Arc::new(registry))
    }

    #[test]
    fn paths_follow_registry_order() {
        let document = DocumentAssembler::default().generate(ISSUER).expect("document");

        let keys: Vec<_> = document.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, EndpointRegistry::with_defaults().enabled_paths());
        assert_eq!(document.info.title, DOCUMENT_TITLE);
        assert_eq!(document.info.version, "v1");
    }

    #[test]
    fn only_enabled_endpoints_are_described() {
        let registry = EndpointRegistry::with_defaults()
            .with_enabled(ProtocolEndpoint::Authorize, false)
            .with_enabled(ProtocolEndpoint::CheckSession, false)
            .with_path(ProtocolEndpoint::Token, "/oauth/token");
        let document = assembler(registry.clone()).generate(ISSUER).expect("document");

        let keys: Vec<_> = document.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, registry.enabled_paths());
        assert!(keys.contains(&"/oauth/token"));
        assert!(!keys.contains(&"/connect/authorize"));
    }

    #[test]
    fn issuer_is_used_verbatim() {
        for issuer in [ISSUER, "HTTP://Example.COM:8443/tenant/", "not a url"] {
            let document = DocumentAssembler::default().generate(issuer).expect("document");
            assert_eq!(document.servers.len(), 1);
            assert_eq!(document.servers[0].url, issuer);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let assembler = DocumentAssembler::default();
        assert_eq!(
            assembler.generate(ISSUER).expect("first"),
            assembler.generate(ISSUER).expect("second")
        );
    }

    #[test]
    fn catalog_follows_schema_version() {
        let minimal = DocumentAssembler::default()
            .with_schema_version(SchemaVersion::Minimal)
            .generate(ISSUER)
            .expect("document");
        let extended = DocumentAssembler::default().generate(ISSUER).expect("document");

        let field_count = |document: &Document| {
            document.components.schemas[DISCOVERY_DOCUMENT]
                .as_object()
                .map(|object| object.properties.len())
        };
        assert_eq!(field_count(&minimal), Some(24));
        assert_eq!(field_count(&extended), Some(27));
    }

    #[test]
    fn unsupported_endpoint_fails_the_document_by_default() {
        let registry = EndpointRegistry::with_defaults()
            .with_builder(ProtocolEndpoint::Introspection, Arc::new(UnsupportedBuilder));

        let err = assembler(registry).generate(ISSUER).unwrap_err();
        assert_eq!(err, DocumentError::unsupported_endpoint("/connect/introspect"));
    }

    #[test]
    fn unsupported_endpoint_is_omitted_when_configured() {
        let registry = EndpointRegistry::with_defaults()
            .with_builder(ProtocolEndpoint::Introspection, Arc::new(UnsupportedBuilder));

        let document = assembler(registry)
            .with_unsupported_policy(UnsupportedPolicy::OmitPath)
            .generate(ISSUER)
            .expect("document");
        assert_eq!(document.paths.len(), 8);
        assert!(!document.paths.contains_key("/connect/introspect"));
    }

    #[test]
    fn disabled_unsupported_endpoint_is_never_built() {
        let registry = EndpointRegistry::with_defaults()
            .with_builder(ProtocolEndpoint::Revocation, Arc::new(UnsupportedBuilder))
            .with_enabled(ProtocolEndpoint::Revocation, false);

        assert!(assembler(registry).generate(ISSUER).is_ok());
    }

    #[test]
    fn substituted_builder_changes_only_its_path() {
        let custom = || -> BuildOutcome {
            PathDescriptor::new("custom token endpoint")
                .operation(
                    HttpMethod::Post,
                    Operation::new("issue").response("200", Response::new("OK")),
                )
                .into()
        };
        let registry =
            EndpointRegistry::with_defaults().with_builder(ProtocolEndpoint::Token, Arc::new(custom));

        let baseline = DocumentAssembler::default().generate(ISSUER).expect("baseline");
        let document = assembler(registry).generate(ISSUER).expect("document");

        for (path, descriptor) in &document.paths {
            if path == "/connect/token" {
                assert_eq!(descriptor.description, "custom token endpoint");
                assert_ne!(descriptor, &baseline.paths[path]);
            } else {
                assert_eq!(descriptor, &baseline.paths[path]);
            }
        }
    }

    #[test]
    fn shared_path_is_rejected() {
        let registry = EndpointRegistry::with_defaults()
            .with_path(ProtocolEndpoint::Revocation, "/connect/token");

        let err = assembler(registry).generate(ISSUER).unwrap_err();
        assert_eq!(err.code(), "invalid_document");
    }

    #[test]
    fn dangling_reference_is_a_defect() {
        let broken = || -> BuildOutcome {
            PathDescriptor::new("broken")
                .operation(
                    HttpMethod::Get,
                    Operation::new("broken").response(
                        "200",
                        Response::new("OK").content(
                            APPLICATION_JSON,
                            MediaType::new(Schema::reference("Missing")),
                        ),
                    ),
                )
                .into()
        };
        let registry = EndpointRegistry::with_defaults()
            .with_builder(ProtocolEndpoint::CheckSession, Arc::new(broken));

        let err = assembler(registry).generate(ISSUER).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnresolvedSchemaReference { ref name, .. } if name == "Missing"
        ));
    }

    #[tokio::test]
    async fn generator_port_delegates_to_generate() {
        let assembler = DocumentAssembler::default();
        let via_port = assembler.create_document(ISSUER).await.expect("document");
        assert_eq!(via_port, assembler.generate(ISSUER).expect("document"));
    }
}
