use super::SchemaVersion;
use crate::models::{ObjectShape, Schema};

#[derive(Clone, Copy)]
enum FieldShape {
    Url,
    Flag,
    StringList,
    MtlsAliases,
}

struct DiscoveryField {
    name: &'static str,
    shape: FieldShape,
    since: SchemaVersion,
}

const fn field(name: &'static str, shape: FieldShape, since: SchemaVersion) -> DiscoveryField {
    DiscoveryField { name, shape, since }
}

use FieldShape::{Flag, MtlsAliases, StringList, Url};
use SchemaVersion::{Extended, Minimal};

// Declaration order is the property order of the rendered schema.
const FIELDS: &[DiscoveryField] = &[
    field("issuer", Url, Minimal),
    field("jwks_uri", Url, Minimal),
    field("authorization_endpoint", Url, Minimal),
    field("token_endpoint", Url, Minimal),
    field("userinfo_endpoint", Url, Minimal),
    field("end_session_endpoint", Url, Minimal),
    field("check_session_iframe", Url, Minimal),
    field("revocation_endpoint", Url, Minimal),
    field("introspection_endpoint", Url, Minimal),
    field("device_authorization_endpoint", Url, Minimal),
    field("mtls_endpoint_aliases", MtlsAliases, Extended),
    field("frontchannel_logout_supported", Flag, Minimal),
    field("frontchannel_logout_session_supported", Flag, Minimal),
    field("backchannel_logout_supported", Flag, Minimal),
    field("backchannel_logout_session_supported", Flag, Minimal),
    field("request_parameter_supported", Flag, Minimal),
    field("request_uri_parameter_supported", Flag, Extended),
    field("tls_client_certificate_bound_access_tokens", Flag, Extended),
    field("scopes_supported", StringList, Minimal),
    field("claims_supported", StringList, Minimal),
    field("grant_types_supported", StringList, Minimal),
    field("response_types_supported", StringList, Minimal),
    field("response_modes_supported", StringList, Minimal),
    field("token_endpoint_auth_methods_supported", StringList, Minimal),
    field("id_token_signing_alg_values_supported", StringList, Minimal),
    field("subject_types_supported", StringList, Minimal),
    field("code_challenge_methods_supported", StringList, Minimal),
];

/// Required discovery fields from the extended version on.
pub const DISCOVERY_REQUIRED: &[&str] = &[
    "issuer",
    "subject_types_supported",
    "code_challenge_methods_supported",
];

const MTLS_ALIASED_ENDPOINTS: &[&str] = &[
    "token_endpoint",
    "revocation_endpoint",
    "introspection_endpoint",
    "device_authorization_endpoint",
    "userinfo_endpoint",
];

fn field_schema(shape: FieldShape) -> Schema {
    match shape {
        Url => Schema::string(),
        Flag => Schema::boolean(),
        StringList => Schema::array(Schema::string()).with_unique_items(false),
        MtlsAliases => Schema::object(
            MTLS_ALIASED_ENDPOINTS
                .iter()
                .fold(ObjectShape::new(), |shape, name| {
                    shape.property(*name, Schema::string())
                }),
        )
        .with_description("Alternative endpoint URLs for clients using mutual-TLS"),
    }
}

/// The discovery document schema as defined by `version`.
pub fn discovery_document_schema(version: SchemaVersion) -> Schema {
    let mut shape = FIELDS
        .iter()
        .filter(|f| version.includes(f.since))
        .fold(ObjectShape::new(), |shape, f| {
            shape.property(f.name, field_schema(f.shape))
        });

    if version.includes(Extended) {
        for name in DISCOVERY_REQUIRED {
            shape = shape.require(*name);
        }
        shape = shape.additional_properties(true);
    }

    Schema::object(shape)
}
