use serde_json::{json, Value};

use apidoc_core::content_type::APPLICATION_JSON;
use apidoc_core::{
    ExternalDocs, HttpMethod, MediaType, Operation, PathDescriptor, Response, Schema,
    DISCOVERY_DOCUMENT,
};
use apidoc_ports::{BuildOutcome, PathBuilder};

/// `GET /.well-known/openid-configuration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryBuilder;

impl PathBuilder for DiscoveryBuilder {
    fn build(&self) -> BuildOutcome {
        let ok = Response::new("OK").content(
            APPLICATION_JSON,
            MediaType::new(Schema::reference(DISCOVERY_DOCUMENT)).example(discovery_example()),
        );

        let get = Operation::new("Retrieve metadata about this authorization server")
            .external_docs(ExternalDocs::new(
                "OpenID Connect Discovery",
                "https://openid.net/specs/openid-connect-discovery-1_0.html",
            ))
            .response("200", ok);

        PathDescriptor::new(
            "The discovery endpoint returns metadata about the authorization server: \
             issuer name, key material location, supported scopes, endpoint URLs etc.",
        )
        .operation(HttpMethod::Get, get)
        .into()
    }
}

/// Sample discovery response shown next to the schema.
pub fn discovery_example() -> Value {
    json!({
        "issuer": "https://idp.example.com",
        "jwks_uri": "https://idp.example.com/.well-known/openid-configuration/jwks",
        "authorization_endpoint": "https://idp.example.com/connect/authorize",
        "token_endpoint": "https://idp.example.com/connect/token",
        "userinfo_endpoint": "https://idp.example.com/connect/userinfo",
        "end_session_endpoint": "https://idp.example.com/connect/endsession",
        "check_session_iframe": "https://idp.example.com/connect/checksession",
        "revocation_endpoint": "https://idp.example.com/connect/revocation",
        "introspection_endpoint": "https://idp.example.com/connect/introspect",
        "device_authorization_endpoint": "https://idp.example.com/connect/deviceauthorization",
        "frontchannel_logout_supported": true,
        "frontchannel_logout_session_supported": true,
        "backchannel_logout_supported": true,
        "backchannel_logout_session_supported": true,
        "scopes_supported": ["openid", "profile", "email", "api", "offline_access"],
        "claims_supported": [
            "sub", "name", "family_name", "given_name", "middle_name", "nickname",
            "preferred_username", "profile", "picture", "website", "gender", "birthdate",
            "zoneinfo", "locale", "updated_at", "email", "email_verified"
        ],
        "grant_types_supported": [
            "authorization_code", "client_credentials", "refresh_token", "implicit",
            "password", "urn:ietf:params:oauth:grant-type:device_code"
        ],
        "response_types_supported": [
            "code", "token", "id_token", "id_token token", "code id_token",
            "code token", "code id_token token"
        ],
        "response_modes_supported": ["form_post", "query", "fragment"],
        "token_endpoint_auth_methods_supported": ["client_secret_basic", "client_secret_post"],
        "id_token_signing_alg_values_supported": ["RS256"],
        "subject_types_supported": ["public"],
        "code_challenge_methods_supported": ["plain", "S256"],
        "request_parameter_supported": true
    })
}
