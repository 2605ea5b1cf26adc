use apidoc_core::{
    ExternalDocs, HttpMethod, ObjectShape, Operation, Parameter, PathDescriptor, Schema,
};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{json, oauth_error, one_of, text, OIDC_CORE};
use crate::form::form_request_body;

pub const GRANT_TYPES: [&str; 6] = [
    "authorization_code",
    "client_credentials",
    "refresh_token",
    "password",
    "urn:ietf:params:oauth:grant-type:device_code",
    "urn:ietf:params:oauth:grant-type:jwt-bearer",
];

fn token_parameters() -> Vec<Parameter> {
    vec![
        one_of("grant_type", "Grant being exchanged", &GRANT_TYPES).required(true),
        text("client_id", "Client identifier, when not sent as basic auth"),
        text("client_secret", "Client secret, when not sent as basic auth"),
        text("code", "Authorization code (authorization_code)"),
        text("redirect_uri", "Redirect URI used in the authorization request"),
        text("code_verifier", "PKCE verifier matching the code challenge"),
        text("refresh_token", "Refresh token (refresh_token)"),
        text("scope", "Requested scopes, space separated"),
        text("username", "Resource owner username (password)"),
        text("password", "Resource owner password (password)"),
        text("device_code", "Device code (device_code)"),
        text("client_assertion", "Signed JWT authenticating the client"),
        text(
            "client_assertion_type",
            "`urn:ietf:params:oauth:client-assertion-type:jwt-bearer`",
        ),
    ]
}

fn token_response_schema() -> Schema {
    Schema::object(
        ObjectShape::new()
            .required_property("access_token", Schema::string())
            .required_property("token_type", Schema::string())
            .property(
                "expires_in",
                Schema::integer()
                    .with_format("int32")
                    .with_description("Lifetime of the access token in seconds"),
            )
            .property("refresh_token", Schema::string())
            .property("id_token", Schema::string())
            .property("scope", Schema::string()),
    )
}

/// `POST /connect/token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenBuilder;

impl PathBuilder for TokenBuilder {
    fn build(&self) -> BuildOutcome {
        let post = Operation::new("Exchange a grant for tokens")
            .external_docs(ExternalDocs::new(
                "Token endpoint",
                format!("{OIDC_CORE}#TokenEndpoint"),
            ))
            .request_body(form_request_body(&token_parameters()))
            .response("200", json("Token response", token_response_schema()))
            .response("400", oauth_error("Invalid or unsupported grant"))
            .response("401", oauth_error("Client authentication failed"));

        PathDescriptor::new(
            "The token endpoint is used to programmatically request tokens.",
        )
        .operation(HttpMethod::Post, post)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::content_type::FORM_URLENCODED;

    #[test]
    fn post_only_with_grant_type_required() {
        let descriptor = TokenBuilder.build().into_descriptor().expect("built");
        assert!(descriptor.get(HttpMethod::Get).is_none());

        let post = descriptor.get(HttpMethod::Post).expect("POST");
        let body = post.request_body.as_ref().expect("body");
        let object = body.content[FORM_URLENCODED]
            .schema
            .as_ref()
            .and_then(Schema::as_object)
            .expect("object");

        assert_eq!(
            object.required.iter().map(String::as_str).collect::<Vec<_>>(),
            ["grant_type"]
        );
        assert_eq!(object.properties.len(), 13);
        assert_eq!(
            object.properties["grant_type"].enum_values().len(),
            GRANT_TYPES.len()
        );
    }

    #[test]
    fn responses() {
        let descriptor = TokenBuilder.build().into_descriptor().expect("built");
        let post = descriptor.get(HttpMethod::Post).expect("POST");
        assert_eq!(post.responses.keys().collect::<Vec<_>>(), ["200", "400", "401"]);
    }
}
