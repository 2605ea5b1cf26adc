use apidoc_core::{ExternalDocs, HttpMethod, ObjectShape, Operation, PathDescriptor, Schema};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{json, oauth_error, one_of, required_text};
use crate::form::form_request_body;

pub(crate) const TOKEN_TYPE_HINTS: [&str; 2] = ["access_token", "refresh_token"];

fn introspection_schema() -> Schema {
    let epoch = || Schema::integer().with_format("int64");
    Schema::object(
        ObjectShape::new()
            .required_property(
                "active",
                Schema::boolean().with_description("Whether the token is currently active"),
            )
            .property("scope", Schema::string())
            .property("client_id", Schema::string())
            .property("sub", Schema::string())
            .property("exp", epoch())
            .property("iat", epoch())
            .property("iss", Schema::string())
            .property("token_type", Schema::string()),
    )
}

/// `POST /connect/introspect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrospectionBuilder;

impl PathBuilder for IntrospectionBuilder {
    fn build(&self) -> BuildOutcome {
        let parameters = [
            required_text("token", "Token to introspect"),
            one_of("token_type_hint", "Type of the token", &TOKEN_TYPE_HINTS),
        ];

        let post = Operation::new("Validate a token and return its metadata")
            .external_docs(ExternalDocs::new(
                "OAuth 2.0 Token Introspection",
                "https://www.rfc-editor.org/rfc/rfc7662",
            ))
            .request_body(form_request_body(&parameters))
            .response("200", json("Introspection result", introspection_schema()))
            .response("400", oauth_error("Malformed request"))
            .response("401", oauth_error("Caller authentication failed"));

        PathDescriptor::new(
            "The introspection endpoint lets resource servers validate reference tokens.",
        )
        .operation(HttpMethod::Post, post)
        .into()
    }
}
