use apidoc_core::{ExternalDocs, HttpMethod, ObjectShape, Operation, PathDescriptor, Schema};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{bearer_header, json, oauth_error, OIDC_CORE};

fn claims_schema() -> Schema {
    Schema::object(
        ObjectShape::new()
            .required_property(
                "sub",
                Schema::string().with_description("Subject identifier"),
            )
            .property("name", Schema::string())
            .property("email", Schema::string())
            .property("email_verified", Schema::boolean())
            .additional_properties(true),
    )
}

fn operation(description: &str) -> Operation {
    Operation::new(description)
        .external_docs(ExternalDocs::new(
            "UserInfo endpoint",
            format!("{OIDC_CORE}#UserInfo"),
        ))
        .parameter(bearer_header())
        .response("200", json("Claims about the authenticated user", claims_schema()))
        .response("401", oauth_error("Missing or invalid access token"))
        .response("403", oauth_error("Access token lacks the `openid` scope"))
}

/// `GET|POST /connect/userinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserInfoBuilder;

impl PathBuilder for UserInfoBuilder {
    fn build(&self) -> BuildOutcome {
        PathDescriptor::new(
            "The UserInfo endpoint returns claims about the user the access token was issued for.",
        )
        .operation(HttpMethod::Get, operation("Retrieve user claims"))
        .operation(HttpMethod::Post, operation("Retrieve user claims with a form post"))
        .into()
    }
}
