use apidoc_core::{ExternalDocs, HttpMethod, Operation, PathDescriptor, Response};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{oauth_error, one_of, required_text};
use super::introspection::TOKEN_TYPE_HINTS;
use crate::form::form_request_body;

/// `POST /connect/revocation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevocationBuilder;

impl PathBuilder for RevocationBuilder {
    fn build(&self) -> BuildOutcome {
        let parameters = [
            required_text("token", "Token to revoke"),
            one_of("token_type_hint", "Type of the token", &TOKEN_TYPE_HINTS),
        ];

        let post = Operation::new("Revoke an access or refresh token")
            .external_docs(ExternalDocs::new(
                "OAuth 2.0 Token Revocation",
                "https://www.rfc-editor.org/rfc/rfc7009",
            ))
            .request_body(form_request_body(&parameters))
            .response(
                "200",
                Response::new("Token revoked, or the token was already invalid"),
            )
            .response("400", oauth_error("Malformed request or unsupported token type"));

        PathDescriptor::new("The revocation endpoint revokes access and refresh tokens.")
            .operation(HttpMethod::Post, post)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_has_no_body() {
        let descriptor = RevocationBuilder.build().into_descriptor().expect("built");
        let post = descriptor.get(HttpMethod::Post).expect("POST");

        assert!(post.responses["200"].content.is_empty());
        assert!(!post.responses["400"].content.is_empty());
    }
}
