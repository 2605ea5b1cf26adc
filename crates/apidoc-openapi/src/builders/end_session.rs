use apidoc_core::content_type::TEXT_HTML;
use apidoc_core::{ExternalDocs, HttpMethod, MediaType, Operation, PathDescriptor, Response, Schema};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{redirect, text};
use crate::form::form_request_body;

const SESSION_MANAGEMENT: &str = "https://openid.net/specs/openid-connect-rpinitiated-1_0.html";

/// `GET|POST /connect/endsession`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndSessionBuilder;

impl PathBuilder for EndSessionBuilder {
    fn build(&self) -> BuildOutcome {
        let parameters = vec![
            text(
                "id_token_hint",
                "Identity token previously issued to the client",
            ),
            text(
                "post_logout_redirect_uri",
                "Where to send the browser after logout; must be registered for the client",
            ),
            text("state", "Echoed back on the post-logout redirect"),
        ];

        let logged_out = || {
            Response::new("Logged-out page").content(TEXT_HTML, MediaType::new(Schema::string()))
        };
        let redirected = || redirect("Redirect to `post_logout_redirect_uri`");

        let get = Operation::new("End the user session")
            .parameters(parameters.clone())
            .response("302", redirected())
            .response("200", logged_out());

        let post = Operation::new("End the user session with a form post")
            .request_body(form_request_body(&parameters))
            .response("302", redirected())
            .response("200", logged_out());

        PathDescriptor::new(
            "The end session endpoint triggers single sign-out for the browser session.",
        )
        .external_docs(ExternalDocs::new(
            "RP-Initiated Logout",
            SESSION_MANAGEMENT,
        ))
        .operation(HttpMethod::Get, get)
        .operation(HttpMethod::Post, post)
        .into()
    }
}
