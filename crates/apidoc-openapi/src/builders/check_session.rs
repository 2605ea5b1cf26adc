use apidoc_core::content_type::TEXT_HTML;
use apidoc_core::{ExternalDocs, HttpMethod, MediaType, Operation, PathDescriptor, Response, Schema};
use apidoc_ports::{BuildOutcome, PathBuilder};

/// `GET /connect/checksession`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckSessionBuilder;

impl PathBuilder for CheckSessionBuilder {
    fn build(&self) -> BuildOutcome {
        let get = Operation::new("Load the check-session iframe")
            .external_docs(ExternalDocs::new(
                "OpenID Connect Session Management",
                "https://openid.net/specs/openid-connect-session-1_0.html",
            ))
            .response(
                "200",
                Response::new("Iframe document polled by relying parties")
                    .content(TEXT_HTML, MediaType::new(Schema::string())),
            );

        PathDescriptor::new(
            "The check session endpoint serves the OP iframe used for session change notification.",
        )
        .operation(HttpMethod::Get, get)
        .into()
    }
}
