use apidoc_core::{
    ExternalDocs, HttpMethod, Operation, Parameter, PathDescriptor, Schema,
};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{oauth_error, one_of, redirect, required_text, text, OIDC_CORE};
use crate::form::form_request_body;

pub const RESPONSE_TYPES: [&str; 7] = [
    "id_token",
    "token",
    "id_token token",
    "code",
    "code id_token",
    "code token",
    "code id_token token",
];

/// The authorization request parameters, shared by GET (query) and POST (form body).
pub fn authorize_parameters() -> Vec<Parameter> {
    vec![
        required_text("client_id", "Identifier of the client"),
        text("request", "Request object passed by value as a JWT"),
        text("request_uri", "URL of a request object"),
        required_text("scope", "One or more registered scopes, space separated"),
        required_text(
            "redirect_uri",
            "Must exactly match one of the allowed redirect URIs for the client",
        ),
        one_of(
            "response_type",
            "Flow to run; `id_token` and `code id_token` are the common OIDC choices",
            &RESPONSE_TYPES,
        )
        .required(true),
        one_of(
            "response_mode",
            "Return the token response as a form post instead of a redirect",
            &["form_post"],
        ),
        text(
            "state",
            "Echoed back in the response; used for round-trip state and CSRF protection",
        ),
        text(
            "nonce",
            "Echoed back in the identity token for replay protection",
        ),
        one_of(
            "prompt",
            "`none`: no UI is shown; `login`: the login UI is shown even when a session exists",
            &["none", "login"],
        ),
        text("code_challenge", "PKCE code challenge"),
        one_of(
            "code_challenge_method",
            "PKCE challenge transform",
            &["plain", "S256"],
        ),
        text(
            "login_hint",
            "Pre-fills the username field on the login page",
        ),
        text("ui_locales", "Display language of the login UI"),
        Parameter::query("max_age", Schema::integer().with_format("int32")).description(
            "Maximum seconds since the user last authenticated before a new login is required",
        ),
        text(
            "acr_values",
            "Additional authentication information, e.g. `idp:name` or `tenant:name`",
        ),
    ]
}

/// `GET|POST /connect/authorize`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizeBuilder;

impl PathBuilder for AuthorizeBuilder {
    fn build(&self) -> BuildOutcome {
        let parameters = authorize_parameters();
        let docs = ExternalDocs::new(
            "Authentication request",
            format!("{OIDC_CORE}#AuthRequest"),
        );

        let get = Operation::new("Start an authorization request with query parameters")
            .external_docs(docs.clone())
            .parameters(parameters.clone())
            .response(
                "302",
                redirect("Redirect to `redirect_uri` carrying the authorization result"),
            )
            .response("400", oauth_error("Malformed request or unknown client"));

        let post = Operation::new("Start an authorization request with a form post")
            .external_docs(docs)
            .request_body(form_request_body(&parameters))
            .response(
                "302",
                redirect("Redirect to `redirect_uri` carrying the authorization result"),
            )
            .response("400", oauth_error("Malformed request or unknown client"));

        PathDescriptor::new(
            "The authorize endpoint requests tokens or authorization codes via the browser. \
             It typically involves authenticating the end user and optionally consent.",
        )
        .operation(HttpMethod::Get, get)
        .operation(HttpMethod::Post, post)
        .into()
    }
}
