use apidoc_core::content_type::APPLICATION_JSON;
use apidoc_core::{MediaType, ObjectShape, Parameter, Response, Schema};

pub(crate) const OIDC_CORE: &str = "https://openid.net/specs/openid-connect-core-1_0.html";

pub(crate) fn text(name: &str, description: &str) -> Parameter {
    Parameter::query(name, Schema::string()).description(description)
}

pub(crate) fn required_text(name: &str, description: &str) -> Parameter {
    text(name, description).required(true)
}

pub(crate) fn one_of(name: &str, description: &str, values: &[&str]) -> Parameter {
    Parameter::query(name, Schema::string().with_enum(values.iter().copied())).description(description)
}

pub(crate) fn bearer_header() -> Parameter {
    Parameter::header("Authorization", Schema::string())
        .required(true)
        .description("Access token as `Bearer <token>`")
}

/// RFC 6749 section 5.2 error body.
pub(crate) fn oauth_error_schema() -> Schema {
    Schema::object(
        ObjectShape::new()
            .required_property(
                "error",
                Schema::string().with_description("Error code, e.g. `invalid_request`"),
            )
            .property("error_description", Schema::string())
            .property("error_uri", Schema::string()),
    )
}

pub(crate) fn oauth_error(description: &str) -> Response {
    Response::new(description).content(APPLICATION_JSON, MediaType::new(oauth_error_schema()))
}

pub(crate) fn json(description: &str, schema: Schema) -> Response {
    Response::new(description).content(APPLICATION_JSON, MediaType::new(schema))
}

pub(crate) fn redirect(description: &str) -> Response {
    Response::new(description)
}
