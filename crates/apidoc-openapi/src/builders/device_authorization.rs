use apidoc_core::{ExternalDocs, HttpMethod, ObjectShape, Operation, PathDescriptor, Schema};
use apidoc_ports::{BuildOutcome, PathBuilder};

use super::common::{json, oauth_error, required_text, text};
use crate::form::form_request_body;

fn device_response_schema() -> Schema {
    Schema::object(
        ObjectShape::new()
            .required_property("device_code", Schema::string())
            .required_property("user_code", Schema::string())
            .required_property("verification_uri", Schema::string())
            .property("verification_uri_complete", Schema::string())
            .required_property("expires_in", Schema::integer().with_format("int32"))
            .property(
                "interval",
                Schema::integer()
                    .with_format("int32")
                    .with_description("Minimum seconds between polling requests"),
            ),
    )
}

/// `POST /connect/deviceauthorization`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceAuthorizationBuilder;

impl PathBuilder for DeviceAuthorizationBuilder {
    fn build(&self) -> BuildOutcome {
        let parameters = [
            required_text("client_id", "Identifier of the client"),
            text("scope", "Requested scopes, space separated"),
            text("client_secret", "Client secret, when not sent as basic auth"),
        ];

        let post = Operation::new("Start a device authorization flow")
            .external_docs(ExternalDocs::new(
                "OAuth 2.0 Device Authorization Grant",
                "https://www.rfc-editor.org/rfc/rfc8628",
            ))
            .request_body(form_request_body(&parameters))
            .response("200", json("Device and user codes", device_response_schema()))
            .response("400", oauth_error("Malformed request"))
            .response("401", oauth_error("Client authentication failed"));

        PathDescriptor::new(
            "The device authorization endpoint requests device and user codes \
             for input-constrained devices.",
        )
        .operation(HttpMethod::Post, post)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::content_type::APPLICATION_JSON;

    #[test]
    fn ok_response_lists_the_device_fields() {
        let descriptor = DeviceAuthorizationBuilder
            .build()
            .into_descriptor()
            .expect("built");
        let post = descriptor.get(HttpMethod::Post).expect("POST");
        let schema = post.responses["200"].content[APPLICATION_JSON]
            .schema
            .as_ref()
            .expect("schema");

        assert_eq!(
            schema.as_object().expect("object").property_names().collect::<Vec<_>>(),
            [
                "device_code",
                "user_code",
                "verification_uri",
                "verification_uri_complete",
                "expires_in",
                "interval"
            ]
        );
        assert!(post.request_body.as_ref().expect("body").required);
    }
}
