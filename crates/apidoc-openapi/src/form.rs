//! Query-parameter list to request-body schema.
//!
//! Endpoints that accept the same fields as GET query parameters and as a POST
//! body declare the fields once, as parameters, and derive the body from them.

use apidoc_core::content_type::{FORM_URLENCODED, MULTIPART_FORM_DATA};
use apidoc_core::{InlineSchema, MediaType, ObjectShape, Parameter, RequestBody, Schema};

/// Object schema whose properties are the parameters, in order.
///
/// Each property keeps the parameter's type and enum and takes the parameter's
/// description. Required parameters become required properties.
pub fn form_body_from_parameters(parameters: &[Parameter]) -> Schema {
    let shape = parameters
        .iter()
        .fold(ObjectShape::new(), |shape, parameter| {
            let property = project(parameter);
            if parameter.required {
                shape.required_property(parameter.name.clone(), property)
            } else {
                shape.property(parameter.name.clone(), property)
            }
        });
    Schema::object(shape)
}

/// Request body accepting the parameters as url-encoded or multipart form data.
pub fn form_request_body(parameters: &[Parameter]) -> RequestBody {
    let schema = form_body_from_parameters(parameters);
    RequestBody::new()
        .required(parameters.iter().any(|p| p.required))
        .content(FORM_URLENCODED, MediaType::new(schema.clone()))
        .content(MULTIPART_FORM_DATA, MediaType::new(schema))
}

fn project(parameter: &Parameter) -> Schema {
    match &parameter.schema {
        Schema::Reference(name) => Schema::reference(name.clone()),
        Schema::Inline(inline) => {
            let description = if parameter.description.is_empty() {
                inline.description.clone()
            } else {
                Some(parameter.description.clone())
            };
            Schema::Inline(InlineSchema {
                shape: inline.shape.clone(),
                description,
                format: None,
                enum_values: inline.enum_values.clone(),
            })
        }
    }
}
