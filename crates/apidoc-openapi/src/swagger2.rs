//! Swagger 2.0 wire model.
//!
//! The in-memory [`Document`] is version neutral; this module lowers it to the
//! Swagger 2.0 shape: `definitions` instead of `components.schemas`,
//! `host`/`basePath`/`schemes` instead of `servers`, and request bodies as
//! `formData` or `body` parameters.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use apidoc_core::content_type::{FORM_URLENCODED, MULTIPART_FORM_DATA};
use apidoc_core::{
    Document, ExternalDocs, Operation, Parameter, ParameterLocation, PathDescriptor, RequestBody,
    Response, Schema, Shape,
};

pub const SWAGGER_VERSION: &str = "2.0";
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerDocument {
    pub swagger: &'static str,
    pub info: SwaggerInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    pub paths: IndexMap<String, SwaggerPathItem>,
    pub definitions: IndexMap<String, SwaggerSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerExternalDocs {
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerPathItem {
    #[serde(rename = "x-description", skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Keyed by lower-case HTTP method.
    #[serde(flatten)]
    pub operations: IndexMap<String, SwaggerOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerOperation {
    pub description: String,
    #[serde(rename = "externalDocs", skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<SwaggerExternalDocs>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<SwaggerParameter>,
    pub responses: IndexMap<String, SwaggerResponse>,
}

/// Simple-typed parameter (`query`, `path`, `header`, `formData`) or a `body` parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerParameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<SwaggerSchema>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(rename = "allowEmptyValue", skip_serializing_if = "is_false")]
    pub allow_empty_value: bool,
    /// Only set for `in: body`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerResponse {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerSchema>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SwaggerSchema {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Box<SwaggerInlineSchema>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerInlineSchema {
    #[serde(rename = "type")]
    pub data_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<SwaggerSchema>,
    /// Always present on arrays, absent otherwise.
    #[serde(rename = "uniqueItems", skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SwaggerSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<bool>,
}

impl From<&Document> for SwaggerDocument {
    fn from(document: &Document) -> Self {
        let location = document
            .servers
            .first()
            .and_then(|server| ServerLocation::parse(&server.url));

        let (host, base_path, schemes) = match location {
            Some(location) => (
                Some(location.host),
                Some(location.base_path),
                vec![location.scheme],
            ),
            None => (None, None, Vec::new()),
        };

        SwaggerDocument {
            swagger: SWAGGER_VERSION,
            info: SwaggerInfo {
                title: document.info.title.clone(),
                description: document.info.description.clone(),
                version: document.info.version.clone(),
            },
            host,
            base_path,
            schemes,
            paths: document
                .paths
                .iter()
                .map(|(path, descriptor)| (path.clone(), SwaggerPathItem::from(descriptor)))
                .collect(),
            definitions: document
                .components
                .schemas
                .iter()
                .map(|(name, schema)| (name.clone(), SwaggerSchema::from(schema)))
                .collect(),
        }
    }
}

struct ServerLocation {
    host: String,
    base_path: String,
    scheme: String,
}

impl ServerLocation {
    fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        let host = url.host_str()?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Some(Self {
            host,
            base_path: url.path().to_string(),
            scheme: url.scheme().to_string(),
        })
    }
}

impl From<&ExternalDocs> for SwaggerExternalDocs {
    fn from(docs: &ExternalDocs) -> Self {
        Self {
            description: docs.description.clone(),
            url: docs.url.clone(),
        }
    }
}

impl From<&PathDescriptor> for SwaggerPathItem {
    fn from(descriptor: &PathDescriptor) -> Self {
        let operations = descriptor
            .operations
            .iter()
            .map(|(method, operation)| {
                let mut lowered = SwaggerOperation::from(operation);
                if lowered.external_docs.is_none() {
                    lowered.external_docs =
                        descriptor.external_docs.as_ref().map(SwaggerExternalDocs::from);
                }
                (method.as_str().to_string(), lowered)
            })
            .collect();

        Self {
            description: descriptor.description.clone(),
            operations,
        }
    }
}

impl From<&Operation> for SwaggerOperation {
    fn from(operation: &Operation) -> Self {
        let mut parameters: Vec<SwaggerParameter> = operation
            .parameters
            .iter()
            .filter_map(SwaggerParameter::from_parameter)
            .collect();

        let mut consumes = Vec::new();
        if let Some(body) = &operation.request_body {
            consumes.extend(body.content.keys().cloned());
            parameters.extend(body_parameters(body));
        }

        let produces: IndexSet<String> = operation
            .responses
            .values()
            .flat_map(|response| response.content.keys().cloned())
            .collect();

        Self {
            description: operation.description.clone(),
            external_docs: operation.external_docs.as_ref().map(SwaggerExternalDocs::from),
            consumes,
            produces: produces.into_iter().collect(),
            parameters,
            responses: operation
                .responses
                .iter()
                .map(|(status, response)| (status.clone(), SwaggerResponse::from(response)))
                .collect(),
        }
    }
}

/// Form bodies become one `formData` parameter per property; anything else a single `body`.
fn body_parameters(body: &RequestBody) -> Vec<SwaggerParameter> {
    let form = [FORM_URLENCODED, MULTIPART_FORM_DATA]
        .iter()
        .filter_map(|content_type| body.content.get(*content_type))
        .find_map(|media| media.schema.as_ref().and_then(Schema::as_object));

    if let Some(object) = form {
        return object
            .properties
            .iter()
            .map(|(name, schema)| {
                SwaggerParameter::simple(
                    name.clone(),
                    "formData",
                    schema,
                    String::new(),
                    object.required.contains(name),
                )
            })
            .collect();
    }

    body.content
        .values()
        .find_map(|media| media.schema.as_ref())
        .map(|schema| SwaggerParameter {
            name: "body".to_string(),
            location: "body",
            description: body.description.clone().unwrap_or_default(),
            required: body.required,
            data_type: None,
            format: None,
            items: None,
            enum_values: Vec::new(),
            allow_empty_value: false,
            schema: Some(SwaggerSchema::from(schema)),
        })
        .into_iter()
        .collect()
}

impl SwaggerParameter {
    /// Cookie parameters have no Swagger 2.0 equivalent and are dropped.
    fn from_parameter(parameter: &Parameter) -> Option<Self> {
        let location = match parameter.location {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => return None,
        };
        let mut lowered = Self::simple(
            parameter.name.clone(),
            location,
            &parameter.schema,
            parameter.description.clone(),
            parameter.required || parameter.location == ParameterLocation::Path,
        );
        lowered.allow_empty_value = parameter.allow_empty_value;
        Some(lowered)
    }

    fn simple(
        name: String,
        location: &'static str,
        schema: &Schema,
        description: String,
        required: bool,
    ) -> Self {
        let description = if description.is_empty() {
            schema.description().unwrap_or_default().to_string()
        } else {
            description
        };

        let (data_type, format, items) = match schema {
            Schema::Inline(inline) => (
                schema.data_type().map(|t| t.as_str()),
                inline.format.clone(),
                match &inline.shape {
                    Shape::Array(array) => Some(SwaggerSchema::from(array.items.as_ref())),
                    _ => None,
                },
            ),
            Schema::Reference(_) => (None, None, None),
        };

        Self {
            name,
            location,
            description,
            required,
            data_type,
            format,
            items,
            enum_values: schema.enum_values().to_vec(),
            allow_empty_value: false,
            schema: None,
        }
    }
}

impl From<&Response> for SwaggerResponse {
    fn from(response: &Response) -> Self {
        Self {
            description: response.description.clone(),
            schema: response
                .content
                .values()
                .find_map(|media| media.schema.as_ref())
                .map(SwaggerSchema::from),
            examples: response
                .content
                .iter()
                .filter_map(|(content_type, media)| {
                    media
                        .example
                        .as_ref()
                        .map(|example| (content_type.clone(), example.clone()))
                })
                .collect(),
        }
    }
}

impl From<&Schema> for SwaggerSchema {
    fn from(schema: &Schema) -> Self {
        let inline = match schema {
            Schema::Reference(name) => {
                return SwaggerSchema::Reference {
                    reference: format!("{DEFINITIONS_PREFIX}{name}"),
                }
            }
            Schema::Inline(inline) => inline,
        };

        let mut lowered = SwaggerInlineSchema {
            data_type: "string",
            description: inline.description.clone(),
            format: inline.format.clone(),
            items: None,
            unique_items: None,
            enum_values: inline.enum_values.clone(),
            properties: IndexMap::new(),
            required: Vec::new(),
            additional_properties: None,
        };

        match &inline.shape {
            Shape::String => {}
            Shape::Number => lowered.data_type = "number",
            Shape::Integer => lowered.data_type = "integer",
            Shape::Boolean => lowered.data_type = "boolean",
            Shape::Array(array) => {
                lowered.data_type = "array";
                lowered.items = Some(SwaggerSchema::from(array.items.as_ref()));
                lowered.unique_items = Some(array.unique_items);
            }
            Shape::Object(object) => {
                lowered.data_type = "object";
                lowered.properties = object
                    .properties
                    .iter()
                    .map(|(name, property)| (name.clone(), SwaggerSchema::from(property)))
                    .collect();
                lowered.required = object.required.iter().cloned().collect();
                lowered.additional_properties = object.additional_properties;
            }
        }

        SwaggerSchema::Inline(Box::new(lowered))
    }
}
