use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

use super::schema::Schema;

/// Media types used across the protocol endpoints.
pub mod content_type {
    pub const APPLICATION_JSON: &str = "application/json";
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_HTML: &str = "text/html";
}

/// The assembled API-description document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub info: Info,
    pub servers: Vec<Server>,
    pub components: Components,
    pub paths: IndexMap<String, PathDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDocs {
    pub description: String,
    pub url: String,
}

impl ExternalDocs {
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Lower-case form used as the operation key on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

/// All operations available at one endpoint path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescriptor {
    pub description: String,
    pub external_docs: Option<ExternalDocs>,
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl PathDescriptor {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            external_docs: None,
            operations: IndexMap::new(),
        }
    }

    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }

    pub fn operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        self.operations.insert(method, operation);
        self
    }

    pub fn get(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub description: String,
    pub external_docs: Option<ExternalDocs>,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            external_docs: None,
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Query => "query",
            ParameterLocation::Path => "path",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub location: ParameterLocation,
    pub name: String,
    pub required: bool,
    pub schema: Schema,
    pub description: String,
    pub allow_empty_value: bool,
}

impl Parameter {
    pub fn new(location: ParameterLocation, name: impl Into<String>, schema: Schema) -> Self {
        Self {
            location,
            name: name.into(),
            required: false,
            schema,
            description: String::new(),
            allow_empty_value: false,
        }
    }

    pub fn query(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(ParameterLocation::Query, name, schema)
    }

    pub fn header(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(ParameterLocation::Header, name, schema)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn allow_empty_value(mut self, allow: bool) -> Self {
        self.allow_empty_value = allow;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub description: Option<String>,
    pub required: bool,
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    pub fn new() -> Self {
        Self {
            description: None,
            required: true,
            content: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn content(mut self, content_type: impl Into<String>, media: MediaType) -> Self {
        self.content.insert(content_type.into(), media);
        self
    }
}

impl Default for RequestBody {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub description: String,
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: IndexMap::new(),
        }
    }

    pub fn content(mut self, content_type: impl Into<String>, media: MediaType) -> Self {
        self.content.insert(content_type.into(), media);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub schema: Option<Schema>,
    pub example: Option<Value>,
}

impl MediaType {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            example: None,
        }
    }

    pub fn example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_method_displays_upper_case() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "post");
    }

    #[test]
    fn operations_keep_insertion_order() {
        let path = PathDescriptor::new("authorize")
            .operation(HttpMethod::Post, Operation::new("post"))
            .operation(HttpMethod::Get, Operation::new("get"));

        let methods: Vec<_> = path.operations.keys().copied().collect();
        assert_eq!(methods, [HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(path.get(HttpMethod::Get).map(|o| o.description.as_str()), Some("get"));
    }
}
