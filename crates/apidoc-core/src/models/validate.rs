use indexmap::IndexMap;
use std::collections::HashSet;

use super::document::{Document, MediaType};
use super::error::DocumentError;
use super::schema::{Schema, Shape};

impl Document {
    /// Checks the structural invariants of an assembled document.
    ///
    /// - every schema reference names an entry of `components.schemas`
    /// - every object's `required` names are keys of its `properties`
    /// - parameter names are unique within an operation
    /// - every path has at least one operation
    pub fn validate(&self) -> Result<(), DocumentError> {
        let catalog = &self.components.schemas;

        for (name, schema) in catalog {
            check_schema(schema, &format!("components.schemas.{name}"), catalog)?;
        }

        for (path, descriptor) in &self.paths {
            if descriptor.operations.is_empty() {
                return Err(DocumentError::invalid(
                    &format!("paths.{path}"),
                    "path descriptor declares no operations",
                ));
            }

            for (method, operation) in &descriptor.operations {
                let op_location = format!("paths.{path}.{}", method.as_str());

                let mut seen = HashSet::new();
                for parameter in &operation.parameters {
                    if !seen.insert(parameter.name.as_str()) {
                        return Err(DocumentError::invalid(
                            &op_location,
                            format!("duplicate parameter '{}'", parameter.name),
                        ));
                    }
                    check_schema(
                        &parameter.schema,
                        &format!("{op_location}.parameters.{}", parameter.name),
                        catalog,
                    )?;
                }

                if let Some(body) = &operation.request_body {
                    check_content(&body.content, &format!("{op_location}.requestBody"), catalog)?;
                }

                for (status, response) in &operation.responses {
                    check_content(
                        &response.content,
                        &format!("{op_location}.responses.{status}"),
                        catalog,
                    )?;
                }
            }
        }

        Ok(())
    }
}

fn check_content(
    content: &IndexMap<String, MediaType>,
    location: &str,
    catalog: &IndexMap<String, Schema>,
) -> Result<(), DocumentError> {
    for (content_type, media) in content {
        if let Some(schema) = &media.schema {
            check_schema(schema, &format!("{location}.{content_type}"), catalog)?;
        }
    }
    Ok(())
}

fn check_schema(
    schema: &Schema,
    location: &str,
    catalog: &IndexMap<String, Schema>,
) -> Result<(), DocumentError> {
    match schema {
        Schema::Reference(name) => {
            if !catalog.contains_key(name) {
                return Err(DocumentError::unresolved_reference(name, location));
            }
        }
        Schema::Inline(inline) => match &inline.shape {
            Shape::Array(array) => {
                check_schema(&array.items, &format!("{location}.items"), catalog)?;
            }
            Shape::Object(object) => {
                if let Some(missing) = object.missing_required().first() {
                    return Err(DocumentError::invalid(
                        location,
                        format!("required property '{missing}' is not declared"),
                    ));
                }
                for (name, property) in &object.properties {
                    check_schema(property, &format!("{location}.{name}"), catalog)?;
                }
            }
            _ => {}
        },
    }
    Ok(())
}
