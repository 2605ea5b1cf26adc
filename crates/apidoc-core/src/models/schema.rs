use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Structural type of an inline schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Integer => "integer",
            DataType::Boolean => "boolean",
            DataType::Array => "array",
            DataType::Object => "object",
        }
    }
}

/// A field shape: either inline or a named pointer into the schema catalog.
///
/// References are stored by catalog name only. Renderers decide how the name
/// is spelled on the wire (`#/definitions/..` vs `#/components/schemas/..`).
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Reference(String),
    Inline(InlineSchema),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InlineSchema {
    pub shape: Shape,
    pub description: Option<String>,
    pub format: Option<String>,
    pub enum_values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    Number,
    Integer,
    Boolean,
    Array(ArrayShape),
    Object(ObjectShape),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayShape {
    pub items: Box<Schema>,
    pub unique_items: bool,
}

/// Object schema body.
///
/// `required` is kept as an ordered set; every name in it must also be a key of
/// `properties` (checked by [`crate::Document::validate`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectShape {
    pub properties: IndexMap<String, Schema>,
    pub required: IndexSet<String>,
    pub additional_properties: Option<bool>,
}

impl ObjectShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Adds a property and marks it required in one step.
    pub fn required_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.required.insert(name.clone());
        self.properties.insert(name, schema);
        self
    }

    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.insert(name.into());
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(allowed);
        self
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Names listed as required that have no matching property.
    pub fn missing_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl Schema {
    fn inline(shape: Shape) -> Self {
        Schema::Inline(InlineSchema {
            shape,
            description: None,
            format: None,
            enum_values: Vec::new(),
        })
    }

    pub fn string() -> Self {
        Self::inline(Shape::String)
    }

    pub fn number() -> Self {
        Self::inline(Shape::Number)
    }

    pub fn integer() -> Self {
        Self::inline(Shape::Integer)
    }

    pub fn boolean() -> Self {
        Self::inline(Shape::Boolean)
    }

    pub fn array(items: Schema) -> Self {
        Self::inline(Shape::Array(ArrayShape {
            items: Box::new(items),
            unique_items: false,
        }))
    }

    pub fn object(shape: ObjectShape) -> Self {
        Self::inline(Shape::Object(shape))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Schema::Reference(name.into())
    }

    /// Sets a description. Ignored on references.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        if let Schema::Inline(inline) = &mut self {
            inline.description = Some(description.into());
        }
        self
    }

    /// Sets a format hint (`int32`, `uri`, ...). Ignored on references.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        if let Schema::Inline(inline) = &mut self {
            inline.format = Some(format.into());
        }
        self
    }

    /// Restricts the schema to the given literal values, in order. Ignored on references.
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if let Schema::Inline(inline) = &mut self {
            inline.enum_values = values.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Sets `uniqueItems`. Only meaningful for arrays; ignored otherwise.
    pub fn with_unique_items(mut self, unique: bool) -> Self {
        if let Schema::Inline(InlineSchema {
            shape: Shape::Array(array),
            ..
        }) = &mut self
        {
            array.unique_items = unique;
        }
        self
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Schema::Reference(_) => None,
            Schema::Inline(inline) => Some(match inline.shape {
                Shape::String => DataType::String,
                Shape::Number => DataType::Number,
                Shape::Integer => DataType::Integer,
                Shape::Boolean => DataType::Boolean,
                Shape::Array(_) => DataType::Array,
                Shape::Object(_) => DataType::Object,
            }),
        }
    }

    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Schema::Reference(name) => Some(name.as_str()),
            Schema::Inline(_) => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Schema::Reference(_) => None,
            Schema::Inline(inline) => inline.description.as_deref(),
        }
    }

    pub fn enum_values(&self) -> &[Value] {
        match self {
            Schema::Reference(_) => &[],
            Schema::Inline(inline) => &inline.enum_values,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectShape> {
        match self {
            Schema::Inline(InlineSchema {
                shape: Shape::Object(object),
                ..
            }) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayShape> {
        match self {
            Schema::Inline(InlineSchema {
                shape: Shape::Array(array),
                ..
            }) => Some(array),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_property_is_listed_in_both_sets() {
        let shape = ObjectShape::new()
            .required_property("issuer", Schema::string())
            .property("jwks_uri", Schema::string());

        assert!(shape.required.contains("issuer"));
        assert_eq!(shape.property_names().collect::<Vec<_>>(), ["issuer", "jwks_uri"]);
        assert!(shape.missing_required().is_empty());
    }

    #[test]
    fn missing_required_reports_dangling_names() {
        let shape = ObjectShape::new()
            .property("issuer", Schema::string())
            .require("subject_types_supported");

        assert_eq!(shape.missing_required(), ["subject_types_supported"]);
    }

    #[test]
    fn modifiers_do_not_touch_references() {
        let schema = Schema::reference("DiscoveryDocument")
            .with_description("ignored")
            .with_enum(["a"]);

        assert_eq!(schema, Schema::Reference("DiscoveryDocument".to_string()));
        assert!(schema.enum_values().is_empty());
        assert_eq!(schema.data_type(), None);
    }

    #[test]
    fn unique_items_only_applies_to_arrays() {
        let list = Schema::array(Schema::string()).with_unique_items(true);
        assert!(list.as_array().map(|a| a.unique_items).unwrap_or(false));

        let text = Schema::string().with_unique_items(true);
        assert_eq!(text, Schema::string());
    }
}
