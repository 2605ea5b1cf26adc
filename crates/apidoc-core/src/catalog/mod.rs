//! Named, reusable schema definitions.
//!
//! Path descriptors point at catalog entries by name instead of inlining the
//! structure, so an edit here updates every path that references the entry.

mod discovery;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::{CatalogError, Schema};

pub use discovery::{discovery_document_schema, DISCOVERY_REQUIRED};

/// Catalog name of the OIDC discovery document schema.
pub const DISCOVERY_DOCUMENT: &str = "DiscoveryDocument";

/// Versions of the catalog definitions. Later versions are supersets.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVersion {
    Minimal,
    #[default]
    Extended,
}

impl SchemaVersion {
    pub const ALL: [SchemaVersion; 2] = [SchemaVersion::Minimal, SchemaVersion::Extended];

    /// Whether a definition introduced in `since` is part of this version.
    pub fn includes(self, since: SchemaVersion) -> bool {
        self >= since
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::Minimal => "minimal",
            SchemaVersion::Extended => "extended",
        }
    }
}

impl std::str::FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(SchemaVersion::Minimal),
            "extended" => Ok(SchemaVersion::Extended),
            other => Err(format!(
                "unknown schema version '{other}', expected 'minimal' or 'extended'"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaCatalog {
    schemas: IndexMap<String, Schema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under `name`, returning the definition it replaced.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.schemas.insert(name.into(), schema)
    }

    pub fn get(&self, name: &str) -> Result<&Schema, CatalogError> {
        self.schemas.get(name).ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// A named reference to a registered entry.
    pub fn reference(&self, name: &str) -> Result<Schema, CatalogError> {
        self.get(name).map(|_| Schema::reference(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Catalog definitions for `version`, built once per process.
    pub fn for_version(version: SchemaVersion) -> &'static SchemaCatalog {
        static MINIMAL: OnceLock<SchemaCatalog> = OnceLock::new();
        static EXTENDED: OnceLock<SchemaCatalog> = OnceLock::new();

        let cell = match version {
            SchemaVersion::Minimal => &MINIMAL,
            SchemaVersion::Extended => &EXTENDED,
        };
        cell.get_or_init(|| Self::build(version))
    }

    fn build(version: SchemaVersion) -> Self {
        let mut catalog = Self::new();
        catalog.register(DISCOVERY_DOCUMENT, discovery_document_schema(version));
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataType;

    #[test]
    fn get_unknown_name_is_not_found() {
        let catalog = SchemaCatalog::new();
        assert_eq!(
            catalog.get("Nope"),
            Err(CatalogError::NotFound {
                name: "Nope".to_string()
            })
        );
        assert!(catalog.reference("Nope").is_err());
    }

    #[test]
    fn register_replaces_and_returns_previous() {
        let mut catalog = SchemaCatalog::new();
        assert!(catalog.register("A", Schema::string()).is_none());
        assert_eq!(catalog.register("A", Schema::integer()), Some(Schema::string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A").ok().and_then(|s| s.data_type()), Some(DataType::Integer));
    }

    #[test]
    fn reference_points_at_registered_name() {
        let catalog = SchemaCatalog::for_version(SchemaVersion::Extended);
        let reference = catalog.reference(DISCOVERY_DOCUMENT).expect("registered");
        assert_eq!(reference.reference_name(), Some(DISCOVERY_DOCUMENT));
    }

    #[test]
    fn every_version_has_the_discovery_document() {
        for version in SchemaVersion::ALL {
            let catalog = SchemaCatalog::for_version(version);
            let schema = catalog.get(DISCOVERY_DOCUMENT).expect("discovery schema");
            let issuer = schema
                .as_object()
                .and_then(|o| o.properties.get("issuer"))
                .and_then(Schema::data_type);
            assert_eq!(issuer, Some(DataType::String));
        }
    }

    #[test]
    fn for_version_is_shared() {
        let a = SchemaCatalog::for_version(SchemaVersion::Minimal);
        let b = SchemaCatalog::for_version(SchemaVersion::Minimal);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn version_names_parse() {
        for version in SchemaVersion::ALL {
            assert_eq!(version.as_str().parse::<SchemaVersion>(), Ok(version));
        }
        assert_eq!(" Extended ".parse::<SchemaVersion>(), Ok(SchemaVersion::Extended));
        assert!("full".parse::<SchemaVersion>().is_err());
    }

    #[test]
    fn versions_are_ordered() {
        assert!(SchemaVersion::Extended.includes(SchemaVersion::Minimal));
        assert!(!SchemaVersion::Minimal.includes(SchemaVersion::Extended));
    }
}
