use std::fmt;

#[cfg(feature = "actix")]
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
#[cfg(feature = "actix")]
use serde::Serialize;

/// Failure to produce a document.
///
/// `UnsupportedEndpoint` is a configuration outcome (see `UnsupportedPolicy`).
/// The other two variants are defects in a builder or the catalog and are never
/// expected in a correct deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    UnsupportedEndpoint { path: String },
    UnresolvedSchemaReference { name: String, location: String },
    InvalidDocument { location: String, reason: String },
}

impl DocumentError {
    pub fn unsupported_endpoint(path: &str) -> Self {
        Self::UnsupportedEndpoint {
            path: path.to_string(),
        }
    }

    pub fn unresolved_reference(name: &str, location: &str) -> Self {
        Self::UnresolvedSchemaReference {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    pub fn invalid(location: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            location: location.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, also used as a metrics label.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::UnsupportedEndpoint { .. } => "unsupported_endpoint",
            DocumentError::UnresolvedSchemaReference { .. } => "unresolved_schema_reference",
            DocumentError::InvalidDocument { .. } => "invalid_document",
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentError::UnsupportedEndpoint { path } => {
                write!(f, "no description builder is implemented for {path}")
            }
            DocumentError::UnresolvedSchemaReference { name, location } => {
                write!(f, "schema reference '{name}' at {location} is not in the catalog")
            }
            DocumentError::InvalidDocument { location, reason } => {
                write!(f, "invalid document at {location}: {reason}")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

#[cfg(feature = "actix")]
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    error_description: String,
}

#[cfg(feature = "actix")]
impl ResponseError for DocumentError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.code(),
            error_description: self.to_string(),
        })
    }
}

/// Catalog lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NotFound { name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::NotFound { name } => write!(f, "schema '{name}' is not registered"),
        }
    }
}

impl std::error::Error for CatalogError {}
