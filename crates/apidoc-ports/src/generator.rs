use async_trait::async_trait;
use std::sync::Arc;

use apidoc_core::{Document, DocumentError};

/// Trait implemented by anything that can produce the API-description document.
///
/// The HTTP layer only depends on this seam; the default implementation is the
/// assembler in `apidoc-openapi`.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Build the document for the given issuer. `issuer_uri` is used as-is.
    async fn create_document(&self, issuer_uri: &str) -> Result<Document, DocumentError>;
}

pub type DynDocumentGenerator = Arc<dyn DocumentGenerator>;
