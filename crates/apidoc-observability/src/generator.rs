use async_trait::async_trait;
use std::time::Instant;
use tracing::{field, Instrument};

use apidoc_core::{Document, DocumentError};
use apidoc_ports::{DocumentGenerator, DynDocumentGenerator};

use crate::metrics::Metrics;
use crate::telemetry::annotate_span_with_trace_ids;

/// Wraps a `DynDocumentGenerator` with a tracing span and generation metrics.
pub struct ObservedGenerator {
    inner: DynDocumentGenerator,
    metrics: Metrics,
}

impl ObservedGenerator {
    pub fn new(inner: DynDocumentGenerator, metrics: Metrics) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl DocumentGenerator for ObservedGenerator {
    async fn create_document(&self, issuer_uri: &str) -> Result<Document, DocumentError> {
        let span = tracing::info_span!(
            "apidoc.generate",
            trace_id = field::Empty,
            span_id = field::Empty,
            issuer = %issuer_uri,
            paths = field::Empty
        );
        annotate_span_with_trace_ids(&span);

        let start = Instant::now();
        let result = self
            .inner
            .create_document(issuer_uri)
            .instrument(span.clone())
            .await;
        self.metrics
            .document_generation_duration_seconds
            .observe(start.elapsed().as_secs_f64());

        match &result {
            Ok(document) => {
                span.record("paths", document.paths.len());
                self.metrics.documents_generated_total.inc();
            }
            Err(e) => {
                self.metrics
                    .document_generation_failures_total
                    .with_label_values(&[e.code()])
                    .inc();
                tracing::error!(parent: &span, error = %e, code = e.code(), "Document generation failed");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::{Components, Info};
    use std::sync::Arc;

    struct Fixed(Result<Document, DocumentError>);

    #[async_trait]
    impl DocumentGenerator for Fixed {
        async fn create_document(&self, issuer_uri: &str) -> Result<Document, DocumentError> {
            self.0.clone().map(|mut document| {
                document.info.description = issuer_uri.to_string();
                document
            })
        }
    }

    fn empty_document() -> Document {
        Document {
            info: Info {
                title: "t".to_string(),
                description: String::new(),
                version: "v1".to_string(),
            },
            servers: Vec::new(),
            components: Components::default(),
            paths: Default::default(),
        }
    }

    #[tokio::test]
    async fn success_is_counted_and_passed_through() {
        let metrics = Metrics::new().expect("metrics");
        let observed = ObservedGenerator::new(Arc::new(Fixed(Ok(empty_document()))), metrics.clone());

        let document = observed
            .create_document("https://idp.example.com")
            .await
            .expect("document");

        assert_eq!(document.info.description, "https://idp.example.com");
        assert_eq!(metrics.documents_generated_total.get(), 1);
        assert_eq!(metrics.document_generation_duration_seconds.get_sample_count(), 1);
    }

    #[tokio::test]
    async fn failure_is_counted_by_code() {
        let metrics = Metrics::new().expect("metrics");
        let error = DocumentError::unsupported_endpoint("/connect/token");
        let observed = ObservedGenerator::new(Arc::new(Fixed(Err(error.clone()))), metrics.clone());

        assert_eq!(observed.create_document("https://idp").await, Err(error));
        assert_eq!(metrics.documents_generated_total.get(), 0);
        assert_eq!(
            metrics
                .document_generation_failures_total
                .with_label_values(&["unsupported_endpoint"])
                .get(),
            1
        );
    }
}
