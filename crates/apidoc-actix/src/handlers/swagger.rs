use actix_web::{web, HttpRequest, HttpResponse, Result};

use apidoc_core::{Admission, GateRejection, RequestGate};
use apidoc_observability::Metrics;
use apidoc_ports::DynDocumentGenerator;

use crate::issuer::IssuerResolver;
use crate::responder::document_response;

/// The document endpoint. Registered for every method; the gate decides.
pub async fn swagger_document(
    req: HttpRequest,
    gate: web::Data<RequestGate>,
    issuer: web::Data<IssuerResolver>,
    generator: web::Data<DynDocumentGenerator>,
    metrics: web::Data<Metrics>,
) -> Result<HttpResponse> {
    tracing::trace!(method = %req.method(), path = req.path(), "Processing document request");

    if let Admission::Reject(rejection) = gate.admit(req.method().as_str()) {
        metrics
            .gate_rejections_total
            .with_label_values(&[rejection.reason()])
            .inc();
        match rejection {
            GateRejection::MethodNotAllowed => {
                tracing::warn!(method = %req.method(), "Invalid HTTP method for document endpoint")
            }
            GateRejection::FeatureDisabled => tracing::info!("Document endpoint is disabled"),
        }
        return Err(rejection.into());
    }

    let issuer_uri = issuer.resolve(&req);
    let document = generator.create_document(&issuer_uri).await?;
    Ok(document_response(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use apidoc_core::{Document, DocumentError};
    use apidoc_ports::DocumentGenerator;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Failing;

    #[async_trait]
    impl DocumentGenerator for Failing {
        async fn create_document(&self, _issuer_uri: &str) -> Result<Document, DocumentError> {
            Err(DocumentError::unsupported_endpoint("/connect/token"))
        }
    }

    #[actix_rt::test]
    async fn generation_failure_is_a_500_with_json_error() {
        let metrics = Metrics::new().expect("metrics");
        let generator: DynDocumentGenerator = Arc::new(Failing);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RequestGate::new(true)))
                .app_data(web::Data::new(IssuerResolver::fixed("https://idp.example.com")))
                .app_data(web::Data::new(generator))
                .app_data(web::Data::new(metrics))
                .route("/swagger.json", web::route().to(swagger_document)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/swagger.json").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "unsupported_endpoint");
        assert!(body["error_description"]
            .as_str()
            .is_some_and(|d| d.contains("/connect/token")));
    }

    #[actix_rt::test]
    async fn rejections_are_counted_by_reason() {
        let metrics = Metrics::new().expect("metrics");
        let generator: DynDocumentGenerator = Arc::new(Failing);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RequestGate::new(false)))
                .app_data(web::Data::new(IssuerResolver::fixed("https://idp.example.com")))
                .app_data(web::Data::new(generator))
                .app_data(web::Data::new(metrics.clone()))
                .route("/swagger.json", web::route().to(swagger_document)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::delete().uri("/swagger.json").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            resp.headers()
                .get(actix_web::http::header::ALLOW)
                .and_then(|v| v.to_str().ok()),
            Some("GET")
        );

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/swagger.json").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        for reason in ["method_not_allowed", "feature_disabled"] {
            assert_eq!(
                metrics
                    .gate_rejections_total
                    .with_label_values(&[reason])
                    .get(),
                1
            );
        }
    }
}
