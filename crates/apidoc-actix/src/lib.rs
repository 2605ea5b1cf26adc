//! Actix-web HTTP surface for the API-description document.
//!
//! This crate only holds framework-specific code. The document model and the
//! request gate live in `apidoc-core`; assembly sits behind the
//! `DocumentGenerator` port from `apidoc-ports`.

pub mod handlers;
pub mod issuer;
pub mod responder;

use actix_cors::Cors;
use actix_web::web;

pub use issuer::IssuerResolver;

/// Permissive GET-only CORS so browser-based explorers can fetch the document.
///
/// Preflight handling is disabled: `OPTIONS` reaches the handler and is
/// answered by the request gate like every other non-GET method.
pub fn document_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .disable_preflight()
        .max_age(3600)
}

/// Register the document route at `swagger_path` plus `/health` and `/metrics`.
///
/// Expects `RequestGate`, `IssuerResolver`, `DynDocumentGenerator` and `Metrics`
/// as app data.
pub fn configure(cfg: &mut web::ServiceConfig, swagger_path: &str) {
    cfg.service(
        web::resource(swagger_path)
            .wrap(document_cors())
            .route(web::route().to(handlers::swagger::swagger_document)),
    )
    .route("/health", web::get().to(handlers::admin::health))
    .route("/metrics", web::get().to(handlers::admin::system_metrics));
}
