use actix_web::{web, HttpResponse, Result};

use apidoc_observability::Metrics;

/// Prometheus text exposition of the process metrics
pub async fn system_metrics(metrics: web::Data<Metrics>) -> Result<HttpResponse> {
    let buffer = apidoc_observability::encode_prometheus_text(&metrics.registry)
        .map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

/// Health check endpoint
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "oidc_apidoc_server",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
