use actix_web::{http::StatusCode, HttpResponse};

use apidoc_core::{Document, DocumentError};
use apidoc_openapi::render;

/// 200 `application/json` response carrying the Swagger 2.0 rendering of `document`.
pub fn document_response(document: &Document) -> Result<HttpResponse, DocumentError> {
    let rendered = render(document)
        .map_err(|e| DocumentError::invalid("document", format!("serialization failed: {e}")))?;

    let status = StatusCode::from_u16(rendered.status).unwrap_or(StatusCode::OK);
    Ok(HttpResponse::build(status)
        .content_type(rendered.content_type)
        .body(rendered.body))
}
