use apidoc_core::content_type::APPLICATION_JSON;
use apidoc_core::Document;

use crate::swagger2::SwaggerDocument;

/// Wire form of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Serialize `document` as Swagger 2.0 JSON with status 200.
pub fn render(document: &Document) -> Result<RenderedDocument, serde_json::Error> {
    let body = serde_json::to_string(&SwaggerDocument::from(document))?;
    Ok(RenderedDocument {
        status: 200,
        content_type: APPLICATION_JSON,
        body,
    })
}

/// Indented Swagger 2.0 JSON, for files checked into the repository.
pub fn render_pretty(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SwaggerDocument::from(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::DocumentAssembler;

    #[test]
    fn renders_ok_json() {
        let document = DocumentAssembler::default()
            .generate("https://idp.example.com")
            .expect("document");
        let rendered = render(&document).expect("render");

        assert_eq!(rendered.status, 200);
        assert_eq!(rendered.content_type, "application/json");

        let parsed: serde_json::Value = serde_json::from_str(&rendered.body).expect("json");
        assert_eq!(parsed["info"]["title"], "OIDC Authorization Server");
        assert_eq!(parsed["info"]["version"], "v1");
    }

    #[test]
    fn pretty_and_compact_agree() {
        let document = DocumentAssembler::default()
            .generate("https://idp.example.com")
            .expect("document");

        let compact: serde_json::Value =
            serde_json::from_str(&render(&document).expect("render").body).expect("json");
        let pretty: serde_json::Value =
            serde_json::from_str(&render_pretty(&document).expect("render")).expect("json");
        assert_eq!(compact, pretty);
    }
}
