use actix_web::HttpRequest;

/// Picks the issuer URI handed to the document generator.
///
/// A configured issuer always wins. Otherwise the issuer is `scheme://host` of
/// the inbound request, honouring `Forwarded`/`X-Forwarded-*` headers.
#[derive(Debug, Clone)]
pub struct IssuerResolver {
    configured: Option<String>,
    lower_case: bool,
}

impl IssuerResolver {
    pub fn new(configured: Option<String>, lower_case: bool) -> Self {
        Self {
            configured,
            lower_case,
        }
    }

    /// Always resolves to `uri`, untouched.
    pub fn fixed(uri: impl Into<String>) -> Self {
        Self::new(Some(uri.into()), false)
    }

    pub fn resolve(&self, req: &HttpRequest) -> String {
        if let Some(uri) = &self.configured {
            return uri.clone();
        }
        let info = req.connection_info();
        issuer_from_parts(info.scheme(), info.host(), self.lower_case)
    }
}

/// `scheme://host` without a trailing slash, lower-cased on request.
pub fn issuer_from_parts(scheme: &str, host: &str, lower_case: bool) -> String {
    let issuer = format!("{scheme}://{host}");
    let issuer = issuer.trim_end_matches('/');
    if lower_case {
        issuer.to_lowercase()
    } else {
        issuer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn configured_issuer_is_returned_verbatim() {
        let resolver = IssuerResolver::new(Some("HTTPS://IdP.Example.com/".to_string()), true);
        let req = TestRequest::default()
            .insert_header(("host", "other.example.com"))
            .to_http_request();

        assert_eq!(resolver.resolve(&req), "HTTPS://IdP.Example.com/");
    }

    #[test]
    fn request_host_is_used_when_unconfigured() {
        let req = TestRequest::default()
            .insert_header(("host", "IdP.Example.com:8443"))
            .to_http_request();

        assert_eq!(
            IssuerResolver::new(None, true).resolve(&req),
            "http://idp.example.com:8443"
        );
        assert_eq!(
            IssuerResolver::new(None, false).resolve(&req),
            "http://IdP.Example.com:8443"
        );
    }

    #[test]
    fn forwarded_proto_is_honoured() {
        let req = TestRequest::default()
            .insert_header(("host", "idp.example.com"))
            .insert_header(("x-forwarded-proto", "https"))
            .to_http_request();

        assert_eq!(
            IssuerResolver::new(None, true).resolve(&req),
            "https://idp.example.com"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(issuer_from_parts("https", "idp/", false), "https://idp");
    }
}
