//! Admission check for document requests.
//!
//! The gate runs before any assembly work: the method check comes first, then
//! the feature flag. A rejected request never reaches the generator.

use std::fmt;

#[cfg(feature = "actix")]
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    MethodNotAllowed,
    FeatureDisabled,
}

impl GateRejection {
    pub fn status(&self) -> u16 {
        match self {
            GateRejection::MethodNotAllowed => 405,
            GateRejection::FeatureDisabled => 404,
        }
    }

    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            GateRejection::MethodNotAllowed => "method_not_allowed",
            GateRejection::FeatureDisabled => "feature_disabled",
        }
    }
}

impl fmt::Display for GateRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GateRejection::MethodNotAllowed => write!(f, "only GET is supported"),
            GateRejection::FeatureDisabled => write!(f, "document endpoint is disabled"),
        }
    }
}

impl std::error::Error for GateRejection {}

#[cfg(feature = "actix")]
impl ResponseError for GateRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            GateRejection::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GateRejection::FeatureDisabled => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut resp = HttpResponse::build(self.status_code());
        if let GateRejection::MethodNotAllowed = self {
            resp.insert_header((actix_web::http::header::ALLOW, "GET"));
        }
        resp.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Proceed,
    Reject(GateRejection),
}

impl Admission {
    pub fn into_result(self) -> Result<(), GateRejection> {
        match self {
            Admission::Proceed => Ok(()),
            Admission::Reject(rejection) => Err(rejection),
        }
    }
}

/// Decide whether a request for the document may proceed.
///
/// `method` is compared case-insensitively.
pub fn admit(method: &str, feature_enabled: bool) -> Admission {
    if !method.eq_ignore_ascii_case("GET") {
        return Admission::Reject(GateRejection::MethodNotAllowed);
    }
    if !feature_enabled {
        return Admission::Reject(GateRejection::FeatureDisabled);
    }
    Admission::Proceed
}

/// [`admit`] bound to a fixed feature flag.
#[derive(Debug, Clone, Copy)]
pub struct RequestGate {
    feature_enabled: bool,
}

impl RequestGate {
    pub fn new(feature_enabled: bool) -> Self {
        Self { feature_enabled }
    }

    pub fn feature_enabled(&self) -> bool {
        self.feature_enabled
    }

    pub fn admit(&self, method: &str) -> Admission {
        admit(method, self.feature_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_is_rejected_with_405() {
        assert_eq!(
            admit("POST", true),
            Admission::Reject(GateRejection::MethodNotAllowed)
        );
        assert_eq!(GateRejection::MethodNotAllowed.status(), 405);
    }

    #[test]
    fn disabled_feature_is_rejected_with_404() {
        assert_eq!(
            admit("GET", false),
            Admission::Reject(GateRejection::FeatureDisabled)
        );
        assert_eq!(GateRejection::FeatureDisabled.status(), 404);
    }

    #[test]
    fn method_check_precedes_feature_flag() {
        assert_eq!(
            admit("DELETE", false),
            Admission::Reject(GateRejection::MethodNotAllowed)
        );
    }

    #[test]
    fn get_with_feature_enabled_proceeds() {
        assert_eq!(admit("GET", true), Admission::Proceed);
        assert_eq!(admit("get", true), Admission::Proceed);
        assert!(RequestGate::new(true).admit("GET").into_result().is_ok());
    }
}
