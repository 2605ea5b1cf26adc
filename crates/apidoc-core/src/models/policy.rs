use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the assembler does when an endpoint builder reports `Unsupported`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedPolicy {
    /// Abort the whole document with `DocumentError::UnsupportedEndpoint`.
    #[default]
    FailDocument,
    /// Leave the path out and keep going.
    OmitPath,
}

impl UnsupportedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnsupportedPolicy::FailDocument => "fail_document",
            UnsupportedPolicy::OmitPath => "omit_path",
        }
    }
}

impl FromStr for UnsupportedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_document" => Ok(UnsupportedPolicy::FailDocument),
            "omit_path" => Ok(UnsupportedPolicy::OmitPath),
            other => Err(format!(
                "unknown unsupported-endpoint policy '{other}', expected 'fail_document' or 'omit_path'"
            )),
        }
    }
}
