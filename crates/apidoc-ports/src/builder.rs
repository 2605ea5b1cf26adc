use std::sync::Arc;

use apidoc_core::PathDescriptor;

/// Result of asking a builder for its path descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Built(PathDescriptor),
    /// The endpoint has no description yet.
    Unsupported,
}

impl BuildOutcome {
    pub fn into_descriptor(self) -> Option<PathDescriptor> {
        match self {
            BuildOutcome::Built(descriptor) => Some(descriptor),
            BuildOutcome::Unsupported => None,
        }
    }
}

impl From<PathDescriptor> for BuildOutcome {
    fn from(descriptor: PathDescriptor) -> Self {
        BuildOutcome::Built(descriptor)
    }
}

/// Produces the description of one protocol endpoint.
///
/// One implementation per endpoint is registered with the endpoint registry.
/// Builders are called on every generation and must be deterministic.
pub trait PathBuilder: Send + Sync {
    fn build(&self) -> BuildOutcome;
}

pub type DynPathBuilder = Arc<dyn PathBuilder>;

/// Builder for endpoints that have no description yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedBuilder;

impl PathBuilder for UnsupportedBuilder {
    fn build(&self) -> BuildOutcome {
        BuildOutcome::Unsupported
    }
}

impl<F> PathBuilder for F
where
    F: Fn() -> BuildOutcome + Send + Sync,
{
    fn build(&self) -> BuildOutcome {
        self()
    }
}
