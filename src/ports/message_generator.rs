//! Message generation strategy port.
//!
//! Two interchangeable implementations sit behind this trait: a static
//! in-memory pool and an external completion API. Selection happens once
//! at process start; the chosen strategy is injected as `Arc<dyn
//! MessageGenerator>`, never branched on at call sites.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a message generation strategy.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// API key rejected by the completion endpoint.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the completion endpoint.
    #[error("rate limited")]
    RateLimited,

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Response was malformed or did not conform to the schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// Endpoint unreachable or persistently failing.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
}

impl GeneratorError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Port for producing one motivational message.
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Generates a message string.
    async fn generate(&self) -> Result<String, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_trait_is_object_safe() {
        fn _accepts_dyn(_g: &dyn MessageGenerator) {}
    }

    #[test]
    fn timeout_displays_duration() {
        let err = GeneratorError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
