//! Daily motivation configuration

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;

/// Which message generation strategy to use.
///
/// Chosen once at startup; the rest of the system only sees the
/// `MessageGenerator` port.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorStrategy {
    /// Fixed in-memory pool, no external calls.
    #[default]
    StaticPool,
    /// OpenRouter chat completions.
    #[serde(rename = "openrouter")]
    OpenRouter,
}

/// Daily motivation configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MotivationConfig {
    /// Generation strategy
    #[serde(default)]
    pub strategy: GeneratorStrategy,

    /// OpenRouter API key (required for the openrouter strategy)
    pub openrouter_api_key: Option<Secret<String>>,

    /// OpenRouter model override
    pub openrouter_model: Option<String>,

    /// OpenRouter base URL override
    pub openrouter_base_url: Option<String>,
}

impl MotivationConfig {
    /// Validate motivation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.strategy == GeneratorStrategy::OpenRouter && self.openrouter_api_key.is_none() {
            return Err(ValidationError::MissingRequired(
                "MOTIVATION__OPENROUTER_API_KEY",
            ));
        }
        if let Some(url) = &self.openrouter_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidOpenRouterUrl);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_static_pool() {
        let config = MotivationConfig::default();
        assert_eq!(config.strategy, GeneratorStrategy::StaticPool);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn openrouter_without_key_is_invalid() {
        let config = MotivationConfig {
            strategy: GeneratorStrategy::OpenRouter,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn openrouter_with_key_is_valid() {
        let config = MotivationConfig {
            strategy: GeneratorStrategy::OpenRouter,
            openrouter_api_key: Some(Secret::new("sk-or-test".to_string())),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_must_be_http() {
        let config = MotivationConfig {
            openrouter_base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
