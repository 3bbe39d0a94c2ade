//! Combination policy configuration

use serde::{Deserialize, Serialize};

use crate::error::{OutcomeError, ResultExt};
use crate::types::NotFoundPolicy;

/// Separator used when several failure messages are joined
pub const DEFAULT_ERROR_SEPARATOR: &str = "\n";

/// Policy used by [`Outcome::combine_all_with`](crate::Outcome::combine_all_with)
/// and [`Outcome::collect_with`](crate::Outcome::collect_with)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutcomeConfig {
    /// How `NotFound` inputs are classified
    pub not_found: NotFoundPolicy,

    /// Joins the error messages of failing inputs
    pub error_separator: String,
}

impl Default for OutcomeConfig {
    fn default() -> Self {
        Self {
            not_found: NotFoundPolicy::TreatAsFailure,
            error_separator: DEFAULT_ERROR_SEPARATOR.to_string(),
        }
    }
}

impl OutcomeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the NotFound policy
    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    /// Set the error separator
    pub fn with_error_separator(mut self, separator: impl Into<String>) -> Self {
        self.error_separator = separator.into();
        self
    }

    /// Parse configuration from JSON.
    ///
    /// Parse errors come back as [`OutcomeError::WithContext`] around the
    /// serde error.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str::<Self>(json)
            .map_err(OutcomeError::from)
            .with_context(|| format!("Parsing outcome config ({} bytes)", json.len()))
    }

    /// Render configuration as pretty JSON
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(OutcomeError::from)
            .context("Rendering outcome config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutcomeConfig::default();
        assert_eq!(config.not_found, NotFoundPolicy::TreatAsFailure);
        assert_eq!(config.error_separator, "\n");
    }

    #[test]
    fn test_config_builder() {
        let config = OutcomeConfig::new()
            .with_not_found(NotFoundPolicy::TreatAsSuccess)
            .with_error_separator("; ");

        assert_eq!(config.not_found, NotFoundPolicy::TreatAsSuccess);
        assert_eq!(config.error_separator, "; ");
    }

    #[test]
    fn test_config_serialization() {
        let config = OutcomeConfig::new().with_error_separator(" | ");
        let json = config.to_json().unwrap();
        let parsed = OutcomeConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed = OutcomeConfig::from_json(r#"{"notFound": "treat_as_success"}"#).unwrap();
        assert_eq!(parsed.not_found, NotFoundPolicy::TreatAsSuccess);
        assert_eq!(parsed.error_separator, DEFAULT_ERROR_SEPARATOR);
    }

    #[test]
    fn test_invalid_config_is_serialization_error() {
        let err = OutcomeConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Parsing outcome config (9 bytes): "));
        match err {
            OutcomeError::WithContext { context, source } => {
                assert_eq!(context, "Parsing outcome config (9 bytes)");
                assert!(matches!(*source, OutcomeError::Serialization(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_policy_is_rejected_with_context() {
        let err = OutcomeConfig::from_json(r#"{"notFound": "ignore"}"#).unwrap_err();
        assert!(err.to_string().contains("Parsing outcome config"));
        assert!(err.failure_message().is_none());
    }
}
