//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Sector not found in the catalog
    #[error("Sector '{0}' not found")]
    SectorNotFound(String),

    /// A sector draft is missing required properties (camelCase field names, declaration order)
    #[error("Missing required properties: {}", .0.join(", "))]
    MissingProperties(Vec<String>),

    /// A navigation link could not be resolved to a destination
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// The host refused or failed a navigation
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SectorNotFound(_)
            | Self::MissingProperties(_)
            | Self::InvalidLink(_)
            | Self::ValidationError(_) => true,
            Self::NavigationFailed(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_properties_lists_every_field() {
        let err = CoreError::MissingProperties(vec!["category".into(), "mockupType".into()]);
        assert_eq!(
            err.to_string(),
            "Missing required properties: category, mockupType"
        );
        assert!(err.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::SectorNotFound("nonexistent".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "SectorNotFound");
        assert_eq!(json["details"], "nonexistent");
    }

    #[test]
    fn navigation_failure_is_not_expected() {
        assert!(!CoreError::NavigationFailed("blocked".into()).is_expected());
    }
}
