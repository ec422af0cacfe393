//! Knowledge base client configuration and its validation

use serde::Deserialize;

use crate::domain::DomainError;

/// Credentials identifying the target dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, dataset_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            dataset_id: Some(dataset_id.into()),
        }
    }

    /// Checks both fields, reporting the first one missing
    pub fn validate(&self) -> Result<(), DomainError> {
        if is_blank(self.api_key.as_deref()) {
            return Err(DomainError::config_invalid("API key is missing"));
        }
        if is_blank(self.dataset_id.as_deref()) {
            return Err(DomainError::config_invalid("dataset ID is missing"));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Returns false when the config is absent or either field is blank
pub fn validate_config(config: Option<&ClientConfig>) -> bool {
    config.is_some_and(ClientConfig::is_valid)
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
