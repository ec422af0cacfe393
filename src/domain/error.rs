use thiserror::Error;

/// Core domain errors
///
/// Every failure mode of a knowledge base call ends up here. The public client
/// operations never return these to callers; they are logged, emitted as
/// events, and collapsed into a boolean.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    ConfigInvalid { message: String },

    #[error("Skipped: {message}")]
    InputSkipped { message: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("{message}")]
    ResponseRejected { status: u16, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl DomainError {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn input_skipped(message: impl Into<String>) -> Self {
        Self::InputSkipped {
            message: message.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn response_rejected(status: u16, message: impl Into<String>) -> Self {
        Self::ResponseRejected {
            status,
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Skips are no-ops rather than failures
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::InputSkipped { .. })
    }
}
