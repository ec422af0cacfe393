//! Response envelope returned by the knowledge base service

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Loosely typed success/failure indicator
///
/// The service signals success in more than one way (`code == 0`,
/// `success == true`, `msg == "success"`), and which one is present varies
/// between endpoints and deployments. All of them are accepted.
///
/// A field holding an unexpected JSON type reads as absent instead of
/// failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "lenient_number")]
    pub code: Option<f64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Success check for document creation: any of the three signals
    pub fn is_upload_success(&self) -> bool {
        self.code == Some(0.0)
            || self.success == Some(true)
            || self.msg.as_deref() == Some("success")
    }

    /// Success check for document deletion; `msg` is not consulted
    pub fn is_delete_success(&self) -> bool {
        self.code == Some(0.0) || self.success == Some(true)
    }

    /// First non-empty of `msg` then `error`
    pub fn failure_message(&self) -> Option<&str> {
        non_empty(self.msg.as_deref()).or_else(|| non_empty(self.error.as_deref()))
    }

    /// `msg` only, when non-empty
    pub fn message(&self) -> Option<&str> {
        non_empty(self.msg.as_deref())
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
