//! Sync events surfaced to the caller

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Category of a sync event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncEventKind {
    Warning,
    Error,
    Info,
    Success,
}

impl SyncEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for SyncEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback receiving `(kind, title, description)`
///
/// Purely for surfacing; it never changes the outcome of an operation.
pub type EventEmitter = Arc<dyn Fn(SyncEventKind, &str, &str) + Send + Sync>;
