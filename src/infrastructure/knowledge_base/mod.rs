//! Knowledge base client implementations

mod coze;

pub use coze::{CozeKnowledgeBaseClient, DEFAULT_COZE_BASE_URL};
