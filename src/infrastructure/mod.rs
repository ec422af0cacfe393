//! Infrastructure layer - External service implementations

pub mod encoding;
pub mod http_client;
pub mod knowledge_base;
pub mod logging;
