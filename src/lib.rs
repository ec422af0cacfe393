//! Coze knowledge base sync
//!
//! Uploads locally authored documents to a Coze knowledge base dataset and
//! deletes them again:
//! - Credential validation
//! - Base64 transport encoding of document content
//! - Single-request create/delete calls with a tolerant response check
//! - Optional event callback for surfacing progress and failures

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{validate_config, ClientConfig, DomainError, EventEmitter, SyncEventKind};
pub use infrastructure::http_client::{HttpClient, HttpClientTrait};
pub use infrastructure::knowledge_base::CozeKnowledgeBaseClient;
