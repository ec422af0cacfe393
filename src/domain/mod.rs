//! Domain layer - Core types for knowledge base sync

pub mod error;
pub mod knowledge_base;

pub use error::DomainError;
pub use knowledge_base::{
    document_name, validate_config, ChunkStrategy, ClientConfig, DeleteRequest, DocumentBase,
    EventEmitter, ResponseEnvelope, SourceInfo, SyncEventKind, UploadRequest,
};
