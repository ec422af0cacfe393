//! Knowledge Base domain - document payloads, response envelope, sync events

mod document;
mod envelope;
mod event;
mod validation;

pub use document::{
    document_name, ChunkStrategy, DeleteRequest, DocumentBase, SourceInfo, UploadRequest,
    DOCUMENT_EXTENSION, DOCUMENT_SOURCE_BASE64, FORMAT_TYPE_DOCUMENT,
};
pub use envelope::ResponseEnvelope;
pub use event::{EventEmitter, SyncEventKind};
pub use validation::{validate_config, ClientConfig};

pub(crate) use validation::is_blank;
