//! Knowledge base document payloads

use serde::{Deserialize, Serialize};

/// File extension every uploaded document name carries
pub const DOCUMENT_EXTENSION: &str = "md";

/// Format type sent with every create request
pub const FORMAT_TYPE_DOCUMENT: u8 = 0;

/// Document source kind for content uploaded inline as base64
pub const DOCUMENT_SOURCE_BASE64: u8 = 0;

/// Chunking policy applied by the service when ingesting a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkStrategy {
    pub chunk_type: u8,
    pub remove_extra_spaces: bool,
    pub caption_type: u8,
}

impl Default for ChunkStrategy {
    fn default() -> Self {
        Self {
            chunk_type: 0,
            remove_extra_spaces: true,
            caption_type: 0,
        }
    }
}

/// Where the document content comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file_type: String,
    pub document_source: u8,
    pub file_base64: String,
}

/// A single document inside a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentBase {
    pub name: String,
    pub source_info: SourceInfo,
}

impl DocumentBase {
    /// Builds a markdown document from a title and already-encoded content
    pub fn markdown(title: &str, file_base64: impl Into<String>) -> Self {
        Self {
            name: document_name(title),
            source_info: SourceInfo {
                file_type: DOCUMENT_EXTENSION.to_string(),
                document_source: DOCUMENT_SOURCE_BASE64,
                file_base64: file_base64.into(),
            },
        }
    }
}

/// Body of `POST /document/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub dataset_id: String,
    pub chunk_strategy: ChunkStrategy,
    pub format_type: u8,
    pub document_bases: Vec<DocumentBase>,
}

impl UploadRequest {
    pub fn new(dataset_id: impl Into<String>, document: DocumentBase) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            chunk_strategy: ChunkStrategy::default(),
            format_type: FORMAT_TYPE_DOCUMENT,
            document_bases: vec![document],
        }
    }
}

/// Body of `DELETE /document/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub dataset_id: String,
}

impl DeleteRequest {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
        }
    }
}

/// Appends the markdown extension unless the title already has it
pub fn document_name(title: &str) -> String {
    let suffix = format!(".{}", DOCUMENT_EXTENSION);
    if title.ends_with(&suffix) {
        title.to_string()
    } else {
        format!("{}{}", title, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_name_appends_extension() {
        assert_eq!(document_name("notes"), "notes.md");
    }

    #[test]
    fn test_document_name_keeps_existing_extension() {
        assert_eq!(document_name("notes.md"), "notes.md");
    }

    #[test]
    fn test_document_name_other_extension() {
        assert_eq!(document_name("notes.txt"), "notes.txt.md");
    }

    #[test]
    fn test_upload_request_wire_shape() {
        let request = UploadRequest::new("d1", DocumentBase::markdown("a", "aGVsbG8="));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "dataset_id": "d1",
                "chunk_strategy": {
                    "chunk_type": 0,
                    "remove_extra_spaces": true,
                    "caption_type": 0
                },
                "format_type": 0,
                "document_bases": [{
                    "name": "a.md",
                    "source_info": {
                        "file_type": "md",
                        "document_source": 0,
                        "file_base64": "aGVsbG8="
                    }
                }]
            })
        );
    }

    #[test]
    fn test_delete_request_wire_shape() {
        let json = serde_json::to_value(DeleteRequest::new("d1")).unwrap();
        assert_eq!(json, serde_json::json!({ "dataset_id": "d1" }));
    }
}
