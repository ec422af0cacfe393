//! Coze knowledge base client
//!
//! Uploads markdown documents to a Coze dataset and deletes them again. Each
//! call is a single request/response exchange with no retries and no state
//! kept between calls. The public operations report a plain `bool`; details
//! go to the tracing log and to the optional event emitter.

use tracing::{debug, info, instrument, warn};

use crate::domain::knowledge_base::is_blank;
use crate::domain::{
    ClientConfig, DeleteRequest, DocumentBase, DomainError, EventEmitter, ResponseEnvelope,
    SyncEventKind, UploadRequest,
};
use crate::infrastructure::encoding::encode_content;
use crate::infrastructure::http_client::{HttpClientTrait, HttpMethod, HttpRequest, HttpResponse};

pub const DEFAULT_COZE_BASE_URL: &str = "https://api.coze.cn/open_api/knowledge";

/// Extra header the Coze gateway requires on every call
const AGW_JS_CONV_HEADER: &str = "Agw-Js-Conv";
const AGW_JS_CONV_VALUE: &str = "str";

/// Client for the Coze knowledge base document API
pub struct CozeKnowledgeBaseClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
    emitter: Option<EventEmitter>,
}

impl<C: HttpClientTrait> std::fmt::Debug for CozeKnowledgeBaseClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CozeKnowledgeBaseClient")
            .field("base_url", &self.base_url)
            .field("emitter", &self.emitter.is_some())
            .finish()
    }
}

impl<C: HttpClientTrait> CozeKnowledgeBaseClient<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_COZE_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            emitter: None,
        }
    }

    /// Attaches a callback that receives every sync event
    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_url(&self) -> String {
        format!("{}/document/create", self.base_url)
    }

    fn document_url(&self, doc_id: &str) -> String {
        format!("{}/document/{}", self.base_url, doc_id)
    }

    fn request(
        &self,
        method: HttpMethod,
        url: String,
        api_key: &str,
        body: serde_json::Value,
    ) -> HttpRequest {
        HttpRequest::new(method, url, body)
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", format!("Bearer {}", api_key))
            .with_header(AGW_JS_CONV_HEADER, AGW_JS_CONV_VALUE)
    }

    fn emit(&self, kind: SyncEventKind, title: &str, description: &str) {
        if let Some(emitter) = &self.emitter {
            emitter(kind, title, description);
        }
    }

    /// Uploads one document; returns true only when the service accepted it
    ///
    /// Blank titles or contents are skipped without a request. Failures of
    /// any kind are logged, emitted, and reported as `false`.
    #[instrument(skip(self, api_key, content))]
    pub async fn upload_document(
        &self,
        api_key: &str,
        dataset_id: &str,
        title: &str,
        content: &str,
    ) -> bool {
        match self.try_upload(api_key, dataset_id, title, content).await {
            Ok(name) => {
                info!(document = %name, "Document uploaded to knowledge base");
                self.emit(
                    SyncEventKind::Success,
                    "Upload succeeded",
                    &format!("[{}] synced to the Coze knowledge base", name),
                );
                true
            }
            Err(e) => {
                self.report_upload_failure(title, &e);
                false
            }
        }
    }

    /// Deletes one document by its service-side ID
    #[instrument(skip(self, api_key))]
    pub async fn delete_document(&self, api_key: &str, dataset_id: &str, doc_id: &str) -> bool {
        match self.try_delete(api_key, dataset_id, doc_id).await {
            Ok(()) => {
                info!(doc_id = %doc_id, "Document deleted from knowledge base");
                self.emit(
                    SyncEventKind::Info,
                    "Document deleted",
                    &format!(
                        "Deleted document from the Coze knowledge base (ID: ...{})",
                        id_suffix(doc_id)
                    ),
                );
                true
            }
            Err(e) => {
                self.report_delete_failure(doc_id, &e);
                false
            }
        }
    }

    /// Runs the upload guards and builds the request body
    pub fn build_upload_request(
        &self,
        dataset_id: &str,
        title: &str,
        content: &str,
    ) -> Result<UploadRequest, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::input_skipped(
                "Document title is empty, nothing to upload",
            ));
        }

        if content.trim().is_empty() {
            return Err(DomainError::input_skipped(format!(
                "[{}] has no content, nothing to upload",
                title
            )));
        }

        let file_base64 = encode_content(content).map_err(|e| {
            DomainError::encoding(format!("[{}] content could not be encoded: {}", title, e))
        })?;

        Ok(UploadRequest::new(
            dataset_id,
            DocumentBase::markdown(title, file_base64),
        ))
    }

    async fn try_upload(
        &self,
        api_key: &str,
        dataset_id: &str,
        title: &str,
        content: &str,
    ) -> Result<String, DomainError> {
        ClientConfig::new(api_key, dataset_id).validate()?;

        let upload = self.build_upload_request(dataset_id, title, content)?;
        let name = upload
            .document_bases
            .first()
            .map(|doc| doc.name.clone())
            .unwrap_or_default();

        let body = serde_json::to_value(&upload)
            .map_err(|e| DomainError::serialization(format!("Failed to encode request: {}", e)))?;

        debug!(document = %name, "Sending document create request");
        let request = self.request(HttpMethod::Post, self.create_url(), api_key, body);
        let response = self.client.send_json(request).await?;
        let envelope = parse_envelope(&response)?;

        if response.is_success() && envelope.is_upload_success() {
            return Ok(name);
        }

        let message = envelope
            .failure_message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("API request failed: HTTP {}", response.status));
        Err(DomainError::response_rejected(response.status, message))
    }

    async fn try_delete(
        &self,
        api_key: &str,
        dataset_id: &str,
        doc_id: &str,
    ) -> Result<(), DomainError> {
        ClientConfig::new(api_key, dataset_id).validate()?;

        if is_blank(Some(doc_id)) {
            return Err(DomainError::input_skipped("Document ID is empty, nothing to delete"));
        }

        let body = serde_json::to_value(DeleteRequest::new(dataset_id))
            .map_err(|e| DomainError::serialization(format!("Failed to encode request: {}", e)))?;

        debug!(doc_id = %doc_id, "Sending document delete request");
        let request = self.request(HttpMethod::Delete, self.document_url(doc_id), api_key, body);
        let response = self.client.send_json(request).await?;
        let envelope = parse_envelope(&response)?;

        if response.is_success() && envelope.is_delete_success() {
            return Ok(());
        }

        let message = envelope
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Delete failed: HTTP {}", response.status));
        Err(DomainError::response_rejected(response.status, message))
    }

    /// Failures are logged at warn level only when no emitter will surface them
    fn logs_failures(&self) -> bool {
        self.emitter.is_none()
    }

    fn log_failure(&self, subject: &str, error: &DomainError) {
        if self.logs_failures() {
            warn!(subject = %subject, error = %error, "Knowledge base call failed");
        } else {
            debug!(subject = %subject, error = %error, "Knowledge base call failed");
        }
    }

    fn report_upload_failure(&self, title: &str, error: &DomainError) {
        match error {
            DomainError::InputSkipped { message } => {
                debug!(reason = %message, "Upload skipped");
                self.emit(SyncEventKind::Info, "Upload skipped", message);
            }
            DomainError::ConfigInvalid { message } => {
                self.log_failure(title, error);
                self.emit(SyncEventKind::Warning, "Configuration error", message);
            }
            DomainError::Encoding { message } => {
                self.log_failure(title, error);
                self.emit(SyncEventKind::Error, "Upload failed", message);
            }
            other => {
                self.log_failure(title, other);
                self.emit(
                    SyncEventKind::Error,
                    "Coze upload failed",
                    &format!("[{}]: {}", title, other),
                );
            }
        }
    }

    fn report_delete_failure(&self, doc_id: &str, error: &DomainError) {
        match error {
            DomainError::InputSkipped { message } => {
                debug!(reason = %message, "Delete skipped");
                self.emit(SyncEventKind::Info, "Delete skipped", message);
            }
            DomainError::ConfigInvalid { message } => {
                self.log_failure(doc_id, error);
                self.emit(SyncEventKind::Warning, "Configuration error", message);
            }
            other => {
                self.log_failure(doc_id, other);
                self.emit(SyncEventKind::Error, "Document delete failed", &other.to_string());
            }
        }
    }
}

/// Reads the body as an envelope
///
/// An unreadable body on an error status still reports the status.
fn parse_envelope(response: &HttpResponse) -> Result<ResponseEnvelope, DomainError> {
    serde_json::from_str(&response.body).map_err(|e| {
        if response.is_success() {
            DomainError::serialization(format!("Failed to parse response: {}", e))
        } else {
            DomainError::response_rejected(
                response.status,
                format!("API request failed: HTTP {}", response.status),
            )
        }
    })
}

/// Last 8 characters of a document ID, for display
fn id_suffix(doc_id: &str) -> String {
    let count = doc_id.chars().count();
    doc_id.chars().skip(count.saturating_sub(8)).collect()
}
