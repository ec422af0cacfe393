use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

/// HTTP verbs used by the knowledge base API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single outbound JSON request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a response, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
///
/// Non-2xx statuses are returned as responses, not errors, so callers can
/// still read the service's error envelope. Only failures to get a response
/// at all become `DomainError::Transport`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    async fn send_json(&self, request: HttpRequest) -> Result<HttpResponse, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn send_json(&self, request: HttpRequest) -> Result<HttpResponse, DomainError> {
        debug!(method = request.method.as_str(), url = %request.url, "Sending HTTP request");

        let mut builder = self
            .client
            .request(request.method.into(), &request.url);

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    "Request timed out".to_string()
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    format!("Request failed: {}", e)
                };
                DomainError::transport(message)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_response_is_success() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete).as_str(),
            HttpMethod::Delete.as_str()
        );
    }

    #[test]
    fn test_request_header_lookup() {
        let request = HttpRequest::new(HttpMethod::Post, "http://x", serde_json::json!({}))
            .with_header("Content-Type", "application/json");

        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_send_json_returns_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("x-test", "1"))
            .and(body_json(serde_json::json!({"a": 1})))
            .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"msg":"denied"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let request = HttpRequest::new(
            HttpMethod::Post,
            format!("{}/echo", server.uri()),
            serde_json::json!({"a": 1}),
        )
        .with_header("x-test", "1");

        let response = HttpClient::new().send_json(request).await.unwrap();

        assert_eq!(response.status, 403);
        assert_eq!(response.body, r#"{"msg":"denied"}"#);
    }

    #[tokio::test]
    async fn test_send_json_delete_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/document/42"))
            .and(body_json(serde_json::json!({"dataset_id": "d1"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = HttpRequest::new(
            HttpMethod::Delete,
            format!("{}/document/42", server.uri()),
            serde_json::json!({"dataset_id": "d1"}),
        );

        let response = HttpClient::new().send_json(request).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_send_json_connection_refused() {
        // Bind then drop so nothing is listening on the port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = HttpRequest::new(
            HttpMethod::Post,
            format!("http://{}/document/create", addr),
            serde_json::json!({}),
        );

        let result = HttpClient::new().send_json(request).await;
        assert!(matches!(result, Err(DomainError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_with_timeout_builds() {
        assert!(HttpClient::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
