//! REST graph service backend.
//!
//! Talks to the Agora graph API:
//!
//! - `GET  {base}/nodes/{kind}/lookup?text=...` - existence check (404 = no match)
//! - `POST {base}/nodes/{kind}` - create a node
//! - `GET  {base}/health` - availability probe

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::str::FromStr;

use graph_model::{NodeKind, NodeRef};

use super::traits::{BackendError, GraphBackend};

/// REST backend for the graph service.
pub struct HttpGraphBackend {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    backend_id: String,
}

impl HttpGraphBackend {
    /// Create a backend for the given base URL.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        let backend_id = format!("graph-api:{base_url}");

        Self {
            client,
            base_url,
            api_token,
            backend_id,
        }
    }

    /// Create a backend pointing at a local development server.
    pub fn local(port: u16) -> Self {
        Self::new(format!("http://localhost:{port}/api"), None)
    }

    fn lookup_url(&self, kind: NodeKind) -> String {
        format!("{}/nodes/{}/lookup", self.base_url, kind.as_str())
    }

    fn nodes_url(&self, kind: NodeKind) -> String {
        format!("{}/nodes/{}", self.base_url, kind.as_str())
    }

    fn auth_header(&self) -> Option<String> {
        self.api_token.as_ref().map(|t| format!("Bearer {t}"))
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(header::AUTHORIZATION, auth),
            None => request,
        }
    }
}

/// Node reference as the API serializes it.
#[derive(Debug, Deserialize)]
struct NodeRefWire {
    id: String,
    kind: String,
    #[serde(default)]
    label: String,
}

impl NodeRefWire {
    fn into_ref(self) -> Result<NodeRef, BackendError> {
        let kind = NodeKind::from_str(&self.kind)
            .map_err(|e| BackendError::ParseError(e.to_string()))?;
        Ok(NodeRef::new(self.id, kind, self.label))
    }
}

async fn error_for_status(response: reqwest::Response) -> BackendError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::SERVICE_UNAVAILABLE {
        return BackendError::Unavailable(format!("HTTP {status}"));
    }

    BackendError::RequestFailed(format!("HTTP {status}: {body}"))
}

#[async_trait]
impl GraphBackend for HttpGraphBackend {
    fn id(&self) -> &str {
        &self.backend_id
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        self.with_auth(self.client.get(&url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    async fn check_exists(
        &self,
        kind: NodeKind,
        text: &str,
    ) -> Result<Option<NodeRef>, BackendError> {
        let request = self
            .client
            .get(self.lookup_url(kind))
            .query(&[("text", text)]);

        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let wire: NodeRefWire = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        wire.into_ref().map(Some)
    }

    async fn create_node(
        &self,
        kind: NodeKind,
        payload: serde_json::Value,
    ) -> Result<NodeRef, BackendError> {
        let request = self.client.post(self.nodes_url(kind)).json(&payload);

        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_for_status(response).await);
        }

        let wire: NodeRefWire = response
            .json()
            .await
            .map_err(|e| BackendError::ParseError(e.to_string()))?;

        wire.into_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_local_backend() {
        let backend = HttpGraphBackend::local(3000);
        assert_eq!(backend.id(), "graph-api:http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_lookup_hit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nodes/word/lookup"))
            .and(query_param("text", "liberty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "node-1",
                "kind": "word",
                "label": "liberty",
            })))
            .mount(&server)
            .await;

        let backend = HttpGraphBackend::new(server.uri(), None);
        let found = backend
            .check_exists(NodeKind::Word, "liberty")
            .await
            .unwrap();

        let node = found.unwrap();
        assert_eq!(node.id, "node-1");
        assert_eq!(node.kind, NodeKind::Word);
    }

    #[tokio::test]
    async fn test_lookup_404_is_no_match() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nodes/word/lookup"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = HttpGraphBackend::new(server.uri(), None);
        let found = backend
            .check_exists(NodeKind::Word, "nonexistent")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_lookup_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nodes/word/lookup"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let backend = HttpGraphBackend::new(server.uri(), None);
        let result = backend.check_exists(NodeKind::Word, "liberty").await;
        assert!(matches!(result, Err(BackendError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_create_posts_payload() {
        let payload = serde_json::json!({
            "word": "liberty",
            "definition": "",
            "discussion": "",
            "public_credit": false,
        });

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/nodes/word"))
            .and(body_json_string(payload.to_string()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "node-7",
                "kind": "word",
                "label": "liberty",
            })))
            .mount(&server)
            .await;

        let backend = HttpGraphBackend::new(server.uri(), None);
        let node = backend
            .create_node(NodeKind::Word, payload)
            .await
            .unwrap();
        assert_eq!(node.id, "node-7");
    }

    #[tokio::test]
    async fn test_unparseable_kind_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nodes/word/lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "node-1",
                "kind": "mystery",
            })))
            .mount(&server)
            .await;

        let backend = HttpGraphBackend::new(server.uri(), None);
        let result = backend.check_exists(NodeKind::Word, "liberty").await;
        assert!(matches!(result, Err(BackendError::ParseError(_))));
    }
}
