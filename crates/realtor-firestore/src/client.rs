//! Firestore REST API client.
//!
//! Thin client over the documents API with:
//! - Token caching with refresh margin
//! - HTTP client tuning (pooling, bounded timeouts)
//! - Exponential backoff with jitter on idempotent reads
//! - Tracing spans around every store call

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::{Client, Method, StatusCode};
use tracing::{debug, info_span, Instrument};

use crate::error::{FirestoreError, FirestoreResult};
use crate::retry::{with_retry, RetryConfig};
use crate::token_cache::TokenCache;
use crate::types::{
    Document, ListDocumentsResponse, RunQueryRequest, RunQueryResponse, StructuredQuery, Value,
};

/// Page size for collection listings.
const LIST_PAGE_SIZE: u32 = 300;

// =============================================================================
// Configuration
// =============================================================================

/// Firestore client configuration.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// GCP project ID
    pub project_id: String,
    /// Database ID (usually "(default)")
    pub database_id: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Retry configuration
    pub retry: RetryConfig,
}

impl FirestoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> FirestoreResult<Self> {
        let project_id = std::env::var("GCP_PROJECT_ID")
            .or_else(|_| std::env::var("FIREBASE_PROJECT_ID"))
            .map_err(|_| {
                FirestoreError::auth_error(
                    "GCP_PROJECT_ID or FIREBASE_PROJECT_ID must be set to access Firestore",
                )
            })?;

        if project_id.is_empty() {
            return Err(FirestoreError::auth_error(
                "GCP_PROJECT_ID or FIREBASE_PROJECT_ID cannot be empty",
            ));
        }

        let connect_timeout_secs: u64 = std::env::var("FIRESTORE_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            project_id,
            database_id: std::env::var("FIRESTORE_DATABASE_ID")
                .unwrap_or_else(|_| "(default)".to_string()),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            retry: RetryConfig::from_env(),
        })
    }
}

// =============================================================================
// Client
// =============================================================================

/// Firestore REST API client.
pub struct FirestoreClient {
    http: Client,
    config: FirestoreConfig,
    base_url: String,
    token_cache: Arc<TokenCache>,
}

impl Clone for FirestoreClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            base_url: self.base_url.clone(),
            token_cache: Arc::clone(&self.token_cache),
        }
    }
}

impl FirestoreClient {
    /// Create a new Firestore client.
    pub async fn new(config: FirestoreConfig) -> FirestoreResult<Self> {
        let auth = Self::create_auth_provider()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("realtor-firestore/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FirestoreError::Network)?;

        let base_url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/{}/documents",
            config.project_id, config.database_id
        );

        Ok(Self {
            http,
            config,
            base_url,
            token_cache: Arc::new(TokenCache::new(auth)),
        })
    }

    fn create_auth_provider() -> FirestoreResult<Arc<dyn TokenProvider>> {
        let service_account = CustomServiceAccount::from_env().map_err(|e| {
            FirestoreError::auth_error(format!("Failed to load service account: {}", e))
        })?;

        match service_account {
            Some(sa) => Ok(Arc::new(sa)),
            None => Err(FirestoreError::auth_error(
                "GOOGLE_APPLICATION_CREDENTIALS not set. \
                 Set it to the path of your service account JSON file.",
            )),
        }
    }

    /// Create from environment variables.
    pub async fn from_env() -> FirestoreResult<Self> {
        let config = FirestoreConfig::from_env()?;
        Self::new(config).await
    }

    fn is_access_token_expired(body: &str) -> bool {
        body.contains("ACCESS_TOKEN_EXPIRED") || body.contains("\"UNAUTHENTICATED\"")
    }

    /// Build document path.
    fn document_path(&self, collection: &str, doc_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, doc_id)
    }

    /// Send a bearer-authorized request, refreshing the cached token once
    /// if the store reports it expired mid-flight.
    async fn send_authorized(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> FirestoreResult<reqwest::Response> {
        let mut token = self.token_cache.get_token().await?;
        let mut refreshed = false;

        loop {
            let mut request = self.http.request(method.clone(), url).bearer_auth(&token);
            if let Some(b) = body {
                request = request.json(b);
            }
            let response = request.send().await?;

            if response.status() == StatusCode::UNAUTHORIZED && !refreshed {
                let text = response.text().await.unwrap_or_default();
                if Self::is_access_token_expired(&text) {
                    self.token_cache.invalidate().await;
                    token = self.token_cache.get_token().await?;
                    refreshed = true;
                    continue;
                }
                return Err(FirestoreError::from_http_status(
                    401,
                    format!("{} failed: {}", url, text),
                ));
            }

            return Ok(response);
        }
    }

    // =========================================================================
    // CRUD Operations
    // =========================================================================

    /// Get a document. `None` when the id does not resolve.
    pub async fn get_document(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> FirestoreResult<Option<Document>> {
        with_retry(&self.config.retry, "get_document", || {
            self.get_document_once(collection, doc_id)
        })
        .await
    }

    async fn get_document_once(
        &self,
        collection: &str,
        doc_id: &str,
    ) -> FirestoreResult<Option<Document>> {
        let url = self.document_path(collection, doc_id);

        self.execute_request("get_document", collection, Some(doc_id), async {
            let response = self.send_authorized(Method::GET, &url, None).await?;
            match response.status() {
                StatusCode::OK => {
                    let doc: Document = response.json().await?;
                    Ok(Some(doc))
                }
                StatusCode::NOT_FOUND => Ok(None),
                status => Err(Self::handle_error_response(status, &url, response).await),
            }
        })
        .await
    }

    /// Create a document with a store-generated id.
    pub async fn create_document(
        &self,
        collection: &str,
        fields: HashMap<String, Value>,
    ) -> FirestoreResult<Document> {
        let url = format!("{}/{}", self.base_url, collection);
        let body = serde_json::to_value(Document::new(fields))?;

        self.execute_request("create_document", collection, None, async {
            let response = self.send_authorized(Method::POST, &url, Some(&body)).await?;
            match response.status() {
                StatusCode::OK | StatusCode::CREATED => {
                    let doc: Document = response.json().await?;
                    Ok(doc)
                }
                status => Err(Self::handle_error_response(status, &url, response).await),
            }
        })
        .await
    }

    /// Merge the given fields into an existing document.
    ///
    /// Only the fields named in `mask` are written; everything else in the
    /// stored record stays untouched. The write carries an existence
    /// precondition, so a missing id surfaces as `NotFound` instead of
    /// upserting a new document.
    pub async fn patch_document(
        &self,
        collection: &str,
        doc_id: &str,
        fields: HashMap<String, Value>,
        mask: &[&str],
    ) -> FirestoreResult<Document> {
        let mut params: Vec<String> = mask
            .iter()
            .map(|f| format!("updateMask.fieldPaths={}", f))
            .collect();
        params.push("currentDocument.exists=true".to_string());
        let url = format!(
            "{}?{}",
            self.document_path(collection, doc_id),
            params.join("&")
        );
        let body = serde_json::to_value(Document::new(fields))?;

        self.execute_request("patch_document", collection, Some(doc_id), async {
            let response = self
                .send_authorized(Method::PATCH, &url, Some(&body))
                .await?;
            match response.status() {
                StatusCode::OK => {
                    let doc: Document = response.json().await?;
                    Ok(doc)
                }
                // Firestore reports a failed exists precondition as either
                // NOT_FOUND or FAILED_PRECONDITION depending on the path.
                StatusCode::NOT_FOUND
                | StatusCode::CONFLICT
                | StatusCode::PRECONDITION_FAILED => Err(FirestoreError::not_found(format!(
                    "{}/{}",
                    collection, doc_id
                ))),
                status => Err(Self::handle_error_response(status, &url, response).await),
            }
        })
        .await
    }

    /// Delete a document. A missing id surfaces as `NotFound`.
    pub async fn delete_document(&self, collection: &str, doc_id: &str) -> FirestoreResult<()> {
        let url = format!(
            "{}?currentDocument.exists=true",
            self.document_path(collection, doc_id)
        );

        self.execute_request("delete_document", collection, Some(doc_id), async {
            let response = self.send_authorized(Method::DELETE, &url, None).await?;
            match response.status() {
                StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
                StatusCode::NOT_FOUND
                | StatusCode::CONFLICT
                | StatusCode::PRECONDITION_FAILED => Err(FirestoreError::not_found(format!(
                    "{}/{}",
                    collection, doc_id
                ))),
                status => Err(Self::handle_error_response(status, &url, response).await),
            }
        })
        .await
    }

    /// List every document in a collection, following page tokens.
    pub async fn list_documents(&self, collection: &str) -> FirestoreResult<Vec<Document>> {
        with_retry(&self.config.retry, "list_documents", || {
            self.list_documents_once(collection)
        })
        .await
    }

    async fn list_documents_once(&self, collection: &str) -> FirestoreResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/{}?pageSize={}",
                self.base_url, collection, LIST_PAGE_SIZE
            );
            if let Some(token) = &page_token {
                url = format!("{}&pageToken={}", url, urlencoding::encode(token));
            }

            let page: ListDocumentsResponse = self
                .execute_request("list_documents", collection, None, async {
                    let response = self.send_authorized(Method::GET, &url, None).await?;
                    match response.status() {
                        StatusCode::OK => {
                            let list: ListDocumentsResponse = response.json().await?;
                            Ok(list)
                        }
                        status => {
                            Err(Self::handle_error_response(status, &url, response).await)
                        }
                    }
                })
                .await?;

            documents.extend(page.documents.unwrap_or_default());
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    // =========================================================================
    // Query Operations
    // =========================================================================

    /// Run a structured query against a root collection.
    pub async fn run_query(&self, query: StructuredQuery) -> FirestoreResult<Vec<Document>> {
        with_retry(&self.config.retry, "run_query", || {
            self.run_query_once(query.clone())
        })
        .await
    }

    async fn run_query_once(&self, query: StructuredQuery) -> FirestoreResult<Vec<Document>> {
        let url = format!("{}:runQuery", self.base_url);
        let collection = query
            .from
            .first()
            .map(|c| c.collection_id.clone())
            .unwrap_or_default();
        let body = serde_json::to_value(RunQueryRequest {
            structured_query: query,
        })?;

        self.execute_request("run_query", &collection, None, async {
            let response = self.send_authorized(Method::POST, &url, Some(&body)).await?;
            match response.status() {
                StatusCode::OK => {
                    let text = response.text().await.unwrap_or_default();
                    // runQuery returns a JSON array of response elements
                    let responses: Vec<RunQueryResponse> =
                        serde_json::from_str(&text).map_err(|e| {
                            FirestoreError::invalid_response(format!(
                                "Failed to parse runQuery response: {} (body prefix: {})",
                                e,
                                &text[..text.len().min(200)]
                            ))
                        })?;
                    Ok(responses.into_iter().filter_map(|r| r.document).collect())
                }
                status => Err(Self::handle_error_response(status, &url, response).await),
            }
        })
        .await
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Execute a request inside a tracing span.
    async fn execute_request<T, F>(
        &self,
        operation: &str,
        collection: &str,
        doc_id: Option<&str>,
        fut: F,
    ) -> FirestoreResult<T>
    where
        F: std::future::Future<Output = FirestoreResult<T>>,
    {
        let span = if let Some(id) = doc_id {
            info_span!("firestore_request", operation = %operation, collection = %collection, doc_id = %id)
        } else {
            info_span!("firestore_request", operation = %operation, collection = %collection)
        };

        let start = Instant::now();
        let result = fut.instrument(span).await;
        debug!(
            operation = %operation,
            collection = %collection,
            latency_ms = start.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "firestore call finished"
        );
        result
    }

    async fn handle_error_response(
        status: StatusCode,
        url: &str,
        response: reqwest::Response,
    ) -> FirestoreError {
        let body = response.text().await.unwrap_or_default();
        FirestoreError::from_http_status(status.as_u16(), format!("{} failed: {}", url, body))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_from_env_validates_project_id() {
        std::env::remove_var("GCP_PROJECT_ID");
        std::env::remove_var("FIREBASE_PROJECT_ID");
        let result = FirestoreConfig::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_default_values() {
        std::env::set_var("GCP_PROJECT_ID", "test-project");
        std::env::remove_var("FIRESTORE_CONNECT_TIMEOUT_SECS");
        let config = FirestoreConfig::from_env().unwrap();
        assert_eq!(config.database_id, "(default)");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
