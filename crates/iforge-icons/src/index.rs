//! Similarity index capability and its HTTP client.
//!
//! The index holds one pre-embedded document per icon (name + keywords +
//! category). The client owns query transport only; embedding and
//! similarity math live on the index side.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{IndexError, IndexResult};

/// One raw hit from the similarity index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexHit {
    /// Icon ID
    pub id: String,
    /// Icon display name
    pub name: String,
    /// Icon category
    pub category: String,
    /// Keywords the icon document was built from
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Similarity to the query
    pub score: f64,
    /// Renderable glyph reference
    #[serde(default)]
    pub svg_path: Option<String>,
}

/// Similarity search over the icon document set.
#[async_trait]
pub trait SimilarityIndex: Send + Sync {
    /// Query for the `limit` most similar icons. When `category` is set
    /// it is an exact-match filter applied before ranking.
    async fn query(
        &self,
        text: &str,
        category: Option<&str>,
        limit: usize,
    ) -> IndexResult<Vec<IndexHit>>;
}

/// Configuration for the icon index client.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Base URL of the index service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Max retries
    pub max_retries: u32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }
}

impl IndexConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("ICON_INDEX_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_string()),
            timeout: Duration::from_secs(
                std::env::var("ICON_INDEX_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            max_retries: std::env::var("ICON_INDEX_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    limit: usize,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    hits: Vec<IndexHit>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for the icon similarity index service.
pub struct IconIndexClient {
    http: Client,
    config: IndexConfig,
}

impl IconIndexClient {
    /// Create a new index client.
    pub fn new(config: IndexConfig) -> IndexResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(IndexError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> IndexResult<Self> {
        Self::new(IndexConfig::from_env())
    }

    /// Check if the index service is healthy.
    pub async fn health_check(&self) -> IndexResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Icon index health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Icon index health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> IndexResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = IndexResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Index query failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(IndexError::RequestFailed("Unknown error".to_string())))
    }
}

#[async_trait]
impl SimilarityIndex for IconIndexClient {
    async fn query(
        &self,
        text: &str,
        category: Option<&str>,
        limit: usize,
    ) -> IndexResult<Vec<IndexHit>> {
        let url = format!("{}/icons/query", self.config.base_url);

        debug!("Querying icon index at {} (limit {})", url, limit);

        let request = QueryRequest {
            text,
            category,
            limit,
        };

        let response = self
            .with_retry(|| async {
                self.http
                    .post(&url)
                    .json(&request)
                    .send()
                    .await
                    .map_err(IndexError::Network)
            })
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IndexError::RequestFailed(format!(
                "icon index returned {}: {}",
                status, body
            )));
        }

        let query_response: QueryResponse = response.json().await?;
        Ok(query_response.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_config_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.max_retries, 2);
    }

    #[tokio::test]
    async fn test_query_parses_hits() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "hits": [
                {"id": "growth_1", "name": "Business Growth", "category": "business",
                 "keywords": ["growth", "profit"], "score": 0.91},
                {"id": "ai_2", "name": "Artificial Intelligence", "category": "technology",
                 "keywords": ["ai"], "score": 0.42, "svg_path": "<path d=\"M0 0\"/>"}
            ]
        });

        Mock::given(method("POST"))
            .and(path("/icons/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = IconIndexClient::new(IndexConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            max_retries: 0,
        })
        .unwrap();

        let hits = client.query("business growth", None, 10).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "growth_1");
        assert_eq!(hits[1].svg_path.as_deref(), Some("<path d=\"M0 0\"/>"));
    }

    #[tokio::test]
    async fn test_query_sends_category_filter() {
        let server = MockServer::start().await;

        let expected = serde_json::json!({
            "text": "growth",
            "category": "business",
            "limit": 3
        });

        Mock::given(method("POST"))
            .and(path("/icons/query"))
            .and(body_json(&expected))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = IconIndexClient::new(IndexConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            max_retries: 0,
        })
        .unwrap();

        let hits = client.query("growth", Some("business"), 3).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_query_error_status_is_request_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/icons/query"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = IconIndexClient::new(IndexConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
            max_retries: 0,
        })
        .unwrap();

        let err = client.query("growth", None, 3).await.unwrap_err();
        assert!(matches!(err, IndexError::RequestFailed(_)));
    }
}
