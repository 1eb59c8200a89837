//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use reco_domain::error::{Error, Result};
use reco_domain::ports::EmbeddingProvider;
use reco_domain::value_objects::Embedding;

/// Output dimension of text-embedding-3-small
pub const DIMENSION_OPENAI_SMALL: usize = 1536;
/// Output dimension of text-embedding-3-large
pub const DIMENSION_OPENAI_LARGE: usize = 3072;
/// Output dimension of text-embedding-ada-002
pub const DIMENSION_OPENAI_ADA: usize = 1536;

/// OpenAI embedding provider
///
/// Receives its HTTP client via constructor injection so callers control
/// connection pooling and timeouts.
///
/// ## Example
///
/// ```rust,no_run
/// use reco_providers::embedding::OpenAiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = OpenAiEmbeddingProvider::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.map(|u| u.trim().to_string()),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or("https://api.openai.com/v1")
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("request timed out after {:?}", self.timeout))
                } else {
                    Error::embedding(format!("HTTP request failed: {e}"))
                }
            })?;

        Self::check_and_parse(response).await
    }

    /// Check response status and parse the JSON body.
    ///
    /// Non-success statuses become embedding errors carrying the
    /// upstream body verbatim so callers can log the cause.
    async fn check_and_parse(response: Response) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = match status.as_u16() {
                401 => format!("OpenAI authentication failed: {body}"),
                429 => format!("OpenAI rate limit exceeded: {body}"),
                code @ 500..=599 => format!("OpenAI server error ({code}): {body}"),
                code => format!("OpenAI request failed ({code}): {body}"),
            };
            return Err(Error::embedding(message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::embedding(format!("OpenAI response parse failed: {e}")))
    }

    /// Parse one embedding vector from the response data
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let values = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding(format!("invalid embedding format for text {index}")))?;

        let mut vector = Vec::with_capacity(values.len());
        for value in values {
            let v = value
                .as_f64()
                .ok_or_else(|| Error::embedding(format!("non-numeric value for text {index}")))?;
            vector.push(v as f32);
        }

        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions: self.dimensions(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("invalid response format: missing data array"))?;

        // A partial response would leave some callers' entries unset, so
        // the whole batch fails on a count mismatch.
        if data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-large" => DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => DIMENSION_OPENAI_ADA,
            _ => DIMENSION_OPENAI_SMALL,
        }
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
