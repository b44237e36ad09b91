//! Embedding client for an OpenAI-compatible `/embeddings` endpoint.
//!
//! Posts `{"model": ..., "input": [...]}` with a bearer token and reads the
//! vectors from `{"data": [{"embedding": [...]}]}`.

use thiserror::Error;
use tracing::debug;

/// Embedding request/transport error.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Transport or non-2xx status from the endpoint.
    #[error("embedding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not contain the expected vectors.
    #[error("embedding response missing data for input {0}")]
    MissingEmbedding(usize),
}

/// Endpoint configuration, resolved by the caller.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EmbeddingConfig {
    /// Full URL of the embeddings endpoint.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer token.
    pub api_key: String,
}

#[derive(serde::Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(serde::Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    data: Vec<EmbeddingDatum>,
}

#[derive(serde::Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// Client for one embeddings endpoint.
pub struct EmbeddingClient {
    config: EmbeddingConfig,
    client: reqwest::Client,
}

impl EmbeddingClient {
    /// Builds a client for the configured endpoint.
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn embed(&self, input: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(
            url = %self.config.base_url,
            model = %self.config.model,
            inputs = input.len(),
            "embedding request"
        );
        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .json(&EmbeddingRequest {
                model: &self.config.model,
                input,
            })
            .send()
            .await?
            .error_for_status()?;
        let body: EmbeddingResponse = response.json().await?;
        if body.data.len() < input.len() {
            return Err(EmbeddingError::MissingEmbedding(body.data.len()));
        }
        Ok(body.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Embeds a list of documents, one vector per input, in order.
    pub async fn embed_documents(
        &self,
        texts: &[String],
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.embed(texts).await
    }

    /// Embeds a single query string.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.embed(std::slice::from_ref(&text.to_string())).await?;
        Ok(vectors.remove(0))
    }
}
