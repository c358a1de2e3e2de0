//! # Embeddings Client
//!
//! A thin client for an external, OpenAI-compatible embeddings API. The
//! document store calls it once per stored text and once per query text;
//! nothing outside the store ever handles raw vectors.

use crate::errors::StoreError;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Debug)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize, Debug)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize, Debug)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// A client for generating vector embeddings over HTTP.
#[derive(Clone, Debug)]
pub struct EmbeddingClient {
    client: ReqwestClient,
    api_url: String,
    model: String,
    api_key: Option<String>,
}

impl EmbeddingClient {
    pub fn new(api_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: ReqwestClient::new(),
            api_url,
            model,
            api_key,
        }
    }

    /// Generates a vector embedding for `input`.
    ///
    /// Sends a `{"model", "input"}` payload and returns the first embedding
    /// in the response. A non-2xx status is surfaced as
    /// [`StoreError::EmbeddingApi`] carrying the response body.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, StoreError> {
        debug!(model = %self.model, "Requesting embedding from {}", self.api_url);

        let body = EmbeddingRequest {
            model: &self.model,
            input,
        };
        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(StoreError::EmbeddingRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoreError::EmbeddingApi(error_text));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(StoreError::EmbeddingResponse)?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| StoreError::EmbeddingApi("API returned no embeddings".to_string()))
    }
}
