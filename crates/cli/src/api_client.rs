//! # API Client
//!
//! A client for the document service's add endpoint. It handles request
//! construction, the success check, and response parsing.

use anyhow::{bail, Result};
use newsrag::Metadata;
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// The client for posting documents to the document service.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient` for the service at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends one document-creation request and returns the decoded JSON
    /// acknowledgement. Any non-success status fails the call.
    pub async fn add_document(
        &self,
        doc_id: &str,
        text: &str,
        metadata: Metadata,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/add_document/", self.base_url);
        info!(doc_id, "Posting document to: {}", url);

        let payload = json!({ "doc_id": doc_id, "text": text, "metadata": metadata });
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!(
                "Failed to add document {}. Server responded with {}: {}",
                doc_id,
                status,
                error_text
            );
        }

        Ok(response.json().await?)
    }
}
