use thiserror::Error;

/// Custom error types for the document store and its collaborators.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Collection name '{0}' is not a valid identifier")]
    InvalidCollection(String),
    #[error("Database error: {0}")]
    Database(#[from] turso::Error),
    #[error("Failed to send request to embeddings API: {0}")]
    EmbeddingRequest(reqwest::Error),
    #[error("Failed to deserialize embeddings API response: {0}")]
    EmbeddingResponse(reqwest::Error),
    #[error("Embeddings API returned an error: {0}")]
    EmbeddingApi(String),
    #[error("Metadata is not valid JSON: {0}")]
    Metadata(#[from] serde_json::Error),
}
