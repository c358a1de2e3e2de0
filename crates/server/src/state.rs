//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it
//! at startup. The document store collection is created here once and then
//! reused for the process lifetime; handlers receive it through the state
//! rather than through any process-wide global.

use crate::config::AppConfig;
use newsrag::{DocumentStore, EmbeddingClient};
use std::path::Path;
use std::sync::Arc;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The document store collection backing every endpoint.
    pub store: Arc<DocumentStore>,
}

/// Builds the shared application state from the configuration.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let embedder = EmbeddingClient::new(
        config.embedding.api_url.clone(),
        config.embedding.model_name.clone(),
        config.embedding.api_key.clone(),
    );

    if config.db_url != ":memory:" {
        if let Some(parent) = Path::new(&config.db_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let store = DocumentStore::open(&config.db_url, &config.collection, embedder).await?;
    tracing::info!(
        db_path = %config.db_url,
        collection = %config.collection,
        "Initialized document store."
    );

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
    })
}
