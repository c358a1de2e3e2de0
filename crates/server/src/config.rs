//! # Application Configuration
//!
//! Configuration for the document service, layered from an optional
//! `config.yml`, plain environment variables (`PORT`, `DB_URL`, ...), and
//! `NEWSRAG_`-prefixed variables for nested overrides (e.g.
//! `NEWSRAG_EMBEDDING__API_URL`).

use config::{Config as ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use tracing::info;

/// The root configuration structure.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the document store file. Loaded from `DB_URL` env var.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// The name of the document collection, created at startup and reused
    /// for the process lifetime.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// The front-end origin allowed by CORS.
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
    /// Configuration for the text embedding model.
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

fn default_port() -> u16 {
    8000
}

fn default_db_url() -> String {
    "db/newsrag.db".to_string()
}

fn default_collection() -> String {
    "documents".to_string()
}

fn default_cors_origin() -> String {
    "http://localhost:5173".to_string()
}

/// Configuration for the embedding model provider.
#[derive(Debug, Deserialize, Clone)]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_api_url")]
    pub api_url: String,
    #[serde(default = "default_embedding_model")]
    pub model_name: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_url: default_embedding_api_url(),
            model_name: default_embedding_model(),
            api_key: None,
        }
    }
}

fn default_embedding_api_url() -> String {
    "http://localhost:11434/v1/embeddings".to_string()
}

fn default_embedding_model() -> String {
    "nomic-embed-text".to_string()
}

/// Loads the application configuration.
///
/// `config.yml` (or the file named by `CONFIG_PATH`) is optional; every
/// field has a default, so a bare environment is enough to start the server.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yml".to_string());

    let mut builder = ConfigBuilder::builder();
    if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from '{config_path}'.");
        builder = builder.add_source(File::new(&config_path, FileFormat::Yaml));
    }

    let settings = builder
        // Plain environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("NEWSRAG")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
