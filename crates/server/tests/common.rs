//! # Common Test Utilities
//!
//! The `TestApp` harness spawns a real server on a random port with a
//! temporary store file and an `httpmock` embeddings endpoint, so tests can
//! exercise the HTTP surface end to end.

// Allow unused code because this is a test utility module, and not all
// helpers are used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::{Method, MockServer};
use newsrag_server::{
    config::{AppConfig, EmbeddingConfig},
    router::create_router,
    state::build_app_state,
};
use reqwest::Client;
use serde_json::json;
use std::net::SocketAddr;
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _db_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let db_file = NamedTempFile::new()?;

        let config = AppConfig {
            port: 0,
            db_url: db_file.path().to_str().unwrap().to_string(),
            collection: "documents".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
            embedding: EmbeddingConfig {
                api_url: mock_server.url("/v1/embeddings"),
                model_name: "mock-embedding-model".to_string(),
                api_key: None,
            },
        };

        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        // Give the server a moment to start up.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _db_file: db_file,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Mounts an embeddings mock that returns `vector` for any request whose
    /// body contains `marker`.
    pub fn mock_embedding(&self, marker: &str, vector: [f32; 3]) {
        let marker = marker.to_string();
        self.mock_server.mock(|when, then| {
            when.method(Method::POST)
                .path("/v1/embeddings")
                .body_contains(marker);
            then.status(200)
                .json_body(json!({ "data": [{ "embedding": vector }] }));
        });
    }

    /// Mounts a catch-all embeddings mock for tests where the vectors are
    /// irrelevant (grouping, summarizing).
    pub fn mock_any_embedding(&self) {
        self.mock_server.mock(|when, then| {
            when.method(Method::POST).path("/v1/embeddings");
            then.status(200)
                .json_body(json!({ "data": [{ "embedding": [1.0, 0.0, 0.0] }] }));
        });
    }

    /// Posts a document to `/add_document/`.
    pub async fn add_document(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/add_document/", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute add_document request")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}
