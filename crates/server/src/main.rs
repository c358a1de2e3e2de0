//! # newsrag-server
//!
//! The binary entry point for the document service.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    newsrag_server::start().await
}
