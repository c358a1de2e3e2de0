//! # newsrag
//!
//! Core library for the newsrag document service. It provides the document
//! and metadata types shared by the server and the ingestion CLI, a client
//! for an OpenAI-compatible embeddings API, and `DocumentStore`, a local
//! vector-backed collection of documents.

pub mod embedding;
pub mod errors;
pub mod store;
pub mod types;

pub use embedding::EmbeddingClient;
pub use errors::StoreError;
pub use store::DocumentStore;
pub use types::{CollectionContents, Document, Metadata, MetadataValue, QueryResult};
