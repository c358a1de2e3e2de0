//! # Document Store
//!
//! A local, vector-backed document collection on top of Turso/SQLite. The
//! store owns the embedding step: texts are embedded when added and query
//! texts are embedded when searched, using Turso's native vector functions
//! (`vector32`, `vector_distance_cos`) for the similarity ordering.
//!
//! The collection is the sole system of record. There is no update or
//! delete API: documents are only ever added, and re-adding an existing
//! `doc_id` replaces the previous row (last write wins).

use crate::embedding::EmbeddingClient;
use crate::errors::StoreError;
use crate::types::{CollectionContents, Metadata, QueryResult};
use tracing::info;
use turso::{params, Database, Value as TursoValue};

/// A named collection of documents with embedded representations.
///
/// Cloning is cheap and shares the same underlying database, so a single
/// store can be handed to every request handler behind an `Arc` or by value.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    db: Database,
    embedder: EmbeddingClient,
    collection: String,
}

impl DocumentStore {
    /// Opens (or creates) the collection at `db_path`.
    ///
    /// Use `:memory:` for an isolated in-memory store. The collection name
    /// doubles as the table name and must be a plain identifier. Creation is
    /// idempotent and safe to run on every startup.
    pub async fn open(
        db_path: &str,
        collection: &str,
        embedder: EmbeddingClient,
    ) -> Result<Self, StoreError> {
        if collection.is_empty()
            || !collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(StoreError::InvalidCollection(collection.to_string()));
        }

        let db = turso::Builder::new_local(db_path).build().await?;

        let conn = db.connect()?;
        // WAL mode helps concurrent readers on file-backed databases and is
        // a no-op for in-memory ones. PRAGMA returns a row, so `query` it.
        conn.query("PRAGMA journal_mode=WAL;", ()).await?;

        let table_sql = format!(
            "CREATE TABLE IF NOT EXISTS {collection} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                doc_id TEXT NOT NULL UNIQUE,
                text TEXT NOT NULL,
                metadata TEXT,
                embedding BLOB NOT NULL
            );"
        );
        conn.execute(&table_sql, ()).await?;

        Ok(Self {
            db,
            embedder,
            collection: collection.to_string(),
        })
    }

    /// The collection name this store was opened with.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Embeds `text` and stores it under `doc_id` with its metadata.
    ///
    /// Re-adding an existing `doc_id` is last-write-wins: the old row is
    /// deleted and the document takes a fresh position at the end of the
    /// store order.
    pub async fn add(
        &self,
        doc_id: &str,
        text: &str,
        metadata: Option<&Metadata>,
    ) -> Result<(), StoreError> {
        let vector = self.embedder.embed(text).await?;
        let vector_bytes = vector_to_bytes(&vector);
        let metadata_value = match metadata {
            Some(m) => TursoValue::Text(serde_json::to_string(m)?),
            None => TursoValue::Null,
        };

        let conn = self.db.connect()?;
        conn.execute("BEGIN TRANSACTION", ()).await?;
        conn.execute(
            &format!("DELETE FROM {} WHERE doc_id = ?", self.collection),
            params![doc_id],
        )
        .await?;
        conn.execute(
            &format!(
                "INSERT INTO {} (doc_id, text, metadata, embedding) VALUES (?, ?, ?, ?)",
                self.collection
            ),
            params::Params::Positional(vec![
                TursoValue::Text(doc_id.to_string()),
                TursoValue::Text(text.to_string()),
                metadata_value,
                TursoValue::Blob(vector_bytes),
            ]),
        )
        .await?;
        conn.execute("COMMIT", ()).await?;

        info!(doc_id, collection = %self.collection, "Stored document");
        Ok(())
    }

    /// Returns up to `n_results` documents nearest to `query_text`,
    /// nearest first. An empty collection yields empty sequences.
    pub async fn query(
        &self,
        query_text: &str,
        n_results: usize,
    ) -> Result<QueryResult, StoreError> {
        let vector = self.embedder.embed(query_text).await?;

        // Turso's vector functions take the probe vector as a literal.
        let vector_literal = format!(
            "vector32('[{}]')",
            vector
                .iter()
                .map(|f| f.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let sql = format!(
            "SELECT doc_id, text, metadata,
                    vector_distance_cos(embedding, {vector_literal}) AS distance
             FROM {}
             ORDER BY distance ASC
             LIMIT {n_results};",
            self.collection
        );

        let conn = self.db.connect()?;
        let mut rows = conn.query(&sql, ()).await?;

        let mut result = QueryResult::default();
        while let Some(row) = rows.next().await? {
            result.ids.push(text_value(row.get_value(0)?));
            result.documents.push(text_value(row.get_value(1)?));
            result.metadatas.push(parse_metadata(row.get_value(2)?)?);
            result.distances.push(match row.get_value(3)? {
                TursoValue::Real(d) => d,
                _ => 0.0,
            });
        }
        Ok(result)
    }

    /// Returns the full collection contents in store order.
    pub async fn get(&self) -> Result<CollectionContents, StoreError> {
        let sql = format!(
            "SELECT doc_id, text, metadata FROM {} ORDER BY id ASC;",
            self.collection
        );

        let conn = self.db.connect()?;
        let mut rows = conn.query(&sql, ()).await?;

        let mut contents = CollectionContents::default();
        while let Some(row) = rows.next().await? {
            contents.ids.push(text_value(row.get_value(0)?));
            contents.documents.push(text_value(row.get_value(1)?));
            contents.metadatas.push(parse_metadata(row.get_value(2)?)?);
        }
        Ok(contents)
    }

    /// The number of stored documents.
    pub async fn count(&self) -> Result<usize, StoreError> {
        let conn = self.db.connect()?;
        let mut rows = conn
            .query(&format!("SELECT COUNT(*) FROM {};", self.collection), ())
            .await?;

        let count = match rows.next().await? {
            Some(row) => match row.get_value(0)? {
                TursoValue::Integer(n) => n as usize,
                _ => 0,
            },
            None => 0,
        };
        Ok(count)
    }
}

/// Serializes a vector as little-endian `f32` bytes for BLOB storage, the
/// layout `vector_distance_cos` expects.
fn vector_to_bytes(vector: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vector.len() * 4);
    for component in vector {
        bytes.extend_from_slice(&component.to_le_bytes());
    }
    bytes
}

fn text_value(value: TursoValue) -> String {
    match value {
        TursoValue::Text(s) => s,
        _ => String::new(),
    }
}

fn parse_metadata(value: TursoValue) -> Result<Option<Metadata>, StoreError> {
    match value {
        TursoValue::Text(json) => Ok(Some(serde_json::from_str(&json)?)),
        _ => Ok(None),
    }
}
