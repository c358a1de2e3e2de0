//! # Document Endpoints
//!
//! Handlers for the document surface: liveness, add, similarity query,
//! metadata grouping, and the naive (truncating) summary.

use super::{AppError, AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use indexmap::IndexMap;
use newsrag::{Document, QueryResult};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

/// The handler for the root (`/`) endpoint, used as a liveness probe.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for `POST /add_document/`.
///
/// Stores one document in the collection. No uniqueness or format checks
/// are performed here; duplicate ids follow the store's last-write-wins
/// semantics.
pub async fn add_document(
    State(app_state): State<AppState>,
    Json(doc): Json<Document>,
) -> Result<Json<Value>, AppError> {
    info!(doc_id = %doc.doc_id, "Received add_document request");

    app_state
        .store
        .add(&doc.doc_id, &doc.text, doc.metadata.as_ref())
        .await?;

    Ok(Json(json!({
        "message": format!("Document {} added.", doc.doc_id)
    })))
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub query_text: String,
    #[serde(default = "default_n_results")]
    pub n_results: usize,
}

fn default_n_results() -> usize {
    5
}

/// The handler for `GET /query/`.
///
/// A thin pass-through to the store's similarity search; the response is
/// the store-native result shape.
pub async fn query_documents(
    State(app_state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<QueryResult>, AppError> {
    info!(query_text = %params.query_text, n_results = params.n_results, "Received query request");

    let results = app_state
        .store
        .query(&params.query_text, params.n_results)
        .await?;

    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
pub struct GroupByParams {
    /// Metadata field to group by.
    pub field: String,
}

/// The handler for `GET /group_by/`.
///
/// Partitions document positions by the value of `field` in their metadata.
/// Documents without the field (or without metadata at all) land in the
/// literal group `"unknown"`. Keys appear in first-encountered order, and
/// the indices are positions within the store's current listing, not ids.
pub async fn group_by(
    State(app_state): State<AppState>,
    Query(params): Query<GroupByParams>,
) -> Result<Json<IndexMap<String, Vec<usize>>>, AppError> {
    let contents = app_state.store.get().await?;

    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for (index, metadata) in contents.metadatas.iter().enumerate() {
        let key = metadata
            .as_ref()
            .and_then(|m| m.get(&params.field))
            .map(|v| v.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        groups.entry(key).or_default().push(index);
    }

    Ok(Json(groups))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeParams {
    /// Metadata field to filter by.
    pub field: Option<String>,
    /// Value of the metadata field to filter by.
    pub value: Option<String>,
}

/// The handler for `GET /summarize/`.
///
/// Not real summarization: the "summary" is the first 3 texts of the
/// (optionally filtered) collection, while `count` reflects the whole
/// filtered set. Filtering only happens when both `field` and `value` are
/// present; either one alone means no filter.
pub async fn summarize(
    State(app_state): State<AppState>,
    Query(params): Query<SummarizeParams>,
) -> Result<Json<Value>, AppError> {
    let contents = app_state.store.get().await?;

    let filtered: Vec<&String> = match (&params.field, &params.value) {
        (Some(field), Some(value)) => contents
            .documents
            .iter()
            .zip(&contents.metadatas)
            .filter(|(_, metadata)| {
                metadata
                    .as_ref()
                    .and_then(|m| m.get(field))
                    .is_some_and(|v| v.is_str(value))
            })
            .map(|(text, _)| text)
            .collect(),
        _ => contents.documents.iter().collect(),
    };

    let summary: Vec<&String> = filtered.iter().take(3).copied().collect();

    Ok(Json(json!({
        "summary": summary,
        "count": filtered.len(),
    })))
}
