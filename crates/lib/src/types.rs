//! # Shared Data Types
//!
//! The document and metadata types exchanged between the ingestion CLI, the
//! HTTP service, and the document store, together with the store-native
//! result shapes returned by similarity queries and full-collection reads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single metadata value.
///
/// Metadata is deliberately loose (any key may be absent on any document),
/// but the value space is closed to strings, numbers, and booleans so that
/// values survive a JSON round trip without type drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl MetadataValue {
    /// Whether this value is the string `other`. Non-string values never
    /// match, mirroring the string-only equality of the filter endpoints.
    pub fn is_str(&self, other: &str) -> bool {
        matches!(self, MetadataValue::Text(s) if s == other)
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Number(n) => write!(f, "{n}"),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

/// The open string-keyed attribute mapping attached to a document.
pub type Metadata = HashMap<String, MetadataValue>;

/// A document as submitted to the service: a caller-supplied id, a text
/// body, and optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// The store-native result of a similarity query.
///
/// The four sequences are parallel and ordered nearest-first: entry `i` of
/// each refers to the same stored document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub ids: Vec<String>,
    pub distances: Vec<f64>,
    pub documents: Vec<String>,
    pub metadatas: Vec<Option<Metadata>>,
}

/// The full contents of a collection in store order (insertion order, except
/// that re-adding an existing id moves the document to the end).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CollectionContents {
    pub ids: Vec<String>,
    pub documents: Vec<String>,
    pub metadatas: Vec<Option<Metadata>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_value_deserializes_untagged() {
        let meta: Metadata =
            serde_json::from_str(r#"{"source": "blog", "rank": 2.5, "live": true}"#).unwrap();
        assert_eq!(meta["source"], MetadataValue::Text("blog".to_string()));
        assert_eq!(meta["rank"], MetadataValue::Number(2.5));
        assert_eq!(meta["live"], MetadataValue::Bool(true));
    }

    #[test]
    fn metadata_value_renders_group_keys() {
        assert_eq!(MetadataValue::Text("news".into()).to_string(), "news");
        assert_eq!(MetadataValue::Number(42.0).to_string(), "42");
        assert_eq!(MetadataValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn string_equality_ignores_non_string_values() {
        assert!(MetadataValue::Text("42".into()).is_str("42"));
        assert!(!MetadataValue::Number(42.0).is_str("42"));
        assert!(!MetadataValue::Bool(true).is_str("true"));
    }

    #[test]
    fn document_metadata_defaults_to_none() {
        let doc: Document = serde_json::from_str(r#"{"doc_id": "a1", "text": "hi"}"#).unwrap();
        assert!(doc.metadata.is_none());
    }
}
