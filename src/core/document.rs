//! # Document Store
//!
//! The ordered, read-only collection of reference documents.
//!
//! ```text
//! DocumentStore
//! └── documents: Vec<Document>   // declaration order = sidebar order
//!     ├── id       (unique, stable key)
//!     ├── title    (sidebar label)
//!     └── content  (raw markdown)
//! ```
//!
//! A store is built once at startup, either from the compiled-in set
//! ([`DocumentStore::builtin`]) or from a TOML/JSON payload, and is never
//! mutated afterwards. There is no insert/update/delete API.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::content;

/// A titled unit of markdown content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Errors raised while building a store. Browsing itself never fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate document id '{0}'")]
    DuplicateId(String),
    #[error("document at position {0} has an empty id")]
    EmptyId(usize),
    #[error("document '{0}' has an empty title")]
    EmptyTitle(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML payload: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk payload shape: a single `documents` array.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Payload {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Build a store, checking that ids are non-empty and distinct and that
    /// every title is non-empty.
    pub fn new(documents: Vec<Document>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            if doc.id.trim().is_empty() {
                return Err(StoreError::EmptyId(index));
            }
            if doc.title.trim().is_empty() {
                return Err(StoreError::EmptyTitle(doc.id.clone()));
            }
            if !seen.insert(doc.id.as_str()) {
                return Err(StoreError::DuplicateId(doc.id.clone()));
            }
        }
        debug!("Document store built with {} documents", documents.len());
        Ok(Self { documents })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in Paanini reference set.
    pub fn builtin() -> Self {
        Self {
            documents: content::builtin_documents(),
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, StoreError> {
        let payload: Payload = toml::from_str(input)?;
        Self::new(payload.documents)
    }

    pub fn from_json_str(input: &str) -> Result<Self, StoreError> {
        let payload: Payload = serde_json::from_str(input)?;
        Self::new(payload.documents)
    }

    /// Load a payload file. `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let input = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let store = if is_json {
            Self::from_json_str(&input)?
        } else {
            Self::from_toml_str(&input)?
        };
        info!(
            "Loaded {} documents from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// All documents in declaration order.
    pub fn list(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_store;

    #[test]
    fn test_list_keeps_declaration_order() {
        let store = sample_store();
        let ids: Vec<&str> = store.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "guide"]);
    }

    #[test]
    fn test_get_returns_matching_document() {
        let store = sample_store();
        for doc in store.list() {
            assert_eq!(store.get(&doc.id).map(|d| d.id.as_str()), Some(doc.id.as_str()));
        }
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = DocumentStore::new(vec![
            Document::new("a", "A", ""),
            Document::new("a", "Again", ""),
        ])
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = DocumentStore::new(vec![Document::new("a", "  ", "body")]).unwrap_err();
        assert!(matches!(err, StoreError::EmptyTitle(_)));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = DocumentStore::new(vec![
            Document::new("ok", "Ok", ""),
            Document::new("", "Nameless", ""),
        ])
        .unwrap_err();
        assert!(matches!(err, StoreError::EmptyId(1)));
    }

    #[test]
    fn test_builtin_set_is_valid() {
        let builtin = DocumentStore::builtin();
        let validated = DocumentStore::new(builtin.list().to_vec()).unwrap();
        let ids: Vec<&str> = validated.list().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "guide", "npm", "dev"]);
    }

    #[test]
    fn test_toml_payload_parses() {
        let toml_str = r###"
[[documents]]
id = "intro"
title = "Introduction"
content = """
# Hello

World
"""

[[documents]]
id = "guide"
title = "Guide"
content = "## G"
"###;
        let store = DocumentStore::from_toml_str(toml_str).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.first().unwrap().title, "Introduction");
        assert!(store.get("intro").unwrap().content.contains("World"));
        assert_eq!(store.position("guide"), Some(1));
    }

    #[test]
    fn test_json_payload_parses() {
        let json = r#"{"documents": [{"id": "a", "title": "A", "content": "x"}]}"#;
        let store = DocumentStore::from_json_str(json).unwrap();
        assert_eq!(store.list()[0], Document::new("a", "A", "x"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let toml_str = r#"
[[documents]]
id = "a"
title = "A"
content = ""
author = "someone"
"#;
        let err = DocumentStore::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, StoreError::Toml(_)));
    }

    #[test]
    fn test_missing_payload_file_is_io_error() {
        let err = DocumentStore::load(Path::new("/nonexistent/docs.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_empty_payload_gives_empty_store() {
        let store = DocumentStore::from_toml_str("").unwrap();
        assert!(store.is_empty());
        assert!(store.first().is_none());
    }
}
