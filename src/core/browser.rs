//! # Docs Browser
//!
//! Tracks which document is active and resolves it against the store.
//!
//! ```text
//! DocsBrowser
//! ├── store: Arc<DocumentStore>        // shared, read-only
//! └── active_doc_id: Option<String>    // may be stale; never trusted
//! ```
//!
//! The active id is a reference, not a guarantee. [`DocsBrowser::resolve_active_document`]
//! re-checks it on every call and falls back to the first document when it
//! no longer matches anything. Only an empty store produces no document.

use std::sync::Arc;

use log::debug;

use crate::core::document::{Document, DocumentStore};
use crate::core::markdown::{self, Block};

/// Outcome of resolving the active id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The active id matched a document.
    Active(&'a Document),
    /// The active id was stale; this is the first document instead.
    Fallback(&'a Document),
    /// The store has no documents.
    Empty,
}

impl<'a> Resolution<'a> {
    pub fn document(self) -> Option<&'a Document> {
        match self {
            Resolution::Active(doc) | Resolution::Fallback(doc) => Some(doc),
            Resolution::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Resolution::Empty)
    }
}

/// One sidebar row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry<'a> {
    pub index: usize,
    pub document: &'a Document,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct DocsBrowser {
    store: Arc<DocumentStore>,
    active_doc_id: Option<String>,
}

impl DocsBrowser {
    /// Start with the first document active.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        let active_doc_id = store.first().map(|doc| doc.id.clone());
        Self {
            store,
            active_doc_id,
        }
    }

    /// Start on a requested id. The id is not checked here; a stale one
    /// resolves to the first document like any other stale reference.
    pub fn with_active(store: Arc<DocumentStore>, id: impl Into<String>) -> Self {
        Self {
            store,
            active_doc_id: Some(id.into()),
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn active_doc_id(&self) -> Option<&str> {
        self.active_doc_id.as_deref()
    }

    /// Make `id` active if it exists. Unknown ids leave the selection untouched.
    pub fn select_document(&mut self, id: &str) -> bool {
        if self.store.get(id).is_none() {
            debug!("Ignoring selection of unknown document '{}'", id);
            return false;
        }
        if self.active_doc_id.as_deref() != Some(id) {
            debug!("Active document: {:?} -> {}", self.active_doc_id, id);
        }
        self.active_doc_id = Some(id.to_string());
        true
    }

    /// Select by sidebar position. Out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(id) = self.store.list().get(index).map(|doc| doc.id.clone()) else {
            return false;
        };
        self.select_document(&id)
    }

    /// Move one entry down from the resolved document, stopping at the end.
    pub fn select_next(&mut self) -> bool {
        match self.resolved_index() {
            Some(index) if index + 1 < self.store.len() => self.select_index(index + 1),
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Move one entry up from the resolved document, stopping at the top.
    pub fn select_previous(&mut self) -> bool {
        match self.resolved_index() {
            Some(index) => self.select_index(index.saturating_sub(1)),
            None => false,
        }
    }

    pub fn resolve_active_document(&self) -> Resolution<'_> {
        if let Some(doc) = self.active_doc_id.as_deref().and_then(|id| self.store.get(id)) {
            return Resolution::Active(doc);
        }
        match self.store.first() {
            Some(first) => {
                debug!(
                    "Active document {:?} not found, falling back to '{}'",
                    self.active_doc_id, first.id
                );
                Resolution::Fallback(first)
            }
            None => Resolution::Empty,
        }
    }

    /// Whether `id` is the document currently shown.
    pub fn is_active(&self, id: &str) -> bool {
        self.resolve_active_document()
            .document()
            .is_some_and(|doc| doc.id == id)
    }

    /// Navigation index in store order, with exactly one active entry
    /// whenever the store is non-empty.
    pub fn entries(&self) -> Vec<NavEntry<'_>> {
        let active = self.resolve_active_document().document().map(|doc| doc.id.as_str());
        self.store
            .list()
            .iter()
            .enumerate()
            .map(|(index, document)| NavEntry {
                index,
                document,
                is_active: active == Some(document.id.as_str()),
            })
            .collect()
    }

    /// Sidebar position of the resolved document.
    pub fn resolved_index(&self) -> Option<usize> {
        let doc = self.resolve_active_document().document()?;
        self.store.position(&doc.id)
    }

    /// Parse the resolved document. `None` only for an empty store.
    pub fn render_active(&self) -> Option<Vec<Block>> {
        self.resolve_active_document()
            .document()
            .map(|doc| markdown::parse(&doc.content))
    }
}
