//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::browser::DocsBrowser;
use crate::core::config::Links;
use crate::core::document::{Document, DocumentStore};
use crate::core::state::App;

/// Two-document store: `intro` ("# Hello\n\nWorld") then `guide` ("## G").
pub fn sample_store() -> DocumentStore {
    DocumentStore::new(vec![
        Document::new("intro", "Introduction", "# Hello\n\nWorld"),
        Document::new("guide", "Guide", "## G"),
    ])
    .expect("sample store is valid")
}

pub fn sample_browser() -> DocsBrowser {
    DocsBrowser::new(Arc::new(sample_store()))
}

/// An App over the sample store, on the Home view.
pub fn test_app() -> App {
    App::new(Arc::new(sample_store()), Links::default())
}

/// An App over an empty store.
pub fn empty_app() -> App {
    App::new(Arc::new(DocumentStore::empty()), Links::default())
}
