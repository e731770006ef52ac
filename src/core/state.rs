//! # Application State
//!
//! Core session state. Domain logic only, no TUI types; presentation state
//! (scroll offsets, focus, render caches) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── view: ViewController      // Home | Docs
//! ├── browser: DocsBrowser      // active document + store
//! ├── links: Links              // outbound repository/registry URLs
//! └── status_message: String    // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::browser::DocsBrowser;
use crate::core::config::{Links, ResolvedConfig};
use crate::core::document::DocumentStore;
use crate::core::view::{ViewController, ViewState};

pub struct App {
    pub view: ViewController,
    pub browser: DocsBrowser,
    pub links: Links,
    pub status_message: String,
}

impl App {
    pub fn new(store: Arc<DocumentStore>, links: Links) -> Self {
        Self {
            view: ViewController::new(),
            browser: DocsBrowser::new(store),
            links,
            status_message: String::new(),
        }
    }

    /// Build the session from resolved settings. The session still starts on
    /// Home; a configured start view is applied as an ordinary transition.
    pub fn from_config(store: Arc<DocumentStore>, config: &ResolvedConfig) -> Self {
        let browser = match &config.start_doc {
            Some(id) => DocsBrowser::with_active(store, id.clone()),
            None => DocsBrowser::new(store),
        };
        let mut app = Self {
            view: ViewController::new(),
            browser,
            links: config.links.clone(),
            status_message: String::new(),
        };
        if config.start_view == ViewState::Docs {
            app.view.go_to_docs();
        }
        app.refresh_status();
        app
    }

    /// Title of the document the Docs view is showing, if any.
    pub fn active_title(&self) -> Option<&str> {
        self.browser
            .resolve_active_document()
            .document()
            .map(|doc| doc.title.as_str())
    }

    pub fn refresh_status(&mut self) {
        self.status_message = match self.view.current() {
            ViewState::Home => String::new(),
            ViewState::Docs => self
                .active_title()
                .unwrap_or("No documentation available")
                .to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_store, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.view.current(), ViewState::Home);
        assert_eq!(app.browser.active_doc_id(), Some("intro"));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_from_config_applies_start_view_and_doc() {
        let config = ResolvedConfig {
            start_view: ViewState::Docs,
            start_doc: Some("guide".to_string()),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(Arc::new(sample_store()), &config);
        assert!(app.view.is_docs());
        assert_eq!(app.active_title(), Some("Guide"));
        assert_eq!(app.status_message, "Guide");
    }

    #[test]
    fn test_from_config_with_stale_doc_falls_back() {
        let config = ResolvedConfig {
            start_doc: Some("nope".to_string()),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(Arc::new(sample_store()), &config);
        assert_eq!(app.view.current(), ViewState::Home);
        assert_eq!(app.active_title(), Some("Introduction"));
    }
}
