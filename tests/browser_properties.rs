//! Property-based tests for document lookup, selection, and rendering.
//!
//! Uses proptest to verify:
//! - every listed id resolves to itself
//! - resolution never fails on a non-empty store, whatever the active id
//! - selecting an absent id leaves the selection untouched
//! - leaving and re-entering the Docs view keeps the active document
//! - markdown parsing is deterministic and total

use std::collections::BTreeSet;
use std::sync::Arc;

use paanini_docs::core::markdown;
use paanini_docs::{DocsBrowser, Document, DocumentStore, Resolution, ViewController};
use proptest::prelude::*;

fn store_from_ids(ids: &BTreeSet<String>) -> Arc<DocumentStore> {
    let docs = ids
        .iter()
        .map(|id| Document::new(id.clone(), format!("Title {id}"), format!("# {id}")))
        .collect();
    Arc::new(DocumentStore::new(docs).expect("ids are unique and non-empty"))
}

fn id_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_get_returns_matching_id(ids in id_set()) {
        let store = store_from_ids(&ids);
        for doc in store.list() {
            let found = store.get(&doc.id);
            prop_assert!(found.is_some());
            prop_assert_eq!(&found.unwrap().id, &doc.id);
        }
        prop_assert_eq!(store.len(), ids.len());
    }

    #[test]
    fn test_resolution_defined_for_any_active_id(ids in id_set(), active in ".{0,12}") {
        let store = store_from_ids(&ids);
        let browser = DocsBrowser::with_active(store.clone(), active.clone());
        let resolved = browser.resolve_active_document();
        prop_assert!(!resolved.is_empty());

        let doc = resolved.document().unwrap();
        if store.get(&active).is_some() {
            prop_assert_eq!(&doc.id, &active);
        } else {
            prop_assert_eq!(&doc.id, &store.list()[0].id);
            prop_assert!(matches!(resolved, Resolution::Fallback(_)));
        }

        // Exactly one sidebar entry is highlighted
        let active_entries = browser.entries().iter().filter(|e| e.is_active).count();
        prop_assert_eq!(active_entries, 1);
    }

    #[test]
    fn test_selecting_absent_id_is_noop(ids in id_set(), pick in any::<prop::sample::Index>(), missing in "[A-Z0-9]{1,8}") {
        let store = store_from_ids(&ids);
        let chosen = store.list()[pick.index(store.len())].id.clone();
        let mut browser = DocsBrowser::new(store);
        prop_assert!(browser.select_document(&chosen));

        // Uppercase/digit ids can never collide with the lowercase store ids
        prop_assert!(!browser.select_document(&missing));
        prop_assert_eq!(browser.active_doc_id(), Some(chosen.as_str()));
        prop_assert_eq!(&browser.resolve_active_document().document().unwrap().id, &chosen);
    }

    #[test]
    fn test_view_round_trip_preserves_active_document(ids in id_set(), pick in any::<prop::sample::Index>()) {
        let store = store_from_ids(&ids);
        let chosen = store.list()[pick.index(store.len())].id.clone();
        let mut browser = DocsBrowser::new(store);
        let mut view = ViewController::new();

        view.go_to_docs();
        browser.select_document(&chosen);
        view.go_home();
        view.go_to_docs();

        prop_assert!(view.is_docs());
        prop_assert_eq!(browser.active_doc_id(), Some(chosen.as_str()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_parse_is_deterministic(content in "(?s).{0,400}") {
        let first = markdown::parse(&content);
        let second = markdown::parse(&content);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_markdown_like_input_never_panics(
        lines in prop::collection::vec(
            prop_oneof![
                Just("# heading".to_string()),
                Just("```rust".to_string()),
                Just("```".to_string()),
                Just("| a | b |".to_string()),
                Just("|---|---|".to_string()),
                Just("- item".to_string()),
                Just("> quote".to_string()),
                Just(String::new()),
                "[a-z *_`|]{0,20}",
            ],
            0..30,
        )
    ) {
        let content = lines.join("\n");
        let blocks = markdown::parse(&content);
        for block in &blocks {
            if let markdown::Block::Table(table) = block {
                let columns = table.column_count();
                prop_assert_eq!(table.header.len(), columns);
                for row in &table.rows {
                    prop_assert_eq!(row.len(), columns);
                }
            }
        }
    }
}
