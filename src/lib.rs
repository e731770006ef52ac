//! Paanini documentation browser library exports.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::browser::{DocsBrowser, NavEntry, Resolution};
pub use crate::core::document::{Document, DocumentStore, StoreError};
pub use crate::core::markdown::{Block, Inline, MarkdownSurface, PlainText};
pub use crate::core::view::{ViewController, ViewState};
