//! # Core Application Logic
//!
//! The documentation browser's domain model. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • DocumentStore        │
//!                    │  • ViewController       │
//!                    │  • DocsBrowser          │
//!                    │  • markdown::parse()    │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │ Plain text │
//!          │  Adapter   │                │  (stdout)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`]: `Document` and the immutable `DocumentStore`
//! - [`view`]: `ViewController`, Home vs. Docs
//! - [`browser`]: `DocsBrowser`, active document and fallback resolution
//! - [`markdown`]: markdown → node tree, plus the `MarkdownSurface` trait
//! - [`state`]: the `App` struct, all session state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file and override resolution
//! - [`content`]: compiled-in documents and Home copy

pub mod action;
pub mod browser;
pub mod config;
pub mod content;
pub mod document;
pub mod markdown;
pub mod state;
pub mod view;
