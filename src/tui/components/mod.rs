//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status line showing the view and status message
//!
//! ### Stateful Components
//!
//! These use the persistent state + transient wrapper pattern. The `*State`
//! struct lives in `TuiState` across frames; the wrapper borrows it plus the
//! props for a single render:
//!
//! - `LandingPage` / `LandingState`: Home view with a scrollable body
//! - `Sidebar` / `SidebarState`: document list, emits `SidebarEvent`
//! - `DocView` / `DocViewState`: scrollable, memoized markdown pane
//!
//! `ScrollState` is shared by the Home body and the document pane.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── landing.rs       (Home view)
//! ├── sidebar.rs       (Document navigation list)
//! ├── doc_view.rs      (Active document pane)
//! └── scroll.rs        (Vertical scroll offset)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod doc_view;
pub mod landing;
pub mod scroll;
pub mod sidebar;
pub use doc_view::{DocView, DocViewState};
pub use landing::{LandingPage, LandingState};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
