//! # View Controller
//!
//! Top-level mode switch between the marketing Home view and the Docs view.
//!
//! ```text
//!          go_to_docs()
//!   Home ───────────────▶ Docs
//!        ◀───────────────
//!           go_home()
//! ```
//!
//! Both transitions are total: no guards, no terminal state.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    #[default]
    Home,
    Docs,
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::Docs => "Docs",
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    /// Every session starts on Home.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewState {
        self.state
    }

    pub fn is_docs(&self) -> bool {
        self.state == ViewState::Docs
    }

    pub fn go_home(&mut self) {
        debug!("View: {:?} -> Home", self.state);
        self.state = ViewState::Home;
    }

    pub fn go_to_docs(&mut self) {
        debug!("View: {:?} -> Docs", self.state);
        self.state = ViewState::Docs;
    }
}
