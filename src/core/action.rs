//! # Actions
//!
//! Everything that can happen in a browsing session becomes an `Action`.
//! User presses `d` on Home? That's `Action::GoToDocs`.
//! User clicks a sidebar row? That's `Action::SelectDocument(id)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoHome,
    GoToDocs,
    SelectDocument(String),
    SelectIndex(usize),
    SelectNext,
    SelectPrevious,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The visible content changed; scroll back to the top.
    ResetScroll,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let before = app.browser.resolved_index();
    let effect = match action {
        Action::GoHome => {
            app.view.go_home();
            Effect::ResetScroll
        }
        Action::GoToDocs => {
            app.view.go_to_docs();
            Effect::ResetScroll
        }
        Action::SelectDocument(id) => {
            app.browser.select_document(&id);
            selection_effect(before, app.browser.resolved_index())
        }
        Action::SelectIndex(index) => {
            app.browser.select_index(index);
            selection_effect(before, app.browser.resolved_index())
        }
        Action::SelectNext => {
            app.browser.select_next();
            selection_effect(before, app.browser.resolved_index())
        }
        Action::SelectPrevious => {
            app.browser.select_previous();
            selection_effect(before, app.browser.resolved_index())
        }
        Action::Quit => return Effect::Quit,
    };
    app.refresh_status();
    effect
}

fn selection_effect(before: Option<usize>, after: Option<usize>) -> Effect {
    if before == after {
        Effect::None
    } else {
        Effect::ResetScroll
    }
}
