//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event arrived. All pending events are drained before
//! the next draw so held-down keys don't queue up frames.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::document::DocumentStore;
use crate::core::state::App;
use crate::core::view::ViewState;
use crate::tui::component::EventHandler;
use crate::tui::components::{DocViewState, LandingState, SidebarEvent, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which Docs pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the selection.
    #[default]
    Sidebar,
    /// Arrows scroll the document.
    Content,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}

/// TUI-specific presentation state (not part of core state)
#[derive(Default)]
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub landing: LandingState,
    pub sidebar: SidebarState,
    pub doc_view: DocViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset_scroll(&mut self) {
        self.landing.scroll.reset();
        self.doc_view.scroll.reset();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(store: Arc<DocumentStore>, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(store, config);
    let mut tui = TuiState::new();
    info!(
        "Starting TUI: view={:?}, documents={}",
        app.view.current(),
        app.browser.store().len()
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    info!("TUI exited");
    result
}

/// Route one input event to the reducer or to presentation state.
/// Returns the effect of the last applied action (`Effect::Quit` ends the loop).
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }
    // ForceQuit (Ctrl+C) always quits regardless of view
    if matches!(event, TuiEvent::ForceQuit | TuiEvent::InputChar('q')) {
        return dispatch(app, tui, Action::Quit);
    }

    match app.view.current() {
        ViewState::Home => match event {
            TuiEvent::Escape => dispatch(app, tui, Action::Quit),
            TuiEvent::InputChar('d') | TuiEvent::Submit => {
                tui.focus = Focus::Sidebar;
                dispatch(app, tui, Action::GoToDocs)
            }
            _ => {
                tui.landing.scroll.handle_event(event);
                Effect::None
            }
        },
        ViewState::Docs => handle_docs_event(app, tui, event),
    }
}

fn handle_docs_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('h') => {
            dispatch(app, tui, Action::GoHome)
        }
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.toggle();
            debug!("Focus -> {:?}", tui.focus);
            Effect::None
        }
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
            dispatch(app, tui, Action::SelectIndex(index))
        }
        TuiEvent::MouseClick(column, row) => match tui.sidebar.hit_test(*column, *row) {
            Some(index) => {
                tui.focus = Focus::Sidebar;
                dispatch(app, tui, Action::SelectIndex(index))
            }
            None => Effect::None,
        },
        // Wheel and paging always scroll the document
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop
        | TuiEvent::ScrollToBottom
        | TuiEvent::InputChar(' ') => {
            tui.doc_view.scroll.handle_event(event);
            Effect::None
        }
        _ => match tui.focus {
            Focus::Sidebar => match tui.sidebar.handle_event(event) {
                Some(SidebarEvent::Previous) => dispatch(app, tui, Action::SelectPrevious),
                Some(SidebarEvent::Next) => dispatch(app, tui, Action::SelectNext),
                Some(SidebarEvent::Open) => {
                    tui.focus = Focus::Content;
                    Effect::None
                }
                None => Effect::None,
            },
            Focus::Content => {
                tui.doc_view.scroll.handle_event(event);
                Effect::None
            }
        },
    }
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action);
    if effect == Effect::ResetScroll {
        tui.reset_scroll();
    }
    effect
}
