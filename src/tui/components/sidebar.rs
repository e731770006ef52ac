//! # Sidebar Component
//!
//! Single-selection list of document titles in store order. The active
//! document is highlighted; moving the cursor selects immediately.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state and entries

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::browser::NavEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const MIN_WIDTH: u16 = 20;
pub const MAX_WIDTH: u16 = 34;

/// Persistent state for the sidebar.
#[derive(Debug, Default)]
pub struct SidebarState {
    pub list_state: ListState,
    /// List area (inside border and padding) of the last render, for mouse hit testing.
    list_area: Rect,
    len: usize,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a click position to a sidebar row index.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.list_area;
        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }
        let index = usize::from(row - inner.y) + self.list_state.offset();
        (index < self.len).then_some(index)
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    Previous,
    Next,
    /// Move focus to the document pane.
    Open,
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => Some(SidebarEvent::Previous),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => Some(SidebarEvent::Next),
            TuiEvent::Submit | TuiEvent::InputChar('l') => Some(SidebarEvent::Open),
            _ => None,
        }
    }
}

/// Width that fits the longest title plus numbering and borders.
pub fn preferred_width(entries: &[NavEntry<'_>]) -> u16 {
    let longest = entries
        .iter()
        .map(|e| e.document.title.width())
        .max()
        .unwrap_or(0);
    // "1 " prefix + 2 borders + 2 padding
    let wanted = u16::try_from(longest + 6).unwrap_or(MAX_WIDTH);
    wanted.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    entries: &'a [NavEntry<'a>],
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut SidebarState, entries: &'a [NavEntry<'a>], focused: bool) -> Self {
        Self {
            state,
            entries,
            focused,
        }
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.len = self.entries.len();

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Documentation ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        self.state.list_area = block.inner(area);

        if self.entries.is_empty() {
            let empty = Paragraph::new("No documents.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            self.state.list_state.select(None);
            return;
        }

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.is_active {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let number = if entry.index < 9 {
                    format!("{} ", entry.index + 1)
                } else {
                    "  ".to_string()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(number, Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.document.title.clone(), style),
                ]))
            })
            .collect();

        let active = self.entries.iter().position(|e| e.is_active);
        self.state.list_state.select(active);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
