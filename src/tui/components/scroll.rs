//! # Scroll State
//!
//! Vertical scroll offset shared by the Home page and the document pane.
//! Bounds are refreshed on every render from the wrapped content height,
//! so the offset can never point past the last screenful.

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    max_offset: u16,
    viewport: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    /// Record content/viewport heights from the latest render and clamp.
    pub fn set_bounds(&mut self, content_height: usize, viewport: u16) {
        let content = u16::try_from(content_height).unwrap_or(u16::MAX);
        self.viewport = viewport;
        self.max_offset = content.saturating_sub(viewport);
        self.offset = self.offset.min(self.max_offset);
    }

    fn page(&self) -> u16 {
        self.viewport.saturating_sub(2).max(1)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.offset = u16::try_from(next).unwrap_or(0);
    }
}

impl EventHandler for ScrollState {
    /// The new offset, when the event moved it.
    type Event = u16;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<u16> {
        let before = self.offset;
        match event {
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => self.scroll_by(-1),
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => self.scroll_by(1),
            TuiEvent::ScrollUp => self.scroll_by(-3),
            TuiEvent::ScrollDown => self.scroll_by(3),
            TuiEvent::ScrollPageUp => self.scroll_by(-i32::from(self.page())),
            TuiEvent::ScrollPageDown | TuiEvent::InputChar(' ') => {
                self.scroll_by(i32::from(self.page()))
            }
            TuiEvent::ScrollToTop => self.offset = 0,
            TuiEvent::ScrollToBottom => self.offset = self.max_offset,
            _ => return None,
        }
        (self.offset != before).then_some(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(content: usize, viewport: u16) -> ScrollState {
        let mut state = ScrollState::new();
        state.set_bounds(content, viewport);
        state
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut state = bounded(30, 10);
        assert_eq!(state.max_offset(), 20);
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollToBottom), Some(20));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::ScrollPageUp), Some(12));
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut state = bounded(5, 10);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut state = bounded(100, 10);
        state.handle_event(&TuiEvent::ScrollToBottom);
        state.set_bounds(20, 10);
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn test_unrelated_event_ignored() {
        let mut state = bounded(100, 10);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
