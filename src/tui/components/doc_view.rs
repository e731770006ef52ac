//! # Document Pane
//!
//! Renders the resolved document's markdown in a bordered, scrollable pane.
//! Rendered `Text` is memoized per document id; the store never changes
//! during a session, so an entry never goes stale.

use std::collections::HashMap;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Span, Text};
use ratatui::widgets::{
    Block, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

use crate::core::document::Document;
use crate::tui::component::Component;
use crate::tui::components::scroll::ScrollState;
use crate::tui::markdown;

pub const EMPTY_MESSAGE: &str = "No documentation available.";

/// Persistent state for the document pane.
#[derive(Debug, Default)]
pub struct DocViewState {
    pub scroll: ScrollState,
    cache: HashMap<String, Text<'static>>,
}

impl DocViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered markdown for `doc`, computed on first use.
    fn text_for(&mut self, doc: &Document) -> &Text<'static> {
        self.cache.entry(doc.id.clone()).or_insert_with(|| {
            debug!("doc_view: rendering '{}'", doc.id);
            markdown::render(&doc.content, Color::Gray)
        })
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Transient render wrapper for the document pane.
pub struct DocView<'a> {
    state: &'a mut DocViewState,
    document: Option<&'a Document>,
    focused: bool,
}

impl<'a> DocView<'a> {
    pub fn new(state: &'a mut DocViewState, document: Option<&'a Document>, focused: bool) -> Self {
        Self {
            state,
            document,
            focused,
        }
    }
}

impl Component for DocView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::horizontal(1));

        let Some(doc) = self.document else {
            self.state.scroll.set_bounds(0, 0);
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        };

        block = block.title(Span::styled(
            format!(" {} ", doc.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = self.state.text_for(doc).clone();
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(inner.width);
        self.state.scroll.set_bounds(total_lines, inner.height);

        let offset = self.state.scroll.offset;
        frame.render_widget(paragraph.scroll((offset, 0)), inner);

        let max_scroll = self.state.scroll.max_offset();
        if max_scroll == 0 {
            return;
        }
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(usize::from(max_scroll))
            .position(usize::from(offset));
        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::EventHandler;
    use crate::tui::event::TuiEvent;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut DocViewState, doc: Option<&Document>, w: u16, h: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|f| DocView::new(state, doc, true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_body() {
        let doc = Document::new("intro", "Introduction", "# Hello\n\nWorld");
        let mut state = DocViewState::new();
        let text = draw(&mut state, Some(&doc), 40, 8);
        assert!(text.contains("Introduction"));
        assert!(text.contains("Hello"));
        assert!(text.contains("World"));
    }

    #[test]
    fn test_empty_state_message() {
        let mut state = DocViewState::new();
        let text = draw(&mut state, None, 40, 5);
        assert!(text.contains(EMPTY_MESSAGE));
        assert_eq!(state.cached(), 0);
    }

    #[test]
    fn test_render_is_memoized_per_document() {
        let a = Document::new("a", "A", "alpha");
        let b = Document::new("b", "B", "beta");
        let mut state = DocViewState::new();
        draw(&mut state, Some(&a), 30, 5);
        draw(&mut state, Some(&a), 30, 5);
        assert_eq!(state.cached(), 1);
        draw(&mut state, Some(&b), 30, 5);
        assert_eq!(state.cached(), 2);
    }

    #[test]
    fn test_long_document_scrolls() {
        let body: String = (1..=30).map(|i| format!("line {i}\n\n")).collect();
        let doc = Document::new("long", "Long", body);
        let mut state = DocViewState::new();
        let first = draw(&mut state, Some(&doc), 30, 10);
        assert!(first.contains("line 1 "));
        assert!(state.scroll.max_offset() > 0);

        state.scroll.handle_event(&TuiEvent::ScrollToBottom);
        let last = draw(&mut state, Some(&doc), 30, 10);
        assert!(last.contains("line 30"));
        assert!(!last.contains("line 1 "));
    }
}
