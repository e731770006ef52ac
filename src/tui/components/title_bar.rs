//! # TitleBar Component
//!
//! Top status line: application name, current view, and the status message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.view.current(), app.status_message.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Formatting
//!
//! 1. **Status message**: `"पाणिनि Docs | Docs | Language Guide"`
//! 2. **Default**: `"पाणिनि Docs | Home"`

use crate::core::view::ViewState;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_NAME: &str = "पाणिनि Docs";

/// Top status bar showing the current view and status.
pub struct TitleBar {
    pub view: ViewState,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(view: ViewState, status_message: String) -> Self {
        Self {
            view,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                APP_NAME,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" | {}", self.view.label())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(title_bar: &mut TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
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
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(ViewState::Docs, "Language Guide".to_string());
        let text = draw(&mut title_bar);

        assert!(text.contains("Docs"));
        assert!(text.contains("| Docs |"));
        assert!(text.contains("Language Guide"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(ViewState::Home, String::new());
        let text = draw(&mut title_bar);

        assert!(text.contains("| Home"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
