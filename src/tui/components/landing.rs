//! # Home Page Component
//!
//! The landing view: hero heading, the Home markdown body (install steps,
//! features, examples, keyword table) in a scrollable region, the outbound
//! links, and the footer notice.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::config::Links;
use crate::core::content::{HERO_SUBTITLE, HERO_TITLE, HOME};
use crate::tui::component::Component;
use crate::tui::components::scroll::ScrollState;
use crate::tui::markdown;

pub const FOOTER: &str = "© Paanini Developers. Licensed under MIT.";

/// Persistent Home page state: scroll offset and the rendered body.
#[derive(Debug)]
pub struct LandingState {
    pub scroll: ScrollState,
    body: Text<'static>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            scroll: ScrollState::new(),
            body: markdown::render(HOME, Color::Gray),
        }
    }
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct LandingPage<'a> {
    state: &'a mut LandingState,
    links: &'a Links,
}

impl<'a> LandingPage<'a> {
    pub fn new(state: &'a mut LandingState, links: &'a Links) -> Self {
        Self { state, links }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [hero_area, body_area, links_area, footer_area] =
            Layout::vertical([Length(3), Min(0), Length(1), Length(1)]).areas(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                HERO_TITLE,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                HERO_SUBTITLE,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hero, hero_area);

        // One column of margin on each side of the body.
        let [_, body_inner, _] = Layout::horizontal([Length(2), Min(0), Length(2)]).areas(body_area);
        let paragraph = Paragraph::new(self.state.body.clone()).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(body_inner.width);
        self.state.scroll.set_bounds(total_lines, body_inner.height);
        frame.render_widget(
            paragraph.scroll((self.state.scroll.offset, 0)),
            body_inner,
        );

        let link_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        let links = Paragraph::new(Line::from(vec![
            Span::styled("GitHub: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.links.repository.clone(), link_style),
            Span::styled("   crates.io: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.links.registry.clone(), link_style),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(links, links_area);

        let footer = Paragraph::new(FOOTER)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut LandingState, links: &Links, w: u16, h: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|f| LandingPage::new(state, links).render(f, f.area()))
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
    fn test_home_shows_hero_links_and_footer() {
        let mut state = LandingState::new();
        let links = Links {
            repository: "https://example.org/repo".to_string(),
            registry: "https://example.org/pkg".to_string(),
        };
        let text = draw(&mut state, &links, 120, 30);
        assert!(text.contains("Sanskrit Programming Language"));
        assert!(text.contains("https://example.org/repo"));
        assert!(text.contains("https://example.org/pkg"));
        assert!(text.contains("Licensed under MIT."));
    }

    #[test]
    fn test_home_body_is_scrollable() {
        let mut state = LandingState::new();
        draw(&mut state, &Links::default(), 80, 12);
        assert!(state.scroll.max_offset() > 0);
    }
}
