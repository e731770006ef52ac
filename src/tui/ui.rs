use crate::core::state::App;
use crate::core::view::ViewState;
use crate::tui::component::Component;
use crate::tui::components::sidebar::preferred_width;
use crate::tui::components::{DocView, LandingPage, Sidebar, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const HOME_HELP: &[(&str, &str)] = &[
    ("d/Enter", "docs"),
    ("↑↓/PgUp/PgDn", "scroll"),
    ("q", "quit"),
];

const DOCS_HELP: &[(&str, &str)] = &[
    ("↑↓", "select/scroll"),
    ("Tab", "focus"),
    ("1-9", "jump"),
    ("Esc", "home"),
    ("q", "quit"),
];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.view.current(), app.status_message.clone()).render(frame, title_area);

    match app.view.current() {
        ViewState::Home => {
            LandingPage::new(&mut tui.landing, &app.links).render(frame, main_area);
            draw_help(frame, help_area, HOME_HELP);
        }
        ViewState::Docs => {
            draw_docs(frame, main_area, app, tui);
            draw_help(frame, help_area, DOCS_HELP);
        }
    }
}

fn draw_docs(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let entries = app.browser.entries();
    let sidebar_width = preferred_width(&entries).min(area.width / 2);
    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);

    Sidebar::new(&mut tui.sidebar, &entries, tui.focus == Focus::Sidebar)
        .render(frame, sidebar_area);

    let document = app.browser.resolve_active_document().document();
    DocView::new(&mut tui.doc_view, document, tui.focus == Focus::Content)
        .render(frame, content_area);
}

fn draw_help(frame: &mut Frame, area: Rect, bindings: &[(&str, &str)]) {
    let key_style = Style::default().fg(Color::Cyan);
    let desc_style = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(bindings.len() * 3);
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {desc}"), desc_style));
    }
    frame.render_widget(Line::from(spans), area);
}
