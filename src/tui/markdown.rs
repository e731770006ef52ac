//! Markdown tree → ratatui `Text` renderer.
//!
//! Walks the node tree from `core::markdown` and produces styled `Line`/`Span`
//! values: headings, bold, italic, inline code, boxed fenced code blocks (with
//! syntect highlighting), lists, blockquotes, aligned tables, and links.

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use unicode_width::UnicodeWidthStr;

use crate::core::markdown::{
    self, Alignment, Block, Inline, ListItem, MarkdownSurface, Table, plain_text,
};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";

/// Parse markdown content into styled `Text` using the docs color scheme.
///
/// Returns owned text (`'static`) so callers aren't constrained by input lifetime.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    TerminalSurface::new(base_fg).render(&markdown::parse(content))
}

/// Terminal presentation of a markdown tree.
pub struct TerminalSurface {
    base_fg: Color,
}

impl TerminalSurface {
    pub fn new(base_fg: Color) -> Self {
        Self { base_fg }
    }
}

impl MarkdownSurface for TerminalSurface {
    type Output = Text<'static>;

    fn render(&mut self, blocks: &[Block]) -> Text<'static> {
        let mut w = Writer::new(self.base_fg);
        w.blocks(blocks);
        w.text
    }
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Inline style stack (bold, italic, heading text, etc.). Styles compose
    /// via `patch` so nested bold+italic works.
    styles: Vec<Style>,
    /// Per-line prefix spans (blockquote `│`, code `│`, list indentation).
    line_prefixes: Vec<Span<'static>>,
    /// Current list nesting depth.
    list_depth: usize,
    /// Whether the next block element should be preceded by a blank line.
    needs_newline: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: vec![],
            line_prefixes: vec![],
            list_depth: 0,
            needs_newline: false,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Current effective style: top of stack, or base foreground color.
    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    /// Push a style that composes with the current one (inherits parent modifiers).
    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    // ── Line/span helpers ───────────────────────────────────────────────

    fn push_line(&mut self, line: Line<'static>) {
        let mut out = line;
        for pfx in self.line_prefixes.iter().rev().cloned() {
            out.spans.insert(0, pfx);
        }
        self.text.lines.push(out);
    }

    fn push_span(&mut self, span: Span<'static>) {
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        } else {
            self.push_line(Line::from(vec![span]));
        }
    }

    fn blank_line_if_needed(&mut self) {
        if self.needs_newline {
            self.push_line(Line::default());
            self.needs_newline = false;
        }
    }

    // ── Blocks ──────────────────────────────────────────────────────────

    fn blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.block(block);
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(content) => {
                self.blank_line_if_needed();
                self.push_line(Line::default());
                self.inlines(content);
                self.needs_newline = true;
            }
            Block::Heading { level, content } => {
                self.blank_line_if_needed();
                let hs = heading_style(self.base_fg, *level);
                self.push_line(Line::from(Span::styled(
                    format!("{} ", "#".repeat(usize::from(*level))),
                    hs,
                )));
                // Heading text inherits the heading style, not just the `##` prefix.
                self.push_style(hs);
                self.inlines(content);
                self.pop_style();
                self.needs_newline = true;
            }
            Block::BlockQuote(children) => {
                self.blank_line_if_needed();
                self.line_prefixes
                    .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
                self.push_style(
                    Style::default()
                        .fg(self.base_fg)
                        .add_modifier(Modifier::DIM | Modifier::ITALIC),
                );
                self.blocks(children);
                self.line_prefixes.pop();
                self.pop_style();
                self.needs_newline = true;
            }
            Block::CodeBlock { language, code } => self.code_block(language.as_deref(), code),
            Block::List { start, items } => self.list(*start, items),
            Block::Table(table) => self.table(table),
            Block::Rule => {
                self.blank_line_if_needed();
                self.push_line(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                self.needs_newline = true;
            }
            Block::Html(raw) => {
                self.blank_line_if_needed();
                let style = Style::default().fg(Color::DarkGray);
                for line in raw.lines() {
                    self.push_line(Line::from(Span::styled(expand_tabs(line), style)));
                }
                self.needs_newline = true;
            }
        }
    }

    fn code_block(&mut self, language: Option<&str>, code: &str) {
        if !self.text.lines.is_empty() {
            self.push_line(Line::default());
        }
        self.needs_newline = false;

        // Top border: ╭── lang ──  or just ╭──
        let bs = Style::default().fg(Color::DarkGray);
        let top = match language {
            Some(lang) => Line::from(vec![
                Span::styled("╭── ", bs),
                Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", bs),
            ]),
            None => Line::from(Span::styled("╭──", bs)),
        };
        self.push_line(top);
        self.line_prefixes.push(Span::styled("│ ", bs));

        let highlighter = language
            .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang))
            .and_then(|syntax| {
                THEME_SET
                    .themes
                    .get(CODE_THEME)
                    .map(|theme| HighlightLines::new(syntax, theme))
            });

        match highlighter {
            Some(mut hl) => {
                for line in LinesWithEndings::from(code) {
                    let spans: Vec<Span<'static>> = match hl.highlight_line(line, &SYNTAX_SET) {
                        Ok(ranges) => ranges
                            .into_iter()
                            .filter_map(|(hl_style, frag)| {
                                let content = expand_tabs(frag.trim_end_matches('\n'));
                                if content.is_empty() {
                                    return None;
                                }
                                let fg = Color::Rgb(
                                    hl_style.foreground.r,
                                    hl_style.foreground.g,
                                    hl_style.foreground.b,
                                );
                                Some(Span::styled(content, Style::default().fg(fg)))
                            })
                            .collect(),
                        Err(_) => vec![Span::styled(
                            expand_tabs(line.trim_end_matches('\n')),
                            Style::default().fg(Color::White),
                        )],
                    };
                    self.push_line(Line::from(spans));
                }
            }
            None => {
                let code_style = Style::default().fg(Color::White);
                for line in code.lines() {
                    self.push_line(Line::from(Span::styled(expand_tabs(line), code_style)));
                }
            }
        }

        self.line_prefixes.pop(); // remove │ prefix before bottom border
        self.push_line(Line::from(Span::styled("╰──", bs)));
        self.needs_newline = true;
    }

    fn list(&mut self, start: Option<u64>, items: &[ListItem]) {
        if self.list_depth == 0 {
            self.blank_line_if_needed();
        }
        self.list_depth += 1;
        let indent = "  ".repeat(self.list_depth - 1);
        let mut number = start;
        for item in items {
            let marker = match number.as_mut() {
                Some(n) => {
                    let marker = format!("{indent}{n}. ");
                    *n += 1;
                    marker
                }
                None => format!("{indent}- "),
            };
            let marker_width = marker.width();
            self.push_line(Line::default());
            self.push_span(Span::styled(marker, Style::default().fg(Color::DarkGray)));
            if let Some(checked) = item.task {
                self.push_span(Span::raw(if checked { "[x] " } else { "[ ] " }));
            }

            // The first paragraph shares the marker line; the rest hang under it.
            let mut rest = item.blocks.as_slice();
            if let Some(Block::Paragraph(content)) = rest.first() {
                self.inlines(content);
                rest = &rest[1..];
            }
            self.needs_newline = false;
            for block in rest {
                if matches!(block, Block::List { .. }) {
                    self.block(block);
                } else {
                    self.line_prefixes.push(Span::raw(" ".repeat(marker_width)));
                    self.block(block);
                    self.line_prefixes.pop();
                }
                self.needs_newline = false;
            }
        }
        self.list_depth -= 1;
        self.needs_newline = true;
    }

    fn table(&mut self, table: &Table) {
        self.blank_line_if_needed();
        let columns = table.column_count();
        if columns == 0 {
            return;
        }

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&table.header).chain(table.rows.iter()) {
            for (col, cell) in row.iter().enumerate().take(columns) {
                widths[col] = widths[col].max(display_width(cell));
            }
        }

        let border = Style::default().fg(Color::DarkGray);
        let header_style = self.style().add_modifier(Modifier::BOLD);
        self.table_row(&table.header, &table.alignments, &widths, header_style);

        let separator: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        self.push_line(Line::from(Span::styled(separator.join("┼"), border)));

        let body_style = self.style();
        for row in &table.rows {
            self.table_row(row, &table.alignments, &widths, body_style);
        }
        self.needs_newline = true;
    }

    fn table_row(
        &mut self,
        cells: &[Vec<Inline>],
        alignments: &[Alignment],
        widths: &[usize],
        style: Style,
    ) {
        let border = Style::default().fg(Color::DarkGray);
        self.push_line(Line::default());
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                self.push_span(Span::styled("│", border));
            }
            let cell = cells.get(col).map(Vec::as_slice).unwrap_or_default();
            let pad = width.saturating_sub(display_width(cell));
            let (left, right) = match alignments.get(col).copied().unwrap_or_default() {
                Alignment::Right => (pad, 0),
                Alignment::Center => (pad / 2, pad - pad / 2),
                Alignment::None | Alignment::Left => (0, pad),
            };
            self.push_span(Span::raw(" ".repeat(left + 1)));
            self.push_style(style);
            self.inlines(cell);
            self.pop_style();
            self.push_span(Span::raw(" ".repeat(right + 1)));
        }
    }

    // ── Inlines ─────────────────────────────────────────────────────────

    fn inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.inline(inline);
        }
    }

    fn inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(t) => {
                let style = self.style();
                self.push_span(Span::styled(expand_tabs(t), style));
            }
            Inline::Code(c) => {
                let style = Style::default().fg(Color::White).bg(Color::DarkGray);
                self.push_span(Span::styled(c.clone(), style));
            }
            Inline::Emphasis(children) => {
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
                self.inlines(children);
                self.pop_style();
            }
            Inline::Strong(children) => {
                self.push_style(Style::default().add_modifier(Modifier::BOLD));
                self.inlines(children);
                self.pop_style();
            }
            Inline::Strikethrough(children) => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT));
                self.inlines(children);
                self.pop_style();
            }
            Inline::Link { target, content } => {
                let link_style = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED);
                self.push_style(link_style);
                self.inlines(content);
                self.pop_style();
                // Autolinks already show their target.
                if plain_text(content) != *target {
                    self.push_span(Span::raw(" ("));
                    self.push_span(Span::styled(target.clone(), link_style));
                    self.push_span(Span::raw(")"));
                }
            }
            Inline::Image { target, alt } => {
                let style = Style::default().fg(Color::DarkGray);
                self.push_span(Span::styled(format!("[image: {alt}] ({target})"), style));
            }
            Inline::SoftBreak => self.push_span(Span::raw(" ")),
            Inline::HardBreak => self.push_line(Line::default()),
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Columns `Writer::inline` will draw for `inlines`, link targets included.
fn display_width(inlines: &[Inline]) -> usize {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(t) => expand_tabs(t).width(),
            Inline::Code(c) => c.width(),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children) => display_width(children),
            Inline::Link { target, content } => {
                let label = display_width(content);
                if plain_text(content) != *target {
                    label + target.width() + 3
                } else {
                    label
                }
            }
            Inline::Image { target, alt } => format!("[image: {alt}] ({target})").width(),
            Inline::SoftBreak => 1,
            Inline::HardBreak => 0,
        })
        .sum()
}

/// Expand tabs → 4 spaces (ratatui renders \t as zero-width).
fn expand_tabs(raw: &str) -> String {
    if raw.contains('\t') {
        raw.replace('\t', "    ")
    } else {
        raw.to_owned()
    }
}

fn heading_style(base_fg: Color, level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}
