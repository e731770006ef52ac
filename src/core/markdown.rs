//! # Markdown → Node Tree
//!
//! Converts markdown (with GFM tables, strikethrough and task lists) into a
//! toolkit-independent block/inline tree. Presentation surfaces implement
//! [`MarkdownSurface`] to turn the tree into whatever they draw.
//!
//! ```text
//! &str ──parse()──▶ Vec<Block> ──MarkdownSurface::render()──▶ Text / String / ...
//! ```
//!
//! Parsing never fails. `pulldown_cmark` already follows CommonMark's
//! recovery rules (an unclosed fence runs to end of input, a bad table
//! delimiter row is plain paragraph text); on top of that, table rows are
//! normalized to the delimiter row's column count. Raw HTML is carried as
//! literal text and never interpreted.

use log::trace;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag};

// ── Node types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    /// Fenced or indented code. `code` is the verbatim body.
    CodeBlock { language: Option<String>, code: String },
    List { start: Option<u64>, items: Vec<ListItem> },
    BlockQuote(Vec<Block>),
    Table(Table),
    Rule,
    /// Raw HTML block, kept as literal text.
    Html(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// `Some(checked)` for GFM task items.
    pub task: Option<bool>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    /// A reference to `target`, opened in a new browsing context by surfaces
    /// that can. The target is never validated or fetched.
    Link { target: String, content: Vec<Inline> },
    Image { target: String, alt: String },
    SoftBreak,
    HardBreak,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

pub type Cell = Vec<Inline>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// One entry per column; its length is the column count.
    pub alignments: Vec<Alignment>,
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.alignments.len()
    }

    /// Pad short rows with empty cells and drop cells past the column count.
    fn normalize(&mut self) {
        let columns = self.column_count();
        self.header.resize_with(columns, Vec::new);
        for row in &mut self.rows {
            row.resize_with(columns, Vec::new);
        }
    }
}

/// Concatenated text of an inline run, without styling.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    collect_text(inlines, &mut out);
    out
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(t) | Inline::Code(t) => out.push_str(t),
            Inline::Emphasis(c) | Inline::Strong(c) | Inline::Strikethrough(c) => {
                collect_text(c, out)
            }
            Inline::Link { content, .. } => collect_text(content, out),
            Inline::Image { alt, .. } => out.push_str(alt),
            Inline::SoftBreak => out.push(' '),
            Inline::HardBreak => out.push('\n'),
        }
    }
}

// ── Surfaces ────────────────────────────────────────────────────────────────

/// Something that can present a parsed markdown tree.
pub trait MarkdownSurface {
    type Output;

    fn render(&mut self, blocks: &[Block]) -> Self::Output;
}

// ── Parsing ─────────────────────────────────────────────────────────────────

fn options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

/// Parse markdown into a block tree. Deterministic and infallible.
pub fn parse(content: &str) -> Vec<Block> {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(content, options()) {
        builder.handle(event);
    }
    builder.finish()
}

/// Open containers while walking the event stream.
enum Frame {
    Root(Vec<Block>),
    Quote(Vec<Block>),
    Item(ListItem),
    /// Block-level tag we don't model; its children are spliced into the parent.
    Transparent(Vec<Block>),
    List {
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    /// `implicit` paragraphs wrap inline content of tight list items.
    Paragraph {
        implicit: bool,
        content: Vec<Inline>,
    },
    Heading {
        level: u8,
        content: Vec<Inline>,
    },
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        target: String,
        content: Vec<Inline>,
    },
    Image {
        target: String,
        content: Vec<Inline>,
    },
    Code {
        language: Option<String>,
        code: String,
    },
    Html(String),
    Table(Table),
    Row(Vec<Cell>),
    Cell(Vec<Inline>),
}

impl Frame {
    fn inlines_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Frame::Paragraph { content, .. }
            | Frame::Heading { content, .. }
            | Frame::Emphasis(content)
            | Frame::Strong(content)
            | Frame::Strikethrough(content)
            | Frame::Link { content, .. }
            | Frame::Image { content, .. }
            | Frame::Cell(content) => Some(content),
            _ => None,
        }
    }

    fn blocks_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Frame::Root(blocks) | Frame::Quote(blocks) | Frame::Transparent(blocks) => {
                Some(blocks)
            }
            Frame::Item(item) => Some(&mut item.blocks),
            _ => None,
        }
    }

    fn is_implicit_paragraph(&self) -> bool {
        matches!(self, Frame::Paragraph { implicit: true, .. })
    }
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::Root(Vec::new())],
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => {
                // Implicit paragraphs have no End event of their own; they
                // close with the enclosing block.
                self.close_implicit();
                self.close();
            }
            Event::Text(text) => self.text(text),
            Event::Code(code) => self.push_inline(Inline::Code(code.into_string())),
            Event::Html(html) | Event::InlineHtml(html) => self.html(html),
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::HardBreak),
            Event::Rule => {
                self.close_implicit();
                self.push_block(Block::Rule);
            }
            Event::TaskListMarker(checked) => self.mark_task(checked),
            Event::FootnoteReference(label) => {
                self.push_inline(Inline::Text(format!("[^{label}]")))
            }
            other => trace!("markdown: ignoring {other:?}"),
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            // ── Inline containers ──────────────────────────────────────────
            Tag::Emphasis => return self.open_inline(Frame::Emphasis(Vec::new())),
            Tag::Strong => return self.open_inline(Frame::Strong(Vec::new())),
            Tag::Strikethrough => return self.open_inline(Frame::Strikethrough(Vec::new())),
            Tag::Link { dest_url, .. } => {
                return self.open_inline(Frame::Link {
                    target: dest_url.into_string(),
                    content: Vec::new(),
                });
            }
            Tag::Image { dest_url, .. } => {
                return self.open_inline(Frame::Image {
                    target: dest_url.into_string(),
                    content: Vec::new(),
                });
            }
            // ── Block containers ───────────────────────────────────────────
            Tag::Paragraph => Frame::Paragraph {
                implicit: false,
                content: Vec::new(),
            },
            Tag::Heading { level, .. } => Frame::Heading {
                level: heading_depth(level),
                content: Vec::new(),
            },
            Tag::BlockQuote(_) => Frame::Quote(Vec::new()),
            Tag::CodeBlock(kind) => Frame::Code {
                language: match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Frame::Html(String::new()),
            Tag::List(start) => Frame::List {
                start,
                items: Vec::new(),
            },
            Tag::Item => Frame::Item(ListItem::default()),
            Tag::Table(alignments) => Frame::Table(Table {
                alignments: alignments.into_iter().map(Alignment::from).collect(),
                ..Table::default()
            }),
            Tag::TableHead | Tag::TableRow => Frame::Row(Vec::new()),
            Tag::TableCell => Frame::Cell(Vec::new()),
            other => {
                trace!("markdown: passing through unmodelled tag {other:?}");
                Frame::Transparent(Vec::new())
            }
        };
        self.close_implicit();
        self.stack.push(frame);
    }

    fn open_inline(&mut self, frame: Frame) {
        self.ensure_inline_container();
        self.stack.push(frame);
    }

    /// Pop the top frame and attach its node to the new top.
    fn close(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Root(_) => {}
            Frame::Quote(blocks) => self.push_block(Block::BlockQuote(blocks)),
            Frame::Transparent(blocks) => {
                for block in blocks {
                    self.push_block(block);
                }
            }
            Frame::Item(item) => {
                if let Some(Frame::List { items, .. }) = self.stack.last_mut() {
                    items.push(item);
                } else {
                    // An item outside a list only happens on malformed streams.
                    for block in item.blocks {
                        self.push_block(block);
                    }
                }
            }
            Frame::List { start, items } => self.push_block(Block::List { start, items }),
            Frame::Paragraph { content, .. } => self.push_block(Block::Paragraph(content)),
            Frame::Heading { level, content } => self.push_block(Block::Heading { level, content }),
            Frame::Emphasis(c) => self.push_inline(Inline::Emphasis(c)),
            Frame::Strong(c) => self.push_inline(Inline::Strong(c)),
            Frame::Strikethrough(c) => self.push_inline(Inline::Strikethrough(c)),
            Frame::Link { target, content } => self.push_inline(Inline::Link { target, content }),
            Frame::Image { target, content } => self.push_inline(Inline::Image {
                target,
                alt: plain_text(&content),
            }),
            Frame::Code { language, code } => self.push_block(Block::CodeBlock { language, code }),
            Frame::Html(raw) => self.push_block(Block::Html(raw)),
            Frame::Table(mut table) => {
                table.normalize();
                self.push_block(Block::Table(table));
            }
            Frame::Row(cells) => {
                if let Some(Frame::Table(table)) = self.stack.last_mut() {
                    // The head row arrives first; every later row is data.
                    if table.header.is_empty() && table.rows.is_empty() {
                        table.header = cells;
                    } else {
                        table.rows.push(cells);
                    }
                }
            }
            Frame::Cell(content) => {
                if let Some(Frame::Row(cells)) = self.stack.last_mut() {
                    cells.push(content);
                }
            }
        }
    }

    fn close_implicit(&mut self) {
        if self.stack.last().is_some_and(Frame::is_implicit_paragraph) {
            self.close();
        }
    }

    /// Make sure the top of the stack accepts inline nodes, opening an
    /// implicit paragraph inside bare block containers.
    fn ensure_inline_container(&mut self) {
        let needs_paragraph = self
            .stack
            .last_mut()
            .is_some_and(|frame| frame.blocks_mut().is_some());
        if needs_paragraph {
            self.stack.push(Frame::Paragraph {
                implicit: true,
                content: Vec::new(),
            });
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        self.ensure_inline_container();
        match self.stack.last_mut().and_then(Frame::inlines_mut) {
            Some(content) => content.push(inline),
            None => trace!("markdown: dropping inline outside of any container"),
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.stack.last_mut().and_then(Frame::blocks_mut) {
            Some(blocks) => blocks.push(block),
            None => trace!("markdown: dropping block outside of any container"),
        }
    }

    fn text(&mut self, text: CowStr<'_>) {
        match self.stack.last_mut() {
            Some(Frame::Code { code, .. }) => code.push_str(&text),
            Some(Frame::Html(raw)) => raw.push_str(&text),
            _ => self.push_inline(Inline::Text(text.into_string())),
        }
    }

    fn html(&mut self, html: CowStr<'_>) {
        match self.stack.last_mut() {
            Some(Frame::Html(raw)) => raw.push_str(&html),
            _ => self.push_inline(Inline::Text(html.into_string())),
        }
    }

    fn mark_task(&mut self, checked: bool) {
        if let Some(Frame::Item(item)) = self
            .stack
            .iter_mut()
            .rev()
            .find(|frame| matches!(frame, Frame::Item(_)))
        {
            item.task = Some(checked);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        // Close anything an unbalanced stream left open.
        while self.stack.len() > 1 {
            self.close();
        }
        match self.stack.pop() {
            Some(Frame::Root(blocks)) => blocks,
            _ => Vec::new(),
        }
    }
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(value: pulldown_cmark::Alignment) -> Self {
        match value {
            pulldown_cmark::Alignment::None => Alignment::None,
            pulldown_cmark::Alignment::Left => Alignment::Left,
            pulldown_cmark::Alignment::Center => Alignment::Center,
            pulldown_cmark::Alignment::Right => Alignment::Right,
        }
    }
}

/// First word of a fence info string (`rust,ignore` → `rust`).
fn fence_language(info: &str) -> Option<String> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .filter(|lang| !lang.is_empty())
        .map(str::to_owned)
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

// ── Plain-text surface ──────────────────────────────────────────────────────

/// Renders the tree as unstyled text, for piping documents to stdout.
#[derive(Debug, Default)]
pub struct PlainText {
    out: String,
    prefix: String,
}

impl MarkdownSurface for PlainText {
    type Output = String;

    fn render(&mut self, blocks: &[Block]) -> String {
        self.out.clear();
        self.prefix.clear();
        self.blocks(blocks);
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        std::mem::take(&mut self.out)
    }
}

impl PlainText {
    fn line(&mut self, text: &str) {
        self.out.push_str(&self.prefix);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.block(block);
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                let marker = "#".repeat(usize::from(*level));
                self.line(&format!("{marker} {}", inline_text(content)));
                self.blank();
            }
            Block::Paragraph(content) => {
                for line in inline_text(content).lines() {
                    self.line(line);
                }
                self.blank();
            }
            Block::CodeBlock { code, .. } => {
                for line in code.lines() {
                    self.line(&format!("    {line}"));
                }
                self.blank();
            }
            Block::List { start, items } => {
                let mut number = *start;
                for item in items {
                    let marker = match number.as_mut() {
                        Some(n) => {
                            let marker = format!("{n}. ");
                            *n += 1;
                            marker
                        }
                        None => "- ".to_string(),
                    };
                    let task = match item.task {
                        Some(true) => "[x] ",
                        Some(false) => "[ ] ",
                        None => "",
                    };
                    let mut rest = item.blocks.as_slice();
                    let first = match rest.first() {
                        Some(Block::Paragraph(content)) => {
                            rest = &rest[1..];
                            inline_text(content)
                        }
                        _ => String::new(),
                    };
                    self.line(&format!("{marker}{task}{first}"));
                    let saved = self.prefix.clone();
                    self.prefix.push_str(&" ".repeat(marker.len()));
                    self.blocks(rest);
                    self.prefix = saved;
                }
                self.blank();
            }
            Block::BlockQuote(children) => {
                let saved = self.prefix.clone();
                self.prefix.push_str("> ");
                self.blocks(children);
                self.prefix = saved;
                self.blank();
            }
            Block::Table(table) => {
                let header: Vec<String> = table.header.iter().map(|c| inline_text(c)).collect();
                self.line(&header.join(" | "));
                for row in &table.rows {
                    let cells: Vec<String> = row.iter().map(|c| inline_text(c)).collect();
                    self.line(&cells.join(" | "));
                }
                self.blank();
            }
            Block::Rule => {
                self.line(&"-".repeat(40));
                self.blank();
            }
            Block::Html(raw) => {
                for line in raw.lines() {
                    self.line(line);
                }
                self.blank();
            }
        }
    }
}

/// Plain text with link targets appended, matching the terminal surface.
fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Link { target, content } => {
                let label = plain_text(content);
                if label == *target {
                    out.push_str(target);
                } else {
                    out.push_str(&format!("{label} ({target})"));
                }
            }
            Inline::Emphasis(c) | Inline::Strong(c) | Inline::Strikethrough(c) => {
                out.push_str(&inline_text(c))
            }
            other => collect_text(std::slice::from_ref(other), &mut out),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn only_table(blocks: &[Block]) -> &Table {
        match blocks {
            [Block::Table(table)] => table,
            other => panic!("expected a single table, got {other:?}"),
        }
    }

    #[test]
    fn headings_keep_their_level() {
        let blocks = parse("# One\n## Two\n### Three\n#### Four\n##### Five\n###### Six");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b {
                Block::Heading { level, .. } => *level,
                other => panic!("expected heading, got {other:?}"),
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn paragraph_with_emphasis_and_code() {
        let blocks = parse("Some **bold**, *italic* and `code`.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("Some "),
                Inline::Strong(vec![text("bold")]),
                text(", "),
                Inline::Emphasis(vec![text("italic")]),
                text(" and "),
                Inline::Code("code".to_string()),
                text("."),
            ])]
        );
    }

    #[test]
    fn simple_table_has_two_columns_and_one_row() {
        let blocks = parse("| a | b |\n|---|---|\n| 1 | 2 |");
        let table = only_table(&blocks);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header, vec![vec![text("a")], vec![text("b")]]);
        assert_eq!(table.rows, vec![vec![vec![text("1")], vec![text("2")]]]);
    }

    #[test]
    fn table_rows_are_padded_and_truncated() {
        let blocks = parse("| a | b | c |\n|---|:-:|--:|\n| 1 |\n| 1 | 2 | 3 | 4 |");
        let table = only_table(&blocks);
        assert_eq!(
            table.alignments,
            vec![Alignment::None, Alignment::Center, Alignment::Right]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec![vec![text("1")], vec![], vec![]]);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(plain_text(&table.rows[1][2]), "3");
    }

    #[test]
    fn table_without_data_rows() {
        let blocks = parse("| a | b |\n|:--|---|");
        let table = only_table(&blocks);
        assert_eq!(table.alignments[0], Alignment::Left);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn malformed_separator_falls_back_to_paragraph() {
        let blocks = parse("| a | b |\n|--x|---|\n| 1 | 2 |");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::Paragraph(content) => {
                let flat = plain_text(content);
                assert!(flat.contains("| a | b |"), "got {flat:?}");
                assert!(flat.contains("| 1 | 2 |"), "got {flat:?}");
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_fence_runs_to_end_of_input() {
        let blocks = parse("Intro\n\n```rust\nfn main() {\n    let x = 1;\n");
        assert_eq!(blocks.len(), 2);
        match &blocks[1] {
            Block::CodeBlock { language, code } => {
                assert_eq!(language.as_deref(), Some("rust"));
                assert!(code.starts_with("fn main() {"));
                assert!(code.contains("    let x = 1;"));
            }
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn fenced_code_is_verbatim() {
        let src = "```sanskrit\nयदि x < y:\n    दर्श(\"x छोटा है\")\n\n\tend\n```";
        let blocks = parse(src);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: Some("sanskrit".to_string()),
                code: "यदि x < y:\n    दर्श(\"x छोटा है\")\n\n\tend\n".to_string(),
            }]
        );
    }

    #[test]
    fn fence_without_language() {
        let blocks = parse("```\nhello.paanini\n```");
        assert!(matches!(&blocks[0], Block::CodeBlock { language: None, .. }));
    }

    #[test]
    fn tight_list_items_get_implicit_paragraphs() {
        let blocks = parse("- one\n- **two**");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            Block::List { start: None, items } => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].blocks, vec![Block::Paragraph(vec![text("one")])]);
                assert_eq!(
                    items[1].blocks,
                    vec![Block::Paragraph(vec![Inline::Strong(vec![text("two")])])]
                );
            }
            other => panic!("expected bullet list, got {other:?}"),
        }
    }

    #[test]
    fn ordered_list_keeps_start_number() {
        let blocks = parse("3. three\n4. four");
        assert!(matches!(&blocks[0], Block::List { start: Some(3), items } if items.len() == 2));
    }

    #[test]
    fn list_item_can_hold_code_block() {
        let blocks = parse("1. Build:\n   ```bash\n   cargo build --release\n   ```\n2. Done");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list, got {:?}", blocks[0]);
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0].blocks[0], Block::Paragraph(_)));
        assert!(matches!(
            &items[0].blocks[1],
            Block::CodeBlock { code, .. } if code == "cargo build --release\n"
        ));
    }

    #[test]
    fn task_markers_are_recorded() {
        let blocks = parse("- [x] done\n- [ ] todo");
        let Block::List { items, .. } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(items[0].task, Some(true));
        assert_eq!(items[1].task, Some(false));
        let Block::Paragraph(content) = &items[1].blocks[0] else {
            panic!("expected paragraph, got {:?}", items[1].blocks[0]);
        };
        assert_eq!(plain_text(content), "todo");
    }

    #[test]
    fn blockquote_nests_blocks() {
        let blocks = parse("> **Note**: install first");
        match &blocks[0] {
            Block::BlockQuote(inner) => assert!(matches!(&inner[0], Block::Paragraph(_))),
            other => panic!("expected blockquote, got {other:?}"),
        }
    }

    #[test]
    fn links_keep_target_unvalidated() {
        let blocks = parse("See [crate](https://crates.io/crates/paanini-lang) or [x](not a url)");
        let Block::Paragraph(content) = &blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(content.contains(&Inline::Link {
            target: "https://crates.io/crates/paanini-lang".to_string(),
            content: vec![text("crate")],
        }));
    }

    #[test]
    fn html_is_literal_text() {
        let blocks = parse("<script>alert(1)</script>\n\nafter");
        match &blocks[0] {
            Block::Html(raw) => assert!(raw.contains("<script>alert(1)</script>")),
            other => panic!("expected html block, got {other:?}"),
        }
    }

    #[test]
    fn rule_and_strikethrough() {
        let blocks = parse("---\n\n~~gone~~");
        assert_eq!(blocks[0], Block::Rule);
        assert_eq!(
            blocks[1],
            Block::Paragraph(vec![Inline::Strikethrough(vec![text("gone")])])
        );
    }

    #[test]
    fn empty_input_gives_empty_tree() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let src = include_str!("../../content/guide.md");
        assert_eq!(parse(src), parse(src));
    }

    #[test]
    fn plain_text_surface_renders_structure() {
        let blocks = parse("# Title\n\n- a\n- b\n\n| k | v |\n|---|---|\n| 1 | 2 |\n\n[site](https://x.dev)");
        let out = PlainText::default().render(&blocks);
        assert!(out.starts_with("# Title\n"));
        assert!(out.contains("- a\n- b\n"));
        assert!(out.contains("k | v\n1 | 2\n"));
        assert!(out.contains("site (https://x.dev)"));
    }
}
