// src/compose.rs
//! Cursor-based layout engine. Walks blocks top to bottom, wraps text,
//! breaks pages, and emits absolutely positioned drawing primitives the
//! renderer can turn into PDF ops without further measurement.
//!
//! All coordinates are in points with the origin at the top-left corner;
//! the renderer flips y into PDF space.

use crate::inline::{self, Span, SpanStyle};
use crate::markdown::{Block, Table};
use crate::press::CoverPage;
use crate::theme::{Align, Color, FontFace, TextStyle, Theme};
use itertools::Itertools;

/// Glyph advance approximation: average width as a fraction of font size.
pub const CHAR_WIDTH_RATIO: f32 = 0.6;

pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * CHAR_WIDTH_RATIO
}

/// A run of text in one face, drawn left-to-right inside a [`TextLine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub face: FontFace,
}

/// One positioned line of text.
#[derive(Debug, Clone)]
pub struct TextLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub segments: Vec<Segment>,
}

impl TextLine {
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub enum Element {
    Text(TextLine),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    },
}

#[derive(Debug, Default)]
pub struct Page {
    pub elements: Vec<Element>,
}

/// Lays out blocks into pages using the given theme.
pub fn compose(theme: &Theme, blocks: &[Block]) -> Vec<Page> {
    let mut composer = Composer::new(theme);
    for block in blocks {
        composer.block(block);
    }
    log::debug!("composed {} blocks into {} pages", blocks.len(), composer.pages.len());
    composer.pages
}

struct Composer<'a> {
    theme: &'a Theme,
    page_height: f32,
    content_width: f32,
    pages: Vec<Page>,
    cursor_y: f32,
    first_title_pending: bool,
}

impl<'a> Composer<'a> {
    fn new(theme: &'a Theme) -> Self {
        let (_, page_height) = theme.page.size.dimensions_pt();
        Composer {
            theme,
            page_height,
            content_width: theme.page.content_width(),
            cursor_y: theme.page.margins.top,
            pages: vec![Page::default()],
            first_title_pending: true,
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => self.heading(*level, text),
            Block::Paragraph(text) => {
                let spans = inline::parse_spans(&inline::sanitize(text));
                self.flow(&spans, &self.theme.body, 0.0, Align::Left);
            }
            Block::Note(text) => {
                let spans = vec![Span::regular(inline::sanitize(text))];
                self.flow(&spans, &self.theme.note, 0.0, Align::Left);
            }
            Block::Bullet { lead, text } => self.bullet(lead.as_deref(), text),
            Block::Numbered { number, text } => self.numbered(number, text),
            Block::Code(lines) => self.code(lines),
            Block::Table(table) => self.table(table),
            Block::Rule => self.rule(),
            Block::PageBreak => self.force_new_page(),
            Block::Spacer(height) => self.cursor_y += height,
            Block::Cover(cover) => self.cover(cover),
            Block::Section { title, subtitle } => self.section(title, subtitle.as_deref()),
            Block::Kicker(text) => {
                let spans = vec![Span::regular(inline::sanitize(text))];
                self.flow(&spans, &self.theme.kicker, 0.0, Align::Left);
            }
        }
    }

    fn heading(&mut self, level: u8, text: &str) {
        let mut style = *self.theme.style_for_heading(level);
        if level == 1 && self.first_title_pending {
            // The document title gets extra headroom on the opening page.
            self.first_title_pending = false;
            style.space_before += 70.0;
        }
        let spans = vec![Span::regular(inline::sanitize(text))];
        self.flow(&spans, &style, 0.0, Align::Left);
    }

    fn bullet(&mut self, lead: Option<&str>, text: &str) {
        let style = self.theme.bullet.text;
        let marker = self.theme.bullet.marker.clone();
        let indent = self.theme.bullet.indent;
        let mut spans = Vec::new();
        if let Some(lead) = lead {
            spans.push(Span::bold(format!("{} ", inline::sanitize(lead))));
        }
        spans.extend(inline::parse_spans(&inline::sanitize(text)));
        self.prefixed(Segment { text: marker, face: style.face }, &spans, &style, indent);
    }

    fn numbered(&mut self, number: &str, text: &str) {
        let style = self.theme.bullet.text;
        let indent = self.theme.bullet.indent;
        let prefix = Segment { text: format!("{}. ", number), face: FontFace::Bold };
        let spans = inline::parse_spans(&inline::sanitize(text));
        self.prefixed(prefix, &spans, &style, indent);
    }

    fn code(&mut self, lines: &[String]) {
        let code = &self.theme.code;
        let line_height = code.text.line_height;
        let height = lines.len() as f32 * line_height + 2.0 * code.padding;

        self.cursor_y += code.text.space_before;
        // The frame is never split across pages.
        if !self.fits(height) {
            self.new_page();
        }

        let x = self.theme.page.margins.left;
        let y = self.cursor_y;
        self.push(Element::Rect {
            x,
            y,
            width: self.content_width,
            height,
            fill: Some(code.background),
            stroke: Some((code.border, 0.5)),
        });

        let text_x = x + code.inset;
        let size = code.text.size;
        let color = code.text.color;
        for (i, line) in lines.iter().enumerate() {
            self.push(Element::Text(TextLine {
                x: text_x,
                y: y + code.padding + i as f32 * line_height,
                size,
                color,
                segments: vec![Segment {
                    text: inline::sanitize(line.trim_end()),
                    face: FontFace::Mono,
                }],
            }));
        }

        self.cursor_y = y + height + code.text.space_after;
    }

    fn table(&mut self, table: &Table) {
        let columns = table.column_count();
        if columns == 0 {
            return;
        }
        let widths = column_widths(columns, self.content_width);

        self.cursor_y += self.theme.table.text.space_before;
        self.table_row(&table.headers, &widths, true);
        for row in &table.rows {
            if row.len() != columns {
                log::warn!(
                    "table row has {} cells, expected {}; padding",
                    row.len(),
                    columns
                );
            }
            let cells: Vec<String> = row
                .iter()
                .cloned()
                .pad_using(columns, |_| String::new())
                .take(columns)
                .collect();
            self.table_row(&cells, &widths, false);
        }
        self.cursor_y += self.theme.table.text.space_after;
    }

    /// Draws one table row: measures every cell, sizes the row to the
    /// tallest one, then draws borders and top-aligned cell text.
    fn table_row(&mut self, cells: &[String], widths: &[f32], header: bool) {
        let style = &self.theme.table;
        let size = style.text.size;
        let line_height = style.text.line_height;
        let face = if header { FontFace::Bold } else { style.text.face };

        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let text = inline::sanitize(&inline::strip_markers(cell));
                wrap_plain(&text, size, width - 2.0 * style.cell_pad_x)
            })
            .collect();

        let row_height = wrapped
            .iter()
            .map(|lines| lines.len().max(1) as f32 * line_height + 2.0 * style.cell_pad_y)
            .fold(line_height + 2.0 * style.cell_pad_y, f32::max);

        if !self.fits(row_height) {
            self.new_page();
        }

        let y = self.cursor_y;
        let mut x = self.theme.page.margins.left;
        for (i, lines) in wrapped.iter().enumerate() {
            let fill = header.then_some(style.header_background);
            self.push(Element::Rect {
                x,
                y,
                width: widths[i],
                height: row_height,
                fill,
                stroke: Some((style.border, 0.5)),
            });
            for (j, line) in lines.iter().enumerate() {
                self.push(Element::Text(TextLine {
                    x: x + style.cell_pad_x,
                    y: y + style.cell_pad_y + j as f32 * line_height,
                    size,
                    color: if header { self.theme.title.color } else { style.text.color },
                    segments: vec![Segment { text: line.clone(), face }],
                }));
            }
            x += widths[i];
        }
        self.cursor_y = y + row_height;
    }

    fn rule(&mut self) {
        let style = self.theme.rule.clone();
        self.cursor_y += style.space_before;
        if !self.fits(style.thickness) {
            self.new_page();
        }
        let x = self.theme.page.margins.left;
        let y = self.cursor_y;
        self.push(Element::Rect {
            x,
            y,
            width: self.content_width,
            height: style.thickness,
            fill: Some(style.color),
            stroke: None,
        });
        self.cursor_y = y + style.thickness + style.space_after;
    }

    fn section(&mut self, title: &str, subtitle: Option<&str>) {
        self.force_new_page();
        let style = self.theme.section;
        let spans = vec![Span::regular(inline::sanitize(title))];
        self.flow(&spans, &style, 0.0, Align::Left);
        if let Some(subtitle) = subtitle {
            let spans = vec![Span::regular(inline::sanitize(subtitle))];
            self.flow(&spans, &self.theme.subtitle, 0.0, Align::Left);
        }
    }

    fn cover(&mut self, cover: &CoverPage) {
        const INK: Color = Color::rgb(30, 30, 30);
        const SOFT: Color = Color::rgb(80, 80, 80);
        const MUTED: Color = Color::rgb(100, 100, 100);
        const FAINT: Color = Color::rgb(120, 120, 120);

        self.force_new_page();
        self.cursor_y += 170.0;

        let product = TextStyle::new(FontFace::Bold, 32.0, 42.0, INK).spaced(0.0, 14.0);
        self.flow(&[Span::regular(inline::sanitize(&cover.product))], &product, 0.0, Align::Center);

        let subtitle = TextStyle::new(FontFace::Regular, 16.0, 28.0, SOFT).spaced(0.0, 0.0);
        self.flow(&[Span::regular(inline::sanitize(&cover.subtitle))], &subtitle, 0.0, Align::Center);

        let dateline = TextStyle::new(FontFace::Regular, 12.0, 28.0, SOFT).spaced(0.0, 85.0);
        self.flow(&[Span::regular(inline::sanitize(&cover.dateline))], &dateline, 0.0, Align::Center);

        let tagline = TextStyle::new(FontFace::Italic, 11.0, 23.0, MUTED).spaced(0.0, 113.0);
        self.flow(&[Span::regular(inline::sanitize(&cover.tagline))], &tagline, 0.0, Align::Center);

        let credits = TextStyle::new(FontFace::Regular, 10.0, 20.0, FAINT).spaced(0.0, 0.0);
        for line in &cover.footer_lines {
            self.flow(&[Span::regular(inline::sanitize(line))], &credits, 0.0, Align::Center);
        }
    }

    /// Wraps spans to the content width (minus `indent`) and writes them
    /// line by line, breaking pages as needed.
    fn flow(&mut self, spans: &[Span], style: &TextStyle, indent: f32, align: Align) {
        self.cursor_y += style.space_before;
        let x = self.theme.page.margins.left + indent;
        let width = self.content_width - indent;
        for line in wrap_spans(spans, style.size, width) {
            self.write_line(line, style, x, width, align);
        }
        self.cursor_y += style.space_after;
    }

    /// Bullet-style layout: a fixed prefix on the first line, continuation
    /// lines aligned after it.
    fn prefixed(&mut self, prefix: Segment, spans: &[Span], style: &TextStyle, indent: f32) {
        self.cursor_y += style.space_before;
        let x = self.theme.page.margins.left + indent;
        let prefix_width = text_width(&prefix.text, style.size);
        let width = self.content_width - indent - prefix_width;

        let lines = wrap_spans(spans, style.size, width);
        for (i, line) in lines.into_iter().enumerate() {
            if i == 0 {
                let mut segments = vec![prefix.clone()];
                segments.extend(line);
                self.raw_line(segments, style, x);
            } else {
                self.raw_line(line, style, x + prefix_width);
            }
        }
        self.cursor_y += style.space_after;
    }

    fn write_line(&mut self, segments: Vec<Segment>, style: &TextStyle, x: f32, width: f32, align: Align) {
        let line_width: f32 = segments
            .iter()
            .map(|s| text_width(&s.text, style.size))
            .sum();
        let x = match align {
            Align::Left => x,
            Align::Center => x + (width - line_width) / 2.0,
            Align::Right => x + width - line_width,
        };
        self.raw_line(segments, style, x);
    }

    fn raw_line(&mut self, segments: Vec<Segment>, style: &TextStyle, x: f32) {
        if !self.fits(style.line_height) {
            self.new_page();
        }
        self.push(Element::Text(TextLine {
            x,
            y: self.cursor_y,
            size: style.size,
            color: style.color,
            segments,
        }));
        self.cursor_y += style.line_height;
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor_y + height <= self.page_height - self.theme.page.margins.bottom
    }

    fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor_y = self.theme.page.margins.top;
    }

    /// Starts a new page unless the current one is still pristine.
    fn force_new_page(&mut self) {
        let pristine = self
            .pages
            .last()
            .map_or(false, |p| p.elements.is_empty() && self.cursor_y <= self.theme.page.margins.top);
        if !pristine {
            self.new_page();
        }
    }
}

/// Distributes the content width over table columns. Two- and three-column
/// tables use the house presets; anything else gets equal shares.
pub fn column_widths(columns: usize, available: f32) -> Vec<f32> {
    match columns {
        2 => vec![available * 0.35, available * 0.65],
        3 => vec![available * 0.28, available * 0.36, available * 0.36],
        n => vec![available / n as f32; n],
    }
}

/// Greedy word wrap over styled spans; each word keeps its face. A word
/// longer than the line gets a line of its own.
pub fn wrap_spans(spans: &[Span], size: f32, max_width: f32) -> Vec<Vec<Segment>> {
    let char_width = size * CHAR_WIDTH_RATIO;
    let words: Vec<(&str, SpanStyle)> = spans
        .iter()
        .flat_map(|span| span.text.split_whitespace().map(move |w| (w, span.style)))
        .collect();

    let mut lines: Vec<Vec<(String, SpanStyle)>> = Vec::new();
    let mut current: Vec<(String, SpanStyle)> = Vec::new();
    let mut current_width = 0.0;

    for (word, style) in words {
        let word_width = word.chars().count() as f32 * char_width;
        let added = if current.is_empty() { word_width } else { word_width + char_width };
        if !current.is_empty() && max_width > 0.0 && current_width + added > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = word_width;
        } else {
            current_width += added;
        }
        current.push((word.to_string(), style));
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.into_iter().map(merge_words).collect()
}

/// Plain-text wrap used for table cells.
pub fn wrap_plain(text: &str, size: f32, max_width: f32) -> Vec<String> {
    wrap_spans(&[Span::regular(text)], size, max_width)
        .into_iter()
        .map(|segments| {
            segments
                .into_iter()
                .map(|s| s.text)
                .collect::<Vec<_>>()
                .concat()
        })
        .collect()
}

fn merge_words(words: Vec<(String, SpanStyle)>) -> Vec<Segment> {
    let mut segments: Vec<(String, SpanStyle)> = Vec::new();
    for (word, style) in words {
        let continues_last = matches!(segments.last(), Some((_, last)) if *last == style);
        if let Some((text, _)) = segments.last_mut() {
            text.push(' ');
            if continues_last {
                text.push_str(&word);
                continue;
            }
        }
        segments.push((word, style));
    }
    segments
        .into_iter()
        .map(|(text, style)| Segment {
            text,
            face: FontFace::Regular.with_span(style),
        })
        .collect()
}
