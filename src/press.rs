// src/press.rs
//! Builder for press documents assembled in code rather than parsed from
//! Markdown: a cover page, per-section title pages, headings, body copy,
//! bullets with an optional bold lead, and a release kicker line.

use crate::markdown::Block;
use crate::theme::{Align, Color, FontFace, TextStyle, Theme};

/// Content of the centred cover page.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverPage {
    pub product: String,
    pub subtitle: String,
    pub dateline: String,
    pub tagline: String,
    /// Small credit lines at the bottom of the cover.
    pub footer_lines: Vec<String>,
}

/// Accumulates blocks in document order; hand the result to
/// [`crate::DocumentPipeline::render_blocks`].
#[derive(Debug, Default)]
pub struct PressDocument {
    title: String,
    blocks: Vec<Block>,
}

impl PressDocument {
    pub fn new(title: impl Into<String>) -> Self {
        PressDocument { title: title.into(), blocks: Vec::new() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn cover(&mut self, cover: CoverPage) {
        self.blocks.push(Block::Cover(cover));
    }

    /// Starts a new page with a large section title and a one-line brief.
    pub fn section(&mut self, title: &str, subtitle: &str) {
        self.blocks.push(Block::Section {
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
        });
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn spacer(&mut self, height: f32) {
        self.blocks.push(Block::Spacer(height));
    }

    pub fn heading(&mut self, text: &str) {
        self.blocks.push(Block::Heading { level: 2, text: text.to_string() });
    }

    pub fn subheading(&mut self, text: &str) {
        self.blocks.push(Block::Heading { level: 4, text: text.to_string() });
    }

    pub fn body(&mut self, text: &str) {
        self.blocks.push(Block::Paragraph(text.to_string()));
    }

    pub fn body_italic(&mut self, text: &str) {
        self.blocks.push(Block::Note(text.to_string()));
    }

    /// Bullet whose lead-in is set bold: `- **Lead:** rest of the text`.
    pub fn bullet(&mut self, lead: &str, text: &str) {
        self.blocks.push(Block::Bullet {
            lead: Some(lead.to_string()),
            text: text.to_string(),
        });
    }

    pub fn simple_bullet(&mut self, text: &str) {
        self.blocks.push(Block::Bullet { lead: None, text: text.to_string() });
    }

    /// Small bold grey line, e.g. "FOR IMMEDIATE RELEASE".
    pub fn kicker(&mut self, text: &str) {
        self.blocks.push(Block::Kicker(text.to_string()));
    }

    /// Table-of-contents page body: a heading plus one numbered entry per
    /// section.
    pub fn contents(&mut self, entries: &[(&str, &str)]) {
        self.page_break();
        self.heading("Contents");
        for (number, title) in entries {
            self.blocks.push(Block::Numbered {
                number: number.to_string(),
                text: title.to_string(),
            });
        }
    }
}

/// Theme variant for press documents: slightly larger body copy, dash
/// bullets without indent, a right-aligned running header slot and
/// `Page n/total` footers.
pub fn theme(header_text: Option<String>) -> Theme {
    const INK: Color = Color::rgb(30, 30, 30);
    const BODY: Color = Color::rgb(40, 40, 40);
    const SOFT: Color = Color::rgb(60, 60, 60);
    const MUTED: Color = Color::rgb(100, 100, 100);

    let mut theme = Theme::default();
    theme.page.header_text = header_text;
    theme.page.header_align = Align::Right;
    theme.page.footer_template = Some("Page {page}/{pages}".to_string());

    theme.section = TextStyle::new(FontFace::Bold, 22.0, 34.0, INK).spaced(28.0, 9.0);
    theme.subtitle = TextStyle::new(FontFace::Italic, 11.0, 20.0, MUTED).spaced(8.0, 23.0);
    theme.heading2 = TextStyle::new(FontFace::Bold, 14.0, 23.0, INK).spaced(17.0, 9.0);
    theme.heading3 = TextStyle::new(FontFace::Bold, 12.0, 19.0, INK).spaced(11.0, 6.0);
    theme.heading4 = TextStyle::new(FontFace::Bold, 11.0, 20.0, SOFT).spaced(11.0, 6.0);
    theme.body = TextStyle::new(FontFace::Regular, 10.5, 18.5, BODY).spaced(0.0, 8.5);
    theme.note = TextStyle::new(FontFace::Italic, 10.5, 18.5, SOFT).spaced(0.0, 8.5);
    theme.kicker = TextStyle::new(FontFace::Bold, 9.0, 17.0, MUTED).spaced(0.0, 14.0);

    theme.bullet.text = TextStyle::new(FontFace::Regular, 10.5, 18.5, BODY).spaced(0.0, 4.0);
    theme.bullet.indent = 0.0;
    theme.bullet.marker = "- ".to_string();

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_accumulates_blocks_in_order() {
        let mut doc = PressDocument::new("Launch Kit");
        doc.cover(CoverPage {
            product: "Acme".to_string(),
            subtitle: "Launch Materials".to_string(),
            dateline: "June 1".to_string(),
            tagline: "Ship it.".to_string(),
            footer_lines: vec!["Internal".to_string()],
        });
        doc.section("1. Strategy", "Why we are doing this.");
        doc.heading("The Argument");
        doc.body("Copy.");
        doc.bullet("Outlet:", "the angle");
        doc.simple_bullet("a task");

        assert_eq!(doc.title(), "Launch Kit");
        let blocks = doc.into_blocks();
        assert!(matches!(blocks[0], Block::Cover(_)));
        assert!(matches!(blocks[1], Block::Section { .. }));
        assert!(matches!(blocks[2], Block::Heading { level: 2, .. }));
        assert!(matches!(blocks[3], Block::Paragraph(_)));
        assert!(matches!(blocks[4], Block::Bullet { lead: Some(_), .. }));
        assert!(matches!(blocks[5], Block::Bullet { lead: None, .. }));
    }

    #[test]
    fn contents_emits_numbered_entries() {
        let mut doc = PressDocument::new("Kit");
        doc.contents(&[("1", "First"), ("2", "Second")]);
        let blocks = doc.into_blocks();
        assert!(matches!(blocks[0], Block::PageBreak));
        assert!(matches!(blocks[1], Block::Heading { .. }));
        assert_eq!(
            blocks[2],
            Block::Numbered { number: "1".to_string(), text: "First".to_string() }
        );
    }

    #[test]
    fn press_theme_is_valid_and_restyled() {
        let theme = theme(Some("Header".to_string()));
        theme.validate().unwrap();
        assert_eq!(theme.bullet.marker, "- ");
        assert_eq!(theme.page.header_align, Align::Right);
        assert_eq!(theme.body.size, 10.5);
    }
}
