// src/theme.rs
//! Styling model for the generated documents. The defaults reproduce the
//! house styling of the two shipped documents; a theme can also be loaded
//! from JSON to override individual slots.

use crate::error::DocumentError;
use crate::inline::SpanStyle;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main struct holding page setup and the per-block text styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub page: PageLayout,
    #[serde(default = "defaults::title")]
    pub title: TextStyle,
    #[serde(default = "defaults::subtitle")]
    pub subtitle: TextStyle,
    #[serde(default = "defaults::heading2")]
    pub heading2: TextStyle,
    #[serde(default = "defaults::heading3")]
    pub heading3: TextStyle,
    #[serde(default = "defaults::heading4")]
    pub heading4: TextStyle,
    #[serde(default = "defaults::body")]
    pub body: TextStyle,
    #[serde(default = "defaults::note")]
    pub note: TextStyle,
    #[serde(default)]
    pub bullet: BulletStyle,
    #[serde(default)]
    pub code: CodeStyle,
    #[serde(default)]
    pub table: TableStyle,
    #[serde(default)]
    pub rule: RuleStyle,
    #[serde(default = "defaults::section")]
    pub section: TextStyle,
    #[serde(default = "defaults::kicker")]
    pub kicker: TextStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            page: PageLayout::default(),
            title: defaults::title(),
            subtitle: defaults::subtitle(),
            heading2: defaults::heading2(),
            heading3: defaults::heading3(),
            heading4: defaults::heading4(),
            body: defaults::body(),
            note: defaults::note(),
            bullet: BulletStyle::default(),
            code: CodeStyle::default(),
            table: TableStyle::default(),
            rule: RuleStyle::default(),
            section: defaults::section(),
            kicker: defaults::kicker(),
        }
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Rejects page setups that leave no content area.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let (width, height) = self.page.size.dimensions_pt();
        let margins = &self.page.margins;
        if margins.left + margins.right >= width {
            return Err(DocumentError::InvalidTheme(format!(
                "horizontal margins ({} + {}) exceed page width {}",
                margins.left, margins.right, width
            )));
        }
        if margins.top + margins.bottom >= height {
            return Err(DocumentError::InvalidTheme(format!(
                "vertical margins ({} + {}) exceed page height {}",
                margins.top, margins.bottom, height
            )));
        }
        Ok(())
    }

    pub fn style_for_heading(&self, level: u8) -> &TextStyle {
        match level {
            1 => &self.title,
            2 => &self.heading2,
            3 => &self.heading3,
            _ => &self.heading4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "defaults::margins")]
    pub margins: Margins,
    /// Running header shown from page 2 on.
    #[serde(default)]
    pub header_text: Option<String>,
    #[serde(default)]
    pub header_align: Align,
    /// Footer page-number template; `{page}` and `{pages}` are substituted.
    #[serde(default = "defaults::footer_template")]
    pub footer_template: Option<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout {
            size: PageSize::A4,
            margins: defaults::margins(),
            header_text: None,
            header_align: Align::Left,
            footer_template: defaults::footer_template(),
        }
    }
}

impl PageLayout {
    pub fn content_width(&self) -> f32 {
        let (width, _) = self.size.dimensions_pt();
        width - self.margins.left - self.margins.right
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

impl FromStr for PageSize {
    type Err = DocumentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "a4" => PageSize::A4,
            "letter" => PageSize::Letter,
            "legal" => PageSize::Legal,
            _ => {
                return Err(DocumentError::InvalidTheme(format!(
                    "Unknown page size: {}",
                    s
                )))
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub left: f32,
}

impl Margins {
    pub const fn uniform(value: f32) -> Self {
        Margins { top: value, right: value, bottom: value, left: value }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(0.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Typeface slot, resolved to a concrete builtin PDF font by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
    Mono,
}

impl FontFace {
    /// Combines a block's base face with an inline span style.
    pub fn with_span(self, span: SpanStyle) -> FontFace {
        match (self, span) {
            (_, SpanStyle::Code) => FontFace::Mono,
            (FontFace::Bold, SpanStyle::Italic) => FontFace::BoldItalic,
            (FontFace::Italic, SpanStyle::Bold) => FontFace::BoldItalic,
            (face, SpanStyle::Regular) => face,
            (FontFace::Regular, SpanStyle::Bold) => FontFace::Bold,
            (FontFace::Regular, SpanStyle::Italic) => FontFace::Italic,
            (face, _) => face,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = DocumentError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                return Ok(Color { r, g, b });
            } else if hex.len() == 3 {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    channels[i] = v * 16 + v;
                }
                return Ok(Color { r: channels[0], g: channels[1], b: channels[2] });
            }
        }
        Err(DocumentError::InvalidTheme(format!(
            "Invalid color format: '{}'. Use #RRGGBB or #RGB.",
            s
        )))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextStyle {
    #[serde(default)]
    pub face: FontFace,
    pub size: f32,
    pub line_height: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub space_before: f32,
    #[serde(default)]
    pub space_after: f32,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f32, line_height: f32, color: Color) -> Self {
        TextStyle { face, size, line_height, color, space_before: 0.0, space_after: 0.0 }
    }

    pub fn spaced(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Same style at a different size, line height tracking at 1.3x.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self.line_height = size * 1.3;
        self
    }

    pub fn with_face(mut self, face: FontFace) -> Self {
        self.face = face;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletStyle {
    #[serde(default = "defaults::bullet_text")]
    pub text: TextStyle,
    #[serde(default = "defaults::bullet_indent")]
    pub indent: f32,
    /// Drawn before the first line; continuation lines align after it.
    #[serde(default = "defaults::bullet_marker")]
    pub marker: String,
}

impl Default for BulletStyle {
    fn default() -> Self {
        BulletStyle {
            text: defaults::bullet_text(),
            indent: defaults::bullet_indent(),
            marker: defaults::bullet_marker(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeStyle {
    #[serde(default = "defaults::code_text")]
    pub text: TextStyle,
    #[serde(default = "defaults::code_background")]
    pub background: Color,
    #[serde(default = "defaults::light_border")]
    pub border: Color,
    /// Vertical padding inside the frame.
    #[serde(default = "defaults::code_padding")]
    pub padding: f32,
    /// Horizontal inset of the text from the frame edge.
    #[serde(default = "defaults::code_inset")]
    pub inset: f32,
}

impl Default for CodeStyle {
    fn default() -> Self {
        CodeStyle {
            text: defaults::code_text(),
            background: defaults::code_background(),
            border: defaults::light_border(),
            padding: defaults::code_padding(),
            inset: defaults::code_inset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStyle {
    #[serde(default = "defaults::table_text")]
    pub text: TextStyle,
    #[serde(default = "defaults::table_header_background")]
    pub header_background: Color,
    #[serde(default = "defaults::light_border")]
    pub border: Color,
    #[serde(default = "defaults::table_pad_x")]
    pub cell_pad_x: f32,
    #[serde(default = "defaults::table_pad_y")]
    pub cell_pad_y: f32,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            text: defaults::table_text(),
            header_background: defaults::table_header_background(),
            border: defaults::light_border(),
            cell_pad_x: defaults::table_pad_x(),
            cell_pad_y: defaults::table_pad_y(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleStyle {
    #[serde(default = "defaults::rule_color")]
    pub color: Color,
    #[serde(default = "defaults::rule_thickness")]
    pub thickness: f32,
    #[serde(default = "defaults::rule_space_before")]
    pub space_before: f32,
    #[serde(default = "defaults::rule_space_after")]
    pub space_after: f32,
}

impl Default for RuleStyle {
    fn default() -> Self {
        RuleStyle {
            color: defaults::rule_color(),
            thickness: defaults::rule_thickness(),
            space_before: defaults::rule_space_before(),
            space_after: defaults::rule_space_after(),
        }
    }
}

/// House styling constants. Ink colors run from near-black headings to the
/// mid grey used for asides and page chrome.
mod defaults {
    use super::{Color, FontFace, Margins, TextStyle};

    pub const BLACK: Color = Color::rgb(30, 30, 30);
    pub const DARK_GREY: Color = Color::rgb(60, 60, 60);
    pub const MID_GREY: Color = Color::rgb(100, 100, 100);
    pub const LIGHT_GREY: Color = Color::rgb(200, 200, 200);

    pub fn margins() -> Margins {
        Margins::uniform(71.0)
    }

    pub fn footer_template() -> Option<String> {
        Some("{page}/{pages}".to_string())
    }

    pub fn title() -> TextStyle {
        TextStyle::new(FontFace::Bold, 26.0, 34.0, BLACK).spaced(0.0, 11.0)
    }

    pub fn subtitle() -> TextStyle {
        TextStyle::new(FontFace::Italic, 11.0, 17.0, MID_GREY).spaced(8.0, 23.0)
    }

    pub fn heading2() -> TextStyle {
        TextStyle::new(FontFace::Bold, 17.0, 25.0, BLACK).spaced(17.0, 9.0)
    }

    pub fn heading3() -> TextStyle {
        TextStyle::new(FontFace::Bold, 13.0, 20.0, DARK_GREY).spaced(11.0, 6.0)
    }

    pub fn heading4() -> TextStyle {
        TextStyle::new(FontFace::Bold, 11.0, 17.0, DARK_GREY).spaced(9.0, 3.0)
    }

    pub fn body() -> TextStyle {
        TextStyle::new(FontFace::Regular, 10.0, 14.5, DARK_GREY).spaced(0.0, 11.0)
    }

    pub fn note() -> TextStyle {
        TextStyle::new(FontFace::Italic, 10.0, 14.5, MID_GREY).spaced(0.0, 9.0)
    }

    pub fn bullet_text() -> TextStyle {
        TextStyle::new(FontFace::Regular, 10.0, 14.5, DARK_GREY).spaced(0.0, 6.0)
    }

    pub fn bullet_indent() -> f32 {
        23.0
    }

    pub fn bullet_marker() -> String {
        "\u{2022}  ".to_string()
    }

    pub fn code_text() -> TextStyle {
        TextStyle::new(FontFace::Mono, 8.0, 12.0, DARK_GREY).spaced(6.0, 11.0)
    }

    pub fn code_background() -> Color {
        Color::rgb(246, 246, 246)
    }

    pub fn light_border() -> Color {
        LIGHT_GREY
    }

    pub fn code_padding() -> f32 {
        11.0
    }

    pub fn code_inset() -> f32 {
        17.0
    }

    pub fn table_text() -> TextStyle {
        TextStyle::new(FontFace::Regular, 8.5, 15.5, DARK_GREY).spaced(6.0, 11.0)
    }

    pub fn table_header_background() -> Color {
        Color::rgb(242, 242, 242)
    }

    pub fn table_pad_x() -> f32 {
        6.0
    }

    pub fn table_pad_y() -> f32 {
        3.0
    }

    pub fn rule_color() -> Color {
        Color::rgb(220, 220, 220)
    }

    pub fn rule_thickness() -> f32 {
        0.7
    }

    pub fn rule_space_before() -> f32 {
        11.0
    }

    pub fn rule_space_after() -> f32 {
        17.0
    }

    pub fn section() -> TextStyle {
        TextStyle::new(FontFace::Bold, 22.0, 34.0, BLACK).spaced(28.0, 9.0)
    }

    pub fn kicker() -> TextStyle {
        TextStyle::new(FontFace::Bold, 9.0, 17.0, MID_GREY).spaced(0.0, 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parsing() {
        assert_eq!("#1e1e1e".parse::<Color>().unwrap(), Color::rgb(30, 30, 30));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn default_theme_is_valid() {
        Theme::default().validate().unwrap();
    }

    #[test]
    fn theme_json_overrides_single_slot() {
        let theme = Theme::from_json(
            r#"{ "body": { "size": 12.0, "line_height": 16.0 } }"#,
        )
        .unwrap();
        assert_eq!(theme.body.size, 12.0);
        // Untouched slots keep the house defaults.
        assert_eq!(theme.title.size, 26.0);
        assert_eq!(theme.page.margins.left, 71.0);
    }

    #[test]
    fn degenerate_margins_are_rejected() {
        let result = Theme::from_json(
            r#"{ "page": { "margins": { "top": 500.0, "bottom": 500.0 } } }"#,
        );
        assert!(matches!(result, Err(DocumentError::InvalidTheme(_))));
    }

    #[test]
    fn face_combines_with_span_style() {
        use crate::inline::SpanStyle;
        assert_eq!(FontFace::Regular.with_span(SpanStyle::Bold), FontFace::Bold);
        assert_eq!(FontFace::Bold.with_span(SpanStyle::Italic), FontFace::BoldItalic);
        assert_eq!(FontFace::Bold.with_span(SpanStyle::Code), FontFace::Mono);
        assert_eq!(FontFace::Italic.with_span(SpanStyle::Regular), FontFace::Italic);
    }
}
