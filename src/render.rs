// src/render.rs
//! Turns composed pages into printpdf ops. Text is set in the builtin
//! Helvetica/Courier faces, so nothing is embedded and the composer's
//! sanitised output stays within the supported charset. Page chrome
//! (running header, page-number footer) is drawn here because the total
//! page count is only known after composition.

use crate::compose::{self, Element, Page, Segment, TextLine};
use crate::theme::{Align, Color, FontFace, PageSize, Theme};
use printpdf::graphics::{LinePoint, Polygon, PolygonRing, WindingOrder};
use printpdf::text::TextItem;
use printpdf::{
    BuiltinFont, Layer, Mm, Op, PaintMode, PdfConformance, PdfDocument, PdfPage, PdfSaveOptions,
    Point, Pt, Rgb, TextMatrix,
};

const CHROME_SIZE: f32 = 8.0;
const CHROME_COLOR: Color = Color::rgb(100, 100, 100);
/// Baseline offsets of the running header / footer, from the page edges.
const HEADER_Y: f32 = 40.0;
const FOOTER_Y: f32 = 50.0;

pub struct PdfRenderer<'a> {
    theme: &'a Theme,
    page_height_pt: f32,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        let (_, height_mm) = page_dimensions_mm(theme.page.size);
        PdfRenderer {
            theme,
            page_height_pt: height_mm.into_pt().0,
        }
    }

    pub fn render(&self, pages: &[Page], title: &str) -> Vec<u8> {
        let mut document = PdfDocument::new(title);
        document.metadata.info.conformance = PdfConformance::X3_2002_PDF_1_3;

        let (width_mm, height_mm) = page_dimensions_mm(self.theme.page.size);
        let total = pages.len();

        for (idx, page) in pages.iter().enumerate() {
            let mut ops: Vec<Op> = Vec::new();
            let layer_name = format!("Page {} Layer 1", idx + 1);
            let layer = Layer::new(&*layer_name);
            let layer_id = document.add_layer(&layer);
            ops.push(Op::BeginLayer { layer_id });

            self.page_chrome(&mut ops, idx, total);
            for element in &page.elements {
                match element {
                    Element::Text(line) => self.text_ops(&mut ops, line),
                    Element::Rect { x, y, width, height, fill, stroke } => {
                        self.rect_ops(&mut ops, *x, *y, *width, *height, *fill, *stroke);
                    }
                }
            }

            document.pages.push(PdfPage::new(width_mm, height_mm, ops));
        }

        log::debug!("rendering {} pages", total);
        let mut warnings = Vec::new();
        document.save(&PdfSaveOptions::default(), &mut warnings)
    }

    fn text_ops(&self, ops: &mut Vec<Op>, line: &TextLine) {
        let color = Rgb::new(
            line.color.r as f32 / 255.0,
            line.color.g as f32 / 255.0,
            line.color.b as f32 / 255.0,
            None,
        );
        ops.push(Op::SetFillColor { col: printpdf::color::Color::Rgb(color) });
        ops.push(Op::StartTextSection);

        let mut x = line.x;
        let pdf_y = self.page_height_pt - line.y - line.size;
        for segment in &line.segments {
            let font = builtin_font(segment.face);
            ops.push(Op::SetFontSizeBuiltinFont { size: Pt(line.size), font });
            ops.push(Op::SetTextMatrix { matrix: TextMatrix::Translate(Pt(x), Pt(pdf_y)) });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(segment.text.clone())],
                font,
            });
            x += compose::text_width(&segment.text, line.size);
        }

        ops.push(Op::EndTextSection);
    }

    fn rect_ops(
        &self,
        ops: &mut Vec<Op>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<(Color, f32)>,
    ) {
        if fill.is_none() && stroke.is_none() {
            return;
        }

        let pdf_y = self.page_height_pt - y - height;
        let corners = [
            (x, pdf_y),
            (x + width, pdf_y),
            (x + width, pdf_y + height),
            (x, pdf_y + height),
        ];
        let points = corners
            .iter()
            .map(|&(px, py)| LinePoint { p: Point { x: Pt(px), y: Pt(py) }, bezier: false })
            .collect();

        if let Some(color) = fill {
            let rgb = Rgb::new(
                color.r as f32 / 255.0,
                color.g as f32 / 255.0,
                color.b as f32 / 255.0,
                None,
            );
            ops.push(Op::SetFillColor { col: printpdf::color::Color::Rgb(rgb) });
        }
        if let Some((color, thickness)) = stroke {
            let rgb = Rgb::new(
                color.r as f32 / 255.0,
                color.g as f32 / 255.0,
                color.b as f32 / 255.0,
                None,
            );
            ops.push(Op::SetOutlineColor { col: printpdf::color::Color::Rgb(rgb) });
            ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
        }

        let mode = match (fill.is_some(), stroke.is_some()) {
            (true, true) => PaintMode::FillStroke,
            (false, true) => PaintMode::Stroke,
            _ => PaintMode::Fill,
        };
        ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    /// Running header (from page 2 on) and the page-number footer.
    fn page_chrome(&self, ops: &mut Vec<Op>, page_index: usize, total: usize) {
        let page = &self.theme.page;
        let content_width = page.content_width();

        if page_index > 0 {
            if let Some(text) = &page.header_text {
                let width = compose::text_width(text, CHROME_SIZE);
                let x = match page.header_align {
                    Align::Left => page.margins.left,
                    Align::Center => page.margins.left + (content_width - width) / 2.0,
                    Align::Right => page.margins.left + content_width - width,
                };
                self.text_ops(
                    ops,
                    &TextLine {
                        x,
                        y: HEADER_Y,
                        size: CHROME_SIZE,
                        color: CHROME_COLOR,
                        segments: vec![Segment { text: text.clone(), face: FontFace::Italic }],
                    },
                );
            }
        }

        if let Some(template) = &page.footer_template {
            let text = template
                .replace("{page}", &(page_index + 1).to_string())
                .replace("{pages}", &total.to_string());
            let width = compose::text_width(&text, CHROME_SIZE);
            let x = page.margins.left + (content_width - width) / 2.0;
            self.text_ops(
                ops,
                &TextLine {
                    x,
                    y: self.page_height_pt - FOOTER_Y,
                    size: CHROME_SIZE,
                    color: CHROME_COLOR,
                    segments: vec![Segment { text, face: FontFace::Regular }],
                },
            );
        }
    }
}

fn builtin_font(face: FontFace) -> BuiltinFont {
    match face {
        FontFace::Regular => BuiltinFont::Helvetica,
        FontFace::Bold => BuiltinFont::HelveticaBold,
        FontFace::Italic => BuiltinFont::HelveticaOblique,
        FontFace::BoldItalic => BuiltinFont::HelveticaBoldOblique,
        FontFace::Mono => BuiltinFont::Courier,
    }
}

fn page_dimensions_mm(size: PageSize) -> (Mm, Mm) {
    match size {
        PageSize::A4 => (Mm(210.0), Mm(297.0)),
        PageSize::Letter => (Mm(215.9), Mm(279.4)),
        PageSize::Legal => (Mm(215.9), Mm(355.6)),
        PageSize::Custom { width, height } => (Pt(width).into(), Pt(height).into()),
    }
}
