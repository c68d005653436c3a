pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use pressroom::{Block, DocumentPipeline, Theme};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF from Markdown source with the default theme
pub fn render_markdown(source: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_markdown_with_theme(source, Theme::default())
}

/// Generate a PDF from Markdown source with the provided theme
pub fn render_markdown_with_theme(
    source: &str,
    theme: Theme,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = DocumentPipeline::new(theme).render_markdown(source, "Test Document")?;
    GeneratedPdf::from_bytes(bytes)
}

/// Generate a PDF from pre-built blocks
pub fn render_blocks(
    blocks: &[Block],
    theme: Theme,
    title: &str,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let bytes = DocumentPipeline::new(theme).render_blocks(blocks, title)?;
    GeneratedPdf::from_bytes(bytes)
}
