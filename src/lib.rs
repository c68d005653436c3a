//! Turns text content into formatted PDF documents with a fixed house
//! style: Markdown files via a small line-walking parser, and press kits
//! assembled in code through [`press::PressDocument`].
//!
//! The pipeline has three stages: [`markdown::parse`] classifies lines
//! into typed blocks, [`compose`] lays the blocks out into positioned
//! pages (wrapping, page breaks, table arithmetic), and [`render`] emits
//! the PDF through printpdf's builtin fonts.

pub mod compose;
pub mod error;
pub mod inline;
pub mod markdown;
pub mod press;
pub mod render;
pub mod theme;

pub use error::DocumentError;
pub use markdown::{parse, Block, Table};
pub use press::PressDocument;
pub use theme::Theme;

use render::PdfRenderer;
use std::path::Path;

/// Ties the three stages together under one theme.
pub struct DocumentPipeline {
    theme: Theme,
}

impl DocumentPipeline {
    pub fn new(theme: Theme) -> Self {
        DocumentPipeline { theme }
    }

    pub fn with_default_theme() -> Self {
        DocumentPipeline { theme: Theme::default() }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders Markdown source to PDF bytes. `title` ends up in the PDF
    /// metadata and is available to the running header.
    pub fn render_markdown(&self, source: &str, title: &str) -> Result<Vec<u8>, DocumentError> {
        let blocks = markdown::parse(source);
        self.render_blocks(&blocks, title)
    }

    pub fn render_blocks(&self, blocks: &[Block], title: &str) -> Result<Vec<u8>, DocumentError> {
        self.theme.validate()?;
        let pages = compose::compose(&self.theme, blocks);
        log::info!("generating '{}': {} pages", title, pages.len());
        Ok(PdfRenderer::new(&self.theme).render(&pages, title))
    }

    pub fn render_markdown_to_file(
        &self,
        source: &str,
        title: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), DocumentError> {
        let bytes = self.render_markdown(source, title)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    pub fn render_blocks_to_file(
        &self,
        blocks: &[Block],
        title: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), DocumentError> {
        let bytes = self.render_blocks(blocks, title)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
