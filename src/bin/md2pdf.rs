use clap::Parser;
use pressroom::{DocumentError, DocumentPipeline, Theme};
use std::path::PathBuf;

/// Convert a Markdown document to a clean, well-formatted PDF.
#[derive(Parser, Debug)]
#[command(name = "md2pdf", version, about)]
struct Args {
    /// Markdown file to convert
    input: PathBuf,

    /// Output path (defaults to the input with a .pdf extension)
    output: Option<PathBuf>,

    /// JSON theme file overriding individual style slots
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Document title for the PDF metadata and the running header
    /// (defaults to the input file stem)
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<(), DocumentError> {
    env_logger::init();
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.input)?;
    let mut theme = match &args.theme {
        Some(path) => Theme::from_json(&std::fs::read_to_string(path)?)?,
        None => Theme::default(),
    };

    let title = args.title.clone().unwrap_or_else(|| {
        args.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Document".to_string())
    });
    theme.page.header_text.get_or_insert_with(|| title.clone());

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("pdf"));

    DocumentPipeline::new(theme).render_markdown_to_file(&source, &title, &output)?;

    let size_kb = std::fs::metadata(&output)?.len() / 1024;
    println!("PDF generated: {}", output.display());
    println!("Size: {} KB", size_kb);
    Ok(())
}
