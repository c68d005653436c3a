mod common;

use common::{render_blocks, TestResult};
use pressroom::press::{self, CoverPage, PressDocument};

fn sample_kit() -> PressDocument {
    let mut doc = PressDocument::new("Acme Launch Kit");
    doc.cover(CoverPage {
        product: "Acme".to_string(),
        subtitle: "Launch Strategy & Press Materials".to_string(),
        dateline: "Launch Day - June 1, 2026".to_string(),
        tagline: "Tools that respect your time.".to_string(),
        footer_lines: vec!["Prepared for internal use".to_string()],
    });
    doc.contents(&[("1", "Positioning"), ("2", "Press Release")]);
    doc.section("1. Positioning", "The argument behind the launch.");
    doc.heading("The Argument");
    doc.body("Builders lose hours every week to tooling that fights back.");
    doc.bullet("Trade press:", "the productivity angle, with numbers.");
    doc.simple_bullet("Draft founder posts for launch week");
    doc.section("2. Press Release", "Embargoed until June 1, 2026.");
    doc.kicker("FOR IMMEDIATE RELEASE - JUNE 1, 2026");
    doc.body("ACME CITY -- Acme launches today.");
    doc.body_italic("Acme. Tools that respect your time.");
    doc
}

#[test]
fn test_press_kit_renders_all_sections() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = sample_kit();
    let pdf = render_blocks(doc.blocks(), press::theme(None), doc.title())?;

    // Cover, contents, and one page per section.
    assert_pdf_min_pages!(pdf, 4);
    for text in &[
        "Acme",
        "Launch Strategy & Press Materials",
        "Contents",
        "1. Positioning",
        "The Argument",
        "2. Press Release",
        "FOR IMMEDIATE RELEASE",
    ] {
        assert_pdf_contains_text!(pdf, text);
    }
    Ok(())
}

#[test]
fn test_press_footer_counts_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = sample_kit();
    let pdf = render_blocks(doc.blocks(), press::theme(None), doc.title())?;
    let total = pdf.page_count();
    assert_pdf_contains_text!(pdf, &format!("Page 1/{}", total));
    assert_pdf_contains_text!(pdf, &format!("Page {}/{}", total, total));
    Ok(())
}

#[test]
fn test_press_header_is_drawn_after_cover() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let doc = sample_kit();
    let header = "Acme -- Launch Materials -- June 1, 2026";
    let pdf = render_blocks(doc.blocks(), press::theme(Some(header.to_string())), doc.title())?;
    assert_pdf_contains_text!(pdf, header);
    Ok(())
}

#[test]
fn test_bold_lead_bullet_keeps_lead_and_text() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = PressDocument::new("Kit");
    doc.bullet("Subject line:", "Specific to the outlet's angle.");
    let pdf = render_blocks(doc.blocks(), press::theme(None), doc.title())?;
    assert_pdf_contains_text!(pdf, "Subject line:");
    assert_pdf_contains_text!(pdf, "Specific to the outlet's angle.");
    Ok(())
}
