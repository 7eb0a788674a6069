//! End-to-end conversion behavior.

use pdfdesk::convert::DocxConverter;
use pdfdesk::error::PdfDeskError;
use tempfile::TempDir;

use crate::common::{save_pdf, text_pdf};

#[test]
fn convert_text_pdf_produces_nonempty_docx() {
    let dir = TempDir::new().unwrap();
    let input = save_pdf(&dir, "text.pdf", text_pdf(&["Quarterly report"]));
    let output = dir.path().join("text.docx");

    let outcome = DocxConverter::new().convert(&input, &output).unwrap();

    assert_eq!(outcome.pages_converted, 1);
    assert!(outcome.characters > 0);
    assert!(outcome.output_size > 0);
    assert!(output.exists());

    // docx is a zip container.
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn convert_counts_every_page() {
    let dir = TempDir::new().unwrap();
    let input = save_pdf(
        &dir,
        "multi.pdf",
        text_pdf(&["page one", "page two", "page three"]),
    );
    let output = dir.path().join("multi.docx");

    let outcome = DocxConverter::new().convert(&input, &output).unwrap();

    assert_eq!(outcome.pages_converted, 3);
}

#[test]
fn convert_without_page_breaks_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = save_pdf(&dir, "multi.pdf", text_pdf(&["alpha", "beta"]));
    let output = dir.path().join("multi.docx");

    let outcome = DocxConverter::without_page_breaks()
        .convert(&input, &output)
        .unwrap();

    assert_eq!(outcome.pages_converted, 2);
    assert!(output.exists());
}

#[test]
fn convert_missing_source_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.docx");

    let result =
        DocxConverter::new().convert(std::path::Path::new("/no/such/file.pdf"), &output);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::FileNotFound { .. }
    ));
    assert!(!output.exists());
}

#[test]
fn convert_garbage_source_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let junk = dir.path().join("junk.pdf");
    std::fs::write(&junk, b"definitely not a pdf").unwrap();

    let output = dir.path().join("out.docx");
    let result = DocxConverter::new().convert(&junk, &output);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::FailedToLoadPdf { .. } | PdfDeskError::CorruptedPdf { .. }
    ));
    assert!(!output.exists());
}

#[test]
fn convert_leaves_source_unmodified() {
    let dir = TempDir::new().unwrap();
    let input = save_pdf(&dir, "text.pdf", text_pdf(&["stable"]));
    let before = std::fs::read(&input).unwrap();

    let output = dir.path().join("text.docx");
    DocxConverter::new().convert(&input, &output).unwrap();

    assert_eq!(std::fs::read(&input).unwrap(), before);
}
