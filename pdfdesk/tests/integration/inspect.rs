//! Document inspection behavior.

use pdfdesk::document::DocumentInfo;
use pdfdesk::error::PdfDeskError;
use tempfile::TempDir;

use crate::common::{blank_pdf, save_pdf};

#[test]
fn inspect_reports_page_count_and_size() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "five.pdf", blank_pdf(5));

    let info = DocumentInfo::inspect(&path).unwrap();

    assert_eq!(info.page_count, 5);
    assert!(info.file_size > 0);
    assert_eq!(info.file_name(), "five.pdf");
    assert_eq!(info.version, Some((1, 4)));
}

#[test]
fn inspect_reports_first_page_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "one.pdf", blank_pdf(1));

    let info = DocumentInfo::inspect(&path).unwrap();

    let (width, height) = info.page_dimensions.unwrap();
    assert_eq!(width, 612.0);
    assert_eq!(height, 792.0);
}

#[test]
fn inspect_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.pdf");
    std::fs::File::create(&path).unwrap();

    let result = DocumentInfo::inspect(&path);
    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::CorruptedPdf { .. }
    ));
}

#[test]
fn inspect_rejects_non_pdf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.pdf");
    std::fs::write(&path, b"just some text, no pdf structure").unwrap();

    let result = DocumentInfo::inspect(&path);
    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::FailedToLoadPdf { .. }
    ));
}

#[test]
fn inspect_serializes_to_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "one.pdf", blank_pdf(1));

    let info = DocumentInfo::inspect(&path).unwrap();
    let json = serde_json::to_string(&info).unwrap();

    assert!(json.contains("\"pageCount\":1"));
    assert!(json.contains("\"fileSize\""));

    let roundtrip: DocumentInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip.page_count, info.page_count);
}
