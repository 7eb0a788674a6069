//! End-to-end split behavior.

use pdfdesk::error::PdfDeskError;
use pdfdesk::range::PageRange;
use pdfdesk::split::Splitter;
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{page_widths, pdf_with_page_widths, save_pdf};

fn ten_page_pdf(dir: &TempDir) -> std::path::PathBuf {
    let widths: Vec<i64> = (1..=10).map(|n| n * 10).collect();
    save_pdf(dir, "ten.pdf", pdf_with_page_widths(&widths))
}

#[test]
fn split_middle_range_matches_source_pages() {
    let dir = TempDir::new().unwrap();
    let input = ten_page_pdf(&dir);
    let output = dir.path().join("split.pdf");

    let range = PageRange::new(3, 5).unwrap();
    let outcome = Splitter::new().split(&input, range, &output).unwrap();

    assert_eq!(outcome.pages_extracted, 3);
    assert_eq!(outcome.source_pages, 10);

    // Pages 3-5 of the source, in source order.
    assert_eq!(page_widths(&output), vec![30, 40, 50]);
}

#[rstest]
#[case(1, 1, vec![10])]
#[case(10, 10, vec![100])]
#[case(1, 10, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100])]
#[case(8, 10, vec![80, 90, 100])]
fn split_boundary_ranges(#[case] start: u32, #[case] end: u32, #[case] expected: Vec<i64>) {
    let dir = TempDir::new().unwrap();
    let input = ten_page_pdf(&dir);
    let output = dir.path().join("split.pdf");

    let range = PageRange::new(start, end).unwrap();
    Splitter::new().split(&input, range, &output).unwrap();

    assert_eq!(page_widths(&output), expected);
}

#[test]
fn split_reversed_range_never_constructs() {
    // start > end is rejected at PageRange construction, before any
    // engine call can happen.
    let err = PageRange::new(5, 3).unwrap_err();
    assert!(matches!(err, PdfDeskError::InvalidRequest { .. }));
}

#[rstest]
#[case(3, 11)]
#[case(11, 12)]
fn split_out_of_bounds_creates_no_output(#[case] start: u32, #[case] end: u32) {
    let dir = TempDir::new().unwrap();
    let input = ten_page_pdf(&dir);
    let output = dir.path().join("split.pdf");

    let range = PageRange::new(start, end).unwrap();
    let result = Splitter::new().split(&input, range, &output);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::InvalidPageRange { total_pages: 10, .. }
    ));
    assert!(!output.exists());
}

#[test]
fn split_leaves_source_unmodified() {
    let dir = TempDir::new().unwrap();
    let input = ten_page_pdf(&dir);
    let before = std::fs::read(&input).unwrap();

    let output = dir.path().join("split.pdf");
    let range = PageRange::new(2, 4).unwrap();
    Splitter::new().split(&input, range, &output).unwrap();

    assert_eq!(std::fs::read(&input).unwrap(), before);
}

#[test]
fn split_output_over_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = ten_page_pdf(&dir);

    let range = PageRange::new(1, 2).unwrap();
    let result = Splitter::new().split(&input, range, &input);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::InvalidRequest { .. }
    ));
    assert_eq!(page_widths(&input).len(), 10);
}
