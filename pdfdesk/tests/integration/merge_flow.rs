//! End-to-end merge behavior.

use pdfdesk::error::PdfDeskError;
use pdfdesk::merge::Merger;
use pdfdesk::validation::Validator;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{page_widths, pdf_with_page_widths, save_pdf};

#[test]
fn merge_three_single_page_files_in_order() {
    let dir = TempDir::new().unwrap();
    let a = save_pdf(&dir, "a.pdf", pdf_with_page_widths(&[101]));
    let b = save_pdf(&dir, "b.pdf", pdf_with_page_widths(&[202]));
    let c = save_pdf(&dir, "c.pdf", pdf_with_page_widths(&[303]));
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a, b, c], &output).unwrap();

    assert_eq!(outcome.files_merged, 3);
    assert_eq!(outcome.total_pages, 3);
    assert_eq!(outcome.output_path, output);
    assert!(outcome.output_size > 0);

    // Page order must be exactly the list order: A, B, C.
    assert_eq!(page_widths(&output), vec![101, 202, 303]);
}

#[test]
fn merge_reordered_list_reorders_pages() {
    let dir = TempDir::new().unwrap();
    let a = save_pdf(&dir, "a.pdf", pdf_with_page_widths(&[101]));
    let b = save_pdf(&dir, "b.pdf", pdf_with_page_widths(&[202]));
    let output = dir.path().join("merged.pdf");

    Merger::new().merge(&[b, a], &output).unwrap();

    assert_eq!(page_widths(&output), vec![202, 101]);
}

#[test]
fn merge_empty_list_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("merged.pdf");

    let result = Merger::new().merge(&[], &output);

    assert!(matches!(result.unwrap_err(), PdfDeskError::EmptyMergeList));
    assert!(!output.exists());
}

#[test]
fn merge_unreadable_input_creates_no_output() {
    let dir = TempDir::new().unwrap();
    let good = save_pdf(&dir, "good.pdf", pdf_with_page_widths(&[101]));

    let junk = dir.path().join("junk.pdf");
    std::fs::write(&junk, b"%PDF-not-really").unwrap();

    let output = dir.path().join("merged.pdf");
    let result = Merger::new().merge(&[good, junk], &output);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::FailedToLoadPdf { .. } | PdfDeskError::CorruptedPdf { .. }
    ));
    assert!(!output.exists());
}

#[test]
fn merge_missing_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("merged.pdf");

    let result = Merger::new().merge(&[PathBuf::from("/no/such/file.pdf")], &output);

    assert!(matches!(
        result.unwrap_err(),
        PdfDeskError::FileNotFound { .. }
    ));
}

#[test]
fn merge_allows_duplicate_entries() {
    let dir = TempDir::new().unwrap();
    let a = save_pdf(&dir, "a.pdf", pdf_with_page_widths(&[101, 102]));
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a.clone(), a], &output).unwrap();

    assert_eq!(outcome.files_merged, 2);
    assert_eq!(outcome.total_pages, 4);
    assert_eq!(page_widths(&output), vec![101, 102, 101, 102]);
}

#[test]
fn merge_leaves_inputs_unmodified() {
    let dir = TempDir::new().unwrap();
    let a = save_pdf(&dir, "a.pdf", pdf_with_page_widths(&[101]));
    let before = std::fs::read(&a).unwrap();

    let output = dir.path().join("merged.pdf");
    Merger::new()
        .merge(std::slice::from_ref(&a), &output)
        .unwrap();

    assert_eq!(std::fs::read(&a).unwrap(), before);
}

#[test]
fn validator_mirrors_merge_rejections() {
    let dir = TempDir::new().unwrap();
    let a = save_pdf(&dir, "a.pdf", pdf_with_page_widths(&[101]));

    let validator = Validator::new();

    // Empty list.
    assert!(matches!(
        validator
            .validate_merge_inputs(&[], dir.path().join("out.pdf").as_path())
            .unwrap_err(),
        PdfDeskError::EmptyMergeList
    ));

    // Output colliding with an input.
    assert!(matches!(
        validator
            .validate_merge_inputs(std::slice::from_ref(&a), &a)
            .unwrap_err(),
        PdfDeskError::InvalidRequest { .. }
    ));

    // Happy path reports page counts.
    let infos = validator
        .validate_merge_inputs(std::slice::from_ref(&a), dir.path().join("out.pdf").as_path())
        .unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].page_count, 1);
}
