//! PDF loading.

use lopdf::Document;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// Load a PDF document and verify it has at least one page.
///
/// # Errors
///
/// Returns an error if:
/// - File does not exist or is not accessible
/// - File is not a valid PDF
/// - PDF is encrypted
/// - PDF has no pages
pub fn load(path: &Path) -> Result<LoadedPdf> {
    if !path.exists() {
        return Err(PdfDeskError::file_not_found(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(PdfDeskError::not_a_file(path.to_path_buf()));
    }

    let file_size = fs::metadata(path)
        .map_err(|e| PdfDeskError::FileNotAccessible {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();

    let document = load_document(path)?;

    let page_count = document.get_pages().len();
    if page_count == 0 {
        return Err(PdfDeskError::corrupted_pdf(
            path.to_path_buf(),
            "PDF has no pages",
        ));
    }

    Ok(LoadedPdf {
        document,
        path: path.to_path_buf(),
        page_count,
        file_size,
    })
}

/// Load a PDF document without any structural checks.
///
/// Encryption is detected by sniffing the parser error message; lopdf
/// refuses password-protected files at load time.
pub fn load_document(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|e| {
        let err_msg = e.to_string();
        if err_msg.contains("encrypt") || err_msg.contains("password") {
            PdfDeskError::encrypted_pdf(path.to_path_buf())
        } else {
            PdfDeskError::failed_to_load_pdf(path.to_path_buf(), err_msg)
        }
    })
}
