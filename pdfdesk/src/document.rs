//! Document inspection.
//!
//! [`DocumentInfo`] is the engine-side backing for a UI document session:
//! it answers "is this a usable PDF and how many pages does it have"
//! without keeping the parsed document around.

use lopdf::Document;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PdfDeskError, Result};
use crate::io::reader;

/// Summary of an inspected PDF file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Path to the inspected file.
    pub path: PathBuf,

    /// Number of pages in the PDF.
    pub page_count: usize,

    /// PDF version (major, minor).
    pub version: Option<(u8, u8)>,

    /// Size of the file in bytes.
    pub file_size: u64,

    /// Number of objects in the PDF.
    pub object_count: usize,

    /// First-page dimensions (width, height) in points, if available.
    pub page_dimensions: Option<(f32, f32)>,
}

impl DocumentInfo {
    /// Inspect a PDF file.
    ///
    /// Performs the full classification chain: existence, regular-file
    /// check, non-empty check, parseability, encryption, and presence of
    /// at least one page.
    ///
    /// # Errors
    ///
    /// Returns the matching [`PdfDeskError`] variant for each failed
    /// check.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfdesk::document::DocumentInfo;
    /// # use std::path::Path;
    /// # fn example() -> pdfdesk::Result<()> {
    /// let info = DocumentInfo::inspect(Path::new("doc.pdf"))?;
    /// println!("{} has {} pages", info.file_name(), info.page_count);
    /// # Ok(())
    /// # }
    /// ```
    pub fn inspect(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PdfDeskError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfDeskError::not_a_file(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path).map_err(|e| PdfDeskError::FileNotAccessible {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.len() == 0 {
            return Err(PdfDeskError::corrupted_pdf(
                path.to_path_buf(),
                "File is empty",
            ));
        }

        let doc = reader::load_document(path)?;

        if doc.get_pages().is_empty() {
            return Err(PdfDeskError::corrupted_pdf(
                path.to_path_buf(),
                "PDF has no pages",
            ));
        }

        Ok(Self::from_document(path.to_path_buf(), metadata.len(), &doc))
    }

    /// Build a summary from an already-loaded document.
    fn from_document(path: PathBuf, file_size: u64, doc: &Document) -> Self {
        let pages = doc.get_pages();
        let page_count = pages.len();

        let version = doc.version.split_once(".").map(|(major, minor)| {
            (
                major.parse::<u8>().unwrap_or_default(),
                minor.parse::<u8>().unwrap_or_default(),
            )
        });

        let object_count = doc.objects.len();

        // First page's MediaBox, when the page tree is well-formed.
        let page_dimensions = pages.iter().next().and_then(|(_, page_id)| {
            doc.get_object(*page_id).ok().and_then(|page_obj| {
                if let lopdf::Object::Dictionary(page_dict) = page_obj {
                    page_dict.get(b"MediaBox").ok().and_then(|mediabox| {
                        if let lopdf::Object::Array(arr) = mediabox
                            && arr.len() >= 4
                        {
                            let width = arr[2].as_float().ok()?;
                            let height = arr[3].as_float().ok()?;
                            return Some((width, height));
                        }
                        None
                    })
                } else {
                    None
                }
            })
        });

        Self {
            path,
            page_count,
            version,
            file_size,
            object_count,
            page_dimensions,
        }
    }

    /// File name component of the path, for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
