//! Pre-flight validation.
//!
//! The UI runs these checks before invoking an operation so problems
//! surface as early feedback; the operations repeat the cheap ones, so
//! the engine stays correct even when called directly.

use std::path::{Path, PathBuf};

use crate::document::DocumentInfo;
use crate::error::{PdfDeskError, Result};
use crate::io::DocumentWriter;
use crate::range::PageRange;

/// Validator for input files, merge lists, ranges, and output paths.
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a single PDF file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, is not a regular
    /// file, is empty, is not a valid PDF, is encrypted, or has no pages.
    pub fn validate_file(&self, path: &Path) -> Result<DocumentInfo> {
        DocumentInfo::inspect(path)
    }

    /// Validate a merge request: the inputs and their relation to the
    /// output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, the output path is one of
    /// the inputs, or any file fails [`validate_file`].
    ///
    /// [`validate_file`]: Validator::validate_file
    pub fn validate_merge_inputs(
        &self,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<Vec<DocumentInfo>> {
        if inputs.is_empty() {
            return Err(PdfDeskError::EmptyMergeList);
        }

        ensure_output_not_input(inputs, output)?;

        inputs.iter().map(|path| self.validate_file(path)).collect()
    }

    /// Validate a page range against a document's page count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPageRange` when the range does not fit.
    pub fn validate_range(
        &self,
        path: &Path,
        range: PageRange,
        total_pages: usize,
    ) -> Result<()> {
        if range.fits(total_pages) {
            Ok(())
        } else {
            Err(PdfDeskError::InvalidPageRange {
                path: path.to_path_buf(),
                start: range.start(),
                end: range.end(),
                total_pages,
            })
        }
    }

    /// Validate that an output path can be written.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory doesn't exist or is not
    /// writable.
    pub fn validate_output(&self, path: &Path) -> Result<()> {
        DocumentWriter::new().can_write(path)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject an output path that resolves to one of the inputs.
///
/// Inputs are opened read-only, so writing the output over one of them
/// would corrupt a file mid-read.
pub(crate) fn ensure_output_not_input(inputs: &[PathBuf], output: &Path) -> Result<()> {
    let resolved_output = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());

    for input in inputs {
        let resolved_input = input.canonicalize().unwrap_or_else(|_| input.clone());
        if resolved_input == resolved_output {
            return Err(PdfDeskError::invalid_request(format!(
                "Output file cannot be one of the inputs: {}",
                input.display()
            )));
        }
    }

    Ok(())
}
