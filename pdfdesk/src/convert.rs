//! PDF to Word conversion.
//!
//! Conversion extracts text page by page and writes a `.docx` where each
//! non-empty line becomes a paragraph and page boundaries become page
//! breaks. Layout reconstruction (columns, tables, images) is not
//! attempted; the output carries the text content.

use docx_rs::{BreakType, Docx, Paragraph, Run};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfDeskError, Result};
use crate::io::reader;

/// Statistics about a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    /// Number of pages converted.
    pub pages_converted: usize,

    /// Number of text characters extracted.
    pub characters: usize,

    /// Size of the written output in bytes.
    pub output_size: u64,

    /// Time taken for the whole operation.
    pub elapsed: Duration,

    /// Path of the written output.
    pub output_path: PathBuf,
}

/// Converts PDFs to Word documents.
pub struct DocxConverter {
    page_breaks: bool,
}

impl DocxConverter {
    /// Create a converter that inserts a page break between source pages.
    pub fn new() -> Self {
        Self { page_breaks: true }
    }

    /// Create a converter that runs pages together without breaks.
    pub fn without_page_breaks() -> Self {
        Self { page_breaks: false }
    }

    /// Convert `input` to a Word document at `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be loaded (missing, corrupt, encrypted)
    /// - Text extraction fails on any page
    /// - The output cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfdesk::convert::DocxConverter;
    /// # use std::path::Path;
    /// # fn example() -> pdfdesk::Result<()> {
    /// let outcome =
    ///     DocxConverter::new().convert(Path::new("report.pdf"), Path::new("report.docx"))?;
    /// println!("{} pages converted", outcome.pages_converted);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConvertOutcome> {
        let started = Instant::now();

        let loaded = reader::load(input)?;

        let mut pages_text = Vec::with_capacity(loaded.page_count);
        for page_number in 1..=loaded.page_count as u32 {
            let text = loaded.document.extract_text(&[page_number]).map_err(|e| {
                PdfDeskError::conversion_failed(
                    input.to_path_buf(),
                    format!("text extraction failed on page {page_number}: {e}"),
                )
            })?;
            pages_text.push(text);
        }

        let characters = pages_text.iter().map(|text| text.chars().count()).sum();
        let docx = self.build_docx(&pages_text);
        let output_size = write_docx(docx, output)?;

        let outcome = ConvertOutcome {
            pages_converted: pages_text.len(),
            characters,
            output_size,
            elapsed: started.elapsed(),
            output_path: output.to_path_buf(),
        };

        log::info!(
            "converted {} ({} page(s), {} chars) in {:.2}s",
            input.display(),
            outcome.pages_converted,
            outcome.characters,
            outcome.elapsed.as_secs_f64()
        );

        Ok(outcome)
    }

    /// Assemble the document body from per-page text.
    fn build_docx(&self, pages: &[String]) -> Docx {
        let mut docx = Docx::new();

        for (index, text) in pages.iter().enumerate() {
            if index > 0 && self.page_breaks {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                );
            }

            for line in text.lines().map(str::trim_end).filter(|line| !line.is_empty()) {
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
            }
        }

        docx
    }
}

impl Default for DocxConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack the document into a `.docx` (zip) file, atomically.
fn write_docx(docx: Docx, output: &Path) -> Result<u64> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        return Err(PdfDeskError::invalid_request(format!(
            "Output directory does not exist: {}",
            dir.display()
        )));
    }

    let mut temp = tempfile::Builder::new()
        .prefix(".pdfdesk-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| PdfDeskError::FailedToCreateOutput {
            path: output.to_path_buf(),
            source: e,
        })?;

    docx.build()
        .pack(temp.as_file_mut())
        .map_err(|e| PdfDeskError::FailedToWrite {
            path: output.to_path_buf(),
            source: io::Error::other(e),
        })?;

    temp.persist(output).map_err(|e| PdfDeskError::FailedToWrite {
        path: output.to_path_buf(),
        source: e.error,
    })?;

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    Ok(file_size)
}
