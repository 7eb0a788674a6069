//! Page-range extraction.
//!
//! Splitting keeps the source document intact and writes a new file
//! containing only the requested inclusive range. The range is checked
//! against the real page count before any output I/O happens.

use lopdf::{Object, ObjectId};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfDeskError, Result};
use crate::io::{DocumentWriter, reader};
use crate::range::PageRange;
use crate::validation::ensure_output_not_input;

/// Statistics about a completed split.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Number of pages extracted into the output.
    pub pages_extracted: usize,

    /// Number of pages in the source document.
    pub source_pages: usize,

    /// Size of the written output in bytes.
    pub output_size: u64,

    /// Time taken for the whole operation.
    pub elapsed: Duration,

    /// Path of the written output.
    pub output_path: PathBuf,
}

/// Extracts page ranges into new documents.
pub struct Splitter {
    writer: DocumentWriter,
}

impl Splitter {
    /// Create a new splitter with default write behavior.
    pub fn new() -> Self {
        Self {
            writer: DocumentWriter::new(),
        }
    }

    /// Extract `range` from `input` into a new file at `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input cannot be loaded
    /// - The range does not fit the document (checked before any write)
    /// - The output path equals the input path
    /// - The output cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfdesk::range::PageRange;
    /// # use pdfdesk::split::Splitter;
    /// # use std::path::Path;
    /// # fn example() -> pdfdesk::Result<()> {
    /// let range = PageRange::new(3, 5)?;
    /// let outcome = Splitter::new().split(Path::new("in.pdf"), range, Path::new("out.pdf"))?;
    /// assert_eq!(outcome.pages_extracted, 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn split(&self, input: &Path, range: PageRange, output: &Path) -> Result<SplitOutcome> {
        ensure_output_not_input(std::slice::from_ref(&input.to_path_buf()), output)?;

        let started = Instant::now();

        let loaded = reader::load(input)?;
        let source_pages = loaded.page_count;

        if !range.fits(source_pages) {
            return Err(PdfDeskError::InvalidPageRange {
                path: input.to_path_buf(),
                start: range.start(),
                end: range.end(),
                total_pages: source_pages,
            });
        }

        let mut document = loaded.document;

        let kept: Vec<ObjectId> = document
            .get_pages()
            .iter()
            .filter(|(page_number, _)| range.contains(**page_number))
            .map(|(_, &page_id)| page_id)
            .collect();

        retain_pages(&mut document, &kept, input)?;
        document.renumber_objects();

        let output_size = self.writer.save(&mut document, output)?;

        let outcome = SplitOutcome {
            pages_extracted: kept.len(),
            source_pages,
            output_size,
            elapsed: started.elapsed(),
            output_path: output.to_path_buf(),
        };

        log::info!(
            "extracted pages {range} of {} ({} page(s)) in {:.2}s",
            input.display(),
            outcome.pages_extracted,
            outcome.elapsed.as_secs_f64()
        );

        Ok(outcome)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite the page tree to contain only `page_ids`.
///
/// Dropped pages stay in the object table until the writer's compression
/// pass; they are simply no longer reachable from the catalog.
fn retain_pages(document: &mut lopdf::Document, page_ids: &[ObjectId], path: &Path) -> Result<()> {
    let pages_id = document
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|e| {
            PdfDeskError::corrupted_pdf(path.to_path_buf(), format!("no page tree root: {e}"))
        })?;

    let pages_obj = document.get_object_mut(pages_id).map_err(|e| {
        PdfDeskError::corrupted_pdf(path.to_path_buf(), format!("missing Pages object: {e}"))
    })?;

    if let Object::Dictionary(dict) = pages_obj {
        let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
        dict.set("Kids", kids);
        dict.set("Count", page_ids.len() as i64);
    } else {
        return Err(PdfDeskError::corrupted_pdf(
            path.to_path_buf(),
            "Pages object is not a dictionary",
        ));
    }

    Ok(())
}
