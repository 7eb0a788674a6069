//! PDF merging.
//!
//! Merging concatenates the pages of every input, in list order, into a
//! single document. Object ids are renumbered per input to avoid
//! collisions, then the page tree is rebuilt from scratch: one `Pages`
//! root owning every page (re-parented), one catalog pointing at it.
//! Outlines do not survive the rebuild and are dropped.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfDeskError, Result};
use crate::io::{DocumentWriter, reader};
use crate::validation::ensure_output_not_input;

/// Statistics about a completed merge.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,

    /// Total size of input files in bytes.
    pub input_size: u64,

    /// Size of the written output in bytes.
    pub output_size: u64,

    /// Time taken for the whole operation.
    pub elapsed: Duration,

    /// Path of the written output.
    pub output_path: PathBuf,
}

/// PDF merger that combines multiple documents.
pub struct Merger {
    writer: DocumentWriter,
}

impl Merger {
    /// Create a new merger with default write behavior.
    pub fn new() -> Self {
        Self {
            writer: DocumentWriter::new(),
        }
    }

    /// Merge the inputs, in list order, into `output`.
    ///
    /// Input files are never mutated; the only side effect is the file
    /// written at `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input list is empty (checked before any I/O)
    /// - The output path is one of the inputs
    /// - Any input cannot be loaded
    /// - The output cannot be written
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfdesk::merge::Merger;
    /// # use std::path::{Path, PathBuf};
    /// # fn example() -> pdfdesk::Result<()> {
    /// let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let outcome = Merger::new().merge(&inputs, Path::new("merged.pdf"))?;
    /// println!("{} pages written", outcome.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<MergeOutcome> {
        if inputs.is_empty() {
            return Err(PdfDeskError::EmptyMergeList);
        }

        ensure_output_not_input(inputs, output)?;

        let started = Instant::now();

        let mut max_id = 1u32;
        let mut ordered_page_ids: Vec<ObjectId> = Vec::new();
        let mut all_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
        let mut input_size = 0u64;

        for path in inputs {
            let loaded = reader::load(path)?;
            let mut document = loaded.document;

            // Shift this document's ids past everything collected so far.
            document.renumber_objects_with(max_id);
            max_id = document.max_id + 1;

            // get_pages is keyed by page number, so values come out in
            // page order; inputs are visited in list order.
            ordered_page_ids.extend(document.get_pages().into_values());
            input_size += loaded.file_size;
            all_objects.extend(document.objects);
        }

        let mut merged = assemble(&ordered_page_ids, &all_objects)?;
        let total_pages = merged.get_pages().len();

        let output_size = self.writer.save(&mut merged, output)?;

        let outcome = MergeOutcome {
            files_merged: inputs.len(),
            total_pages,
            input_size,
            output_size,
            elapsed: started.elapsed(),
            output_path: output.to_path_buf(),
        };

        log::info!(
            "merged {} file(s) into {} page(s) in {:.2}s",
            outcome.files_merged,
            outcome.total_pages,
            outcome.elapsed.as_secs_f64()
        );

        Ok(outcome)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh document around the collected objects.
///
/// Keeps the first catalog, folds every `Pages` dictionary into one root,
/// and re-parents each page onto that root in the given order.
fn assemble(page_ids: &[ObjectId], objects: &BTreeMap<ObjectId, Object>) -> Result<Document> {
    let mut document = Document::with_version("1.5");

    let mut catalog: Option<(ObjectId, Object)> = None;
    let mut pages_root: Option<(ObjectId, Dictionary)> = None;

    for (object_id, object) in objects {
        match object_type(object) {
            Some(b"Catalog") => {
                if catalog.is_none() {
                    catalog = Some((*object_id, object.clone()));
                }
            }
            Some(b"Pages") => {
                if let Ok(dict) = object.as_dict() {
                    let mut dict = dict.clone();
                    if let Some((_, ref existing)) = pages_root {
                        dict.extend(existing);
                    }
                    let id = pages_root
                        .as_ref()
                        .map(|(id, _)| *id)
                        .unwrap_or(*object_id);
                    pages_root = Some((id, dict));
                }
            }
            // Pages are re-inserted below with a corrected Parent.
            Some(b"Page") => {}
            Some(b"Outlines") | Some(b"Outline") => {}
            _ => {
                document.objects.insert(*object_id, object.clone());
            }
        }
    }

    let (pages_id, mut pages_dict) = pages_root
        .ok_or_else(|| PdfDeskError::merge_failed("no Pages root found in any input"))?;

    let (catalog_id, catalog_object) =
        catalog.ok_or_else(|| PdfDeskError::merge_failed("no document catalog found"))?;

    for page_id in page_ids {
        let Some(object) = objects.get(page_id) else {
            return Err(PdfDeskError::merge_failed(format!(
                "page object {page_id:?} disappeared during merge"
            )));
        };

        if let Ok(dict) = object.as_dict() {
            let mut dict = dict.clone();
            dict.set("Parent", pages_id);
            document
                .objects
                .insert(*page_id, Object::Dictionary(dict));
        }
    }

    pages_dict.set("Count", page_ids.len() as i64);
    pages_dict.set(
        "Kids",
        page_ids
            .iter()
            .map(|&id| Object::Reference(id))
            .collect::<Vec<_>>(),
    );
    document
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    if let Ok(dict) = catalog_object.as_dict() {
        let mut dict = dict.clone();
        dict.set("Pages", pages_id);
        dict.remove(b"Outlines");
        document
            .objects
            .insert(catalog_id, Object::Dictionary(dict));
    }

    document.trailer.set("Root", catalog_id);
    document.max_id = document.objects.len() as u32;
    document.renumber_objects();

    Ok(document)
}

/// The `/Type` name of an object, when it is a dictionary that has one.
fn object_type(object: &Object) -> Option<&[u8]> {
    object.as_dict().ok()?.get(b"Type").ok()?.as_name().ok()
}
