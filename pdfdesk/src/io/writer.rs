//! PDF writing and saving.

use lopdf::Document;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{PdfDeskError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// PDF writer with configurable behavior.
pub struct DocumentWriter {
    options: WriteOptions,
}

impl DocumentWriter {
    /// Create a new writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without atomic writes (faster but less safe).
    pub fn non_atomic() -> Self {
        Self {
            options: WriteOptions {
                atomic: false,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file, returning the written size in bytes.
    ///
    /// The document is mutated: compression and object renumbering happen
    /// in place before serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Output directory doesn't exist or is not writable
    /// - Output file cannot be created
    /// - Write operation fails
    pub fn save(&self, document: &mut Document, path: &Path) -> Result<u64> {
        self.can_write(path)?;

        if self.options.compress {
            document.compress();
        }

        if self.options.atomic {
            self.save_atomic(document, path)?;
        } else {
            let file =
                fs::File::create(path).map_err(|e| PdfDeskError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);
            self.write_to(document, &mut writer, path)?;
        }

        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        Ok(file_size)
    }

    /// Write via a named temp file in the target directory, then rename.
    ///
    /// The temp file lives next to the output so the final rename stays on
    /// one filesystem.
    fn save_atomic(&self, document: &mut Document, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = tempfile::Builder::new()
            .prefix(".pdfdesk-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| PdfDeskError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;

        {
            let mut writer = BufWriter::with_capacity(self.options.buffer_size, temp.as_file_mut());
            self.write_to(document, &mut writer, path)?;
        }

        temp.persist(path).map_err(|e| PdfDeskError::FailedToWrite {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        Ok(())
    }

    fn write_to<W: Write>(
        &self,
        document: &mut Document,
        writer: &mut W,
        path: &Path,
    ) -> Result<()> {
        document
            .save_to(writer)
            .map_err(|e| PdfDeskError::FailedToWrite {
                path: path.to_path_buf(),
                source: io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfDeskError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Check if a file can be written to the given path.
    ///
    /// Performs pre-flight checks without actually writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory doesn't exist or is not
    /// writable.
    pub fn can_write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent.as_os_str().is_empty() {
                return Ok(());
            }

            if !parent.exists() {
                return Err(PdfDeskError::invalid_request(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }

            let metadata =
                fs::metadata(parent).map_err(|e| PdfDeskError::FileNotAccessible {
                    path: parent.to_path_buf(),
                    source: e,
                })?;

            if metadata.permissions().readonly() {
                return Err(PdfDeskError::invalid_request(format!(
                    "Output directory is not writable: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
