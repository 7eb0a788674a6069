//! Error types for pdfdesk.
//!
//! All engine operations report failures through [`PdfDeskError`]. Errors
//! carry the path they relate to where one exists, so the UI can show a
//! message that names the offending file without extra bookkeeping.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for pdfdesk operations.
pub type Result<T> = std::result::Result<T, PdfDeskError>;

/// Main error type for pdfdesk operations.
#[derive(Debug)]
pub enum PdfDeskError {
    /// Input file was not found.
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file is not accessible (permission denied, etc.).
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Path exists but is not a regular file.
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Failed to load PDF file.
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is corrupted or has invalid structure.
    CorruptedPdf {
        /// Path to the corrupted PDF.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// PDF file is encrypted and cannot be processed.
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// No files were provided for merging.
    EmptyMergeList,

    /// Page range is invalid for the PDF.
    InvalidPageRange {
        /// Path to the PDF file.
        path: PathBuf,
        /// Requested first page (1-indexed).
        start: u32,
        /// Requested last page (1-indexed, inclusive).
        end: u32,
        /// Total pages in the PDF.
        total_pages: usize,
    },

    /// Failed to create output file.
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to output file.
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Merge operation failed.
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// PDF to Word conversion failed.
    ConversionFailed {
        /// Path to the source PDF.
        path: PathBuf,
        /// Details about the failure.
        reason: String,
    },

    /// Page rendering failed.
    RenderFailed {
        /// Path to the PDF being rendered.
        path: PathBuf,
        /// Details about the failure.
        reason: String,
    },

    /// The pdfium library could not be located or bound.
    PdfiumUnavailable {
        /// Details about the bind failure.
        reason: String,
    },

    /// A request was rejected before any work was done.
    InvalidRequest {
        /// Description of what's wrong with the request.
        message: String,
    },

    /// Generic I/O error.
    Io {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Generic error with a custom message.
    Other {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for PdfDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound { path } => {
                write!(f, "File not found: {}", path.display())
            }
            Self::FileNotAccessible { path, source } => {
                write!(
                    f,
                    "Cannot access file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::NotAFile { path } => {
                write!(f, "Not a file: {}", path.display())
            }
            Self::FailedToLoadPdf { path, reason } => {
                write!(
                    f,
                    "Failed to load PDF: {}\n  Reason: {}",
                    path.display(),
                    reason
                )
            }
            Self::CorruptedPdf { path, details } => {
                write!(
                    f,
                    "Corrupted or invalid PDF: {}\n  Details: {}",
                    path.display(),
                    details
                )
            }
            Self::EncryptedPdf { path } => {
                write!(
                    f,
                    "PDF is encrypted and cannot be processed: {}\n  \
                     Hint: Decrypt the PDF first, then try again",
                    path.display()
                )
            }
            Self::EmptyMergeList => {
                write!(f, "No input files specified for merging")
            }
            Self::InvalidPageRange {
                path,
                start,
                end,
                total_pages,
            } => {
                write!(
                    f,
                    "Invalid page range {start}-{end} for PDF: {}\n  \
                     PDF has {total_pages} page(s). Page numbers must be between 1 and {total_pages}",
                    path.display()
                )
            }
            Self::FailedToCreateOutput { path, source } => {
                write!(
                    f,
                    "Failed to create output file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::FailedToWrite { path, source } => {
                write!(
                    f,
                    "Failed to write to output file: {}\n  Reason: {}",
                    path.display(),
                    source
                )
            }
            Self::MergeFailed { reason } => {
                write!(f, "Merge operation failed: {reason}")
            }
            Self::ConversionFailed { path, reason } => {
                write!(
                    f,
                    "Failed to convert PDF to Word: {}\n  Reason: {}",
                    path.display(),
                    reason
                )
            }
            Self::RenderFailed { path, reason } => {
                write!(
                    f,
                    "Failed to render page preview: {}\n  Reason: {}",
                    path.display(),
                    reason
                )
            }
            Self::PdfiumUnavailable { reason } => {
                write!(f, "Page rendering is unavailable: {reason}")
            }
            Self::InvalidRequest { message } => {
                write!(f, "Invalid request: {message}")
            }
            Self::Io { source } => {
                write!(f, "I/O error: {source}")
            }
            Self::Other { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl std::error::Error for PdfDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileNotAccessible { source, .. } => Some(source),
            Self::FailedToCreateOutput { source, .. } => Some(source),
            Self::FailedToWrite { source, .. } => Some(source),
            Self::Io { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for PdfDeskError {
    fn from(err: io::Error) -> Self {
        Self::Io { source: err }
    }
}

impl From<lopdf::Error> for PdfDeskError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfDeskError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create a ConversionFailed error.
    pub fn conversion_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::ConversionFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error.
    pub fn render_failed(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            path,
            reason: reason.into(),
        }
    }

    /// Create an InvalidRequest error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}
