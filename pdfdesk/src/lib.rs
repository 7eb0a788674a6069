//! pdfdesk - PDF engine for the pdfdesk desktop application.
//!
//! This crate implements the operations behind the UI: merging PDFs in a
//! user-chosen order, extracting a page range into a new file, converting
//! a PDF to a Word document, and rendering page thumbnails for previews.
//! All operations are synchronous, never mutate their inputs, and write
//! outputs atomically.
//!
//! # Examples
//!
//! ## Merging
//!
//! ```no_run
//! use pdfdesk::merge::Merger;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> pdfdesk::Result<()> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let outcome = Merger::new().merge(&inputs, Path::new("merged.pdf"))?;
//! println!(
//!     "Merged {} files into {} pages",
//!     outcome.files_merged, outcome.total_pages
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Splitting
//!
//! ```no_run
//! use pdfdesk::range::PageRange;
//! use pdfdesk::split::Splitter;
//! use std::path::Path;
//!
//! # fn example() -> pdfdesk::Result<()> {
//! let range = PageRange::new(3, 5)?;
//! Splitter::new().split(Path::new("in.pdf"), range, Path::new("pages-3-5.pdf"))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod document;
pub mod error;
pub mod io;
pub mod merge;
pub mod range;
pub mod split;
pub mod thumbnail;
pub mod validation;

// Re-export commonly used types
pub use convert::{ConvertOutcome, DocxConverter};
pub use document::DocumentInfo;
pub use error::{PdfDeskError, Result};
pub use merge::{MergeOutcome, Merger};
pub use range::PageRange;
pub use split::{SplitOutcome, Splitter};
pub use thumbnail::{Thumbnail, ThumbnailRenderer};
pub use validation::Validator;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
