//! Command-line arguments.
//!
//! The app is launched from a desktop environment most of the time, but
//! it also accepts PDF paths so "open with pdfdesk" and shell usage drop
//! straight into the merge screen.

use clap::Parser;
use std::path::PathBuf;

use crate::session::is_pdf_path;

/// Merge, split, and convert PDF documents from a desktop UI.
#[derive(Parser, Debug)]
#[command(name = "pdfdesk", version, about)]
pub struct Cli {
    /// PDF files to preload into the merge list.
    #[arg(value_name = "PDF")]
    pub files: Vec<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter derived from the verbosity flag.
    ///
    /// `RUST_LOG` still takes precedence through env_logger.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// The preload files that exist and look like PDFs.
    ///
    /// Anything else is skipped with a warning instead of aborting the
    /// launch; a GUI app shouldn't refuse to start over one bad argument.
    pub fn existing_pdfs(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|path| {
                if !path.exists() {
                    log::warn!("skipping missing file: {}", path.display());
                    return false;
                }
                if !is_pdf_path(path) {
                    log::warn!("skipping non-PDF file: {}", path.display());
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }
}
