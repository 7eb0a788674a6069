//! UI-side document state.
//!
//! A [`DocumentSession`] is one selected PDF: its engine-side summary
//! plus the cached thumbnail texture. Sessions live for the duration of
//! one operation screen and are dropped when the user leaves it.

use egui::{ColorImage, TextureHandle, TextureOptions};
use pdfdesk::document::DocumentInfo;
use pdfdesk::thumbnail::{Thumbnail, ThumbnailRenderer};
use std::path::{Path, PathBuf};

/// Larger side of merge-list thumbnails, in pixels.
pub const THUMBNAIL_DIM: u32 = 160;

/// Larger side of split-preview thumbnails, in pixels.
pub const PREVIEW_DIM: u32 = 220;

/// How many pages the split preview strip shows at most.
pub const PREVIEW_PAGES: u16 = 10;

/// One selected PDF plus its cached preview state.
pub struct DocumentSession {
    /// Engine-side summary (path, page count, size).
    pub info: DocumentInfo,

    /// First-page preview, when rendering succeeded.
    pub thumbnail: Option<TextureHandle>,

    /// Whether the entry is selected in the merge list.
    pub selected: bool,
}

impl DocumentSession {
    /// Open a PDF for the UI: inspect it and render its first page.
    ///
    /// A thumbnail failure is not an error; the session is created
    /// without a preview and the cause is logged.
    ///
    /// # Errors
    ///
    /// Returns the engine error when the file itself is unusable.
    pub fn open(
        ctx: &egui::Context,
        renderer: Option<&ThumbnailRenderer>,
        path: PathBuf,
    ) -> pdfdesk::Result<Self> {
        let info = DocumentInfo::inspect(&path)?;

        let thumbnail = renderer.and_then(|renderer| {
            match renderer.render(&path, 0, THUMBNAIL_DIM) {
                Ok(thumbnail) => Some(upload_thumbnail(ctx, &info.file_name(), thumbnail)),
                Err(err) => {
                    log::warn!("no preview for {}: {err}", path.display());
                    None
                }
            }
        });

        Ok(Self {
            info,
            thumbnail,
            selected: false,
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.info.path
    }
}

/// Upload rendered pixels as an egui texture.
pub fn upload_thumbnail(ctx: &egui::Context, name: &str, thumbnail: Thumbnail) -> TextureHandle {
    let image = ColorImage::from_rgba_unmultiplied(
        [thumbnail.width as usize, thumbnail.height as usize],
        &thumbnail.pixels,
    );
    ctx.load_texture(name.to_owned(), image, TextureOptions::LINEAR)
}

/// Whether a path has a `.pdf` extension (case-insensitive).
///
/// Used to filter file drops and command-line arguments; dialogs already
/// filter through their own file-type filter.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
