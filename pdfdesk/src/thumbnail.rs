//! Page thumbnail rendering.
//!
//! Rasterization goes through pdfium, bound at runtime: first a library
//! next to the executable, then the system library. When neither binds,
//! [`ThumbnailRenderer::new`] fails with `PdfiumUnavailable` and the UI
//! degrades to text-only list entries.

use pdfium_render::prelude::*;
use std::path::Path;

use crate::error::{PdfDeskError, Result};

/// One rendered page preview.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// 0-indexed page the thumbnail was rendered from.
    pub page_index: u16,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// RGBA8 pixel data, row-major, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// Renders page previews through pdfium.
pub struct ThumbnailRenderer {
    pdfium: Pdfium,
}

impl ThumbnailRenderer {
    /// Bind pdfium and create a renderer.
    ///
    /// # Errors
    ///
    /// Returns `PdfiumUnavailable` when no pdfium library can be bound.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| PdfDeskError::PdfiumUnavailable {
                reason: format!("{e:?}"),
            })?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Render one page to an RGBA bitmap.
    ///
    /// The output is scaled so its larger side equals `max_dimension`,
    /// preserving aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns `RenderFailed` if the document cannot be opened, the page
    /// index is out of bounds, or rasterization fails.
    pub fn render(&self, path: &Path, page_index: u16, max_dimension: u32) -> Result<Thumbnail> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfDeskError::render_failed(path.to_path_buf(), format!("{e:?}")))?;

        self.render_page(&document, path, page_index, max_dimension)
    }

    /// Render the first `limit` pages of a document.
    ///
    /// Used for the split screen's preview strip.
    pub fn render_first_pages(
        &self,
        path: &Path,
        limit: u16,
        max_dimension: u32,
    ) -> Result<Vec<Thumbnail>> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| PdfDeskError::render_failed(path.to_path_buf(), format!("{e:?}")))?;

        let count = document.pages().len().min(limit);

        (0..count)
            .map(|index| self.render_page(&document, path, index, max_dimension))
            .collect()
    }

    fn render_page(
        &self,
        document: &PdfDocument<'_>,
        path: &Path,
        page_index: u16,
        max_dimension: u32,
    ) -> Result<Thumbnail> {
        let page = document.pages().get(page_index).map_err(|e| {
            PdfDeskError::render_failed(
                path.to_path_buf(),
                format!("page {page_index}: {e:?}"),
            )
        })?;

        let (width, height) =
            fit_dimensions(page.width().value, page.height().value, max_dimension);

        let config = PdfRenderConfig::new()
            .set_target_width(width as i32)
            .set_maximum_height(height as i32);

        let bitmap = page.render_with_config(&config).map_err(|e| {
            PdfDeskError::render_failed(
                path.to_path_buf(),
                format!("page {page_index}: {e:?}"),
            )
        })?;

        let image = bitmap.as_image().into_rgba8();

        Ok(Thumbnail {
            page_index,
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        })
    }
}

/// Scale page dimensions so the larger side equals `max_dimension`.
///
/// Degenerate page sizes fall back to a square of `max_dimension`.
pub fn fit_dimensions(width: f32, height: f32, max_dimension: u32) -> (u32, u32) {
    if !(width > 0.0) || !(height > 0.0) {
        return (max_dimension, max_dimension);
    }

    let scale = max_dimension as f32 / width.max(height);
    let scaled_width = (width * scale).round().max(1.0) as u32;
    let scaled_height = (height * scale).round().max(1.0) as u32;

    (scaled_width, scaled_height)
}
