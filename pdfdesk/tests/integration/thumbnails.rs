//! Thumbnail rendering behavior.
//!
//! Rendering needs a pdfium shared library at runtime, which CI machines
//! don't necessarily have, so the rendering tests are ignored by default:
//! `cargo test -- --ignored` runs them on a machine with pdfium.

use pdfdesk::thumbnail::ThumbnailRenderer;
use tempfile::TempDir;

use crate::common::{blank_pdf, save_pdf};

#[test]
#[ignore = "requires the pdfium native library"]
fn render_first_page_fits_max_dimension() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "one.pdf", blank_pdf(1));

    let renderer = ThumbnailRenderer::new().unwrap();
    let thumbnail = renderer.render(&path, 0, 160).unwrap();

    assert_eq!(thumbnail.page_index, 0);
    assert!(thumbnail.width.max(thumbnail.height) <= 160);
    assert_eq!(
        thumbnail.pixels.len(),
        (thumbnail.width * thumbnail.height * 4) as usize
    );
}

#[test]
#[ignore = "requires the pdfium native library"]
fn render_first_pages_caps_at_limit() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "many.pdf", blank_pdf(12));

    let renderer = ThumbnailRenderer::new().unwrap();
    let thumbnails = renderer.render_first_pages(&path, 10, 120).unwrap();

    assert_eq!(thumbnails.len(), 10);
}

#[test]
#[ignore = "requires the pdfium native library"]
fn render_out_of_bounds_page_fails() {
    let dir = TempDir::new().unwrap();
    let path = save_pdf(&dir, "one.pdf", blank_pdf(1));

    let renderer = ThumbnailRenderer::new().unwrap();
    assert!(renderer.render(&path, 5, 160).is_err());
}
