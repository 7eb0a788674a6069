//! Shared helpers for integration tests.
//!
//! Fixtures are built programmatically with lopdf so the suite carries no
//! binary files and every test controls exactly what its inputs contain.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a PDF whose page widths are the given values.
///
/// The width doubles as a page marker: after a merge or split, reading
/// the MediaBox widths back recovers which source pages ended up where.
pub fn pdf_with_page_widths(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.4");

    let catalog_id = doc.new_object_id();
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for width in widths {
        let page_id = doc.new_object_id();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (*width).into(), 792.into()],
        };
        doc.objects.insert(page_id, page.into());
        page_ids.push(page_id);
    }

    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|&id| id.into()).collect::<Vec<Object>>(),
        "Count" => widths.len() as i64,
    };

    doc.objects.insert(catalog_id, catalog.into());
    doc.objects.insert(pages_id, pages_dict.into());
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Build a PDF with `page_count` blank letter-size pages.
pub fn blank_pdf(page_count: usize) -> Document {
    let widths: Vec<i64> = std::iter::repeat_n(612, page_count).collect();
    pdf_with_page_widths(&widths)
}

/// Build a one-page-per-line text PDF.
///
/// Each entry in `page_texts` becomes one page containing that text,
/// rendered with a standard Courier font so text extraction works.
pub fn text_pdf(page_texts: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|&id| id.into()).collect::<Vec<Object>>(),
        "Count" => page_texts.len() as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Save a document into the temp dir and return its path.
pub fn save_pdf(dir: &TempDir, name: &str, mut doc: Document) -> PathBuf {
    let path = dir.path().join(name);
    doc.save(&path).unwrap();
    path
}

/// Read back the MediaBox widths of a saved PDF, in page order.
pub fn page_widths(path: &PathBuf) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let mediabox = dict.get(b"MediaBox").unwrap().as_array().unwrap();
            mediabox[2].as_i64().unwrap()
        })
        .collect()
}
