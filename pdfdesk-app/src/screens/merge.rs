//! Merge screen: reorderable document list with previews.
//!
//! Files arrive through the Add button, drag-and-drop from the file
//! manager, or command-line preload. Rows are reordered by dragging;
//! the list order is the page order of the merged output.

use egui::{Button, Id, RichText, Stroke};
use pdfdesk::merge::Merger;
use pdfdesk::validation::Validator;
use std::path::PathBuf;

use crate::dialogs::Dialogs;
use crate::screens::{self, ScreenAction};
use crate::session::{DocumentSession, is_pdf_path};

const THUMB_ROW_HEIGHT: f32 = 80.0;

/// State of the merge screen.
#[derive(Default)]
pub struct MergeScreen {
    entries: Vec<DocumentSession>,
}

impl MergeScreen {
    /// Create the screen with an initial set of files (CLI preload).
    pub fn with_files(
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        paths: Vec<PathBuf>,
        dialogs: &mut Dialogs,
    ) -> Self {
        let mut screen = Self::default();
        screen.add_files(ctx, renderer, paths, dialogs);
        screen
    }

    /// Add files to the end of the list, skipping ones that fail to open.
    pub fn add_files(
        &mut self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        paths: Vec<PathBuf>,
        dialogs: &mut Dialogs,
    ) {
        for path in paths {
            match DocumentSession::open(ctx, renderer, path) {
                Ok(session) => self.entries.push(session),
                Err(err) => dialogs.error("Could not add file", err.to_string()),
            }
        }
    }

    /// Render the screen; returns the navigation request.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        dialogs: &mut Dialogs,
    ) -> ScreenAction {
        self.accept_dropped_files(ctx, renderer, dialogs);

        let mut action = ScreenAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if screens::header(ui, "Merge PDFs") {
                action = ScreenAction::BackToMenu;
            }

            ui.label(
                RichText::new("Drag & drop PDFs below or click Add. Drag rows to reorder.")
                    .weak(),
            );
            ui.add_space(4.0);

            self.show_list(ui);

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Add PDFs…").clicked() {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter("PDF files", &["pdf"])
                        .pick_files()
                    {
                        self.add_files(ui.ctx(), renderer, paths, dialogs);
                    }
                }

                if ui.button("Remove selected").clicked() {
                    self.entries.retain(|entry| !entry.selected);
                }

                if ui.button("Clear all").clicked() {
                    self.entries.clear();
                }
            });

            ui.add_space(8.0);

            let merge_button = Button::new(RichText::new("Merge to PDF…").size(14.0));
            if ui.add_enabled(!self.entries.is_empty(), merge_button).clicked() {
                self.run_merge(dialogs);
            }

            if self.entries.is_empty() {
                ui.label(RichText::new("Add at least one PDF to merge.").weak());
            }
        });

        action
    }

    /// External file drops land on the list regardless of pointer
    /// position; non-PDF files are ignored, matching the dialog filter.
    fn accept_dropped_files(
        &mut self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        dialogs: &mut Dialogs,
    ) {
        let dropped: Vec<PathBuf> = ctx.input(|input| {
            input
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        let pdfs: Vec<PathBuf> = dropped.into_iter().filter(|p| is_pdf_path(p)).collect();
        if !pdfs.is_empty() {
            self.add_files(ctx, renderer, pdfs, dialogs);
        }
    }

    /// The reorderable list itself.
    fn show_list(&mut self, ui: &mut egui::Ui) {
        let mut from: Option<usize> = None;
        let mut to: Option<usize> = None;

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 120.0).max(120.0))
            .auto_shrink(false)
            .show(ui, |ui| {
                for index in 0..self.entries.len() {
                    let row_id = Id::new(("merge-entry", index));

                    let response = ui
                        .dnd_drag_source(row_id, index, |ui| {
                            self.show_row(ui, index);
                        })
                        .response;

                    // Insert-position marker while another row hovers here.
                    if let (Some(pointer), Some(hovered)) = (
                        ui.input(|input| input.pointer.interact_pos()),
                        response.dnd_hover_payload::<usize>(),
                    ) {
                        let rect = response.rect;
                        let stroke = Stroke::new(2.0, ui.visuals().selection.bg_fill);

                        let insert_index = if *hovered == index {
                            index
                        } else if pointer.y < rect.center().y {
                            ui.painter().hline(rect.x_range(), rect.top(), stroke);
                            index
                        } else {
                            ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
                            index + 1
                        };

                        if let Some(dragged) = response.dnd_release_payload::<usize>() {
                            from = Some(*dragged);
                            to = Some(insert_index);
                        }
                    }
                }
            });

        if let (Some(from), Some(to)) = (from, to) {
            move_entry(&mut self.entries, from, to);
        }
    }

    fn show_row(&mut self, ui: &mut egui::Ui, index: usize) {
        let entry = &mut self.entries[index];

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.checkbox(&mut entry.selected, "");

                match &entry.thumbnail {
                    Some(texture) => {
                        ui.add(egui::Image::new(texture).max_height(THUMB_ROW_HEIGHT));
                    }
                    None => {
                        ui.label(RichText::new("(no preview)").weak());
                    }
                }

                ui.vertical(|ui| {
                    ui.label(RichText::new(entry.info.file_name()).strong());
                    ui.label(RichText::new(entry.info.path.display().to_string()).small().weak());
                    ui.label(format!("{} page(s)", entry.info.page_count));
                });
            });
        });
    }

    fn run_merge(&mut self, dialogs: &mut Dialogs) {
        let inputs: Vec<PathBuf> = self.entries.iter().map(|e| e.path().to_path_buf()).collect();

        let Some(output) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_file_name("merged.pdf")
            .save_file()
        else {
            return;
        };

        let validator = Validator::new();
        let result = validator
            .validate_merge_inputs(&inputs, &output)
            .and_then(|_| validator.validate_output(&output))
            .and_then(|_| Merger::new().merge(&inputs, &output));

        match result {
            Ok(outcome) => {
                dialogs.info(
                    "Merge complete",
                    format!(
                        "Merged {} file(s) into {} page(s):\n{}",
                        outcome.files_merged,
                        outcome.total_pages,
                        outcome.output_path.display()
                    ),
                );
                self.entries.clear();
            }
            Err(err) => dialogs.error("Merge failed", err.to_string()),
        }
    }
}

/// Move an entry from `from` to the insert position `to`.
///
/// `to` is an insert index in the pre-removal list, the way a drop
/// marker expresses it.
fn move_entry<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }

    let item = items.remove(from);
    let mut to = if to > from { to - 1 } else { to };
    to = to.min(items.len());
    items.insert(to, item);
}
