//! Split screen: page-range extraction with a preview strip.

use egui::{Button, RichText, TextEdit, TextureHandle};
use pdfdesk::document::DocumentInfo;
use pdfdesk::range::PageRange;
use pdfdesk::split::Splitter;
use pdfdesk::validation::Validator;

use crate::dialogs::Dialogs;
use crate::screens::{self, ScreenAction};
use crate::session::{PREVIEW_DIM, PREVIEW_PAGES, upload_thumbnail};

/// State of the split screen.
#[derive(Default)]
pub struct SplitScreen {
    source: Option<DocumentInfo>,
    previews: Vec<TextureHandle>,
    start_text: String,
    end_text: String,
}

impl SplitScreen {
    /// Render the screen; returns the navigation request.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        dialogs: &mut Dialogs,
    ) -> ScreenAction {
        let mut action = ScreenAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if screens::header(ui, "Split PDF") {
                action = ScreenAction::BackToMenu;
            }

            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    match &self.source {
                        Some(info) => {
                            ui.label(RichText::new(info.file_name()).strong());
                            ui.label(format!("{} page(s)", info.page_count));
                        }
                        None => {
                            ui.label(RichText::new("No file selected").weak());
                        }
                    }

                    if ui.button("Select PDF…").clicked() {
                        self.pick_source(ui.ctx(), renderer, dialogs);
                    }
                });

                if !self.previews.is_empty() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Preview (first {PREVIEW_PAGES} pages):")).weak(),
                    );

                    egui::ScrollArea::horizontal().show(ui, |ui| {
                        ui.horizontal(|ui| {
                            for (index, texture) in self.previews.iter().enumerate() {
                                ui.vertical(|ui| {
                                    ui.add(egui::Image::new(texture).max_height(180.0));
                                    ui.label(
                                        RichText::new(format!("Page {}", index + 1)).small(),
                                    );
                                });
                            }
                        });
                    });
                }
            });

            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(RichText::new("Page range").strong());

                ui.horizontal(|ui| {
                    ui.label("Start page:");
                    ui.add(
                        TextEdit::singleline(&mut self.start_text)
                            .hint_text("e.g. 1")
                            .desired_width(100.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("End page:");
                    ui.add(
                        TextEdit::singleline(&mut self.end_text)
                            .hint_text("e.g. 5")
                            .desired_width(100.0),
                    );
                });
            });

            ui.add_space(8.0);

            let split_button = Button::new(RichText::new("Split to PDF…").size(14.0));
            if ui.add_enabled(self.source.is_some(), split_button).clicked() {
                self.run_split(dialogs);
            }
        });

        action
    }

    fn pick_source(
        &mut self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        dialogs: &mut Dialogs,
    ) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .pick_file()
        else {
            return;
        };

        match Validator::new().validate_file(&path) {
            Ok(info) => {
                self.previews = self.load_previews(ctx, renderer, &info, dialogs);
                self.source = Some(info);
            }
            Err(err) => {
                dialogs.error("Could not open file", err.to_string());
            }
        }
    }

    fn load_previews(
        &self,
        ctx: &egui::Context,
        renderer: Option<&pdfdesk::ThumbnailRenderer>,
        info: &DocumentInfo,
        dialogs: &mut Dialogs,
    ) -> Vec<TextureHandle> {
        let Some(renderer) = renderer else {
            log::warn!("preview strip disabled: pdfium is not available");
            return Vec::new();
        };

        match renderer.render_first_pages(&info.path, PREVIEW_PAGES, PREVIEW_DIM) {
            Ok(thumbnails) => thumbnails
                .into_iter()
                .map(|thumbnail| {
                    let name = format!("{}-p{}", info.file_name(), thumbnail.page_index);
                    upload_thumbnail(ctx, &name, thumbnail)
                })
                .collect(),
            Err(err) => {
                dialogs.error("Preview failed", err.to_string());
                Vec::new()
            }
        }
    }

    fn run_split(&mut self, dialogs: &mut Dialogs) {
        let Some(info) = &self.source else {
            dialogs.error("No source file", "Select a PDF to split first.");
            return;
        };

        let (Ok(start), Ok(end)) = (
            self.start_text.trim().parse::<u32>(),
            self.end_text.trim().parse::<u32>(),
        ) else {
            dialogs.error("Invalid input", "Start and end pages must be numbers.");
            return;
        };

        let range = match PageRange::new(start, end).and_then(|range| {
            Validator::new().validate_range(&info.path, range, info.page_count)?;
            Ok(range)
        }) {
            Ok(range) => range,
            Err(err) => {
                dialogs.error("Invalid page range", err.to_string());
                return;
            }
        };

        let Some(output) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_file_name("split.pdf")
            .save_file()
        else {
            return;
        };

        let result = Validator::new()
            .validate_output(&output)
            .and_then(|_| Splitter::new().split(&info.path, range, &output));

        match result {
            Ok(outcome) => dialogs.info(
                "Split complete",
                format!(
                    "Extracted {} page(s) to:\n{}",
                    outcome.pages_extracted,
                    outcome.output_path.display()
                ),
            ),
            Err(err) => dialogs.error("Split failed", err.to_string()),
        }
    }
}
