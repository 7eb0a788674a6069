//! Convert screen: PDF to Word.

use egui::{Button, RichText};
use pdfdesk::convert::DocxConverter;
use pdfdesk::document::DocumentInfo;
use pdfdesk::validation::Validator;

use crate::dialogs::Dialogs;
use crate::screens::{self, ScreenAction};

/// State of the convert screen.
#[derive(Default)]
pub struct ConvertScreen {
    source: Option<DocumentInfo>,
}

impl ConvertScreen {
    /// Render the screen; returns the navigation request.
    pub fn show(&mut self, ctx: &egui::Context, dialogs: &mut Dialogs) -> ScreenAction {
        let mut action = ScreenAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if screens::header(ui, "Convert PDF to Word") {
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
                        self.pick_source(dialogs);
                    }
                });
            });

            ui.add_space(8.0);

            let convert_button = Button::new(RichText::new("Convert to Word…").size(14.0));
            if ui
                .add_enabled(self.source.is_some(), convert_button)
                .clicked()
            {
                self.run_convert(dialogs);
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "The conversion carries the text content; complex layout is not preserved.",
                )
                .weak(),
            );
        });

        action
    }

    fn pick_source(&mut self, dialogs: &mut Dialogs) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .pick_file()
        else {
            return;
        };

        match Validator::new().validate_file(&path) {
            Ok(info) => self.source = Some(info),
            Err(err) => dialogs.error("Could not open file", err.to_string()),
        }
    }

    fn run_convert(&mut self, dialogs: &mut Dialogs) {
        let Some(info) = &self.source else {
            dialogs.error("No source file", "Select a PDF to convert first.");
            return;
        };

        let Some(output) = rfd::FileDialog::new()
            .add_filter("Word files", &["docx"])
            .set_file_name("output.docx")
            .save_file()
        else {
            return;
        };

        let result = Validator::new()
            .validate_output(&output)
            .and_then(|_| DocxConverter::new().convert(&info.path, &output));

        match result {
            Ok(outcome) => dialogs.info(
                "Conversion complete",
                format!(
                    "Converted {} page(s) to:\n{}",
                    outcome.pages_converted,
                    outcome.output_path.display()
                ),
            ),
            Err(err) => dialogs.error("Conversion failed", err.to_string()),
        }
    }
}
