//! Modal result dialogs.
//!
//! Every engine error and success message surfaces here; failures are
//! never fatal, the user dismisses the dialog and the screen stays
//! usable.

use egui::{Align2, Color32, RichText, Vec2};

enum DialogKind {
    Info,
    Error,
}

struct Dialog {
    kind: DialogKind,
    title: String,
    message: String,
}

/// Holds at most one pending dialog.
#[derive(Default)]
pub struct Dialogs {
    current: Option<Dialog>,
}

impl Dialogs {
    /// Queue a success/info dialog.
    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.current = Some(Dialog {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Queue an error dialog.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.current = Some(Dialog {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Render the pending dialog, if any.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.current else {
            return;
        };

        let mut dismissed = false;

        egui::Window::new(&dialog.title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match dialog.kind {
                        DialogKind::Info => {
                            ui.label(RichText::new("✔").color(Color32::from_rgb(60, 160, 60)));
                        }
                        DialogKind::Error => {
                            ui.label(RichText::new("✖").color(Color32::from_rgb(200, 60, 60)));
                        }
                    }
                    ui.label(&dialog.message);
                });

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.current = None;
        }
    }
}
