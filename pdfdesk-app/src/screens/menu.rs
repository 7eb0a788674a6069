//! Main menu screen.

use egui::{Button, RichText, Vec2};

use crate::screens::ScreenAction;

const MENU_BUTTON_SIZE: Vec2 = Vec2::new(250.0, 60.0);

/// Render the menu and return the chosen operation, if any.
pub fn show(ctx: &egui::Context) -> ScreenAction {
    let mut action = ScreenAction::None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(60.0);

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("pdfdesk").size(32.0).strong());
            ui.add_space(8.0);
            ui.label(RichText::new("Choose an operation:").size(16.0));
            ui.add_space(32.0);

            if ui
                .add(Button::new(RichText::new("Merge PDFs").size(16.0)).min_size(MENU_BUTTON_SIZE))
                .clicked()
            {
                action = ScreenAction::OpenMerge;
            }
            ui.add_space(15.0);

            if ui
                .add(Button::new(RichText::new("Split PDF").size(16.0)).min_size(MENU_BUTTON_SIZE))
                .clicked()
            {
                action = ScreenAction::OpenSplit;
            }
            ui.add_space(15.0);

            if ui
                .add(
                    Button::new(RichText::new("Convert PDF to Word").size(16.0))
                        .min_size(MENU_BUTTON_SIZE),
                )
                .clicked()
            {
                action = ScreenAction::OpenConvert;
            }
        });
    });

    action
}
