//! Application shell and screen navigation.

use pdfdesk::thumbnail::ThumbnailRenderer;
use std::path::PathBuf;

use crate::dialogs::Dialogs;
use crate::screens::convert::ConvertScreen;
use crate::screens::merge::MergeScreen;
use crate::screens::split::SplitScreen;
use crate::screens::{ScreenAction, menu};

/// The active screen, holding that screen's state.
///
/// Switching screens drops the old state: documents, thumbnails, and
/// field contents only live as long as the screen they belong to.
enum Screen {
    Menu,
    Merge(MergeScreen),
    Split(SplitScreen),
    Convert(ConvertScreen),
}

/// Top-level application state.
pub struct PdfDeskApp {
    screen: Screen,
    dialogs: Dialogs,
    renderer: Option<ThumbnailRenderer>,
}

impl PdfDeskApp {
    /// Build the app, binding pdfium once for the whole session.
    pub fn new(cc: &eframe::CreationContext<'_>, preload: Vec<PathBuf>) -> Self {
        let renderer = match ThumbnailRenderer::new() {
            Ok(renderer) => Some(renderer),
            Err(err) => {
                log::warn!("thumbnail previews disabled: {err}");
                None
            }
        };

        let mut dialogs = Dialogs::default();

        // "open with pdfdesk" lands straight on the merge screen.
        let screen = if preload.is_empty() {
            Screen::Menu
        } else {
            Screen::Merge(MergeScreen::with_files(
                &cc.egui_ctx,
                renderer.as_ref(),
                preload,
                &mut dialogs,
            ))
        };

        Self {
            screen,
            dialogs,
            renderer,
        }
    }
}

impl eframe::App for PdfDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = match &mut self.screen {
            Screen::Menu => menu::show(ctx),
            Screen::Merge(screen) => screen.show(ctx, self.renderer.as_ref(), &mut self.dialogs),
            Screen::Split(screen) => screen.show(ctx, self.renderer.as_ref(), &mut self.dialogs),
            Screen::Convert(screen) => screen.show(ctx, &mut self.dialogs),
        };

        match action {
            ScreenAction::None => {}
            ScreenAction::OpenMerge => self.screen = Screen::Merge(MergeScreen::default()),
            ScreenAction::OpenSplit => self.screen = Screen::Split(SplitScreen::default()),
            ScreenAction::OpenConvert => self.screen = Screen::Convert(ConvertScreen::default()),
            ScreenAction::BackToMenu => self.screen = Screen::Menu,
        }

        self.dialogs.show(ctx);
    }
}
