//! Operation screens.
//!
//! One module per screen; each exposes a state struct with a `show`
//! method that renders the screen and reports navigation back to the
//! main loop.

pub mod convert;
pub mod menu;
pub mod merge;
pub mod split;

/// Navigation request raised by a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    None,
    /// Open the merge screen.
    OpenMerge,
    /// Open the split screen.
    OpenSplit,
    /// Open the convert screen.
    OpenConvert,
    /// Return to the main menu, discarding screen state.
    BackToMenu,
}

/// Shared screen header: back button plus title.
///
/// Returns true when the back button was clicked.
pub fn header(ui: &mut egui::Ui, title: &str) -> bool {
    let mut back = false;

    ui.horizontal(|ui| {
        if ui.button("← Back to menu").clicked() {
            back = true;
        }
    });

    ui.heading(title);
    ui.add_space(4.0);

    back
}
