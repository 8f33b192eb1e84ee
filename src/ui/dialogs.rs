//! Datei-Dialoge (rfd).

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet einen ausstehenden Bildauswahl-Dialog und gibt AppIntents zurück.
pub fn handle_image_dialog(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Bilder", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
        {
            events.push(AppIntent::ImageSelected {
                uri: path_to_ui_string(&path),
            });
        }
    }

    events
}
