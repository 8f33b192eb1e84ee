//! Use-Case-Funktionen für den Sitzungs-Lebenszyklus.

use crate::app::AppState;
use crate::core::{DrawingSession, ImageSource};
use anyhow::{Context, Result};

/// Öffnet den Bildauswahl-Dialog.
pub fn request_image_dialog(state: &mut AppState) {
    state.ui.show_image_dialog = true;
}

/// Startet eine neue Sitzung mit dem gewählten Bild.
///
/// Ohne gültigen Bildverweis kann keine Sitzung starten: der Zustand bleibt
/// auf dem Startbildschirm und der Fehler wird an den Aufrufer propagiert.
/// Eine bereits laufende Sitzung wird verworfen, es wird kein Zustand übernommen.
pub fn start(state: &mut AppState, uri: String) -> Result<()> {
    let image = match ImageSource::new(uri).context("Sitzung konnte nicht gestartet werden") {
        Ok(image) => image,
        Err(e) => {
            state.ui.status_message = Some(format!("{:#}", e));
            return Err(e);
        }
    };

    if state.session.is_some() {
        log::info!("Laufende Sitzung wird durch neue ersetzt");
    }

    log::info!("Sitzung gestartet mit Bild: {}", image);
    state.session = Some(DrawingSession::new(image));
    state.ui.status_message = None;
    Ok(())
}

/// Beendet die Sitzung und kehrt zum Startbildschirm zurück.
pub fn end(state: &mut AppState) {
    if let Some(session) = state.session.take() {
        log::info!("Sitzung beendet ({})", session.image.display_name());
    }
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
