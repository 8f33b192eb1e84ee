//! Handler für Bildauswahl, Sitzungs-Start/-Ende und Beenden.

use crate::app::AppState;
use crate::app::use_cases;

/// Fordert den Bildauswahl-Dialog an.
pub fn request_image_dialog(state: &mut AppState) {
    use_cases::session::request_image_dialog(state);
}

/// Startet eine Sitzung und propagiert Fehler an den Aufrufer.
pub fn start(state: &mut AppState, uri: String) -> anyhow::Result<()> {
    use_cases::session::start(state, uri)
}

/// Beendet die laufende Sitzung.
pub fn end(state: &mut AppState) {
    use_cases::session::end(state);
}

/// Signalisiert das Beenden der Anwendung.
pub fn request_exit(state: &mut AppState) {
    use_cases::session::request_exit(state);
}
