/// UI-bezogener Anwendungszustand (Dialog-Anforderungen, Statusmeldungen)
#[derive(Debug, Default)]
pub struct UiState {
    /// Bildauswahl-Dialog soll im nächsten Frame geöffnet werden
    pub show_image_dialog: bool,
    /// Letzte Statusmeldung (z.B. fehlgeschlagener Sitzungsstart)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_image_dialog: false,
            status_message: None,
        }
    }
}
