use crate::app::CommandLog;
use crate::core::{DrawingSession, SessionFlags, TransformState};
use crate::shared::OverlayOptions;

use super::UiState;

/// Aktueller Bildschirm der Anwendung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Startbildschirm mit Bildauswahl
    Home,
    /// Zeichen-Bildschirm mit Kamera und Overlay
    Drawing,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufende Zeichen-Sitzung (None = Startbildschirm)
    pub session: Option<DrawingSession>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen des Hosts
    pub options: OverlayOptions,
    /// Wird nach jedem zustandsändernden Command erhöht (Polling-Vertrag für Beobachter)
    pub revision: u64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State auf dem Startbildschirm
    pub fn new() -> Self {
        Self {
            session: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: OverlayOptions::default(),
            revision: 0,
            should_exit: false,
        }
    }

    /// Aktueller Bildschirm, abgeleitet aus der Sitzung.
    pub fn screen(&self) -> Screen {
        if self.session.is_some() {
            Screen::Drawing
        } else {
            Screen::Home
        }
    }

    /// Read-only Zugriff auf die laufende Sitzung.
    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    /// Aktueller Transform-Snapshot (None ohne Sitzung).
    pub fn transform(&self) -> Option<TransformState> {
        self.session.as_ref().map(|s| s.transform)
    }

    /// Aktuelle Sitzungs-Flags (None ohne Sitzung).
    pub fn flags(&self) -> Option<SessionFlags> {
        self.session.as_ref().map(|s| s.flags)
    }

    /// Kamera läuft in einer aktiven Sitzung.
    pub fn is_camera_on(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.flags.camera_on)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
