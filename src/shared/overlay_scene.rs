//! Overlay-Szene als expliziter Übergabevertrag zwischen App und Renderer/Geräte-Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui`/`device` sie konsumieren.

use crate::core::{ControlPanel, ImageSource, OverlayLayer, TransformState};

/// Gewünschter Gerätezustand für den Kamera-Kollaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceRequest {
    /// Kamera-Vorschau soll laufen
    pub preview_active: bool,
    /// Torch soll leuchten
    pub torch_on: bool,
    /// Bildschirm soll anbleiben
    pub keep_screen_on: bool,
}

impl DeviceRequest {
    /// Alles aus: Zustand ohne laufende Sitzung.
    pub const RELEASED: Self = Self {
        preview_active: false,
        torch_on: false,
        keep_screen_on: false,
    };
}

/// Read-only Daten für einen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    /// Referenzbild der Sitzung (None = Startbildschirm)
    pub image: Option<ImageSource>,
    /// Render-Parameter des Overlay-Layers
    pub layer: OverlayLayer,
    /// Vollständiger Transform-Snapshot (für Panel-Werte und Beschriftungen)
    pub transform: TransformState,
    /// Aktives Steuer-Panel
    pub active_panel: ControlPanel,
    /// Gewünschter Gerätezustand
    pub device: DeviceRequest,
    /// Revision des App-States, aus dem die Szene gebaut wurde
    pub revision: u64,
}

impl OverlayScene {
    /// Gibt zurück, ob eine Sitzung (und damit ein Overlay) vorhanden ist.
    pub fn has_session(&self) -> bool {
        self.image.is_some()
    }

    /// Kamera pausiert: Sitzung läuft, aber die Vorschau ist aus.
    pub fn camera_paused(&self) -> bool {
        self.has_session() && !self.device.preview_active
    }

    /// Overlay nimmt Gesten entgegen.
    pub fn accepts_gestures(&self) -> bool {
        self.device.preview_active && !self.transform.locked
    }
}
