use crate::core::{ControlPanel, GestureDelta};

/// Vorbedingung eines Commands. Wird zentral im Controller geprüft,
/// bevor an die Handler dispatcht wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGuard {
    /// Immer ausführbar
    Always,
    /// Benötigt eine laufende Sitzung
    Session,
    /// Benötigt eine laufende Sitzung mit eingeschalteter Kamera
    CameraOn,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Sitzung ===
    /// Bildauswahl-Dialog anfordern
    RequestImageDialog,
    /// Sitzung mit gewähltem Bild starten
    StartSession { uri: String },
    /// Sitzung beenden, zurück zum Startbildschirm
    EndSession,
    /// Anwendung beenden
    RequestExit,

    // === Overlay-Transform ===
    /// Deckkraft direkt setzen (ignoriert Sperre)
    SetOpacity { value: f32 },
    /// Skalierung direkt setzen (ignoriert Sperre)
    SetScale { value: f32 },
    /// Horizontale Spiegelung umschalten
    ToggleFlipHorizontal,
    /// Vertikale Spiegelung umschalten
    ToggleFlipVertical,
    /// Sperre umschalten
    ToggleLock,
    /// Transform auf Standardwerte
    ResetImage,
    /// Gesten-Frame anwenden (ignoriert im gesperrten Zustand)
    ApplyGesture { delta: GestureDelta },

    // === Kamera, Licht, Panels ===
    /// Kamera umschalten
    ToggleCamera,
    /// Taschenlampe umschalten
    ToggleFlashlight,
    /// Taschenlampe ausschalten
    SetFlashlightOff,
    /// Panel öffnen/schließen
    TogglePanel { panel: ControlPanel },
    /// Panel schließen
    ClosePanel,
    /// Bildschirm-anlassen umschalten
    ToggleKeepScreenOn,
}

impl AppCommand {
    /// Vorbedingung, unter der der Command wirkt. Sonst: No-Op.
    pub fn guard(&self) -> CommandGuard {
        match self {
            AppCommand::RequestImageDialog
            | AppCommand::StartSession { .. }
            | AppCommand::EndSession
            | AppCommand::RequestExit => CommandGuard::Always,

            AppCommand::SetOpacity { .. }
            | AppCommand::SetScale { .. }
            | AppCommand::ApplyGesture { .. }
            | AppCommand::ToggleCamera
            | AppCommand::SetFlashlightOff
            | AppCommand::ClosePanel => CommandGuard::Session,

            AppCommand::ToggleFlipHorizontal
            | AppCommand::ToggleFlipVertical
            | AppCommand::ToggleLock
            | AppCommand::ResetImage
            | AppCommand::ToggleFlashlight
            | AppCommand::TogglePanel { .. }
            | AppCommand::ToggleKeepScreenOn => CommandGuard::CameraOn,
        }
    }
}
