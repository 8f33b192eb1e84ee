use crate::core::{ControlPanel, GestureDelta};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Bildauswahl öffnen (zeigt Dateidialog)
    SelectImageRequested,
    /// Bild wurde im Dialog ausgewählt (URI oder Pfad)
    ImageSelected { uri: String },
    /// Zurück zum Startbildschirm (beendet die Sitzung)
    BackRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Host geht in den Hintergrund (Torch freigeben)
    HostSuspended,

    /// Deckkraft-Slider bewegt
    OpacitySliderChanged { value: f32 },
    /// Größen-Slider bewegt
    ScaleSliderChanged { value: f32 },
    /// Horizontale Spiegelung umschalten
    ToggleFlipHorizontalRequested,
    /// Vertikale Spiegelung umschalten
    ToggleFlipVerticalRequested,
    /// Overlay sperren/entsperren
    ToggleLockRequested,
    /// Overlay auf Standardwerte zurücksetzen
    ResetImageRequested,
    /// Ein Frame einer Pan/Zoom/Rotate-Geste
    TransformGesture { delta: GestureDelta },

    /// Kamera pausieren/fortsetzen
    ToggleCameraRequested,
    /// Taschenlampe umschalten
    ToggleFlashlightRequested,
    /// Steuer-Panel öffnen/schließen
    TogglePanelRequested { panel: ControlPanel },
    /// Offenes Panel schließen (z.B. Tap außerhalb)
    ClosePanelRequested,
    /// Bildschirm-anlassen umschalten
    ToggleKeepScreenOnRequested,
}
