//! Sitzungszustand einer Zeichen-Sitzung: Overlay-Transform plus Geräte- und Panel-Flags.

use super::{ImageSource, TransformState};

/// Aktives Steuer-Panel unter der Button-Leiste (höchstens eines gleichzeitig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPanel {
    /// Kein Panel sichtbar
    #[default]
    None,
    /// Deckkraft-Slider
    Opacity,
    /// Größen-Slider
    Scale,
    /// Spiegel-Schalter (horizontal/vertikal)
    Flip,
}

impl ControlPanel {
    /// Schaltet auf `which` um, oder schließt, wenn `which` bereits offen ist.
    pub fn toggled(self, which: ControlPanel) -> ControlPanel {
        if self == which {
            ControlPanel::None
        } else {
            which
        }
    }
}

/// Geschwister-Flags neben dem Transform-Zustand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionFlags {
    /// Kamera-Vorschau aktiv
    pub camera_on: bool,
    /// Taschenlampe (Torch) gewünscht
    pub flashlight_on: bool,
    /// Aktuell geöffnetes Panel
    pub active_panel: ControlPanel,
    /// Bildschirm soll anbleiben
    pub keep_screen_on: bool,
}

impl Default for SessionFlags {
    fn default() -> Self {
        Self {
            camera_on: true,
            flashlight_on: false,
            active_panel: ControlPanel::None,
            keep_screen_on: false,
        }
    }
}

/// Eine laufende Zeichen-Sitzung. Wird beim Start mit Standardwerten erzeugt
/// und beim Beenden verworfen.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    /// Gewähltes Referenzbild
    pub image: ImageSource,
    /// Aktueller Transform-Snapshot des Overlays
    pub transform: TransformState,
    /// Kamera-, Licht- und Panel-Flags
    pub flags: SessionFlags,
}

impl DrawingSession {
    /// Startet eine Sitzung mit Standard-Transform und Standard-Flags.
    pub fn new(image: ImageSource) -> Self {
        Self {
            image,
            transform: TransformState::default(),
            flags: SessionFlags::default(),
        }
    }

    /// Kamera-Vorschau soll laufen.
    pub fn preview_active(&self) -> bool {
        self.flags.camera_on
    }

    /// Torch soll leuchten (nur bei laufender Vorschau).
    pub fn torch_on(&self) -> bool {
        self.flags.camera_on && self.flags.flashlight_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_toggle_opens_switches_and_closes() {
        let panel = ControlPanel::None.toggled(ControlPanel::Opacity);
        assert_eq!(panel, ControlPanel::Opacity);

        let panel = panel.toggled(ControlPanel::Flip);
        assert_eq!(panel, ControlPanel::Flip);

        let panel = panel.toggled(ControlPanel::Flip);
        assert_eq!(panel, ControlPanel::None);
    }

    #[test]
    fn new_session_starts_with_camera_on_and_defaults() {
        let session = DrawingSession::new(ImageSource::new("bild.png").expect("gültig"));
        assert!(session.flags.camera_on);
        assert!(!session.flags.flashlight_on);
        assert!(!session.flags.keep_screen_on);
        assert_eq!(session.flags.active_panel, ControlPanel::None);
        assert_eq!(session.transform, TransformState::default());
        assert!(session.preview_active());
        assert!(!session.torch_on());
    }
}
