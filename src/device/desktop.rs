use super::DeviceBackend;

/// Desktop-Backend ohne Kamera-Hardware: protokolliert die Wünsche nur.
#[derive(Debug, Default)]
pub struct DesktopDevice {
    preview_active: bool,
    keep_screen_on: bool,
}

impl DesktopDevice {
    /// Erstellt ein Desktop-Backend im freigegebenen Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob die (simulierte) Vorschau läuft.
    pub fn preview_active(&self) -> bool {
        self.preview_active
    }

    /// Ob Bildschirm-anlassen angefordert ist.
    pub fn keep_screen_on(&self) -> bool {
        self.keep_screen_on
    }
}

impl DeviceBackend for DesktopDevice {
    fn set_preview_active(&mut self, active: bool) {
        self.preview_active = active;
        log::info!(
            "Kamera-Vorschau {} (Desktop: keine Kamera angebunden)",
            if active { "an" } else { "aus" }
        );
    }

    fn has_flash_unit(&self) -> bool {
        false
    }

    fn enable_torch(&mut self, on: bool) -> anyhow::Result<()> {
        anyhow::bail!("Keine Torch auf dem Desktop (angefordert: {on})")
    }

    fn set_keep_screen_on(&mut self, on: bool) {
        self.keep_screen_on = on;
        log::info!("Bildschirm-anlassen: {}", if on { "an" } else { "aus" });
    }
}
