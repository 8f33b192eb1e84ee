//! Geräte-Schnittstelle zum Kamera-Kollaborator (Vorschau, Torch, Bildschirm-anlassen).
//!
//! Der Core kennt nur gewünschte Zustände (`DeviceRequest`). Ein Backend setzt
//! sie auf der jeweiligen Plattform um; `DeviceSync` gleicht beide ab.

mod desktop;
mod sync;

pub use desktop::DesktopDevice;
pub use sync::DeviceSync;

/// Plattform-Backend für Kamera-Hardware und Display.
pub trait DeviceBackend {
    /// Startet oder pausiert die Live-Vorschau.
    fn set_preview_active(&mut self, active: bool);

    /// Ob die Kamera eine Blitz-/Torch-Einheit besitzt.
    fn has_flash_unit(&self) -> bool;

    /// Schaltet die Torch. Fehler werden vom Aufrufer geloggt und verworfen.
    fn enable_torch(&mut self, on: bool) -> anyhow::Result<()>;

    /// Hält den Bildschirm an oder gibt ihn frei.
    fn set_keep_screen_on(&mut self, on: bool);
}
