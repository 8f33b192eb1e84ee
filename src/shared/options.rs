//! Zentrale Konfiguration für AR-Drawing.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Host-Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Die Grenzen des
//! Transform-Zustands selbst sind fest und nicht konfigurierbar.

use crate::core::{SCALE_MAX, SCALE_MIN, SCALE_SLIDER_MAX};
use serde::{Deserialize, Serialize};

// ── Overlay ─────────────────────────────────────────────────────────

/// Anteil der Fensterbreite, den das untransformierte Overlay einnimmt.
pub const OVERLAY_WIDTH_FRACTION: f32 = 0.7;
/// Hintergrundfarbe bei pausierter Kamera (RGBA: #121212).
pub const BACKGROUND_COLOR: [f32; 4] = [0.071, 0.071, 0.071, 1.0];

// ── Maus-Fallback für Gesten ────────────────────────────────────────

/// Zoom-Schritt pro Mausrad-Raster (Ctrl + Scroll).
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Rotation in Grad pro Scroll-Punkt (Shift + Scroll).
pub const SCROLL_ROTATION_DEG_PER_POINT: f32 = 0.25;

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße (Hochformat wie ein Telefon).
pub const WINDOW_SIZE: [f32; 2] = [420.0, 860.0];

/// Alle zur Laufzeit änderbaren Host-Optionen.
/// Wird als `ar_drawing.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayOptions {
    /// Obergrenze des Größen-Sliders (Gesten dürfen bis zur festen Maximalskalierung)
    pub scale_slider_max: f32,
    /// Anteil der Fensterbreite für das Overlay bei Skalierung 1.0
    pub overlay_width_fraction: f32,
    /// Hintergrundfarbe bei pausierter Kamera (RGBA)
    pub background_color: [f32; 4],
    /// Zoom-Schritt bei Ctrl + Mausrad
    pub scroll_zoom_step: f32,
    /// Rotation in Grad pro Scroll-Punkt bei Shift + Mausrad
    pub scroll_rotation_deg_per_point: f32,
    /// Fenstergröße beim Start [Breite, Höhe]
    pub window_size: [f32; 2],
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            scale_slider_max: SCALE_SLIDER_MAX,
            overlay_width_fraction: OVERLAY_WIDTH_FRACTION,
            background_color: BACKGROUND_COLOR,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            scroll_rotation_deg_per_point: SCROLL_ROTATION_DEG_PER_POINT,
            window_size: WINDOW_SIZE,
        }
    }
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_drawing"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_drawing.toml")
    }

    /// Bringt handeditierte Werte in gültige Bereiche.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive_or = |v: f32, fallback: f32| {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                fallback
            }
        };
        Self {
            scale_slider_max: if self.scale_slider_max.is_finite() {
                self.scale_slider_max.clamp(SCALE_MIN, SCALE_MAX)
            } else {
                defaults.scale_slider_max
            },
            overlay_width_fraction: positive_or(
                self.overlay_width_fraction,
                defaults.overlay_width_fraction,
            )
            .min(1.0),
            scroll_zoom_step: positive_or(self.scroll_zoom_step, defaults.scroll_zoom_step),
            scroll_rotation_deg_per_point: if self.scroll_rotation_deg_per_point.is_finite() {
                self.scroll_rotation_deg_per_point
            } else {
                defaults.scroll_rotation_deg_per_point
            },
            window_size: [
                positive_or(self.window_size[0], defaults.window_size[0]),
                positive_or(self.window_size[1], defaults.window_size[1]),
            ],
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: OverlayOptions =
            toml::from_str("scale_slider_max = 4.0\n").expect("TOML sollte parsen");
        assert_relative_eq!(opts.scale_slider_max, 4.0);
        assert_relative_eq!(opts.overlay_width_fraction, OVERLAY_WIDTH_FRACTION);
        assert_eq!(opts.window_size, WINDOW_SIZE);
    }

    #[test]
    fn sanitized_clamps_slider_to_scale_bounds() {
        let opts = OverlayOptions {
            scale_slider_max: 50.0,
            overlay_width_fraction: -1.0,
            scroll_zoom_step: 0.0,
            ..OverlayOptions::default()
        }
        .sanitized();
        assert_relative_eq!(opts.scale_slider_max, SCALE_MAX);
        assert_relative_eq!(opts.overlay_width_fraction, OVERLAY_WIDTH_FRACTION);
        assert_relative_eq!(opts.scroll_zoom_step, SCROLL_ZOOM_STEP);
    }

    #[test]
    fn save_and_load_preserve_values() {
        let path = std::env::temp_dir().join(format!(
            "ar_drawing_options_test_{}.toml",
            std::process::id()
        ));
        let opts = OverlayOptions {
            scale_slider_max: 3.5,
            background_color: [0.2, 0.3, 0.4, 1.0],
            ..OverlayOptions::default()
        };

        opts.save_to_file(&path).expect("Speichern sollte klappen");
        let loaded = OverlayOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("ar_drawing_gibt_es_nicht.toml");
        assert_eq!(OverlayOptions::load_from_file(&path), OverlayOptions::default());
    }
}
