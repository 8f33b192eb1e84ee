//! Gesten-Erfassung: Multi-Touch (Pinch/Rotate/Pan) und Maus-Fallback → `GestureDelta`.

use crate::core::GestureDelta;
use crate::shared::OverlayOptions;

/// Rohdaten eines Eingabe-Frames in Bildschirmkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGesture {
    /// Verschiebung in Bildschirm-Pixeln
    pub pan: glam::Vec2,
    /// Relativer Zoom-Faktor
    pub zoom: f32,
    /// Rotation in Radiant
    pub rotation_rad: f32,
}

impl ScreenGesture {
    /// Ob der Frame irgendeine Wirkung hätte.
    pub fn is_noop(&self) -> bool {
        self.pan == glam::Vec2::ZERO && self.zoom == 1.0 && self.rotation_rad == 0.0
    }

    /// Übersetzt in ein `GestureDelta`.
    ///
    /// Der Pan bleibt im Bildschirmraum; die Gewichtung mit der Skalierung
    /// übernimmt der Core.
    pub fn to_delta(self) -> GestureDelta {
        GestureDelta {
            pan: self.pan,
            zoom: self.zoom,
            rotation_deg: self.rotation_rad.to_degrees(),
        }
    }
}

/// Liest den aktuellen Eingabe-Frame über dem Overlay-Bereich.
///
/// Multi-Touch hat Vorrang. Ohne Touch: Primär-Drag = Pan,
/// Ctrl + Mausrad / Trackpad-Pinch = Zoom, Mausrad = Zoom in festen Schritten,
/// Shift + Mausrad = Rotation.
pub fn collect_screen_gesture(
    ui: &egui::Ui,
    response: &egui::Response,
    options: &OverlayOptions,
) -> Option<ScreenGesture> {
    if let Some(touch) = ui.input(|i| i.multi_touch()) {
        let gesture = ScreenGesture {
            pan: glam::Vec2::new(touch.translation_delta.x, touch.translation_delta.y),
            zoom: touch.zoom_delta,
            rotation_rad: touch.rotation_delta,
        };
        return (!gesture.is_noop()).then_some(gesture);
    }

    if !response.hovered() && !response.dragged() {
        return None;
    }

    let mut gesture = ScreenGesture {
        pan: glam::Vec2::ZERO,
        zoom: 1.0,
        rotation_rad: 0.0,
    };

    if response.dragged_by(egui::PointerButton::Primary) {
        let d = response.drag_delta();
        gesture.pan = glam::Vec2::new(d.x, d.y);
    }

    let (zoom_delta, shift, scroll, raw_scroll) = ui.input(|i| {
        (
            i.zoom_delta(),
            i.modifiers.shift,
            i.smooth_scroll_delta,
            i.raw_scroll_delta,
        )
    });

    if zoom_delta != 1.0 {
        gesture.zoom = zoom_delta;
    } else if !shift && raw_scroll.y != 0.0 {
        gesture.zoom = wheel_zoom(raw_scroll.y, options.scroll_zoom_step);
    }

    if shift {
        // egui legt Shift + Mausrad je nach Plattform auf die x-Achse
        let points = scroll.x + scroll.y;
        gesture.rotation_rad = (points * options.scroll_rotation_deg_per_point).to_radians();
    }

    (!gesture.is_noop()).then_some(gesture)
}

/// Zoom-Faktor für einen Mausrad-Schritt: hoch = vergrößern.
fn wheel_zoom(scroll_y: f32, step: f32) -> f32 {
    if scroll_y > 0.0 {
        step
    } else {
        1.0 / step
    }
}
