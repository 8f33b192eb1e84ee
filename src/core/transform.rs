//! Transform-Zustand des Overlay-Bilds.
//!
//! Deckkraft, Skalierung, Rotation, Offset, Spiegelung und Sperre als Wert-Typ.
//!
//! `TransformState` ist ein reiner Wert-Typ. Jede Transition nimmt `self` und
//! liefert einen neuen, gültigen Zustand zurück. Keine Transition kann fehlschlagen.

use glam::{Affine2, Vec2};

/// Minimale Deckkraft des Overlays.
pub const OPACITY_MIN: f32 = 0.1;
/// Maximale Deckkraft des Overlays.
pub const OPACITY_MAX: f32 = 1.0;
/// Standard-Deckkraft zu Sitzungsbeginn.
pub const OPACITY_DEFAULT: f32 = 0.5;
/// Minimale Skalierung (Slider und Geste).
pub const SCALE_MIN: f32 = 0.1;
/// Maximale Skalierung über Gesten.
pub const SCALE_MAX: f32 = 10.0;
/// Obergrenze des Größen-Sliders (Gesten dürfen darüber hinaus bis `SCALE_MAX`).
pub const SCALE_SLIDER_MAX: f32 = 5.0;

/// Eine Gesten-Aktualisierung (ein Frame eines Pan/Zoom/Rotate-Streams).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDelta {
    /// Verschiebung in Layer-Koordinaten (wird mit der aktuellen Skalierung multipliziert)
    pub pan: Vec2,
    /// Relativer Zoom-Faktor dieses Frames (1.0 = unverändert)
    pub zoom: f32,
    /// Rotations-Delta in Grad
    pub rotation_deg: f32,
}

impl GestureDelta {
    /// Neutrales Delta ohne Wirkung.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        zoom: 1.0,
        rotation_deg: 0.0,
    };

    /// Erstellt ein Delta aus Einzelkomponenten.
    pub fn new(pan_x: f32, pan_y: f32, zoom: f32, rotation_deg: f32) -> Self {
        Self {
            pan: Vec2::new(pan_x, pan_y),
            zoom,
            rotation_deg,
        }
    }

    /// Ersetzt unbrauchbare Komponenten durch neutrale Werte.
    ///
    /// Nicht-endliche oder nicht-positive Zoom-Faktoren werden zu 1.0,
    /// nicht-endliche Pan-/Rotations-Komponenten zu 0.
    pub fn sanitized(self) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            pan: Vec2::new(finite_or_zero(self.pan.x), finite_or_zero(self.pan.y)),
            zoom: if self.zoom.is_finite() && self.zoom > 0.0 {
                self.zoom
            } else {
                1.0
            },
            rotation_deg: finite_or_zero(self.rotation_deg),
        }
    }
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Snapshot aller visuellen Parameter des Overlay-Bilds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Deckkraft, begrenzt auf [`OPACITY_MIN`, `OPACITY_MAX`]
    pub opacity: f32,
    /// Skalierung, begrenzt auf [`SCALE_MIN`, `SCALE_MAX`]
    pub scale: f32,
    /// Rotation in Grad (akkumuliert, ohne Normalisierung)
    pub rotation: f32,
    /// Verschiebung in Bildschirm-Pixeln
    pub offset: Vec2,
    /// Horizontal gespiegelt
    pub flipped_horizontal: bool,
    /// Vertikal gespiegelt
    pub flipped_vertical: bool,
    /// Gesperrt: Gesten werden ignoriert
    pub locked: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            opacity: OPACITY_DEFAULT,
            scale: 1.0,
            rotation: 0.0,
            offset: Vec2::ZERO,
            flipped_horizontal: false,
            flipped_vertical: false,
            locked: false,
        }
    }
}

/// Endliches Ergebnis oder der bisherige Wert (Überlauf nach ±∞).
fn finite_or_keep(value: f32, current: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        current
    }
}

/// Begrenzt `value` auf `[min, max]`; NaN behält den bisherigen Wert.
fn clamp_or_keep(value: f32, current: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        current
    } else {
        value.clamp(min, max)
    }
}

impl TransformState {
    /// Setzt die Deckkraft (ignoriert die Sperre).
    pub fn with_opacity(self, value: f32) -> Self {
        Self {
            opacity: clamp_or_keep(value, self.opacity, OPACITY_MIN, OPACITY_MAX),
            ..self
        }
    }

    /// Setzt die Skalierung (ignoriert die Sperre).
    pub fn with_scale(self, value: f32) -> Self {
        Self {
            scale: clamp_or_keep(value, self.scale, SCALE_MIN, SCALE_MAX),
            ..self
        }
    }

    /// Kehrt die horizontale Spiegelung um.
    pub fn toggled_flip_horizontal(self) -> Self {
        Self {
            flipped_horizontal: !self.flipped_horizontal,
            ..self
        }
    }

    /// Kehrt die vertikale Spiegelung um.
    pub fn toggled_flip_vertical(self) -> Self {
        Self {
            flipped_vertical: !self.flipped_vertical,
            ..self
        }
    }

    /// Kehrt die Sperre um.
    pub fn toggled_lock(self) -> Self {
        Self {
            locked: !self.locked,
            ..self
        }
    }

    /// Wendet ein Gesten-Delta an.
    ///
    /// Der Offset wächst um `pan * scale` mit der Skalierung *vor* dem Update,
    /// damit die Verschiebegeschwindigkeit dem Zoom folgt. Der Pan-Vektor wird
    /// im Bildschirmraum angewendet, unabhängig von der aktuellen Rotation.
    /// Im gesperrten Zustand bleibt alles unverändert. Eine Komponente, die
    /// über den f32-Bereich hinausliefe, behält ihren bisherigen Wert.
    pub fn with_gesture(self, delta: GestureDelta) -> Self {
        if self.locked {
            return self;
        }
        let delta = delta.sanitized();
        let scale_before = self.scale;
        let offset = self.offset + delta.pan * scale_before;
        Self {
            scale: (scale_before * delta.zoom).clamp(SCALE_MIN, SCALE_MAX),
            rotation: finite_or_keep(self.rotation + delta.rotation_deg, self.rotation),
            offset: Vec2::new(
                finite_or_keep(offset.x, self.offset.x),
                finite_or_keep(offset.y, self.offset.y),
            ),
            ..self
        }
    }

    /// Deckkraft in ganzen Prozent (für Panel-Beschriftung).
    pub fn opacity_percent(&self) -> i32 {
        (self.opacity * 100.0) as i32
    }

    /// Skalierung in ganzen Prozent (für Panel-Beschriftung).
    pub fn scale_percent(&self) -> i32 {
        (self.scale * 100.0) as i32
    }

    /// Leitet die Render-Parameter für den Bild-Renderer ab.
    pub fn layer(&self) -> OverlayLayer {
        let sign = |flipped: bool| if flipped { -1.0_f32 } else { 1.0 };
        OverlayLayer {
            scale_x: self.scale * sign(self.flipped_horizontal),
            scale_y: self.scale * sign(self.flipped_vertical),
            rotation_deg: self.rotation,
            translation: self.offset,
            alpha: self.opacity,
        }
    }
}

/// Render-Parameter des Overlay-Layers (Skalierung inkl. Spiegel-Vorzeichen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayer {
    /// Horizontale Skalierung (negativ = gespiegelt)
    pub scale_x: f32,
    /// Vertikale Skalierung (negativ = gespiegelt)
    pub scale_y: f32,
    /// Rotation um die Layer-Mitte in Grad
    pub rotation_deg: f32,
    /// Translation in Bildschirm-Pixeln
    pub translation: Vec2,
    /// Alpha (0.0 = transparent, 1.0 = opak)
    pub alpha: f32,
}

impl OverlayLayer {
    /// Transformation von Layer-lokalen Punkten (Ursprung = Bildmitte) in Bildschirmkoordinaten.
    ///
    /// `anchor` ist die Bildschirmposition der untransformierten Bildmitte.
    pub fn affine(&self, anchor: Vec2) -> Affine2 {
        Affine2::from_scale_angle_translation(
            Vec2::new(self.scale_x, self.scale_y),
            self.rotation_deg.to_radians(),
            anchor + self.translation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_matches_session_start_values() {
        let state = TransformState::default();
        assert_relative_eq!(state.opacity, 0.5);
        assert_relative_eq!(state.scale, 1.0);
        assert_relative_eq!(state.rotation, 0.0);
        assert_eq!(state.offset, Vec2::ZERO);
        assert!(!state.flipped_horizontal);
        assert!(!state.flipped_vertical);
        assert!(!state.locked);
    }

    #[test]
    fn opacity_is_clamped() {
        let state = TransformState::default();
        for v in [-5.0, 0.0, 0.05, 0.1, 0.42, 1.0, 1.5, 1e9, f32::INFINITY, f32::NEG_INFINITY] {
            let next = state.with_opacity(v);
            assert!((OPACITY_MIN..=OPACITY_MAX).contains(&next.opacity));
            assert_relative_eq!(next.opacity, v.clamp(OPACITY_MIN, OPACITY_MAX));
        }
    }

    #[test]
    fn opacity_nan_keeps_current_value() {
        let state = TransformState::default().with_opacity(0.8);
        assert_relative_eq!(state.with_opacity(f32::NAN).opacity, 0.8);
    }

    #[test]
    fn scale_is_clamped_to_gesture_bounds() {
        let state = TransformState::default();
        assert_relative_eq!(state.with_scale(0.0).scale, SCALE_MIN);
        assert_relative_eq!(state.with_scale(7.5).scale, 7.5);
        assert_relative_eq!(state.with_scale(42.0).scale, SCALE_MAX);
        assert_relative_eq!(state.with_scale(f32::NAN).scale, 1.0);
    }

    #[test]
    fn opacity_and_scale_ignore_lock() {
        let locked = TransformState::default().toggled_lock();
        assert_relative_eq!(locked.with_opacity(0.9).opacity, 0.9);
        assert_relative_eq!(locked.with_scale(3.0).scale, 3.0);
    }

    #[test]
    fn flip_toggles_are_involutions() {
        let state = TransformState::default();
        assert_eq!(state.toggled_flip_horizontal().toggled_flip_horizontal(), state);
        assert_eq!(state.toggled_flip_vertical().toggled_flip_vertical(), state);
        assert!(state.toggled_flip_horizontal().flipped_horizontal);
        assert!(!state.toggled_flip_horizontal().flipped_vertical);
    }

    #[test]
    fn gesture_uses_scale_before_update_for_pan() {
        let state = TransformState::default().with_gesture(GestureDelta::new(10.0, 0.0, 2.0, 0.0));
        assert_relative_eq!(state.scale, 2.0);
        assert_relative_eq!(state.offset.x, 10.0);
        assert_relative_eq!(state.offset.y, 0.0);
        assert_relative_eq!(state.rotation, 0.0);

        let state = state.with_gesture(GestureDelta::new(10.0, 0.0, 1.0, 0.0));
        assert_relative_eq!(state.offset.x, 30.0);
        assert_relative_eq!(state.scale, 2.0);
    }

    #[test]
    fn gesture_rotation_accumulates_without_wraparound() {
        let mut state = TransformState::default();
        for _ in 0..5 {
            state = state.with_gesture(GestureDelta::new(0.0, 0.0, 1.0, 90.0));
        }
        assert_relative_eq!(state.rotation, 450.0);
    }

    #[test]
    fn gesture_scale_is_clamped() {
        let mut state = TransformState::default();
        for _ in 0..20 {
            state = state.with_gesture(GestureDelta::new(0.0, 0.0, 3.0, 0.0));
        }
        assert_relative_eq!(state.scale, SCALE_MAX);

        for _ in 0..20 {
            state = state.with_gesture(GestureDelta::new(0.0, 0.0, 0.2, 0.0));
        }
        assert_relative_eq!(state.scale, SCALE_MIN);
    }

    #[test]
    fn pan_ignores_rotation() {
        let state = TransformState {
            rotation: 90.0,
            ..TransformState::default()
        };
        let next = state.with_gesture(GestureDelta::new(5.0, 0.0, 1.0, 0.0));
        assert_relative_eq!(next.offset.x, 5.0);
        assert_relative_eq!(next.offset.y, 0.0);
    }

    #[test]
    fn locked_state_ignores_gestures() {
        let state = TransformState::default()
            .with_gesture(GestureDelta::new(3.0, 4.0, 1.5, 12.0))
            .toggled_lock();
        let next = state.with_gesture(GestureDelta::new(100.0, -100.0, 4.0, 45.0));
        assert_eq!(next, state);
    }

    #[test]
    fn degenerate_gesture_components_are_neutralised() {
        let state = TransformState::default();
        let next = state.with_gesture(GestureDelta::new(f32::NAN, 2.0, 0.0, f32::INFINITY));
        assert_relative_eq!(next.scale, 1.0);
        assert_relative_eq!(next.offset.x, 0.0);
        assert_relative_eq!(next.offset.y, 2.0);
        assert_relative_eq!(next.rotation, 0.0);

        let negative_zoom = state.with_gesture(GestureDelta::new(0.0, 0.0, -2.0, 0.0));
        assert_relative_eq!(negative_zoom.scale, 1.0);
    }

    #[test]
    fn overflowing_pan_keeps_offset_finite() {
        let start = TransformState::default().with_scale(SCALE_MAX);

        let pushed = start.with_gesture(GestureDelta::new(3.0e38, 0.0, 1.0, 0.0));
        let pulled = pushed.with_gesture(GestureDelta::new(-3.0e38, 0.0, 1.0, 0.0));

        assert!(pushed.offset.is_finite());
        assert!(pulled.offset.is_finite());
        assert_eq!(pushed.offset, start.offset);
        // Ein endlicher Gegenzug bewegt wieder
        let moved = pulled.with_gesture(GestureDelta::new(-1.0, 0.0, 1.0, 0.0));
        assert_relative_eq!(moved.offset.x, -SCALE_MAX);
    }

    #[test]
    fn overflowing_rotation_keeps_previous_angle() {
        let start = TransformState {
            rotation: f32::MAX,
            ..TransformState::default()
        };

        let rotated = start.with_gesture(GestureDelta::new(0.0, 0.0, 1.0, f32::MAX));

        assert_eq!(rotated.rotation, f32::MAX);
    }

    #[test]
    fn percent_labels_truncate() {
        let state = TransformState::default().with_opacity(0.555).with_scale(2.349);
        assert_eq!(state.opacity_percent(), 55);
        assert_eq!(state.scale_percent(), 234);
    }

    #[test]
    fn layer_carries_flip_sign_in_scale() {
        let state = TransformState::default()
            .with_scale(2.0)
            .toggled_flip_horizontal();
        let layer = state.layer();
        assert_relative_eq!(layer.scale_x, -2.0);
        assert_relative_eq!(layer.scale_y, 2.0);
        assert_relative_eq!(layer.alpha, 0.5);
    }

    #[test]
    fn layer_affine_maps_center_to_anchor_plus_offset() {
        let state = TransformState {
            offset: Vec2::new(15.0, -5.0),
            rotation: 90.0,
            scale: 2.0,
            ..TransformState::default()
        };
        let affine = state.layer().affine(Vec2::new(100.0, 200.0));

        let center = affine.transform_point2(Vec2::ZERO);
        assert_relative_eq!(center.x, 115.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, 195.0, epsilon = 1e-4);

        // 90° gedreht, doppelt skaliert: (1, 0) → (0, 2) relativ zur Mitte
        let right = affine.transform_point2(Vec2::X) - center;
        assert_relative_eq!(right.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(right.y, 2.0, epsilon = 1e-4);
    }
}
