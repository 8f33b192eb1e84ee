//! Handler für Overlay-Transform-Commands.

use crate::app::AppState;
use crate::app::use_cases;
use crate::core::GestureDelta;

/// Setzt die Deckkraft.
pub fn set_opacity(state: &mut AppState, value: f32) {
    use_cases::transform::set_opacity(state, value);
}

/// Setzt die Skalierung.
pub fn set_scale(state: &mut AppState, value: f32) {
    use_cases::transform::set_scale(state, value);
}

/// Schaltet die horizontale Spiegelung um.
pub fn toggle_flip_horizontal(state: &mut AppState) {
    use_cases::transform::toggle_flip_horizontal(state);
}

/// Schaltet die vertikale Spiegelung um.
pub fn toggle_flip_vertical(state: &mut AppState) {
    use_cases::transform::toggle_flip_vertical(state);
}

/// Schaltet die Sperre um.
pub fn toggle_lock(state: &mut AppState) {
    use_cases::transform::toggle_lock(state);
}

/// Setzt das Overlay zurück.
pub fn reset_image(state: &mut AppState) {
    use_cases::transform::reset_image(state);
}

/// Wendet einen Gesten-Frame an.
pub fn apply_gesture(state: &mut AppState, delta: GestureDelta) {
    use_cases::transform::apply_gesture(state, delta);
}
