//! Use-Case-Funktionen für den Overlay-Transform.
//!
//! Jede Funktion ersetzt den Transform-Snapshot der Sitzung vollständig.
//! Die Kamera-Vorbedingung prüft der Controller zentral.

use crate::app::AppState;
use crate::core::{ControlPanel, GestureDelta, TransformState};

fn replace_transform(state: &mut AppState, f: impl FnOnce(TransformState) -> TransformState) {
    if let Some(session) = state.session.as_mut() {
        session.transform = f(session.transform);
    }
}

/// Setzt die Deckkraft (begrenzt, ignoriert Sperre).
pub fn set_opacity(state: &mut AppState, value: f32) {
    replace_transform(state, |t| t.with_opacity(value));
}

/// Setzt die Skalierung (begrenzt, ignoriert Sperre).
pub fn set_scale(state: &mut AppState, value: f32) {
    replace_transform(state, |t| t.with_scale(value));
}

/// Schaltet die horizontale Spiegelung um.
pub fn toggle_flip_horizontal(state: &mut AppState) {
    replace_transform(state, TransformState::toggled_flip_horizontal);
}

/// Schaltet die vertikale Spiegelung um.
pub fn toggle_flip_vertical(state: &mut AppState) {
    replace_transform(state, TransformState::toggled_flip_vertical);
}

/// Schaltet die Sperre um. Beim Sperren wird das offene Panel geschlossen.
pub fn toggle_lock(state: &mut AppState) {
    let Some(session) = state.session.as_mut() else {
        return;
    };
    session.transform = session.transform.toggled_lock();
    if session.transform.locked {
        session.flags.active_panel = ControlPanel::None;
    }
    log::info!(
        "Overlay {}",
        if session.transform.locked {
            "gesperrt"
        } else {
            "entsperrt"
        }
    );
}

/// Setzt den Transform auf die Standardwerte zurück.
pub fn reset_image(state: &mut AppState) {
    replace_transform(state, |_| TransformState::default());
}

/// Wendet einen Gesten-Frame an (No-Op im gesperrten Zustand).
pub fn apply_gesture(state: &mut AppState, delta: GestureDelta) {
    if state.transform().is_some_and(|t| t.locked) {
        log::debug!("Geste ignoriert: Overlay gesperrt");
        return;
    }
    replace_transform(state, |t| t.with_gesture(delta));
}
