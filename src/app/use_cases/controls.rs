//! Use-Case-Funktionen für Kamera, Taschenlampe, Panels und Bildschirm-anlassen.

use crate::app::AppState;
use crate::core::{ControlPanel, SessionFlags};

fn update_flags(state: &mut AppState, f: impl FnOnce(&mut SessionFlags)) {
    if let Some(session) = state.session.as_mut() {
        f(&mut session.flags);
    }
}

/// Schaltet die Kamera um. Beim Ausschalten werden Taschenlampe und Panel zurückgesetzt.
pub fn toggle_camera(state: &mut AppState) {
    update_flags(state, |flags| {
        flags.camera_on = !flags.camera_on;
        if !flags.camera_on {
            flags.flashlight_on = false;
            flags.active_panel = ControlPanel::None;
        }
        log::info!(
            "Kamera {}",
            if flags.camera_on {
                "fortgesetzt"
            } else {
                "pausiert"
            }
        );
    });
}

/// Schaltet die Taschenlampe um.
pub fn toggle_flashlight(state: &mut AppState) {
    update_flags(state, |flags| flags.flashlight_on = !flags.flashlight_on);
}

/// Schaltet die Taschenlampe aus.
pub fn set_flashlight_off(state: &mut AppState) {
    update_flags(state, |flags| flags.flashlight_on = false);
}

/// Öffnet `panel`, oder schließt es, wenn es bereits offen ist.
pub fn toggle_panel(state: &mut AppState, panel: ControlPanel) {
    update_flags(state, |flags| flags.active_panel = flags.active_panel.toggled(panel));
}

/// Schließt das offene Panel.
pub fn close_panel(state: &mut AppState) {
    update_flags(state, |flags| flags.active_panel = ControlPanel::None);
}

/// Schaltet Bildschirm-anlassen um.
pub fn toggle_keep_screen_on(state: &mut AppState) {
    update_flags(state, |flags| flags.keep_screen_on = !flags.keep_screen_on);
}
