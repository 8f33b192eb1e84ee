//! Handler für Kamera, Taschenlampe, Panels und Bildschirm-anlassen.

use crate::app::AppState;
use crate::app::use_cases;
use crate::core::ControlPanel;

/// Schaltet die Kamera um.
pub fn toggle_camera(state: &mut AppState) {
    use_cases::controls::toggle_camera(state);
}

/// Schaltet die Taschenlampe um.
pub fn toggle_flashlight(state: &mut AppState) {
    use_cases::controls::toggle_flashlight(state);
}

/// Schaltet die Taschenlampe aus.
pub fn set_flashlight_off(state: &mut AppState) {
    use_cases::controls::set_flashlight_off(state);
}

/// Öffnet/schließt ein Panel.
pub fn toggle_panel(state: &mut AppState, panel: ControlPanel) {
    use_cases::controls::toggle_panel(state, panel);
}

/// Schließt das offene Panel.
pub fn close_panel(state: &mut AppState) {
    use_cases::controls::close_panel(state);
}

/// Schaltet Bildschirm-anlassen um.
pub fn toggle_keep_screen_on(state: &mut AppState) {
    use_cases::controls::toggle_keep_screen_on(state);
}
