//! UI-Layer mit egui: Startbildschirm, Zeichenbereich, Steuerleiste und Panels.
//!
//! Alle Funktionen lesen nur State/Scene und liefern `AppIntent`s zurück.

pub mod control_bar;
pub mod dialogs;
pub mod gesture;
pub mod home;
mod keyboard;
pub mod overlay;
pub mod panel;
pub mod viewport;

pub use control_bar::{render_control_bar, render_top_bar};
pub use dialogs::handle_image_dialog;
pub use gesture::{collect_screen_gesture, ScreenGesture};
pub use home::render_home;
pub use overlay::OverlayTexture;
pub use panel::render_active_panel;
pub use viewport::render_viewport;

use crate::app::{AppIntent, AppState};
use crate::shared::OverlayScene;

/// Rendert den Zeichen-Bildschirm in der Reihenfolge, die egui für Panels verlangt.
pub fn render_drawing_screen(
    ctx: &egui::Context,
    state: &AppState,
    scene: &OverlayScene,
    texture: &OverlayTexture,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    events.extend(keyboard::collect_keyboard_intents(ctx, scene));
    events.extend(render_top_bar(ctx, scene));
    events.extend(render_control_bar(ctx, scene));
    events.extend(render_active_panel(ctx, scene, &state.options));
    events.extend(render_viewport(ctx, scene, texture, &state.options));

    events
}
