//! Tastenkürzel des Zeichen-Bildschirms.

use crate::app::AppIntent;
use crate::core::ControlPanel;
use crate::shared::OverlayScene;

/// Verarbeitet Tastenkürzel und gibt AppIntents zurück.
///
/// Escape schließt zuerst ein offenes Panel, erst danach geht es zurück.
pub(super) fn collect_keyboard_intents(
    ctx: &egui::Context,
    scene: &OverlayScene,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (escape, key_l, key_r, key_space) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Space),
        )
    });

    if escape {
        if scene.active_panel != ControlPanel::None {
            events.push(AppIntent::ClosePanelRequested);
        } else {
            events.push(AppIntent::BackRequested);
        }
    }

    if key_space {
        events.push(AppIntent::ToggleCameraRequested);
    }
    if key_l {
        events.push(AppIntent::ToggleLockRequested);
    }
    if key_r {
        events.push(AppIntent::ResetImageRequested);
    }

    events
}
