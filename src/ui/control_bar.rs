//! Obere Navigationsleiste und untere Steuerleiste des Zeichen-Bildschirms.

use crate::app::AppIntent;
use crate::core::ControlPanel;
use crate::shared::OverlayScene;

/// Rendert die obere Leiste (Zurück) und gibt erzeugte Events zurück.
pub fn render_top_bar(ctx: &egui::Context, scene: &OverlayScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("⬅ Zurück").clicked() {
                events.push(AppIntent::BackRequested);
            }
            if let Some(image) = &scene.image {
                ui.separator();
                ui.label(image.display_name());
            }
        });
    });

    events
}

/// Rendert die Steuerleiste und gibt erzeugte Events zurück.
///
/// Bei pausierter Kamera ist nur der Kamera-Schalter aktiv.
pub fn render_control_bar(ctx: &egui::Context, scene: &OverlayScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let camera_on = scene.device.preview_active;
    let panel = scene.active_panel;
    let transform = &scene.transform;

    egui::TopBottomPanel::bottom("control_bar").show(ctx, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                let camera_label = if camera_on {
                    "📷 Pause"
                } else {
                    "📷 Fortsetzen"
                };
                if ui
                    .add(egui::Button::new(camera_label).selected(camera_on))
                    .clicked()
                {
                    events.push(AppIntent::ToggleCameraRequested);
                }

                ui.separator();

                for (target, label) in [
                    (ControlPanel::Opacity, "💧 Deckkraft"),
                    (ControlPanel::Scale, "🔍 Größe"),
                    (ControlPanel::Flip, "⇄ Spiegeln"),
                ] {
                    let button = egui::Button::new(label).selected(panel == target);
                    if ui.add_enabled(camera_on, button).clicked() {
                        events.push(AppIntent::TogglePanelRequested { panel: target });
                    }
                }

                ui.separator();

                let flash = egui::Button::new("🔦 Licht").selected(scene.device.torch_on);
                if ui.add_enabled(camera_on, flash).clicked() {
                    events.push(AppIntent::ToggleFlashlightRequested);
                }

                let screen =
                    egui::Button::new("📱 Anlassen").selected(scene.device.keep_screen_on);
                if ui.add_enabled(camera_on, screen).clicked() {
                    events.push(AppIntent::ToggleKeepScreenOnRequested);
                }

                let lock_label = if transform.locked {
                    "🔒 Gesperrt"
                } else {
                    "🔓 Sperren"
                };
                let lock = egui::Button::new(lock_label).selected(transform.locked);
                if ui.add_enabled(camera_on, lock).clicked() {
                    events.push(AppIntent::ToggleLockRequested);
                }

                if ui
                    .add_enabled(camera_on, egui::Button::new("⟲ Zurücksetzen"))
                    .clicked()
                {
                    events.push(AppIntent::ResetImageRequested);
                }
            });
        });
    });

    events
}
