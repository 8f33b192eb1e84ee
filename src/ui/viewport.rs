//! Zentraler Zeichenbereich: Kamera-Hintergrund, Overlay und Gesten.

use super::gesture::collect_screen_gesture;
use super::overlay::{paint_overlay, OverlayTexture};
use crate::app::AppIntent;
use crate::shared::{OverlayOptions, OverlayScene};

fn background_color(options: &OverlayOptions) -> egui::Color32 {
    let [r, g, b, a] = options.background_color;
    egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}

/// Rendert den Zeichenbereich und gibt erzeugte Events zurück.
pub fn render_viewport(
    ctx: &egui::Context,
    scene: &OverlayScene,
    texture: &OverlayTexture,
    options: &OverlayOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(background_color(options)))
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            let painter = ui.painter_at(rect);

            if scene.camera_paused() {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Kamera pausiert",
                    egui::FontId::proportional(20.0),
                    egui::Color32::GRAY,
                );
                return;
            }

            match texture.handle() {
                Some(handle) => {
                    paint_overlay(
                        &painter,
                        rect,
                        handle,
                        &scene.layer,
                        options.overlay_width_fraction,
                    );
                }
                None => {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Bild nicht verfügbar",
                        egui::FontId::proportional(16.0),
                        egui::Color32::WHITE,
                    );
                }
            }

            if !scene.accepts_gestures() {
                return;
            }
            if let Some(gesture) = collect_screen_gesture(ui, &response, options) {
                events.push(AppIntent::TransformGesture {
                    delta: gesture.to_delta(),
                });
            }
        });

    events
}
