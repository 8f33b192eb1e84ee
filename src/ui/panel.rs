//! Aktives Steuer-Panel über der Steuerleiste (Slider bzw. Spiegel-Schalter).

use crate::app::AppIntent;
use crate::core::{ControlPanel, OPACITY_MAX, OPACITY_MIN, SCALE_MIN};
use crate::shared::{OverlayOptions, OverlayScene};

/// Rendert das aktive Panel (falls vorhanden) und gibt erzeugte Events zurück.
pub fn render_active_panel(
    ctx: &egui::Context,
    scene: &OverlayScene,
    options: &OverlayOptions,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if scene.active_panel == ControlPanel::None {
        return events;
    }
    let transform = &scene.transform;

    egui::TopBottomPanel::bottom("active_panel").show(ctx, |ui| {
        ui.vertical_centered(|ui| match scene.active_panel {
            ControlPanel::Opacity => {
                ui.label(format!("Deckkraft: {}%", transform.opacity_percent()));
                let mut value = transform.opacity;
                let slider = egui::Slider::new(&mut value, OPACITY_MIN..=OPACITY_MAX)
                    .show_value(false);
                if ui.add(slider).changed() {
                    events.push(AppIntent::OpacitySliderChanged { value });
                }
            }
            ControlPanel::Scale => {
                ui.label(format!("Größe: {}%", transform.scale_percent()));
                // Gesten können über das Slider-Maximum hinaus zoomen
                let mut value = transform.scale.min(options.scale_slider_max);
                let slider = egui::Slider::new(&mut value, SCALE_MIN..=options.scale_slider_max)
                    .show_value(false);
                if ui.add(slider).changed() {
                    events.push(AppIntent::ScaleSliderChanged { value });
                }
            }
            ControlPanel::Flip => {
                ui.label("Spiegeln");
                ui.horizontal(|ui| {
                    let horizontal = egui::Button::new("⇆ Horizontal")
                        .selected(transform.flipped_horizontal);
                    if ui.add(horizontal).clicked() {
                        events.push(AppIntent::ToggleFlipHorizontalRequested);
                    }
                    let vertical =
                        egui::Button::new("⇅ Vertikal").selected(transform.flipped_vertical);
                    if ui.add(vertical).clicked() {
                        events.push(AppIntent::ToggleFlipVerticalRequested);
                    }
                });
            }
            ControlPanel::None => {}
        });
    });

    events
}
