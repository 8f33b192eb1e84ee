//! Startbildschirm mit Bildauswahl.

use crate::app::{AppIntent, AppState};

/// Rendert den Startbildschirm und gibt erzeugte Events zurück.
pub fn render_home(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("AR-Drawing");
            ui.label("Referenzbild über die Kamera legen und abzeichnen");
            ui.add_space(32.0);

            let button =
                egui::Button::new("🖼 Bild auswählen").min_size(egui::vec2(220.0, 48.0));
            if ui.add(button).clicked() {
                events.push(AppIntent::SelectImageRequested);
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.add_space(16.0);
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });

    events
}
