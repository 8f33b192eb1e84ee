//! AR-Drawing.
//!
//! Legt ein Referenzbild halbtransparent über die Kamera-Vorschau,
//! damit es auf Papier abgezeichnet werden kann.

use ar_drawing::{
    ui, AppController, AppIntent, AppState, DesktopDevice, DeviceSync, OverlayOptions, Screen,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("AR-Drawing v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = OverlayOptions::config_path();
        let overlay_options = OverlayOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = overlay_options.save_to_file(&config_path) {
                log::warn!("Optionen konnten nicht angelegt werden: {:#}", e);
            }
        }

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(overlay_options.window_size)
                .with_title("AR-Drawing"),
            ..Default::default()
        };

        eframe::run_native(
            "AR-Drawing",
            native_options,
            Box::new(move |_cc| Ok(Box::new(DrawingApp::new(overlay_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DrawingApp {
    state: AppState,
    controller: AppController,
    texture: ui::OverlayTexture,
    device: DesktopDevice,
    device_sync: DeviceSync,
    last_revision: u64,
    was_minimized: bool,
}

impl DrawingApp {
    fn new(options: OverlayOptions) -> Self {
        let mut state = AppState::new();
        state.options = options;

        Self {
            state,
            controller: AppController::new(),
            texture: ui::OverlayTexture::new(),
            device: DesktopDevice::new(),
            device_sync: DeviceSync::new(),
            last_revision: 0,
            was_minimized: false,
        }
    }
}

impl eframe::App for DrawingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            self.device_sync.release(&mut self.device);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        self.sync_texture(ctx);
        self.sync_device();

        self.maybe_request_repaint(ctx);
    }
}

impl DrawingApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(self.collect_host_events(ctx));
        events.extend(ui::handle_image_dialog(&mut self.state.ui));

        match self.state.screen() {
            Screen::Home => events.extend(ui::render_home(ctx, &self.state)),
            Screen::Drawing => {
                let scene = self.controller.build_overlay_scene(&self.state);
                events.extend(ui::render_drawing_screen(
                    ctx,
                    &self.state,
                    &scene,
                    &self.texture,
                ));
            }
        }

        events
    }

    /// Fenster-Lebenszyklus: Schließen und Minimieren.
    fn collect_host_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (close_requested, minimized) = ctx.input(|i| {
            (
                i.viewport().close_requested(),
                i.viewport().minimized.unwrap_or(false),
            )
        });

        if close_requested && !self.state.should_exit {
            // Erst Sitzung sauber beenden, dann im nächsten Frame schließen
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            events.push(AppIntent::ExitRequested);
        }

        if minimized && !self.was_minimized {
            events.push(AppIntent::HostSuspended);
        }
        self.was_minimized = minimized;

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        let source = self.state.session().map(|s| &s.image);
        if let Err(e) = self.texture.sync(ctx, source) {
            log::error!("{:#}", e);
            self.state.ui.status_message = Some(format!("{:#}", e));
        }
    }

    fn sync_device(&mut self) {
        let scene = self.controller.build_overlay_scene(&self.state);
        self.device_sync.apply(&mut self.device, scene.device);
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.revision != self.last_revision || self.state.should_exit {
            self.last_revision = self.state.revision;
            ctx.request_repaint();
        }
    }
}
