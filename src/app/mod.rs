//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, UI, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandOutcome, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, CommandGuard};
pub use render_scene::build as build_overlay_scene;
pub use state::{AppState, Screen, UiState};
