//! AR-Drawing Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod device;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandGuard, CommandOutcome, Screen, UiState,
};
pub use core::{
    ControlPanel, DrawingSession, GestureDelta, ImageSource, OverlayLayer, SessionFlags,
    TransformState,
};
pub use device::{DesktopDevice, DeviceBackend, DeviceSync};
pub use shared::{DeviceRequest, OverlayOptions, OverlayScene};
