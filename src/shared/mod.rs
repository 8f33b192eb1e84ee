//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `ui` und `device` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod overlay_scene;

pub use options::OverlayOptions;
pub use overlay_scene::{DeviceRequest, OverlayScene};
