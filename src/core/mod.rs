//! Core-Domänentypen: Overlay-Transform, Sitzungs-Flags, Bildverweis.

pub mod image_source;
pub mod session;
/// Transform-Zustandsmaschine des Overlay-Bilds
///
/// Reine Wert-Transitionen ohne Seiteneffekte:
/// - TransformState: Deckkraft, Skalierung, Rotation, Offset, Spiegelung, Sperre
/// - GestureDelta: ein Frame eines Pan/Zoom/Rotate-Streams
/// - OverlayLayer: abgeleitete Render-Parameter
pub mod transform;

pub use image_source::ImageSource;
pub use session::{ControlPanel, DrawingSession, SessionFlags};
pub use transform::{
    GestureDelta, OverlayLayer, TransformState, OPACITY_DEFAULT, OPACITY_MAX, OPACITY_MIN,
    SCALE_MAX, SCALE_MIN, SCALE_SLIDER_MAX,
};
