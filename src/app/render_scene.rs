//! Builder für Overlay-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{ControlPanel, TransformState};
use crate::shared::{DeviceRequest, OverlayScene};

/// Baut eine OverlayScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> OverlayScene {
    let Some(session) = state.session() else {
        let transform = TransformState::default();
        return OverlayScene {
            image: None,
            layer: transform.layer(),
            transform,
            active_panel: ControlPanel::None,
            device: DeviceRequest::RELEASED,
            revision: state.revision,
        };
    };

    OverlayScene {
        image: Some(session.image.clone()),
        layer: session.transform.layer(),
        transform: session.transform,
        active_panel: session.flags.active_panel,
        device: DeviceRequest {
            preview_active: session.preview_active(),
            torch_on: session.torch_on(),
            keep_screen_on: session.flags.keep_screen_on,
        },
        revision: state.revision,
    }
}
