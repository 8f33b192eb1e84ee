#![no_main]

use ar_drawing::{AppController, AppIntent, AppState, ControlPanel, GestureDelta};
use libfuzzer_sys::fuzz_target;

fn intent_from(op: u8, value: f32) -> AppIntent {
    match op % 16 {
        0 => AppIntent::ImageSelected {
            uri: "fuzz.png".to_string(),
        },
        1 => AppIntent::BackRequested,
        2 => AppIntent::OpacitySliderChanged { value },
        3 => AppIntent::ScaleSliderChanged { value },
        4 => AppIntent::ToggleFlipHorizontalRequested,
        5 => AppIntent::ToggleFlipVerticalRequested,
        6 => AppIntent::ToggleLockRequested,
        7 => AppIntent::ResetImageRequested,
        8 => AppIntent::TransformGesture {
            delta: GestureDelta::new(value, -value, value.abs(), value),
        },
        9 => AppIntent::ToggleCameraRequested,
        10 => AppIntent::ToggleFlashlightRequested,
        11 => AppIntent::TogglePanelRequested {
            panel: ControlPanel::Opacity,
        },
        12 => AppIntent::TogglePanelRequested {
            panel: ControlPanel::Flip,
        },
        13 => AppIntent::ClosePanelRequested,
        14 => AppIntent::ToggleKeepScreenOnRequested,
        _ => AppIntent::HostSuspended,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for chunk in data.chunks_exact(5) {
        let value = f32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        let _ = controller.handle_intent(&mut state, intent_from(chunk[0], value));

        if let Some(session) = state.session() {
            // Ohne Kamera kein Licht und kein offenes Panel
            if !session.flags.camera_on {
                assert!(!session.flags.flashlight_on);
                assert_eq!(session.flags.active_panel, ControlPanel::None);
            }
        }
    }
});
