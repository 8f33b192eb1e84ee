#![no_main]

use ar_drawing::core::{OPACITY_MAX, OPACITY_MIN, SCALE_MAX, SCALE_MIN};
use ar_drawing::{GestureDelta, TransformState};
use libfuzzer_sys::fuzz_target;

fn read_f32(chunk: &[u8]) -> f32 {
    f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}

fuzz_target!(|data: &[u8]| {
    let mut state = TransformState::default();

    for frame in data.chunks_exact(20) {
        let delta = GestureDelta::new(
            read_f32(&frame[0..4]),
            read_f32(&frame[4..8]),
            read_f32(&frame[8..12]),
            read_f32(&frame[12..16]),
        );
        let slider = read_f32(&frame[16..20]);

        state = match frame[0] % 4 {
            0 => state.with_opacity(slider),
            1 => state.with_scale(slider),
            2 => state.toggled_lock(),
            _ => state,
        };

        let before = state;
        state = state.with_gesture(delta);

        if before.locked {
            assert_eq!(state, before);
        }
        assert!((OPACITY_MIN..=OPACITY_MAX).contains(&state.opacity));
        assert!((SCALE_MIN..=SCALE_MAX).contains(&state.scale));
    }
});
