use super::DeviceBackend;
use crate::shared::DeviceRequest;

/// Gleicht den gewünschten Gerätezustand mit dem zuletzt angewendeten ab
/// und ruft das Backend nur bei Änderungen auf.
#[derive(Debug, Default)]
pub struct DeviceSync {
    applied: DeviceRequest,
}

impl DeviceSync {
    /// Erstellt einen Abgleich im freigegebenen Zustand (alles aus).
    pub fn new() -> Self {
        Self {
            applied: DeviceRequest::RELEASED,
        }
    }

    /// Zuletzt an das Backend übergebener Zustand.
    pub fn applied(&self) -> DeviceRequest {
        self.applied
    }

    /// Überträgt geänderte Wünsche an das Backend.
    ///
    /// Torch-Wünsche ohne Blitz-Einheit werden übersprungen, Torch-Fehler
    /// geloggt und verworfen. Sie erreichen nie den Transform-Zustand.
    pub fn apply(&mut self, backend: &mut dyn DeviceBackend, desired: DeviceRequest) {
        if desired == self.applied {
            return;
        }

        if desired.preview_active != self.applied.preview_active {
            backend.set_preview_active(desired.preview_active);
        }

        if desired.torch_on != self.applied.torch_on {
            if !backend.has_flash_unit() {
                if desired.torch_on {
                    log::warn!("Torch angefordert, aber keine Blitz-Einheit vorhanden");
                }
            } else if let Err(e) = backend.enable_torch(desired.torch_on) {
                log::error!("Torch konnte nicht geschaltet werden: {:#}", e);
            }
        }

        if desired.keep_screen_on != self.applied.keep_screen_on {
            backend.set_keep_screen_on(desired.keep_screen_on);
        }

        self.applied = desired;
    }

    /// Gibt alle Geräte-Ressourcen frei (Sitzungsende, Beenden).
    pub fn release(&mut self, backend: &mut dyn DeviceBackend) {
        self.apply(backend, DeviceRequest::RELEASED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[derive(Default)]
    struct RecordingDevice {
        flash: bool,
        fail_torch: bool,
        calls: Vec<String>,
    }

    impl DeviceBackend for RecordingDevice {
        fn set_preview_active(&mut self, active: bool) {
            self.calls.push(format!("preview:{active}"));
        }

        fn has_flash_unit(&self) -> bool {
            self.flash
        }

        fn enable_torch(&mut self, on: bool) -> anyhow::Result<()> {
            self.calls.push(format!("torch:{on}"));
            if self.fail_torch {
                Err(anyhow!("Torch defekt"))
            } else {
                Ok(())
            }
        }

        fn set_keep_screen_on(&mut self, on: bool) {
            self.calls.push(format!("screen:{on}"));
        }
    }

    fn request(preview: bool, torch: bool, screen: bool) -> DeviceRequest {
        DeviceRequest {
            preview_active: preview,
            torch_on: torch,
            keep_screen_on: screen,
        }
    }

    #[test]
    fn backend_is_only_called_on_change() {
        let mut device = RecordingDevice {
            flash: true,
            ..Default::default()
        };
        let mut sync = DeviceSync::new();

        sync.apply(&mut device, request(true, false, false));
        sync.apply(&mut device, request(true, false, false));
        sync.apply(&mut device, request(true, true, false));

        assert_eq!(device.calls, vec!["preview:true", "torch:true"]);
    }

    #[test]
    fn torch_without_flash_unit_is_skipped() {
        let mut device = RecordingDevice::default();
        let mut sync = DeviceSync::new();

        sync.apply(&mut device, request(true, true, true));

        assert_eq!(device.calls, vec!["preview:true", "screen:true"]);
        assert_eq!(sync.applied(), request(true, true, true));
    }

    #[test]
    fn torch_failure_is_swallowed() {
        let mut device = RecordingDevice {
            flash: true,
            fail_torch: true,
            ..Default::default()
        };
        let mut sync = DeviceSync::new();

        sync.apply(&mut device, request(true, true, false));

        assert_eq!(device.calls, vec!["preview:true", "torch:true"]);
        assert!(sync.applied().torch_on);
    }

    #[test]
    fn release_turns_everything_off() {
        let mut device = RecordingDevice {
            flash: true,
            ..Default::default()
        };
        let mut sync = DeviceSync::new();
        sync.apply(&mut device, request(true, true, true));
        device.calls.clear();

        sync.release(&mut device);

        assert_eq!(
            device.calls,
            vec!["preview:false", "torch:false", "screen:false"]
        );
        assert_eq!(sync.applied(), DeviceRequest::RELEASED);
    }
}
