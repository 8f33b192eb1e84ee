//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, CommandGuard, CommandOutcome};
use crate::shared::OverlayScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Prüft die Vorbedingung eines Commands. Einzige Stelle für den
    /// "kein Effekt ohne Sitzung / bei pausierter Kamera"-Check.
    fn guard_allows(state: &AppState, command: &AppCommand) -> bool {
        match command.guard() {
            CommandGuard::Always => true,
            CommandGuard::Session => state.session.is_some(),
            CommandGuard::CameraOn => state.is_camera_on(),
        }
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Commands, deren Vorbedingung nicht erfüllt ist, sind No-Ops.
    /// Ändert sich die Sitzung, wird `state.revision` erhöht. Jeder Command
    /// landet mit seinem Ergebnis im Command-Log.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let guard = command.guard();
        if !Self::guard_allows(state, &command) {
            log::debug!("Command ohne Wirkung (Vorbedingung {:?}): {:?}", guard, command);
            state.command_log.record(command, CommandOutcome::Blocked(guard));
            return Ok(());
        }

        let before = state.session.clone();
        let result = Self::dispatch(state, command.clone());

        let outcome = match &result {
            Err(_) => CommandOutcome::Failed,
            Ok(()) if state.session != before => {
                state.revision = state.revision.wrapping_add(1);
                CommandOutcome::Changed
            }
            Ok(()) => CommandOutcome::Unchanged,
        };
        state.command_log.record(command, outcome);

        result
    }

    fn dispatch(state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::RequestImageDialog => handlers::session::request_image_dialog(state),
            AppCommand::StartSession { uri } => handlers::session::start(state, uri)?,
            AppCommand::EndSession => handlers::session::end(state),
            AppCommand::RequestExit => handlers::session::request_exit(state),

            // === Overlay-Transform ===
            AppCommand::SetOpacity { value } => handlers::transform::set_opacity(state, value),
            AppCommand::SetScale { value } => handlers::transform::set_scale(state, value),
            AppCommand::ToggleFlipHorizontal => handlers::transform::toggle_flip_horizontal(state),
            AppCommand::ToggleFlipVertical => handlers::transform::toggle_flip_vertical(state),
            AppCommand::ToggleLock => handlers::transform::toggle_lock(state),
            AppCommand::ResetImage => handlers::transform::reset_image(state),
            AppCommand::ApplyGesture { delta } => handlers::transform::apply_gesture(state, delta),

            // === Kamera, Licht, Panels ===
            AppCommand::ToggleCamera => handlers::controls::toggle_camera(state),
            AppCommand::ToggleFlashlight => handlers::controls::toggle_flashlight(state),
            AppCommand::SetFlashlightOff => handlers::controls::set_flashlight_off(state),
            AppCommand::TogglePanel { panel } => handlers::controls::toggle_panel(state, panel),
            AppCommand::ClosePanel => handlers::controls::close_panel(state),
            AppCommand::ToggleKeepScreenOn => handlers::controls::toggle_keep_screen_on(state),
        }

        Ok(())
    }

    /// Baut die Overlay-Szene aus dem aktuellen AppState.
    pub fn build_overlay_scene(&self, state: &AppState) -> OverlayScene {
        render_scene::build(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ControlPanel, GestureDelta, TransformState};

    fn started() -> (AppController, AppState) {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        controller
            .handle_intent(
                &mut state,
                AppIntent::ImageSelected {
                    uri: "vorlage.png".to_string(),
                },
            )
            .expect("Start sollte klappen");
        (controller, state)
    }

    #[test]
    fn camera_guard_blocks_toggles_while_paused() {
        let (mut controller, mut state) = started();
        controller
            .handle_command(&mut state, AppCommand::ToggleCamera)
            .expect("ToggleCamera");
        let before = state.session.clone();
        let revision = state.revision;

        for command in [
            AppCommand::ToggleFlipHorizontal,
            AppCommand::ToggleFlipVertical,
            AppCommand::ToggleLock,
            AppCommand::ResetImage,
            AppCommand::ToggleFlashlight,
            AppCommand::TogglePanel {
                panel: ControlPanel::Opacity,
            },
            AppCommand::ToggleKeepScreenOn,
        ] {
            controller
                .handle_command(&mut state, command)
                .expect("Command sollte robust sein");
        }

        assert_eq!(state.session, before);
        assert_eq!(state.revision, revision);
    }

    #[test]
    fn revision_only_increments_on_change() {
        let (mut controller, mut state) = started();
        let revision = state.revision;

        controller
            .handle_command(&mut state, AppCommand::ClosePanel)
            .expect("ClosePanel");
        assert_eq!(state.revision, revision);

        controller
            .handle_command(&mut state, AppCommand::SetOpacity { value: 0.8 })
            .expect("SetOpacity");
        assert_eq!(state.revision, revision + 1);
    }

    #[test]
    fn commands_without_session_are_logged_but_ignored() {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        controller
            .handle_command(&mut state, AppCommand::SetScale { value: 3.0 })
            .expect("SetScale ohne Sitzung");

        assert!(state.session.is_none());
        let last = state.command_log.last().expect("Command sollte geloggt sein");
        assert_eq!(last.command, AppCommand::SetScale { value: 3.0 });
        assert_eq!(last.outcome, CommandOutcome::Blocked(CommandGuard::Session));
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn noop_after_overflowing_pan_keeps_revision() {
        let (mut controller, mut state) = started();
        for command in [
            AppCommand::SetScale { value: 10.0 },
            AppCommand::ApplyGesture {
                delta: GestureDelta::new(3.0e38, 0.0, 1.0, 0.0),
            },
            AppCommand::ApplyGesture {
                delta: GestureDelta::new(-3.0e38, 0.0, 1.0, 0.0),
            },
        ] {
            controller
                .handle_command(&mut state, command)
                .expect("Command sollte robust sein");
        }
        let offset = state.transform().map(|t| t.offset);
        assert!(offset.is_some_and(|o| o.is_finite()));
        let revision = state.revision;

        controller
            .handle_command(&mut state, AppCommand::ClosePanel)
            .expect("ClosePanel");

        assert_eq!(state.revision, revision);
        assert_eq!(
            state.command_log.last().map(|e| e.outcome),
            Some(CommandOutcome::Unchanged)
        );
    }

    #[test]
    fn failed_start_is_logged_as_failed() {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        let result = controller.handle_command(
            &mut state,
            AppCommand::StartSession {
                uri: "   ".to_string(),
            },
        );

        assert!(result.is_err());
        assert_eq!(
            state.command_log.last().map(|e| e.outcome),
            Some(CommandOutcome::Failed)
        );
    }

    #[test]
    fn reset_during_session_yields_defaults() {
        let (mut controller, mut state) = started();
        controller
            .handle_command(&mut state, AppCommand::SetScale { value: 3.0 })
            .expect("SetScale");
        controller
            .handle_command(&mut state, AppCommand::ResetImage)
            .expect("ResetImage");
        assert_eq!(state.transform(), Some(TransformState::default()));
    }
}
