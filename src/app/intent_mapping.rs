//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectImageRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageSelected { uri } => vec![AppCommand::StartSession { uri }],
        AppIntent::BackRequested => vec![AppCommand::EndSession],
        AppIntent::ExitRequested => {
            if state.session.is_some() {
                vec![AppCommand::EndSession, AppCommand::RequestExit]
            } else {
                vec![AppCommand::RequestExit]
            }
        }
        AppIntent::HostSuspended => vec![AppCommand::SetFlashlightOff],

        AppIntent::OpacitySliderChanged { value } => vec![AppCommand::SetOpacity { value }],
        AppIntent::ScaleSliderChanged { value } => vec![AppCommand::SetScale { value }],
        AppIntent::ToggleFlipHorizontalRequested => vec![AppCommand::ToggleFlipHorizontal],
        AppIntent::ToggleFlipVerticalRequested => vec![AppCommand::ToggleFlipVertical],
        AppIntent::ToggleLockRequested => vec![AppCommand::ToggleLock],
        AppIntent::ResetImageRequested => vec![AppCommand::ResetImage],
        AppIntent::TransformGesture { delta } => vec![AppCommand::ApplyGesture { delta }],

        AppIntent::ToggleCameraRequested => vec![AppCommand::ToggleCamera],
        AppIntent::ToggleFlashlightRequested => vec![AppCommand::ToggleFlashlight],
        AppIntent::TogglePanelRequested { panel } => vec![AppCommand::TogglePanel { panel }],
        AppIntent::ClosePanelRequested => vec![AppCommand::ClosePanel],
        AppIntent::ToggleKeepScreenOnRequested => vec![AppCommand::ToggleKeepScreenOn],
    }
}
