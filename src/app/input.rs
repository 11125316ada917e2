use crossterm::event::KeyEvent;

use crate::form::FormCommand;

use super::keymap::KeymapContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    Quit,
    ResetStatus,
    ScreenStep(i32),
    FieldStep(i32),
    GalleryStep(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Quit,
    ResetStatus,
    ScreenStep(i32),
    GalleryStep(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CommandDispatch {
    Form(FormCommand),
    App(AppCommand),
    Input(KeyEvent),
}

/// Turn a key into a dispatch, falling through to field input when unbound.
pub(crate) fn dispatch(action: Option<KeyAction>, key: KeyEvent) -> CommandDispatch {
    match action {
        Some(KeyAction::Submit) => CommandDispatch::Form(FormCommand::Submit),
        Some(KeyAction::FieldStep(delta)) if delta < 0 => {
            CommandDispatch::Form(FormCommand::FocusPrevField)
        }
        Some(KeyAction::FieldStep(_)) => CommandDispatch::Form(FormCommand::FocusNextField),
        Some(KeyAction::Quit) => CommandDispatch::App(AppCommand::Quit),
        Some(KeyAction::ResetStatus) => CommandDispatch::App(AppCommand::ResetStatus),
        Some(KeyAction::ScreenStep(delta)) => CommandDispatch::App(AppCommand::ScreenStep(delta)),
        Some(KeyAction::GalleryStep(delta)) => {
            CommandDispatch::App(AppCommand::GalleryStep(delta))
        }
        None => CommandDispatch::Input(key),
    }
}

/// Contexts consulted for a screen, most specific first.
pub(crate) fn contexts_for(screen: KeymapContext) -> [KeymapContext; 2] {
    [screen, KeymapContext::Global]
}
