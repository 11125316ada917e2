mod input;
mod keymap;
mod kiosk;
mod options;
mod runtime;
mod status;
mod terminal;

pub use input::KeyAction;
pub use keymap::{KeymapContext, KeymapStore};
pub use kiosk::Kiosk;
pub use options::UiOptions;
