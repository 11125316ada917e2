use std::{sync::Arc, time::Duration};

use anyhow::{Result, anyhow};

use super::keymap::{self, KeymapStore};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Start on the RSVP screen instead of the gallery.
    pub start_on_form: bool,
    pub(crate) keymap_store: Arc<KeymapStore>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            start_on_form: false,
            keymap_store: keymap::default_store(),
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_start_on_form(mut self, start_on_form: bool) -> Self {
        self.start_on_form = start_on_form;
        self
    }

    /// Replace the bundled key bindings with a keymap document.
    pub fn with_keymap_json(mut self, raw: &str) -> Result<Self> {
        let store = KeymapStore::from_json(raw).map_err(|err| anyhow!(err))?;
        self.keymap_store = Arc::new(store);
        Ok(self)
    }
}
