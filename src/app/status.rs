use crate::form::FieldId;

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Ctrl+J/Ctrl+L switch screens, Ctrl+Q quits.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, field: FieldId) {
        self.message = format!("Editing {}", field.label());
    }

    pub fn picture(&mut self, index: usize, total: usize, filename: &str) {
        self.message = format!("Picture {}/{total}: {filename}", index + 1);
    }

    pub fn missing_fields(&mut self, fields: &[FieldId]) {
        let labels = fields
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        self.message = format!("Please fill out: {labels}");
    }

    pub fn submitted(&mut self, guest: &str) {
        self.message = format!("RSVP saved for {guest}. Press Ctrl+Q to exit.");
    }

    pub fn already_pending(&mut self) {
        self.message = "Already sent; waiting for the server.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
