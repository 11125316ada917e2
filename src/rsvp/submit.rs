use tracing::info;

pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";
pub const DEFAULT_PENDING_LABEL: &str = "Saving...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The control was just disabled and relabelled.
    Pending,
    /// Already disabled; nothing changed.
    AlreadyPending,
}

/// The form's submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    idle_label: String,
    pending_label: String,
    label: String,
    disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL, DEFAULT_PENDING_LABEL)
    }
}

impl SubmitControl {
    pub fn new(idle_label: impl Into<String>, pending_label: impl Into<String>) -> Self {
        let idle_label = idle_label.into();
        Self {
            label: idle_label.clone(),
            idle_label,
            pending_label: pending_label.into(),
            disabled: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.disabled {
            return SubmitOutcome::AlreadyPending;
        }
        self.disabled = true;
        self.label = self.pending_label.clone();
        info!(label = %self.label, "submit control disabled");
        SubmitOutcome::Pending
    }

    pub fn reset(&mut self) {
        self.disabled = false;
        self.label = self.idle_label.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_submit_disables_and_relabels() {
        let mut control = SubmitControl::default();
        assert!(!control.is_disabled());
        assert_eq!(control.label(), "Submit");
        assert_eq!(control.submit(), SubmitOutcome::Pending);
        assert!(control.is_disabled());
        assert_eq!(control.label(), "Saving...");
    }

    #[test]
    fn repeated_submit_is_swallowed() {
        let mut control = SubmitControl::new("Send", "Sending");
        control.submit();
        assert_eq!(control.submit(), SubmitOutcome::AlreadyPending);
        assert_eq!(control.label(), "Sending");
        control.reset();
        assert_eq!(control.label(), "Send");
        assert_eq!(control.submit(), SubmitOutcome::Pending);
    }
}
