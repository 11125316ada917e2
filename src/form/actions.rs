use crate::rsvp::RsvpSubmission;

use super::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Required fields still empty; the control stays enabled.
    Blocked(Vec<FieldId>),
    Submitted(RsvpSubmission),
    AlreadyPending,
}
