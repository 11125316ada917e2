use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::rsvp::{
    Choice, FieldFlags, FormVariant, RsvpStore, RsvpSubmission, SubmitControl, SubmitOutcome,
};

use super::{FieldId, FormCommand, SubmitResult, TextInput};

/// Terminal-side RSVP form: field values, focus and the submit control.
#[derive(Debug)]
pub struct FormState {
    full_name: TextInput,
    plus_one_name: TextInput,
    store: RsvpStore,
    submit: SubmitControl,
    focus: FieldId,
}

impl FormState {
    pub fn new(variant: FormVariant, submit: SubmitControl) -> Self {
        let mut state = Self {
            full_name: TextInput::default(),
            plus_one_name: TextInput::default(),
            store: RsvpStore::new(variant),
            submit,
            focus: FieldId::FullName,
        };
        state.on_load();
        state
    }

    /// Reset every field to its default, as a page load does.
    pub fn on_load(&mut self) {
        self.full_name.clear();
        self.plus_one_name.clear();
        self.submit.reset();
        self.store.reset();
        self.focus = FieldId::FullName;
    }

    pub fn store(&self) -> &RsvpStore {
        &self.store
    }

    pub fn flags(&self) -> FieldFlags {
        self.store.flags()
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn text(&self, field: FieldId) -> Option<&TextInput> {
        match field {
            FieldId::FullName => Some(&self.full_name),
            FieldId::PlusOneName => Some(&self.plus_one_name),
            _ => None,
        }
    }

    pub fn choice(&self, field: FieldId) -> Option<Choice> {
        match field {
            FieldId::Attending => Some(self.store.attending()),
            FieldId::PlusOne => Some(self.store.plus_one()),
            _ => None,
        }
    }

    pub fn is_visible(&self, field: FieldId) -> bool {
        let flags = self.flags();
        match field {
            FieldId::PlusOne => flags.show_plus_one_section,
            FieldId::PlusOneName => flags.show_plus_one_name,
            _ => true,
        }
    }

    pub fn is_required(&self, field: FieldId) -> bool {
        let flags = self.flags();
        match field {
            FieldId::FullName | FieldId::Attending => true,
            FieldId::PlusOne => flags.plus_one_required,
            FieldId::PlusOneName => flags.plus_one_name_required,
            FieldId::Submit => false,
        }
    }

    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::ORDER
            .into_iter()
            .filter(|field| self.is_visible(*field))
            .collect()
    }

    pub fn apply(&mut self, command: FormCommand) -> Option<SubmitResult> {
        match command {
            FormCommand::FocusNextField => {
                self.step_focus(1);
                None
            }
            FormCommand::FocusPrevField => {
                self.step_focus(-1);
                None
            }
            FormCommand::Submit => Some(self.submit()),
        }
    }

    pub fn set_choice(&mut self, field: FieldId, choice: Choice) {
        match field {
            FieldId::Attending => {
                self.store.set_attending(choice);
            }
            FieldId::PlusOne => {
                self.store.set_plus_one(choice);
            }
            _ => return,
        }
        self.ensure_focus_visible();
    }

    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        match field {
            FieldId::FullName => self.full_name.set(value),
            FieldId::PlusOneName => self.plus_one_name.set(value),
            _ => {}
        }
    }

    /// Route an editing key to the focused field. Returns whether anything changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.submit.is_disabled() {
            return false;
        }
        match self.focus {
            FieldId::FullName => self.full_name.handle_key(key),
            FieldId::PlusOneName => self.plus_one_name.handle_key(key),
            field if field.is_radio() => self.handle_radio_key(field, key),
            _ => false,
        }
    }

    fn handle_radio_key(&mut self, field: FieldId, key: &KeyEvent) -> bool {
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return false;
        }
        let current = self.choice(field).unwrap_or_default();
        let next = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => current.toggled(),
            KeyCode::Char('y') | KeyCode::Char('Y') => Choice::Yes,
            KeyCode::Char('n') | KeyCode::Char('N') => Choice::No,
            _ => return false,
        };
        self.set_choice(field, next);
        true
    }

    /// Visible required fields that are still empty.
    pub fn missing_required(&self) -> Vec<FieldId> {
        self.visible_fields()
            .into_iter()
            .filter(|field| self.is_required(*field))
            .filter(|field| match *field {
                FieldId::FullName => self.full_name.is_blank(),
                FieldId::PlusOneName => self.plus_one_name.is_blank(),
                other => !self.choice(other).unwrap_or_default().is_set(),
            })
            .collect()
    }

    pub fn submission(&self) -> RsvpSubmission {
        RsvpSubmission::new(
            self.full_name.value().trim(),
            self.store.attending(),
            self.store.plus_one(),
            self.plus_one_name.value().trim(),
        )
    }

    pub fn submit(&mut self) -> SubmitResult {
        if self.submit.is_disabled() {
            return SubmitResult::AlreadyPending;
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            if let Some(first) = missing.first() {
                self.focus = *first;
            }
            return SubmitResult::Blocked(missing);
        }
        match self.submit.submit() {
            SubmitOutcome::Pending => {
                let submission = self.submission();
                info!(guest = %submission.guest_line(), "rsvp submitted");
                SubmitResult::Submitted(submission)
            }
            SubmitOutcome::AlreadyPending => SubmitResult::AlreadyPending,
        }
    }

    fn step_focus(&mut self, delta: i32) {
        let fields = self.visible_fields();
        let len = fields.len() as i32;
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len);
        self.focus = fields[next as usize];
    }

    fn ensure_focus_visible(&mut self) {
        if self.is_visible(self.focus) {
            return;
        }
        // fall back to the nearest visible field above
        let position = FieldId::ORDER
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0);
        self.focus = FieldId::ORDER[..position]
            .iter()
            .rev()
            .copied()
            .find(|field| self.is_visible(*field))
            .unwrap_or(FieldId::FullName);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormState {
        FormState::new(FormVariant::TwoLevel, SubmitControl::default())
    }

    #[test]
    fn load_shows_only_base_fields() {
        let state = form();
        assert_eq!(
            state.visible_fields(),
            vec![FieldId::FullName, FieldId::Attending, FieldId::Submit]
        );
        assert_eq!(state.flags(), FieldFlags::HIDDEN);
    }

    #[test]
    fn focus_wraps_over_visible_fields() {
        let mut state = form();
        state.apply(FormCommand::FocusPrevField);
        assert_eq!(state.focus(), FieldId::Submit);
        state.apply(FormCommand::FocusNextField);
        assert_eq!(state.focus(), FieldId::FullName);
        state.apply(FormCommand::FocusNextField);
        assert_eq!(state.focus(), FieldId::Attending);
    }

    #[test]
    fn arrow_on_attending_reveals_plus_one() {
        let mut state = form();
        state.apply(FormCommand::FocusNextField);
        assert!(state.handle_key(&press(KeyCode::Right)));
        assert_eq!(state.choice(FieldId::Attending), Some(Choice::Yes));
        assert!(state.is_visible(FieldId::PlusOne));
        assert!(state.is_required(FieldId::PlusOne));
        assert!(!state.is_visible(FieldId::PlusOneName));
    }

    #[test]
    fn hiding_focused_field_moves_focus_up() {
        let mut state = form();
        state.set_choice(FieldId::Attending, Choice::Yes);
        state.set_choice(FieldId::PlusOne, Choice::Yes);
        while state.focus() != FieldId::PlusOneName {
            state.apply(FormCommand::FocusNextField);
        }
        state.set_choice(FieldId::Attending, Choice::No);
        assert_eq!(state.focus(), FieldId::Attending);
    }

    #[test]
    fn submit_is_blocked_until_required_fields_filled() {
        let mut state = form();
        assert_eq!(
            state.submit(),
            SubmitResult::Blocked(vec![FieldId::FullName, FieldId::Attending])
        );
        assert!(!state.submit_control().is_disabled());

        state.set_text(FieldId::FullName, "Ada");
        state.set_choice(FieldId::Attending, Choice::Yes);
        state.set_choice(FieldId::PlusOne, Choice::Yes);
        assert_eq!(
            state.submit(),
            SubmitResult::Blocked(vec![FieldId::PlusOneName])
        );
        assert_eq!(state.focus(), FieldId::PlusOneName);

        state.set_text(FieldId::PlusOneName, "Charles");
        let SubmitResult::Submitted(submission) = state.submit() else {
            panic!("expected submission");
        };
        assert_eq!(submission.guest_line(), "Ada (+Charles)");
        assert!(state.submit_control().is_disabled());
        assert_eq!(state.submit_control().label(), "Saving...");
        assert_eq!(state.submit(), SubmitResult::AlreadyPending);
    }

    #[test]
    fn declining_only_needs_name_and_answer() {
        let mut state = form();
        state.set_text(FieldId::FullName, "Ada");
        state.set_choice(FieldId::Attending, Choice::No);
        assert!(matches!(state.submit(), SubmitResult::Submitted(_)));
    }

    #[test]
    fn single_level_keeps_name_row_after_declining() {
        let mut state = FormState::new(FormVariant::SingleLevel, SubmitControl::default());
        state.set_text(FieldId::FullName, "Ada");
        state.set_choice(FieldId::Attending, Choice::Yes);
        state.set_choice(FieldId::PlusOne, Choice::Yes);
        state.set_choice(FieldId::Attending, Choice::No);

        assert!(!state.is_visible(FieldId::PlusOne));
        assert!(!state.is_required(FieldId::PlusOne));
        assert!(state.is_visible(FieldId::PlusOneName));
        assert!(state.is_required(FieldId::PlusOneName));
        assert_eq!(
            state.visible_fields(),
            vec![
                FieldId::FullName,
                FieldId::Attending,
                FieldId::PlusOneName,
                FieldId::Submit
            ]
        );

        while state.focus() != FieldId::Attending {
            state.apply(FormCommand::FocusNextField);
        }
        state.apply(FormCommand::FocusNextField);
        assert_eq!(state.focus(), FieldId::PlusOneName);
        state.apply(FormCommand::FocusPrevField);
        assert_eq!(state.focus(), FieldId::Attending);

        assert_eq!(state.missing_required(), vec![FieldId::PlusOneName]);
        assert_eq!(
            state.submit(),
            SubmitResult::Blocked(vec![FieldId::PlusOneName])
        );
        state.set_text(FieldId::PlusOneName, "Charles");
        assert!(state.missing_required().is_empty());
        assert!(matches!(state.submit(), SubmitResult::Submitted(_)));
    }

    #[test]
    fn edits_are_ignored_after_submission() {
        let mut state = form();
        state.set_text(FieldId::FullName, "Ada");
        state.set_choice(FieldId::Attending, Choice::No);
        state.submit();
        assert!(!state.handle_key(&press(KeyCode::Char('x'))));
        state.on_load();
        assert!(!state.submit_control().is_disabled());
        assert_eq!(state.text(FieldId::FullName).map(TextInput::value), Some(""));
    }
}
