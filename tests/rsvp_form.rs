use std::{cell::RefCell, rc::Rc};

use rsvpui::{
    Choice, FieldFlags, FormVariant, RsvpStore, derive_flags,
    form::{FieldId, FormState, SubmitResult},
    rsvp::{
        SubmitControl,
        dom::{
            DEFAULT_FORM_ID, FormPage, PLUS_ONE_GROUP_ID, PLUS_ONE_NAME_GROUP_ID, PageDocument,
        },
    },
};

#[test]
fn two_level_truth_table() {
    for plus_one in [Choice::Unset, Choice::Yes, Choice::No] {
        let flags = derive_flags(Choice::No, plus_one);
        assert_eq!(flags, FieldFlags::HIDDEN);
    }
    assert_eq!(
        derive_flags(Choice::Yes, Choice::No).as_tuple(),
        (true, false, true, false)
    );
    assert_eq!(
        derive_flags(Choice::Yes, Choice::Yes).as_tuple(),
        (true, true, true, true)
    );
    assert_eq!(derive_flags(Choice::Unset, Choice::Unset), FieldFlags::HIDDEN);
}

#[test]
fn recomputation_is_idempotent() {
    let mut store = RsvpStore::new(FormVariant::TwoLevel);
    let first = store.set_attending(Choice::Yes);
    let second = store.set_attending(Choice::Yes);
    assert_eq!(first, second);
    assert_eq!(store.set_plus_one(Choice::No), first);
}

#[test]
fn page_reload_after_answers_restores_hidden_state() {
    let document = Rc::new(RefCell::new(PageDocument::with_form(DEFAULT_FORM_ID)));
    let mut page = FormPage::new(Rc::clone(&document), FormVariant::TwoLevel);
    page.on_change("Attending", Some("yes"));
    page.on_change("PlusOne", Some("yes"));
    page.on_submit();
    assert!(!document.borrow().is_hidden(PLUS_ONE_NAME_GROUP_ID));

    assert!(page.on_load());
    let doc = document.borrow();
    assert!(doc.is_hidden(PLUS_ONE_GROUP_ID));
    assert!(doc.is_hidden(PLUS_ONE_NAME_GROUP_ID));
    assert!(!doc.submit_control().is_disabled());
    assert_eq!(page.store().attending(), Choice::Unset);
}

#[test]
fn single_level_page_toggles_each_group_independently() {
    let document = Rc::new(RefCell::new(PageDocument::with_form(DEFAULT_FORM_ID)));
    let mut page = FormPage::new(Rc::clone(&document), FormVariant::SingleLevel);
    page.on_load();
    page.on_change("PlusOne", Some("yes"));
    {
        let doc = document.borrow();
        assert!(doc.is_hidden(PLUS_ONE_GROUP_ID));
        assert!(!doc.is_hidden(PLUS_ONE_NAME_GROUP_ID));
        assert!(doc.is_required("PlusOneName"));
    }
    page.on_change("Attending", Some("yes"));
    assert!(!document.borrow().is_hidden(PLUS_ONE_GROUP_ID));
    assert!(document.borrow().is_required("PlusOne"));
}

#[test]
fn custom_form_id_must_match_to_reset() {
    let document = Rc::new(RefCell::new(PageDocument::with_form("guestForm")));
    let mut page = FormPage::new(Rc::clone(&document), FormVariant::TwoLevel);
    assert!(!page.on_load());
    let mut page = FormPage::with_form_id(document, FormVariant::TwoLevel, "guestForm");
    assert!(page.on_load());
}

#[test]
fn each_submission_event_relabels_exactly_once() {
    let mut form = FormState::new(
        FormVariant::TwoLevel,
        SubmitControl::new("Send RSVP", "Saving..."),
    );
    form.set_text(FieldId::FullName, "Grace Hopper");
    form.set_choice(FieldId::Attending, Choice::Yes);
    form.set_choice(FieldId::PlusOne, Choice::No);

    assert_eq!(form.submit_control().label(), "Send RSVP");
    let SubmitResult::Submitted(submission) = form.submit() else {
        panic!("expected the form to submit");
    };
    assert_eq!(form.submit_control().label(), "Saving...");
    assert_eq!(
        submission.encode_form(),
        "FullName=Grace+Hopper&Attending=yes&PlusOne=no&PlusOneName="
    );
    assert_eq!(form.submit(), SubmitResult::AlreadyPending);
    assert_eq!(form.submit_control().label(), "Saving...");
}
