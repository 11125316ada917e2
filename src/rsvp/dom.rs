//! Applies form flags and gallery markup to a browser-like page model.
//!
//! [`PageDocument`] tracks just the parts of the page the scripts touch:
//! the `d-none` class on the plus-one groups, `required` attributes on named
//! inputs, the submit button and the inner HTML of the image container.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use tracing::debug;

use crate::gallery::{ImageMarkup, ImageViewer};

use super::{
    ATTENDING_FIELD, Choice, FieldFlags, FormVariant, PLUS_ONE_FIELD, PLUS_ONE_NAME_FIELD,
    RsvpStore, SubmitControl, SubmitOutcome,
};

pub const HIDDEN_CLASS: &str = "d-none";
pub const PLUS_ONE_GROUP_ID: &str = "groupPlusOne";
pub const PLUS_ONE_NAME_GROUP_ID: &str = "groupPlusOneName";
pub const DEFAULT_FORM_ID: &str = "rsvpForm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomPatch {
    ToggleClass {
        element_id: &'static str,
        class: &'static str,
        enabled: bool,
    },
    SetRequired {
        input_name: &'static str,
        required: bool,
    },
}

/// Patches that bring the page in line with `flags`.
pub fn patches_for(flags: &FieldFlags) -> Vec<DomPatch> {
    vec![
        DomPatch::ToggleClass {
            element_id: PLUS_ONE_GROUP_ID,
            class: HIDDEN_CLASS,
            enabled: !flags.show_plus_one_section,
        },
        DomPatch::ToggleClass {
            element_id: PLUS_ONE_NAME_GROUP_ID,
            class: HIDDEN_CLASS,
            enabled: !flags.show_plus_one_name,
        },
        DomPatch::SetRequired {
            input_name: PLUS_ONE_FIELD,
            required: flags.plus_one_required,
        },
        DomPatch::SetRequired {
            input_name: PLUS_ONE_NAME_FIELD,
            required: flags.plus_one_name_required,
        },
    ]
}

#[derive(Debug, Default)]
pub struct PageDocument {
    form_id: Option<String>,
    classes: BTreeMap<String, BTreeSet<String>>,
    required: BTreeSet<String>,
    inner_html: BTreeMap<String, String>,
    submit: SubmitControl,
    applied: usize,
}

impl PageDocument {
    /// A page without an RSVP form (the gallery page, for instance).
    pub fn new() -> Self {
        Self::default()
    }

    /// A page holding the RSVP form; both plus-one groups start hidden.
    pub fn with_form(form_id: impl Into<String>) -> Self {
        let mut document = Self {
            form_id: Some(form_id.into()),
            ..Self::default()
        };
        document.toggle_class(PLUS_ONE_GROUP_ID, HIDDEN_CLASS, true);
        document.toggle_class(PLUS_ONE_NAME_GROUP_ID, HIDDEN_CLASS, true);
        document
    }

    pub fn has_form(&self, form_id: &str) -> bool {
        self.form_id.as_deref() == Some(form_id)
    }

    pub fn toggle_class(&mut self, element_id: &str, class: &str, enabled: bool) {
        let classes = self.classes.entry(element_id.to_string()).or_default();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    pub fn has_class(&self, element_id: &str, class: &str) -> bool {
        self.classes
            .get(element_id)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn is_hidden(&self, element_id: &str) -> bool {
        self.has_class(element_id, HIDDEN_CLASS)
    }

    pub fn is_required(&self, input_name: &str) -> bool {
        self.required.contains(input_name)
    }

    pub fn set_inner_html(&mut self, element_id: &str, html: impl Into<String>) {
        self.inner_html.insert(element_id.to_string(), html.into());
    }

    pub fn inner_html(&self, element_id: &str) -> Option<&str> {
        self.inner_html.get(element_id).map(String::as_str)
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn submit_control_mut(&mut self) -> &mut SubmitControl {
        &mut self.submit
    }

    /// Number of patch batches applied so far.
    pub fn applied_batches(&self) -> usize {
        self.applied
    }

    pub fn apply(&mut self, patches: &[DomPatch]) {
        for patch in patches {
            match patch {
                DomPatch::ToggleClass {
                    element_id,
                    class,
                    enabled,
                } => self.toggle_class(element_id, class, *enabled),
                DomPatch::SetRequired {
                    input_name,
                    required,
                } => {
                    if *required {
                        self.required.insert((*input_name).to_string());
                    } else {
                        self.required.remove(*input_name);
                    }
                }
            }
        }
        self.applied += 1;
    }
}

pub type SharedDocument = Rc<RefCell<PageDocument>>;

/// The RSVP script bound to one page.
#[derive(Debug)]
pub struct FormPage {
    form_id: String,
    document: SharedDocument,
    store: RsvpStore,
}

impl FormPage {
    pub fn new(document: SharedDocument, variant: FormVariant) -> Self {
        Self::with_form_id(document, variant, DEFAULT_FORM_ID)
    }

    pub fn with_form_id(
        document: SharedDocument,
        variant: FormVariant,
        form_id: impl Into<String>,
    ) -> Self {
        let mut store = RsvpStore::new(variant);
        let target = Rc::clone(&document);
        store.subscribe(move |flags: &FieldFlags| target.borrow_mut().apply(&patches_for(flags)));
        Self {
            form_id: form_id.into(),
            document,
            store,
        }
    }

    pub fn store(&self) -> &RsvpStore {
        &self.store
    }

    /// `window.onload`: reset the form only if it is on this page.
    pub fn on_load(&mut self) -> bool {
        let present = self.document.borrow().has_form(&self.form_id);
        if !present {
            debug!(form_id = %self.form_id, "form not present; skipping reset");
            return false;
        }
        self.document.borrow_mut().submit_control_mut().reset();
        self.store.reset();
        true
    }

    /// A `change` event on one of the named radio inputs. Other names are ignored.
    pub fn on_change(
        &mut self,
        input_name: &str,
        checked_value: Option<&str>,
    ) -> Option<FieldFlags> {
        self.dispatch(input_name, Choice::from_form_value(checked_value))
    }

    /// A `change` event on a checkbox: its checked state is the answer.
    pub fn on_toggle(&mut self, input_name: &str, checked: bool) -> Option<FieldFlags> {
        self.dispatch(input_name, Choice::from_checked(checked))
    }

    fn dispatch(&mut self, input_name: &str, choice: Choice) -> Option<FieldFlags> {
        match input_name {
            ATTENDING_FIELD => Some(self.store.set_attending(choice)),
            PLUS_ONE_FIELD => Some(self.store.set_plus_one(choice)),
            _ => None,
        }
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.document.borrow_mut().submit_control_mut().submit()
    }
}

/// The carousel bound to one page; writes each rendered image into its container.
#[derive(Debug)]
pub struct GalleryPage {
    viewer: ImageViewer,
    document: SharedDocument,
}

impl GalleryPage {
    /// Binds the viewer and renders the first image right away.
    pub fn new(viewer: ImageViewer, document: SharedDocument) -> Self {
        let page = Self { viewer, document };
        page.render(page.viewer.current());
        page
    }

    pub fn viewer(&self) -> &ImageViewer {
        &self.viewer
    }

    /// `keyup` on the document. Returns whether the key was recognised.
    pub fn on_key_up(&mut self, key_code: u32) -> bool {
        match self.viewer.handle_key_code(key_code) {
            Some(markup) => {
                self.render(markup);
                true
            }
            None => false,
        }
    }

    fn render(&self, markup: ImageMarkup) {
        self.document
            .borrow_mut()
            .set_inner_html(markup.container_id(), markup.html());
    }
}
