use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use super::{ATTENDING_FIELD, Choice, FULL_NAME_FIELD, PLUS_ONE_FIELD, PLUS_ONE_NAME_FIELD};

/// Characters left untouched by `application/x-www-form-urlencoded`.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

/// What the RSVP form posts, in the shape the server reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RsvpSubmission {
    pub full_name: String,
    pub attending: bool,
    pub plus_one: bool,
    pub plus_one_name: String,
    #[serde(skip)]
    raw_attending: Choice,
    #[serde(skip)]
    raw_plus_one: Choice,
}

impl RsvpSubmission {
    pub fn new(
        full_name: impl Into<String>,
        attending: Choice,
        plus_one: Choice,
        plus_one_name: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            attending: attending.is_yes(),
            plus_one: plus_one.is_yes(),
            plus_one_name: plus_one_name.into(),
            raw_attending: attending,
            raw_plus_one: plus_one,
        }
    }

    /// Confirmation line shown after saving, e.g. `Ada Lovelace (+Charles)`.
    pub fn guest_line(&self) -> String {
        if self.plus_one {
            format!("{} (+{})", self.full_name, self.plus_one_name)
        } else {
            self.full_name.clone()
        }
    }

    /// Encode like a browser posting the form: unchecked radios are left
    /// out, text inputs are always sent (even inside a hidden group).
    pub fn encode_form(&self) -> String {
        let mut pairs = vec![(FULL_NAME_FIELD, Some(self.full_name.as_str()))];
        pairs.push((ATTENDING_FIELD, self.raw_attending.form_value()));
        pairs.push((PLUS_ONE_FIELD, self.raw_plus_one.form_value()));
        pairs.push((PLUS_ONE_NAME_FIELD, Some(self.plus_one_name.as_str())));
        pairs
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| format!("{name}={}", encode(value))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE)
        .to_string()
        .replace(' ', "+")
}
