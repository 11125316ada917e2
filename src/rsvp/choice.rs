use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a yes/no radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[default]
    Unset,
    Yes,
    No,
}

impl Choice {
    /// Interpret the checked radio's value. Only the literal `yes` counts.
    pub fn from_form_value(value: Option<&str>) -> Self {
        match value {
            None => Choice::Unset,
            Some("yes") => Choice::Yes,
            Some(_) => Choice::No,
        }
    }

    pub fn from_checked(checked: bool) -> Self {
        if checked { Choice::Yes } else { Choice::No }
    }

    pub fn is_yes(self) -> bool {
        self == Choice::Yes
    }

    pub fn is_set(self) -> bool {
        self != Choice::Unset
    }

    pub fn form_value(self) -> Option<&'static str> {
        match self {
            Choice::Unset => None,
            Choice::Yes => Some("yes"),
            Choice::No => Some("no"),
        }
    }

    /// Cycle used by arrow keys: an unset group picks `yes` first.
    pub fn toggled(self) -> Self {
        match self {
            Choice::Unset | Choice::No => Choice::Yes,
            Choice::Yes => Choice::No,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_value().unwrap_or("unset"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_yes_is_yes() {
        assert_eq!(Choice::from_form_value(Some("yes")), Choice::Yes);
        assert_eq!(Choice::from_form_value(Some("YES")), Choice::No);
        assert_eq!(Choice::from_form_value(Some("no")), Choice::No);
        assert_eq!(Choice::from_form_value(None), Choice::Unset);
    }

    #[test]
    fn toggling_from_unset_selects_yes() {
        assert_eq!(Choice::Unset.toggled(), Choice::Yes);
        assert_eq!(Choice::Yes.toggled(), Choice::No);
        assert_eq!(Choice::No.toggled(), Choice::Yes);
    }
}
