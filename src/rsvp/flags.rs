use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Choice;

/// Visibility and `required` state of the plus-one fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldFlags {
    pub show_plus_one_section: bool,
    pub show_plus_one_name: bool,
    pub plus_one_required: bool,
    pub plus_one_name_required: bool,
}

impl FieldFlags {
    pub const HIDDEN: FieldFlags = FieldFlags {
        show_plus_one_section: false,
        show_plus_one_name: false,
        plus_one_required: false,
        plus_one_name_required: false,
    };

    pub fn as_tuple(&self) -> (bool, bool, bool, bool) {
        (
            self.show_plus_one_section,
            self.show_plus_one_name,
            self.plus_one_required,
            self.plus_one_name_required,
        )
    }
}

/// Two-level derivation: the name row depends on both groups.
pub fn derive_flags(attending: Choice, plus_one: Choice) -> FieldFlags {
    let attending = attending.is_yes();
    let bringing = attending && plus_one.is_yes();
    FieldFlags {
        show_plus_one_section: attending,
        show_plus_one_name: bringing,
        plus_one_required: attending,
        plus_one_name_required: bringing,
    }
}

/// How a change on one radio group propagates to the plus-one fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    /// Every change re-derives all four flags from both groups.
    #[default]
    TwoLevel,
    /// Each group only drives its own dependent row.
    SingleLevel,
}

impl FormVariant {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "two-level" | "two_level" | "twolevel" => Some(FormVariant::TwoLevel),
            "single-level" | "single_level" | "singlelevel" => Some(FormVariant::SingleLevel),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormVariant::TwoLevel => "two-level",
            FormVariant::SingleLevel => "single-level",
        }
    }
}

pub(super) fn single_level_attending(mut flags: FieldFlags, attending: Choice) -> FieldFlags {
    flags.show_plus_one_section = attending.is_yes();
    flags.plus_one_required = attending.is_yes();
    flags
}

pub(super) fn single_level_plus_one(mut flags: FieldFlags, plus_one: Choice) -> FieldFlags {
    flags.show_plus_one_name = plus_one.is_yes();
    flags.plus_one_name_required = plus_one.is_yes();
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Choice; 3] = [Choice::Unset, Choice::Yes, Choice::No];

    #[test]
    fn not_attending_hides_everything() {
        for plus_one in ALL {
            assert_eq!(derive_flags(Choice::No, plus_one), FieldFlags::HIDDEN);
            assert_eq!(derive_flags(Choice::Unset, plus_one), FieldFlags::HIDDEN);
        }
    }

    #[test]
    fn attending_alone_shows_section() {
        let flags = derive_flags(Choice::Yes, Choice::No);
        assert_eq!(flags.as_tuple(), (true, false, true, false));
        let flags = derive_flags(Choice::Yes, Choice::Unset);
        assert_eq!(flags.as_tuple(), (true, false, true, false));
    }

    #[test]
    fn attending_with_guest_requires_name() {
        let flags = derive_flags(Choice::Yes, Choice::Yes);
        assert_eq!(flags.as_tuple(), (true, true, true, true));
    }

    #[test]
    fn single_level_updates_only_its_own_row() {
        let flags = single_level_plus_one(FieldFlags::HIDDEN, Choice::Yes);
        assert_eq!(flags.as_tuple(), (false, true, false, true));
        let flags = single_level_attending(flags, Choice::Yes);
        assert_eq!(flags.as_tuple(), (true, true, true, true));
        let flags = single_level_attending(flags, Choice::No);
        assert_eq!(flags.as_tuple(), (false, true, false, true));
    }

    #[test]
    fn variant_names_parse() {
        assert_eq!(FormVariant::parse("two-level"), Some(FormVariant::TwoLevel));
        assert_eq!(
            FormVariant::parse(" Single_Level "),
            Some(FormVariant::SingleLevel)
        );
        assert_eq!(FormVariant::parse("three"), None);
        assert_eq!(FormVariant::SingleLevel.as_str(), "single-level");
    }
}
