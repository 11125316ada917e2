use std::fmt;

use tracing::debug;

use super::{
    Choice, FieldFlags, FormVariant, derive_flags,
    flags::{single_level_attending, single_level_plus_one},
};

/// Receives the flags after every change event, in registration order.
pub trait FlagsObserver {
    fn flags_changed(&mut self, flags: &FieldFlags);
}

impl<F> FlagsObserver for F
where
    F: FnMut(&FieldFlags),
{
    fn flags_changed(&mut self, flags: &FieldFlags) {
        self(flags)
    }
}

/// Reactive store for the two RSVP radio groups.
pub struct RsvpStore {
    variant: FormVariant,
    attending: Choice,
    plus_one: Choice,
    flags: FieldFlags,
    observers: Vec<Box<dyn FlagsObserver>>,
}

impl fmt::Debug for RsvpStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsvpStore")
            .field("variant", &self.variant)
            .field("attending", &self.attending)
            .field("plus_one", &self.plus_one)
            .field("flags", &self.flags)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for RsvpStore {
    fn default() -> Self {
        Self::new(FormVariant::default())
    }
}

impl RsvpStore {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            attending: Choice::Unset,
            plus_one: Choice::Unset,
            flags: FieldFlags::HIDDEN,
            observers: Vec::new(),
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn attending(&self) -> Choice {
        self.attending
    }

    pub fn plus_one(&self) -> Choice {
        self.plus_one
    }

    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    pub fn subscribe(&mut self, observer: impl FlagsObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Change event on the `Attending` group.
    pub fn set_attending(&mut self, choice: Choice) -> FieldFlags {
        self.attending = choice;
        self.flags = match self.variant {
            FormVariant::TwoLevel => derive_flags(self.attending, self.plus_one),
            FormVariant::SingleLevel => single_level_attending(self.flags, choice),
        };
        self.publish("Attending")
    }

    /// Change event on the `PlusOne` group.
    pub fn set_plus_one(&mut self, choice: Choice) -> FieldFlags {
        self.plus_one = choice;
        self.flags = match self.variant {
            FormVariant::TwoLevel => derive_flags(self.attending, self.plus_one),
            FormVariant::SingleLevel => single_level_plus_one(self.flags, choice),
        };
        self.publish("PlusOne")
    }

    /// Page load: both groups back to unchecked, flags recomputed once.
    pub fn reset(&mut self) -> FieldFlags {
        self.attending = Choice::Unset;
        self.plus_one = Choice::Unset;
        self.flags = match self.variant {
            FormVariant::TwoLevel => derive_flags(self.attending, self.plus_one),
            FormVariant::SingleLevel => {
                let flags = single_level_attending(FieldFlags::HIDDEN, self.attending);
                single_level_plus_one(flags, self.plus_one)
            }
        };
        self.publish("reset")
    }

    fn publish(&mut self, source: &str) -> FieldFlags {
        let flags = self.flags;
        debug!(
            source,
            variant = self.variant.as_str(),
            attending = %self.attending,
            plus_one = %self.plus_one,
            ?flags,
            "rsvp flags recomputed"
        );
        for observer in &mut self.observers {
            observer.flags_changed(&flags);
        }
        flags
    }
}
