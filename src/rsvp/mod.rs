mod choice;
pub mod dom;
mod flags;
mod store;
mod submission;
mod submit;

pub use choice::Choice;
pub use flags::{FieldFlags, FormVariant, derive_flags};
pub use store::{FlagsObserver, RsvpStore};
pub use submission::RsvpSubmission;
pub use submit::{DEFAULT_PENDING_LABEL, DEFAULT_SUBMIT_LABEL, SubmitControl, SubmitOutcome};

/// Radio group whose change drives the plus-one fields.
pub const ATTENDING_FIELD: &str = "Attending";
pub const PLUS_ONE_FIELD: &str = "PlusOne";
pub const PLUS_ONE_NAME_FIELD: &str = "PlusOneName";
pub const FULL_NAME_FIELD: &str = "FullName";
