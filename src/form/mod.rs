mod actions;
mod field;
mod state;

pub use actions::{FormCommand, SubmitResult};
pub use field::{FieldId, TextInput};
pub use state::FormState;
