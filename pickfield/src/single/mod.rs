//! Single-select dropdown text field.

mod events;
mod state;

pub use state::{DropdownField, DropdownFieldId, FieldState};
