//! Bounded multi-select chip input.

mod events;
mod state;

pub use state::{MultiSelect, MultiSelectId};
