//! Searchable dropdown fields: a single-select text field and a bounded
//! multi-select chip input, both driven by one option ranker.
//!
//! The widgets here are pure state machines. They own no rendering; a
//! presentation layer reads [`Row`]s and the [`Indicator`], feeds key or
//! pointer input back in, and drains [`FieldEvent`]s to know when to redraw.

pub mod binding;
pub mod color;
pub mod config;
pub mod event;
pub mod indicator;
pub mod layout;
pub mod multi;
pub mod normalize;
pub mod rank;
pub mod rows;
pub mod single;

pub use binding::Binding;
pub use color::{Appearance, Color, Palette};
pub use config::{ConfigError, FieldConfig, PrefillPolicy};
pub use event::{EventResult, FieldEvent, Key, KeyCombo, Modifiers};
pub use indicator::Indicator;
pub use layout::{FixedLayoutHint, LayoutHint, NoLayoutHint};
pub use multi::{MultiSelect, MultiSelectId};
pub use normalize::normalize;
pub use rank::{FuzzyRanker, Ranker, TieredRanker, rank};
pub use rows::Row;
pub use single::{DropdownField, DropdownFieldId, FieldState};

pub mod prelude {
    pub use crate::binding::Binding;
    pub use crate::config::{FieldConfig, PrefillPolicy};
    pub use crate::event::{EventResult, FieldEvent, Key, KeyCombo};
    pub use crate::indicator::Indicator;
    pub use crate::multi::MultiSelect;
    pub use crate::rank::{Ranker, rank};
    pub use crate::rows::Row;
    pub use crate::single::DropdownField;
}
