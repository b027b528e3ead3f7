//! Input and notification types.
//!
//! Widgets take input as [`KeyCombo`]s or direct method calls and report
//! what changed as [`FieldEvent`]s. Events are queued on the widget; the
//! presentation layer drains them after each interaction with
//! `take_events()` and redraws.

// =============================================================================
// Key input
// =============================================================================

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// Key codes the widgets respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Character key
    Char(char),
    /// Enter/Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
}

/// A key combination (key + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub key: Key,
    /// Modifier keys
    pub modifiers: Modifiers,
}

impl KeyCombo {
    /// Create a new key combo
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Create a key combo without modifiers
    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Add ctrl modifier
    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add alt modifier
    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// True for ctrl/alt chords, which the widgets leave to the host.
    pub(crate) fn is_chord(&self) -> bool {
        self.modifiers.ctrl || self.modifiers.alt
    }
}

impl From<Key> for KeyCombo {
    fn from(key: Key) -> Self {
        KeyCombo::key(key)
    }
}

// =============================================================================
// Results and notifications
// =============================================================================

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A state change reported by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Dropdown became visible.
    Opened,
    /// Dropdown was hidden.
    Closed,
    /// Query text changed.
    QueryChanged(String),
    /// Single-select confirmed a value.
    Confirmed(String),
    /// Multi-select gained a value.
    Added(String),
    /// Multi-select lost a value.
    Removed(String),
    /// Multi-select adopted an externally written selection list.
    Synced(Vec<String>),
}
