//! Dropdown field state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};

use crate::binding::Binding;
use crate::color::Color;
use crate::config::{ConfigError, FieldConfig, PrefillPolicy};
use crate::event::FieldEvent;
use crate::indicator::Indicator;
use crate::layout::{self, LayoutHint, NoLayoutHint};
use crate::rank::{Ranker, TieredRanker, has_exact_or_prefix};
use crate::rows::{self, Row};

/// Unique identifier for a DropdownField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownFieldId(usize);

impl DropdownFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for DropdownFieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__dropdown_field_{}", self.0)
    }
}

/// Coarse state of a dropdown field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Closed, empty, nothing confirmed.
    Idle,
    /// Searching: the dropdown is open or unconfirmed text is present.
    Editing,
    /// The text holds an accepted value.
    Confirmed,
}

/// A searchable single-select text field.
///
/// The query text and the dropdown visibility live in caller-owned
/// [`Binding`]s; the field never assumes it is the only writer. A value is
/// confirmed by picking an option, submitting, or adding free text, and the
/// confirmation lapses as soon as the text is written again by anyone.
///
/// # Example
///
/// ```
/// use pickfield::{Binding, DropdownField, FieldConfig};
///
/// let text = Binding::new(String::new());
/// let open = Binding::new(false);
/// let options = vec!["Apple".to_string(), "Banana".to_string()];
/// let mut field = DropdownField::new(text.clone(), open, options, FieldConfig::new("Fruit"))?;
///
/// field.begin_editing();
/// field.set_query("ban");
/// assert_eq!(field.submit().as_deref(), Some("Banana"));
/// assert_eq!(text.get(), "Banana");
/// # Ok::<(), pickfield::ConfigError>(())
/// ```
pub struct DropdownField {
    id: DropdownFieldId,
    text: Binding<String>,
    visible: Binding<bool>,
    options: Vec<String>,
    config: FieldConfig,
    /// Text binding version at the moment of confirmation
    confirmed_at: Option<u64>,
    focused: bool,
    appeared: bool,
    ranker: Box<dyn Ranker>,
    layout_hint: Box<dyn LayoutHint>,
    on_interaction: Option<Box<dyn FnMut() + Send>>,
    events: Vec<FieldEvent>,
    dirty: bool,
}

impl DropdownField {
    /// Create a field over `options`, reading and writing the given bindings.
    pub fn new(
        text: Binding<String>,
        visible: Binding<bool>,
        options: Vec<String>,
        config: FieldConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id: DropdownFieldId::new(),
            text,
            visible,
            options,
            config,
            confirmed_at: None,
            focused: false,
            appeared: false,
            ranker: Box::new(TieredRanker),
            layout_hint: Box::new(NoLayoutHint),
            on_interaction: None,
            events: Vec::new(),
            dirty: false,
        })
    }

    /// Replace the ranking strategy.
    pub fn with_ranker(mut self, ranker: impl Ranker + 'static) -> Self {
        self.ranker = Box::new(ranker);
        self
    }

    /// Provide keyboard height for list sizing.
    pub fn with_layout_hint(mut self, hint: impl LayoutHint + 'static) -> Self {
        self.layout_hint = Box::new(hint);
        self
    }

    /// Callback run on every user-initiated interaction (begin editing,
    /// restarting a search).
    pub fn on_interaction(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_interaction = Some(Box::new(f));
        self
    }

    /// Get the unique ID for this field.
    pub fn id(&self) -> DropdownFieldId {
        self.id
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Read state
    // -------------------------------------------------------------------------

    /// Current query / displayed text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn is_open(&self) -> bool {
        self.visible.get()
    }

    /// Whether the text holds a confirmed value.
    ///
    /// Lapses when the text binding is written after confirmation, whether
    /// by this field or by the caller.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_at == Some(self.text.version())
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn state(&self) -> FieldState {
        if self.is_confirmed() {
            FieldState::Confirmed
        } else if !self.is_open() && self.text.with(|t| t.is_empty()) {
            FieldState::Idle
        } else {
            FieldState::Editing
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Replace the candidate list.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Lifecycle and focus
    // -------------------------------------------------------------------------

    /// Apply the initial-display policy. Runs once; later calls do nothing.
    ///
    /// A field with exactly one option confirms it. Otherwise non-blank
    /// pre-filled text is handled per [`PrefillPolicy`].
    pub fn appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;

        if let [only] = self.options.as_slice() {
            let only = only.clone();
            debug!("{}: single option, auto-confirming {:?}", self.id, only);
            self.confirm(only);
            return;
        }

        let text = self.text.get();
        if text.trim().is_empty() {
            return;
        }

        match self.config.prefill {
            PrefillPolicy::Keep => self.confirm(text),
            PrefillPolicy::Submit => {
                if self.submit().is_none() {
                    debug!("{}: prefilled {:?} matches nothing, left unconfirmed", self.id, text);
                }
            }
        }
    }

    /// The text input gained focus.
    pub fn begin_editing(&mut self) {
        self.focused = true;
        self.confirmed_at = None;
        self.set_visible(true);
        self.dirty = true;
        self.notify_interaction();
    }

    /// The text input lost focus.
    pub fn end_editing(&mut self) {
        self.focused = false;
        self.set_visible(false);
        self.dirty = true;
    }

    /// Restart the search from a tap on filled text.
    ///
    /// Clears the text and reopens the dropdown. Returns false, doing
    /// nothing, when the text is already empty.
    pub fn tap(&mut self) -> bool {
        if self.text.with(|t| t.is_empty()) {
            return false;
        }
        debug!("{}: restarting search", self.id);
        self.confirmed_at = None;
        self.write_text(String::new());
        self.set_visible(true);
        self.focused = true;
        self.notify_interaction();
        true
    }

    /// Flip dropdown visibility. Focus follows the new visibility.
    pub fn toggle_dropdown(&mut self) {
        let open = !self.is_open();
        self.set_visible(open);
        self.focused = open;
        self.dirty = true;
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Replace the query text as typed by the user.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.confirmed_at = None;
        self.focused = true;
        self.write_text(query.into());
        self.set_visible(true);
    }

    /// Append a typed character.
    pub fn insert_char(&mut self, c: char) {
        let mut query = self.text.get();
        query.push(c);
        self.set_query(query);
    }

    /// Delete the last character.
    pub fn backspace(&mut self) {
        let mut query = self.text.get();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Ranked options for the current text.
    pub fn ranked(&self) -> Vec<String> {
        self.text.with(|text| self.ranker.rank(text, &self.options))
    }

    /// Confirm the top-ranked option, or the raw text when adding is allowed
    /// and nothing ranks. Returns the confirmed value.
    pub fn submit(&mut self) -> Option<String> {
        if let Some(top) = self.ranked().into_iter().next() {
            self.confirm(top.clone());
            return Some(top);
        }

        let text = self.text.get();
        if self.config.allow_add_new && !text.is_empty() {
            self.confirm(text.clone());
            return Some(text);
        }

        debug!("{}: submit with no match for {:?}", self.id, text);
        None
    }

    /// Confirm an option picked from the list.
    ///
    /// Returns false, changing nothing, when `option` is not one of the
    /// field's options. Free text goes through [`add_new`](Self::add_new).
    pub fn select(&mut self, option: &str) -> bool {
        if !self.options.iter().any(|o| o == option) {
            trace!("{}: {:?} is not an option, ignoring", self.id, option);
            return false;
        }
        self.confirm(option.to_string());
        true
    }

    /// Whether the "add new" row is offered for the current text.
    pub fn can_add_new(&self) -> bool {
        if !self.config.allow_add_new {
            return false;
        }
        self.text.with(|text| {
            !text.trim().is_empty() && !has_exact_or_prefix(text, &self.options)
        })
    }

    /// Confirm the typed text as a new value. Returns false when the add-new
    /// row is not offered.
    pub fn add_new(&mut self) -> bool {
        if !self.can_add_new() {
            return false;
        }
        let text = self.text.get();
        debug!("{}: adding new value {:?}", self.id, text);
        self.mark_confirmed(text);
        true
    }

    fn confirm(&mut self, value: String) {
        self.write_text(value.clone());
        self.mark_confirmed(value);
    }

    fn mark_confirmed(&mut self, value: String) {
        self.set_visible(false);
        self.focused = false;
        self.confirmed_at = Some(self.text.version());
        self.dirty = true;
        self.events.push(FieldEvent::Confirmed(value));
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Rows of the open dropdown.
    pub fn rows(&self) -> Vec<Row> {
        let text = self.text.get();
        let ranked = self.ranked();
        let nothing_ranked = ranked.is_empty();

        let mut rows: Vec<Row> = rows::option_rows(ranked, &text).collect();
        if self.can_add_new() {
            rows.push(Row::AddNew {
                label: self.config.add_new_label(&text),
            });
        } else if !self.config.allow_add_new && !text.is_empty() && nothing_ranked {
            rows.push(Row::NoMatch {
                label: self.config.no_match_text.clone(),
            });
        }
        rows
    }

    /// State-driven indicator, ignoring any border override.
    pub fn indicator(&self) -> Indicator {
        Indicator::resolve(
            self.is_confirmed(),
            self.text.with(|t| t.is_empty()),
            self.is_open(),
        )
    }

    /// Border color: the override when set, otherwise the indicator color.
    pub fn border_color(&self) -> Color {
        self.config
            .border_override
            .unwrap_or_else(|| self.indicator().color(&self.config.palette))
    }

    /// Maximum result-list height on a screen of `screen_height`.
    pub fn list_max_height(&self, screen_height: u16) -> u16 {
        layout::list_max_height(screen_height, self.layout_hint.as_ref())
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Drain queued change events.
    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if the field needs a redraw.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.text.is_dirty() || self.visible.is_dirty()
    }

    /// Clear the dirty flag, including the bindings'.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.text.clear_dirty();
        self.visible.clear_dirty();
    }

    fn write_text(&mut self, text: String) {
        let changed = self.text.with(|current| *current != text);
        if changed {
            self.text.set(text.clone());
            self.events.push(FieldEvent::QueryChanged(text));
            self.dirty = true;
        }
    }

    fn set_visible(&mut self, open: bool) {
        if self.visible.get() != open {
            self.visible.set(open);
            self.events.push(if open {
                FieldEvent::Opened
            } else {
                FieldEvent::Closed
            });
            self.dirty = true;
        }
    }

    fn notify_interaction(&mut self) {
        if let Some(callback) = self.on_interaction.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for DropdownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownField")
            .field("id", &self.id)
            .field("text", &self.text.get())
            .field("open", &self.is_open())
            .field("confirmed", &self.is_confirmed())
            .field("focused", &self.focused)
            .field("options", &self.options.len())
            .finish()
    }
}
