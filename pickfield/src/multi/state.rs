//! Multi-select state.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace, warn};

use crate::binding::Binding;
use crate::color::Color;
use crate::config::{ConfigError, FieldConfig};
use crate::event::FieldEvent;
use crate::indicator::Indicator;
use crate::layout::{self, LayoutHint, NoLayoutHint};
use crate::rank::{Ranker, TieredRanker};
use crate::rows::{self, Row};

/// Unique identifier for a MultiSelect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiSelectId(usize);

impl MultiSelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for MultiSelectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__multi_select_{}", self.0)
    }
}

/// A searchable input collecting up to `max_selections` distinct values.
///
/// The bound selection list is the source of truth for membership: whenever
/// another holder writes it, the widget adopts the new list wholesale before
/// doing anything else. Lists that break the invariants (duplicates, more
/// entries than capacity) are trimmed and written back.
///
/// # Example
///
/// ```
/// use pickfield::{Binding, FieldConfig, MultiSelect};
///
/// let selected = Binding::new(Vec::new());
/// let options = vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()];
/// let config = FieldConfig::new("Colors").max_selections(2);
/// let mut multi = MultiSelect::new(Binding::new(false), selected.clone(), options, config)?;
///
/// assert!(multi.add("Red"));
/// assert!(!multi.add("Red"));
/// assert!(multi.add("Blue"));
/// assert!(!multi.add("Green"));
/// assert_eq!(selected.get(), vec!["Red".to_string(), "Blue".to_string()]);
/// # Ok::<(), pickfield::ConfigError>(())
/// ```
pub struct MultiSelect {
    id: MultiSelectId,
    visible: Binding<bool>,
    selected: Binding<Vec<String>>,
    /// Chips as currently displayed
    display: Vec<String>,
    /// Version of `selected` that `display` reflects
    seen_version: Option<u64>,
    query: String,
    options: Vec<String>,
    config: FieldConfig,
    confirmed: bool,
    focused: bool,
    ranker: Box<dyn Ranker>,
    layout_hint: Box<dyn LayoutHint>,
    on_interaction: Option<Box<dyn FnMut() + Send>>,
    events: Vec<FieldEvent>,
    dirty: bool,
}

impl MultiSelect {
    /// Create a multi-select over `options` bound to the caller's
    /// visibility flag and selection list.
    pub fn new(
        visible: Binding<bool>,
        selected: Binding<Vec<String>>,
        options: Vec<String>,
        config: FieldConfig,
    ) -> Result<Self, ConfigError> {
        config.validate_multi()?;
        Ok(Self {
            id: MultiSelectId::new(),
            visible,
            selected,
            display: Vec::new(),
            seen_version: None,
            query: String::new(),
            options,
            config,
            confirmed: false,
            focused: false,
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

    /// Callback run once per added value, per removed value, and when
    /// editing begins or a search restarts.
    pub fn on_interaction(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_interaction = Some(Box::new(f));
        self
    }

    /// Get the unique ID for this widget.
    pub fn id(&self) -> MultiSelectId {
        self.id
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn capacity(&self) -> usize {
        self.config.max_selections
    }

    // -------------------------------------------------------------------------
    // Read state
    // -------------------------------------------------------------------------

    /// Current selections in selection order, including external writes not
    /// yet adopted.
    pub fn selections(&self) -> Vec<String> {
        if self.seen_version == Some(self.selected.version()) {
            self.display.clone()
        } else {
            self.selected.with(|list| sanitize(list, self.capacity()))
        }
    }

    /// Slots left before capacity.
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.selections().len())
    }

    /// Whether the text input is shown. It is hidden at capacity.
    pub fn accepts_input(&self) -> bool {
        self.remaining() > 0
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.visible.get()
    }

    /// True right after a value was added, until the query is edited.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
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
    // External sync
    // -------------------------------------------------------------------------

    /// Adopt the bound list on first display.
    pub fn appear(&mut self) {
        self.sync();
    }

    /// Adopt the bound selection list if another holder wrote it.
    ///
    /// Returns true when the bound list was re-read.
    pub fn sync(&mut self) -> bool {
        if self.seen_version == Some(self.selected.version()) {
            return false;
        }

        let external = self.selected.get();
        let sanitized = sanitize(&external, self.capacity());
        if sanitized.len() != external.len() {
            warn!(
                "{}: bound selection had {} entries, kept {} (capacity {}, duplicates dropped)",
                self.id,
                external.len(),
                sanitized.len(),
                self.capacity()
            );
            self.selected.set(sanitized.clone());
        }
        self.seen_version = Some(self.selected.version());

        if self.display != sanitized {
            debug!("{}: adopted external selection {:?}", self.id, sanitized);
            self.display = sanitized.clone();
            self.events.push(FieldEvent::Synced(sanitized));
            self.dirty = true;
        }
        true
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Add a value. Ignored at capacity or when already selected.
    ///
    /// On success the query is cleared; reaching capacity closes the
    /// dropdown and drops focus.
    pub fn add(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.sync();

        if self.display.len() >= self.capacity() {
            trace!("{}: at capacity, ignoring {:?}", self.id, value);
            return false;
        }
        if self.display.contains(&value) {
            trace!("{}: {:?} already selected", self.id, value);
            return false;
        }

        debug!("{}: adding {:?}", self.id, value);
        self.display.push(value.clone());
        self.selected.update(|list| list.push(value.clone()));
        self.seen_version = Some(self.selected.version());
        self.events.push(FieldEvent::Added(value));
        self.notify_interaction();

        self.write_query(String::new());
        self.confirmed = true;
        if self.display.len() >= self.capacity() {
            self.set_visible(false);
            self.focused = false;
        }
        self.dirty = true;
        true
    }

    /// Remove a value. Reopens the dropdown so a replacement can be picked.
    ///
    /// Returns false, changing nothing, when the value is not selected.
    pub fn remove(&mut self, value: &str) -> bool {
        self.sync();

        let Some(index) = self.display.iter().position(|v| v == value) else {
            trace!("{}: {:?} not selected, nothing to remove", self.id, value);
            return false;
        };

        debug!("{}: removing {:?}", self.id, value);
        self.display.remove(index);
        self.selected.update(|list| list.retain(|v| v != value));
        self.seen_version = Some(self.selected.version());
        self.events.push(FieldEvent::Removed(value.to_string()));
        self.set_visible(true);
        self.dirty = true;
        self.notify_interaction();
        true
    }

    /// Ranked options for the current query.
    pub fn ranked(&self) -> Vec<String> {
        self.ranker.rank(&self.query, &self.options)
    }

    /// Add the top-ranked option, or the raw query when adding is allowed
    /// and nothing ranks. An empty query just closes the dropdown.
    ///
    /// Returns the added value.
    pub fn submit(&mut self) -> Option<String> {
        self.sync();

        if self.query.is_empty() {
            self.set_visible(false);
            return None;
        }

        let candidate = match self.ranked().into_iter().next() {
            Some(top) => top,
            None if self.config.allow_add_new => self.query.clone(),
            None => {
                debug!("{}: submit with no match for {:?}", self.id, self.query);
                return None;
            }
        };

        if self.add(candidate.clone()) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Whether the "add new" row is offered for the current query.
    ///
    /// Hidden when some option, compared case-insensitively, starts with
    /// the query.
    pub fn can_add_new(&self) -> bool {
        if !self.config.allow_add_new || self.query.is_empty() {
            return false;
        }
        let needle = self.query.to_lowercase();
        !self
            .options
            .iter()
            .any(|option| option.to_lowercase().starts_with(&needle))
    }

    /// Add the typed query as a new value.
    pub fn add_new(&mut self) -> bool {
        if !self.can_add_new() {
            return false;
        }
        let query = self.query.clone();
        self.add(query)
    }

    // -------------------------------------------------------------------------
    // Focus and editing
    // -------------------------------------------------------------------------

    /// The text input gained focus.
    pub fn begin_editing(&mut self) {
        self.sync();
        self.focused = true;
        self.confirmed = false;
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

    /// Tap on the input: toggles the dropdown and clears any typed query.
    pub fn tap(&mut self) {
        self.sync();
        let open = !self.is_open();
        self.set_visible(open);
        self.focused = open;
        self.dirty = true;
        if !self.query.is_empty() {
            self.confirmed = false;
            self.write_query(String::new());
            self.notify_interaction();
        }
    }

    /// Replace the query as typed by the user. Ignored at capacity, where
    /// the input is hidden.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.sync();
        if !self.accepts_input() {
            trace!("{}: input hidden at capacity", self.id);
            return;
        }
        self.confirmed = false;
        self.focused = true;
        self.write_query(query.into());
        self.set_visible(true);
    }

    /// Append a typed character.
    pub fn insert_char(&mut self, c: char) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query);
    }

    /// Delete the last query character.
    pub fn backspace(&mut self) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Rows of the open dropdown. The add-new or no-match row leads.
    pub fn rows(&self) -> Vec<Row> {
        let ranked = self.ranked();
        let mut rows = Vec::with_capacity(ranked.len() + 1);

        if self.can_add_new() {
            rows.push(Row::AddNew {
                label: self.config.add_new_label(&self.query),
            });
        } else if !self.config.allow_add_new && !self.query.is_empty() && ranked.is_empty() {
            rows.push(Row::NoMatch {
                label: format!("{}: {}", self.config.no_match_text, self.query),
            });
        }

        rows.extend(rows::option_rows(ranked, &self.query));
        rows
    }

    /// State-driven indicator, ignoring any border override.
    pub fn indicator(&self) -> Indicator {
        Indicator::resolve(self.confirmed, self.query.is_empty(), self.is_open())
    }

    /// Border color. An override only replaces the idle color.
    pub fn border_color(&self) -> Color {
        let indicator = self.indicator();
        if !self.confirmed
            && indicator == Indicator::Neutral
            && let Some(color) = self.config.border_override
        {
            return color;
        }
        indicator.color(&self.config.palette)
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

    /// Check if the widget needs a redraw.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.selected.is_dirty() || self.visible.is_dirty()
    }

    /// Clear the dirty flag, including the bindings'.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.selected.clear_dirty();
        self.visible.clear_dirty();
    }

    fn write_query(&mut self, query: String) {
        if self.query != query {
            self.query = query.clone();
            self.events.push(FieldEvent::QueryChanged(query));
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

impl fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelect")
            .field("id", &self.id)
            .field("selections", &self.display)
            .field("query", &self.query)
            .field("open", &self.is_open())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// First occurrence of each value, at most `capacity` of them.
fn sanitize(list: &[String], capacity: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    list.iter()
        .filter(|v| seen.insert(v.as_str()))
        .take(capacity)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dedups_then_truncates() {
        let list: Vec<String> = ["a", "b", "a", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(sanitize(&list, 3), vec!["a", "b", "c"]);
        assert_eq!(sanitize(&list, 10), vec!["a", "b", "c", "d"]);
    }
}
