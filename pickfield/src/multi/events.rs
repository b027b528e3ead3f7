//! Key handling for the multi-select.

use log::trace;

use crate::event::{EventResult, Key, KeyCombo};

use super::MultiSelect;

impl MultiSelect {
    /// Handle a key press while the input has focus.
    pub fn handle_key(&mut self, key: impl Into<KeyCombo>) -> EventResult {
        let key = key.into();
        if key.is_chord() {
            return EventResult::Ignored;
        }
        trace!("{}: key {:?}", self.id(), key.key);

        match key.key {
            Key::Enter => {
                self.submit();
                EventResult::Consumed
            }
            Key::Escape => {
                if self.is_open() {
                    self.end_editing();
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Down => {
                if !self.is_open() {
                    self.begin_editing();
                }
                EventResult::Consumed
            }
            Key::Char(c) => {
                if !self.accepts_input() {
                    return EventResult::Ignored;
                }
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.backspace();
                EventResult::Consumed
            }
            Key::Tab | Key::Up => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::binding::Binding;
    use crate::config::FieldConfig;
    use crate::event::{EventResult, Key};

    use super::MultiSelect;

    #[test]
    fn test_type_and_enter_adds_top_match() {
        let selected = Binding::new(Vec::new());
        let options = vec!["Rust".to_string(), "Ruby".to_string(), "Go".to_string()];
        let mut multi =
            MultiSelect::new(Binding::new(false), selected.clone(), options, FieldConfig::default())
                .unwrap();

        multi.handle_key(Key::Char('r'));
        multi.handle_key(Key::Char('u'));
        multi.handle_key(Key::Char('b'));
        assert_eq!(multi.handle_key(Key::Enter), EventResult::Consumed);

        assert_eq!(selected.get(), vec!["Ruby".to_string()]);
        assert_eq!(multi.query(), "");
    }

    #[test]
    fn test_chars_ignored_at_capacity() {
        let selected = Binding::new(vec!["Go".to_string()]);
        let options = vec!["Go".to_string(), "Rust".to_string()];
        let config = FieldConfig::default().max_selections(1);
        let mut multi = MultiSelect::new(Binding::new(false), selected, options, config).unwrap();
        multi.appear();

        assert_eq!(multi.handle_key(Key::Char('r')), EventResult::Ignored);
        assert_eq!(multi.query(), "");
    }
}
