//! Key handling for the dropdown field.

use log::trace;

use crate::event::{EventResult, Key, KeyCombo};

use super::DropdownField;

impl DropdownField {
    /// Handle a key press while the field has focus.
    ///
    /// Typing over a confirmed value restarts the search before the key is
    /// applied, so the first keystroke replaces the old value.
    pub fn handle_key(&mut self, key: impl Into<KeyCombo>) -> EventResult {
        let key = key.into();
        // Ctrl/alt chords belong to the host
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
                    self.toggle_dropdown();
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
                if self.is_confirmed() {
                    self.tap();
                }
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                if self.is_confirmed() {
                    self.tap();
                } else {
                    self.backspace();
                }
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
    use crate::event::{EventResult, Key, KeyCombo};

    use super::DropdownField;

    fn field(options: &[&str]) -> (DropdownField, Binding<String>) {
        let text = Binding::new(String::new());
        let options = options.iter().map(|s| s.to_string()).collect();
        let field =
            DropdownField::new(text.clone(), Binding::new(false), options, FieldConfig::default())
                .unwrap();
        (field, text)
    }

    #[test]
    fn test_typing_then_enter_confirms_top() {
        let (mut field, text) = field(&["Apple", "Apricot", "Banana"]);
        field.handle_key(Key::Char('a'));
        field.handle_key(Key::Char('p'));
        field.handle_key(Key::Char('r'));
        assert_eq!(field.handle_key(Key::Enter), EventResult::Consumed);
        assert_eq!(text.get(), "Apricot");
        assert!(field.is_confirmed());
    }

    #[test]
    fn test_typing_over_confirmed_value_restarts() {
        let (mut field, text) = field(&["Apple", "Banana"]);
        field.select("Apple");
        field.handle_key(Key::Char('b'));
        assert_eq!(text.get(), "b");
        assert!(!field.is_confirmed());
        assert!(field.is_open());
    }

    #[test]
    fn test_backspace_on_confirmed_clears() {
        let (mut field, text) = field(&["Apple", "Banana"]);
        field.select("Banana");
        field.handle_key(Key::Backspace);
        assert_eq!(text.get(), "");
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let (mut field, _) = field(&["Apple", "Banana"]);
        assert_eq!(field.handle_key(Key::Escape), EventResult::Ignored);
        field.handle_key(Key::Down);
        assert!(field.is_open());
        assert_eq!(field.handle_key(Key::Escape), EventResult::Consumed);
        assert!(!field.is_open());
    }

    #[test]
    fn test_chords_ignored() {
        let (mut field, text) = field(&["Apple"]);
        let result = field.handle_key(KeyCombo::key(Key::Char('a')).ctrl());
        assert_eq!(result, EventResult::Ignored);
        assert_eq!(text.get(), "");
    }
}
