//! Keystroke edit model.
//!
//! Turns key presses into replacement text. Edits always apply at the end of
//! the value; the field holds no caret.

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, Super elsewhere.
    pub platform: bool,
}

/// An edit requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(String),
    Backspace,
    DeleteWordBackward,
    ClearAll,
}

impl Edit {
    /// Classify a key press. `key` is the key name, `key_char` the text it
    /// would type, if any.
    pub fn from_keystroke(
        key: &str,
        key_char: Option<&str>,
        modifiers: KeyModifiers,
    ) -> Option<Self> {
        let command = modifiers.control || modifiers.platform;

        match key {
            "backspace" if command || modifiers.alt => Some(Edit::DeleteWordBackward),
            "backspace" => Some(Edit::Backspace),
            "u" if command => Some(Edit::ClearAll),
            "enter" | "tab" | "escape" => None,
            "space" if !command && !modifiers.alt => Some(Edit::Insert(" ".to_string())),
            _ if command || modifiers.alt => None,
            _ => {
                if let Some(text) = key_char.filter(|t| !t.is_empty()) {
                    return Some(Edit::Insert(text.to_string()));
                }
                // Single printable key without key_char
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => {
                        let c = if modifiers.shift { c.to_ascii_uppercase() } else { c };
                        Some(Edit::Insert(c.to_string()))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Apply the edit to `value`, returning the new text.
    pub fn apply(&self, value: &str) -> String {
        match self {
            Edit::Insert(text) => {
                let mut out = String::with_capacity(value.len() + text.len());
                out.push_str(value);
                // Single-line field
                out.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                out
            }
            Edit::Backspace => {
                let mut out = value.to_string();
                out.pop();
                out
            }
            Edit::DeleteWordBackward => {
                let trimmed = value.trim_end_matches(char::is_whitespace);
                match trimmed.rfind(char::is_whitespace) {
                    Some(idx) => {
                        let ws_len = trimmed[idx..].chars().next().map_or(1, char::len_utf8);
                        trimmed[..idx + ws_len].to_string()
                    }
                    None => String::new(),
                }
            }
            Edit::ClearAll => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> KeyModifiers {
        KeyModifiers::default()
    }

    fn ctrl() -> KeyModifiers {
        KeyModifiers {
            control: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_insert_from_key_char() {
        let edit = Edit::from_keystroke("a", Some("a"), plain()).unwrap();
        assert_eq!(edit, Edit::Insert("a".into()));
        assert_eq!(edit.apply("ab"), "aba");
    }

    #[test]
    fn test_insert_fallback_shift() {
        let shift = KeyModifiers {
            shift: true,
            ..Default::default()
        };
        assert_eq!(
            Edit::from_keystroke("q", None, shift),
            Some(Edit::Insert("Q".into()))
        );
    }

    #[test]
    fn test_space() {
        let edit = Edit::from_keystroke("space", None, plain()).unwrap();
        assert_eq!(edit.apply("a"), "a ");
    }

    #[test]
    fn test_named_keys_ignored() {
        assert_eq!(Edit::from_keystroke("left", None, plain()), None);
        assert_eq!(Edit::from_keystroke("enter", None, plain()), None);
        assert_eq!(Edit::from_keystroke("tab", None, plain()), None);
    }

    #[test]
    fn test_shortcuts_not_typed() {
        assert_eq!(Edit::from_keystroke("c", Some("c"), ctrl()), None);
    }

    #[test]
    fn test_backspace_multibyte() {
        let edit = Edit::from_keystroke("backspace", None, plain()).unwrap();
        assert_eq!(edit.apply("café"), "caf");
        assert_eq!(edit.apply(""), "");
    }

    #[test]
    fn test_delete_word_backward() {
        let edit = Edit::from_keystroke("backspace", None, ctrl()).unwrap();
        assert_eq!(edit, Edit::DeleteWordBackward);
        assert_eq!(edit.apply("hello big world"), "hello big ");
        assert_eq!(edit.apply("hello   "), "");
        assert_eq!(edit.apply("one two  "), "one ");
        assert_eq!(edit.apply(""), "");
    }

    #[test]
    fn test_clear_all() {
        let edit = Edit::from_keystroke("u", None, ctrl()).unwrap();
        assert_eq!(edit.apply("anything"), "");
    }

    #[test]
    fn test_insert_strips_newlines() {
        let edit = Edit::Insert("a\nb".into());
        assert_eq!(edit.apply(""), "ab");
    }
}
