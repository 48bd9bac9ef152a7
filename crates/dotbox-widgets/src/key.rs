//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key press with the modifiers that must be held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key.
    pub code: KeyCode,
    /// Modifiers that must be held alongside it.
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key with Ctrl held.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// One or more key combinations bound to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Combinations that trigger the action.
    pub keys: Vec<KeyCombination>,
    /// Human-readable description, for help lines.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    /// Bind the given combinations.
    pub fn new(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Bind plain keys (no modifiers).
    pub fn keys(codes: &[KeyCode], description: impl Into<String>) -> Self {
        Self::new(
            codes.iter().copied().map(KeyCombination::new).collect(),
            description,
        )
    }

    /// Whether `event` triggers this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Enable or disable the binding.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// The character a key press types into a text field, if any.
///
/// Ctrl and Alt chords are commands, not text.
pub fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(c)
            if !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_binding_matches_any_modifiers() {
        let b = Binding::keys(&[KeyCode::Down], "next");
        assert!(b.matches(&press(KeyCode::Down, KeyModifiers::NONE)));
        assert!(b.matches(&press(KeyCode::Down, KeyModifiers::SHIFT)));
        assert!(!b.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_binding_requires_ctrl() {
        let b = Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('n'))], "next");
        assert!(b.matches(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&press(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_never_matches() {
        let b = Binding::keys(&[KeyCode::Enter], "select").enabled(false);
        assert!(!b.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn typed_char_skips_chords() {
        assert_eq!(typed_char(&press(KeyCode::Char('a'), KeyModifiers::NONE)), Some('a'));
        assert_eq!(typed_char(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some('A'));
        assert_eq!(typed_char(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), None);
        assert_eq!(typed_char(&press(KeyCode::Enter, KeyModifiers::NONE)), None);
    }
}
