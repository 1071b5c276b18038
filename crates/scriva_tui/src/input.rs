//! Keyboard handling and key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// Input event from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Show help
    Help,
    /// Switch to the stats dashboard
    ViewStats,
    /// Switch to the style patterns view
    ViewPatterns,
    /// Switch to the profile metrics view
    ViewProfile,
    /// Switch to the reference samples view
    ViewSamples,
    /// Move down
    Down,
    /// Move up
    Up,
    /// Go to top
    GoTop,
    /// Go to bottom
    GoBottom,
    /// Expand or collapse the sample list
    ToggleExpand,
    /// Reload the snapshot from disk
    Reload,
    /// Unknown key
    Unknown,
}

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Key to action mappings
    bindings: HashMap<KeyCombo, InputEvent>,
}

/// Key combination (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The key code
    pub code: KeyCode,
    /// Modifiers (ctrl, alt, shift)
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Create a new key combination
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a plain key without modifiers
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a Ctrl+key combination
    #[must_use]
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Navigation
        bindings.insert(KeyCombo::key(KeyCode::Down), InputEvent::Down);
        bindings.insert(KeyCombo::key(KeyCode::Char('j')), InputEvent::Down);
        bindings.insert(KeyCombo::key(KeyCode::Up), InputEvent::Up);
        bindings.insert(KeyCombo::key(KeyCode::Char('k')), InputEvent::Up);
        bindings.insert(KeyCombo::key(KeyCode::Char('g')), InputEvent::GoTop);
        bindings.insert(KeyCombo::key(KeyCode::Char('G')), InputEvent::GoBottom);

        // View switching
        bindings.insert(KeyCombo::key(KeyCode::Char('1')), InputEvent::ViewStats);
        bindings.insert(KeyCombo::key(KeyCode::Char('2')), InputEvent::ViewPatterns);
        bindings.insert(KeyCombo::key(KeyCode::Char('3')), InputEvent::ViewProfile);
        bindings.insert(KeyCombo::key(KeyCode::Char('4')), InputEvent::ViewSamples);

        // Actions
        bindings.insert(KeyCombo::key(KeyCode::Enter), InputEvent::ToggleExpand);
        bindings.insert(KeyCombo::key(KeyCode::Char('e')), InputEvent::ToggleExpand);
        bindings.insert(KeyCombo::key(KeyCode::Char('r')), InputEvent::Reload);
        bindings.insert(KeyCombo::key(KeyCode::Char('?')), InputEvent::Help);

        // Quit
        bindings.insert(KeyCombo::key(KeyCode::Char('q')), InputEvent::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), InputEvent::Quit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('d')), InputEvent::Quit);

        Self { bindings }
    }
}

/// Input handler for terminal events
#[derive(Debug)]
pub struct InputHandler {
    /// Key bindings
    bindings: KeyBinding,
    /// Poll timeout
    timeout: Duration,
}

impl InputHandler {
    /// Create a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: KeyBinding::default(),
            timeout: Duration::from_millis(100),
        }
    }

    /// Create with custom key bindings
    #[must_use]
    pub fn with_bindings(bindings: KeyBinding) -> Self {
        Self {
            bindings,
            timeout: Duration::from_millis(100),
        }
    }

    /// Set poll timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the next input event
    ///
    /// # Errors
    ///
    /// Returns error if reading from terminal fails
    pub fn next_event(&self) -> Result<Option<InputEvent>, InputError> {
        if crossterm::event::poll(self.timeout)? {
            if let Event::Key(key) = crossterm::event::read()? {
                return Ok(Some(self.map_key(key)));
            }
        }
        Ok(None)
    }

    /// Map a KeyEvent to an InputEvent using key bindings
    fn map_key(&self, key: KeyEvent) -> InputEvent {
        let combo = KeyCombo::new(key.code, key.modifiers);
        self.bindings
            .bindings
            .get(&combo)
            .cloned()
            .unwrap_or(InputEvent::Unknown)
    }

    /// Check if an event should quit the app
    #[must_use]
    pub fn is_quit(&self, event: &InputEvent) -> bool {
        matches!(event, InputEvent::Quit)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Input-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),
    /// Terminal error
    #[error("terminal error")]
    Terminal,
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_combo_plain() {
        let combo = KeyCombo::key(KeyCode::Char('j'));
        assert_eq!(combo.code, KeyCode::Char('j'));
        assert!(combo.modifiers.is_empty());
    }

    #[test]
    fn test_key_combo_ctrl() {
        let combo = KeyCombo::ctrl(KeyCode::Char('c'));
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_default_bindings_views() {
        let binding = KeyBinding::default();
        assert_eq!(
            binding.bindings.get(&KeyCombo::key(KeyCode::Char('1'))),
            Some(&InputEvent::ViewStats)
        );
        assert_eq!(
            binding.bindings.get(&KeyCombo::key(KeyCode::Char('4'))),
            Some(&InputEvent::ViewSamples)
        );
    }

    #[test]
    fn test_default_bindings_toggle() {
        let binding = KeyBinding::default();
        assert_eq!(
            binding.bindings.get(&KeyCombo::key(KeyCode::Enter)),
            Some(&InputEvent::ToggleExpand)
        );
        assert_eq!(
            binding.bindings.get(&KeyCombo::key(KeyCode::Char('e'))),
            Some(&InputEvent::ToggleExpand)
        );
    }

    #[test]
    fn test_map_key_quit() {
        let handler = InputHandler::new();

        let quit_key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(handler.map_key(quit_key), InputEvent::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.map_key(ctrl_c), InputEvent::Quit);
    }

    #[test]
    fn test_map_key_unknown() {
        let handler = InputHandler::new();
        let unknown = KeyEvent::new(KeyCode::Null, KeyModifiers::empty());
        assert_eq!(handler.map_key(unknown), InputEvent::Unknown);
    }

    #[test]
    fn test_with_timeout() {
        let handler = InputHandler::new().with_timeout(Duration::from_millis(250));
        assert_eq!(handler.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_is_quit() {
        let handler = InputHandler::new();
        assert!(handler.is_quit(&InputEvent::Quit));
        assert!(!handler.is_quit(&InputEvent::Reload));
    }
}
