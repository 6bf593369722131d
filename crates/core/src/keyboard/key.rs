//! Identify keyboard keys.
use smol_str::SmolStr;

/// A key on the keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<C = SmolStr> {
    /// A key with an established name.
    Named(Named),

    /// A key string that corresponds to the character typed by the user, taking into account the
    /// user’s current locale setting, and any system-level keyboard mapping overrides that are in
    /// effect.
    Character(C),

    /// An unidentified key.
    Unidentified,
}

impl Key {
    /// Convert `Key::Character(SmolStr)` to `Key::Character(&str)` so you can more easily match on
    /// `Key`. All other variants remain unchanged.
    pub fn as_ref(&self) -> Key<&str> {
        match self {
            Self::Named(named) => Key::Named(*named),
            Self::Character(c) => Key::Character(c.as_ref()),
            Self::Unidentified => Key::Unidentified,
        }
    }

    /// Parses a key from the value of a DOM `KeyboardEvent.key`.
    ///
    /// Legacy names produced by older browsers are normalized.
    ///
    /// ```
    /// use icy_menu_button_core::keyboard::key::{Key, Named};
    ///
    /// assert_eq!(Key::from_dom("Down"), Key::Named(Named::ArrowDown));
    /// assert_eq!(Key::from_dom("Esc"), Key::Named(Named::Escape));
    /// assert_eq!(Key::from_dom(" "), Key::Named(Named::Space));
    /// assert_eq!(Key::from_dom("a"), Key::Character("a".into()));
    /// ```
    pub fn from_dom(value: &str) -> Self {
        let named = match value {
            "ArrowUp" | "Up" => Named::ArrowUp,
            "ArrowDown" | "Down" => Named::ArrowDown,
            "ArrowLeft" | "Left" => Named::ArrowLeft,
            "ArrowRight" | "Right" => Named::ArrowRight,
            "Enter" => Named::Enter,
            " " | "Spacebar" => Named::Space,
            "Escape" | "Esc" => Named::Escape,
            "Tab" => Named::Tab,
            "Home" => Named::Home,
            "End" => Named::End,
            "PageUp" => Named::PageUp,
            "PageDown" => Named::PageDown,
            "Backspace" => Named::Backspace,
            "Delete" | "Del" => Named::Delete,
            "Shift" => Named::Shift,
            "Control" => Named::Control,
            "Alt" => Named::Alt,
            "Meta" | "OS" => Named::Super,
            "" | "Unidentified" => return Self::Unidentified,
            other => return Self::Character(SmolStr::new(other)),
        };

        Self::Named(named)
    }

    /// Returns the single lowercased character typed by this key, if any.
    ///
    /// Used for type-ahead matching.
    pub fn to_char(&self) -> Option<char> {
        let Self::Character(c) = self else {
            return None;
        };

        let mut chars = c.chars();
        let first = chars.next()?;

        if chars.next().is_some() || first.is_whitespace() || first.is_control() {
            return None;
        }

        first.to_lowercase().next()
    }
}

impl From<Named> for Key {
    fn from(named: Named) -> Self {
        Self::Named(named)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::from_dom(value)
    }
}

/// A named key.
///
/// This is a subset of the key values of the [UI Events specification] that
/// the menu button and its hosts care about.
///
/// [UI Events specification]: https://www.w3.org/TR/uievents-key/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Named {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Tab,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Shift,
    Control,
    Alt,
    Super,
}
