use crate::keyboard::{Key, Modifiers};

/// A keyboard event.
///
/// _**Note:** This type is largely incomplete! If you need to track
/// additional events, feel free to open an issue and share your use case!_
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard key was pressed.
    KeyPressed {
        /// The key pressed.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },

    /// A keyboard key was released.
    KeyReleased {
        /// The key released.
        key: Key,

        /// The state of the modifier keys.
        modifiers: Modifiers,
    },
}

impl Event {
    /// Creates a [`Event::KeyPressed`] without any modifiers.
    pub fn pressed(key: impl Into<Key>) -> Self {
        Self::KeyPressed {
            key: key.into(),
            modifiers: Modifiers::empty(),
        }
    }
}
