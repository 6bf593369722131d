//! Handle events of a user interface.
use crate::keyboard;
use crate::mouse;

/// A user interface event.
///
/// Events are always delivered together with the element they target.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event, targeting the focused element.
    Keyboard(keyboard::Event),

    /// A mouse event, targeting the element under the pointer.
    Mouse(mouse::Event),

    /// A focus event, targeting the element that gained or lost focus.
    Focus(Focus),
}

/// A focus change notification.
///
/// Like `focusin` and `focusout` in the DOM, these are seen by every ancestor
/// of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The target gained focus.
    Gained,

    /// The target lost focus.
    Lost,
}

impl From<keyboard::Event> for Event {
    fn from(event: keyboard::Event) -> Self {
        Self::Keyboard(event)
    }
}

impl From<mouse::Event> for Event {
    fn from(event: mouse::Event) -> Self {
        Self::Mouse(event)
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any widget.
    #[default]
    Ignored,

    /// The [`Event`] was handled and processed by a widget.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use icy_menu_button_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
