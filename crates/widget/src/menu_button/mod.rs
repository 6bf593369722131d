//! A [`MenuButton`] opens a popup of action items.
//!
//! The widget follows the WAI-ARIA menu button pattern: a trigger button
//! toggles a popup with role `menu`, and the items inside of it can be
//! navigated with the arrow keys and activated with Enter, Space, or a click.
//!
//! # Example
//!
//! ```
//! use icy_menu_button_widget::core::{Document, Role};
//! use icy_menu_button_widget::menu_button::{self, MenuButton};
//!
//! let mut document = Document::new();
//! let root = document.root();
//! let container = document.insert(root, Role::GenericContainer, "");
//! let _trigger = document.insert(container, Role::Button, "Actions");
//! let menu = document.insert(container, Role::Menu, "");
//!
//! for label in ["Action 1", "Action 2", "Action 3"] {
//!     let _ = document.insert(menu, Role::MenuItem, label);
//! }
//!
//! let menu_button = MenuButton::bind(&mut document, container, |item: &menu_button::Item| {
//!     item.label().to_owned()
//! })?;
//!
//! assert!(!menu_button.is_open());
//! assert_eq!(menu_button.items().len(), 3);
//! # Ok::<(), menu_button::Error>(())
//! ```
mod item;
mod widget;

pub mod state;
pub mod style;

pub use item::{Item, first_char};
pub use state::{Edge, Focus, Interaction, Outcome, Popup, State};
pub use style::{Status, Style};
pub use widget::{MenuButton, Part};

use crate::core::ElementId;

/// An error produced while binding a [`MenuButton`] to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The container element does not exist.
    #[error("element {0} does not exist")]
    UnknownElement(ElementId),

    /// The container has no element with role `button`.
    #[error("menu button {container} has no trigger button")]
    MissingTrigger {
        /// The container element.
        container: ElementId,
    },

    /// The container has no element with role `menu`.
    #[error("menu button {container} has no popup menu")]
    MissingPopup {
        /// The container element.
        container: ElementId,
    },

    /// The container has no element with role `menuitem`.
    #[error("menu button {container} has no menu items")]
    NoItems {
        /// The container element.
        container: ElementId,
    },
}
