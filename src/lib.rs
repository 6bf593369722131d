//! icy_menu_button is an accessible menu button widget.
//!
//! A menu button is a trigger that toggles a popup of action items. It
//! follows the WAI-ARIA menu button pattern: the trigger advertises whether
//! the popup is expanded, exactly one item is reachable with Tab, the arrow
//! keys move through the items, and Enter, Space, or a click activate them.
//!
//! The widget is headless. It binds to a container of a [`Document`], keeps
//! its own [`State`], and writes that state back into the document every time
//! it changes. This keeps every interaction testable without a windowing
//! system.
//!
//! # The Pocket Guide
//! Build a [`Document`] with a container holding a trigger, a popup, and
//! some items:
//!
//! ```
//! use icy_menu_button::{Document, Role};
//!
//! let mut document = Document::new();
//! let root = document.root();
//!
//! let container = document.insert(root, Role::GenericContainer, "");
//! document.add_class(container, "menu-button-actions");
//!
//! let _ = document.insert(container, Role::Button, "Actions");
//! let menu = document.insert(container, Role::Menu, "");
//!
//! for label in ["Action 1", "Action 2", "Action 3"] {
//!     let _ = document.insert(menu, Role::MenuItem, label);
//! }
//! # let _ = container;
//! ```
//!
//! Mount a menu button on it, mapping the activated [`Item`] to your own
//! `Message`:
//!
//! ```
//! # use icy_menu_button::{Document, Role};
//! # let mut document = Document::new();
//! # let root = document.root();
//! # let container = document.insert(root, Role::GenericContainer, "");
//! # document.add_class(container, "menu-button-actions");
//! # let _ = document.insert(container, Role::Button, "Actions");
//! # let menu = document.insert(container, Role::Menu, "");
//! # let _ = document.insert(menu, Role::MenuItem, "Action 1");
//! use icy_menu_button::{Item, Page};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     Action(String),
//! }
//!
//! let mut page = Page::new(document);
//! let ids = page.mount_all("menu-button-actions", |item: &Item| {
//!     Message::Action(item.label().to_owned())
//! })?;
//!
//! assert_eq!(ids.len(), 1);
//! # Ok::<(), icy_menu_button::Error>(())
//! ```
//!
//! Then feed it targeted [`Event`]s with [`Page::dispatch`] and handle the
//! messages it produces. The [`Settings`] of each menu button can be
//! configured, and loaded from a RON file with the `serde` feature.
//!
//! [`Event`]: event::Event
pub use icy_menu_button_core as core;
pub use icy_menu_button_runtime as runtime;
pub use icy_menu_button_widget as widget;

pub use crate::core::accessibility;
pub use crate::core::event;
pub use crate::core::keyboard;
pub use crate::core::mouse;
pub use crate::core::settings;
pub use crate::core::{Document, Element, ElementId, Role, Settings, Shell};

pub use runtime::page::Id;
pub use runtime::{Error, Page};

pub use widget::menu_button::{self, Item, MenuButton, State};

/// The result of mounting menu buttons on a [`Page`].
pub type Result<T = ()> = std::result::Result<T, Error>;
