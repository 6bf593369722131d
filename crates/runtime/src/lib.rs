//! A document-driven runtime for icy_menu_button.
//!
//! The [`Page`] owns a [`Document`] together with the menu buttons bound to
//! it, and routes targeted events through them: pointer presses run the
//! capture-phase [`listener`]s of open popups first, then every event reaches
//! the widget containing its target, and focus movements caused by rendering
//! are replayed as focus events.
//!
//! [`Document`]: crate::core::Document
pub use icy_menu_button_widget as widget;
pub use icy_menu_button_widget::core;

pub mod listener;
pub mod page;

pub use page::{Error, Page};
