//! The built-in widget of icy_menu_button.
//!
//! The [`MenuButton`] binds to a container of a [`Document`] and implements
//! the interaction model of an accessible menu button on top of it.
//!
//! [`Document`]: core::Document
pub use icy_menu_button_core as core;

pub mod menu_button;

pub use menu_button::MenuButton;
