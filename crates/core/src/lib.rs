//! The core library of [icy_menu_button].
//!
//! This library holds the basic types that the widget and the runtime are
//! built on: a retained [`Document`] of elements, targeted [`Event`]s, and the
//! [`Shell`] a widget uses to publish messages.
//!
//! [icy_menu_button]: https://github.com/mkrueger/icy_menu_button
pub mod accessibility;
pub mod document;
pub mod event;
pub mod focus;
pub mod keyboard;
pub mod mouse;
pub mod settings;

mod element;
mod shell;

pub use accessibility::Role;
pub use document::{Document, FocusChange};
pub use element::{Element, ElementId};
pub use event::Event;
pub use settings::Settings;
pub use shell::Shell;
