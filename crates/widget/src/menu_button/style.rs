//! Styling for menu buttons.
//!
//! A menu button has no painting of its own; its appearance is expressed
//! as classes applied to its container.
use crate::core::Settings;

use smol_str::SmolStr;

/// The possible status of a menu button container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Focus is outside of the container.
    Active,
    /// Focus is inside of the container and the popup is closed.
    Focused,
    /// Focus is inside of the container and the popup is open.
    Opened,
}

/// The appearance of a menu button container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    /// The class applied to the container, if any.
    pub class: Option<SmolStr>,
}

/// The default style of a menu button: the configured focus class whenever
/// focus is inside of the container.
pub fn default(settings: &Settings, status: Status) -> Style {
    match status {
        Status::Active => Style::default(),
        Status::Focused | Status::Opened => Style {
            class: Some(settings.focus_class.clone()),
        },
    }
}
