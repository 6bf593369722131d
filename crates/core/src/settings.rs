//! Configure the behavior of menu buttons.
//!
//! [`Settings`] have sensible defaults and can be loaded from RON files when
//! the `serde` feature is enabled:
//!
//! ```ron
//! (
//!     focus_class: "focus",
//!     type_ahead: true,
//!     close_on_tab: true,
//!     close_on_outside_press: true,
//! )
//! ```
use smol_str::SmolStr;

use std::path::Path;

/// The settings of a menu button.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The class added to the container while focus is inside of it.
    pub focus_class: SmolStr,

    /// Whether typing a character moves focus to the next item starting
    /// with it.
    pub type_ahead: bool,

    /// Whether pressing Tab on an item closes the popup.
    pub close_on_tab: bool,

    /// Whether pressing a pointer outside of the widget closes the popup.
    pub close_on_outside_press: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_class: SmolStr::new_static("focus"),
            type_ahead: true,
            close_on_tab: true,
            close_on_outside_press: true,
        }
    }
}

/// An error that occurred while loading [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// The file could not be read.
    #[error("failed to read settings: {0}")]
    Read(String),
    /// The file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// The file format is not supported.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

impl Settings {
    /// Loads [`Settings`] from a file path.
    ///
    /// Supports the RON format (`.ron` extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| LoadError::Read(e.to_string()))?;

                let settings = Self::from_ron(&content)?;
                log::debug!("Loaded settings from {}", path.display());

                Ok(settings)
            }
            _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Parses [`Settings`] from a RON string.
    ///
    /// Missing fields take their default value.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, LoadError> {
        ron::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))
    }

    /// Parses [`Settings`] from a RON string.
    ///
    /// Always fails, since the `serde` feature is disabled.
    #[cfg(not(feature = "serde"))]
    pub fn from_ron(_content: &str) -> Result<Self, LoadError> {
        Err(LoadError::UnsupportedFormat(
            "ron (enable the `serde` feature)".to_owned(),
        ))
    }
}
