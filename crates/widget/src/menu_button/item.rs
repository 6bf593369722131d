use crate::core::ElementId;

use unicode_segmentation::UnicodeSegmentation;

/// An action item of a [`MenuButton`].
///
/// [`MenuButton`]: super::MenuButton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    element: ElementId,
    label: String,
    first_char: Option<char>,
}

impl Item {
    pub(super) fn new(element: ElementId, label: &str) -> Self {
        let label = label.trim();

        Self {
            element,
            label: label.to_owned(),
            first_char: first_char(label),
        }
    }

    /// Returns the element of the [`Item`].
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Returns the trimmed display label of the [`Item`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the lowercased first character of the label, used for
    /// type-ahead.
    pub fn first_char(&self) -> Option<char> {
        self.first_char
    }
}

/// Returns the lowercased first character of a label.
///
/// Only the first grapheme is considered, so a label starting with a
/// combined character still yields its base character.
///
/// # Examples
/// - `"Action 1"` → `Some('a')`
/// - `"  Éclair"` → `Some('é')`
/// - `""` → `None`
pub fn first_char(label: &str) -> Option<char> {
    let grapheme = label.trim().graphemes(true).next()?;

    grapheme.chars().next()?.to_lowercase().next()
}
