use crate::Role;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use std::fmt;

/// The identifier of an [`Element`] inside a [`Document`].
///
/// Identifiers are handed out by the [`Document`] and stay valid for its
/// whole lifetime.
///
/// [`Document`]: crate::Document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of a [`Document`].
///
/// [`Document`]: crate::Document
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(crate) role: Role,
    pub(crate) text: String,
    pub(crate) attributes: FxHashMap<SmolStr, String>,
    pub(crate) classes: Vec<SmolStr>,
    pub(crate) tab_index: Option<i32>,
    pub(crate) hidden: bool,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
}

impl Element {
    /// Returns the [`Role`] of the [`Element`].
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the text directly owned by the [`Element`].
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of the given attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns whether the [`Element`] has the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
