//! Accessibility roles and widget information.
//!
//! Every [`Element`] of a [`Document`] carries a [`Role`]. Widgets find their
//! parts by role and describe themselves to assistive technology through
//! [`WidgetInfo`].
//!
//! With the `accessibility` feature enabled, roles and infos convert into
//! [AccessKit] nodes that screen readers like NVDA (Windows), VoiceOver
//! (macOS), and Orca (Linux) can consume.
//!
//! [`Element`]: crate::Element
//! [`Document`]: crate::Document
//! [AccessKit]: https://accesskit.dev

use crate::ElementId;

#[cfg(feature = "accessibility")]
pub use accesskit;

/// The accessibility role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// A grouping element without semantics of its own.
    #[default]
    GenericContainer,
    /// A push button.
    Button,
    /// A popup list of choices.
    Menu,
    /// A choice inside a [`Role::Menu`].
    MenuItem,
    /// An editable or read-only text field.
    TextInput,
    /// A static text label.
    Label,
}

impl Role {
    /// Returns the ARIA `role` attribute value of the [`Role`].
    ///
    /// ```
    /// use icy_menu_button_core::Role;
    ///
    /// assert_eq!(Role::MenuItem.as_aria(), "menuitem");
    /// ```
    pub fn as_aria(self) -> &'static str {
        match self {
            Role::GenericContainer => "generic",
            Role::Button => "button",
            Role::Menu => "menu",
            Role::MenuItem => "menuitem",
            Role::TextInput => "textbox",
            Role::Label => "label",
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<Role> for accesskit::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::GenericContainer => accesskit::Role::GenericContainer,
            Role::Button => accesskit::Role::Button,
            Role::Menu => accesskit::Role::Menu,
            Role::MenuItem => accesskit::Role::MenuItem,
            Role::TextInput => accesskit::Role::TextInput,
            Role::Label => accesskit::Role::Label,
        }
    }
}

/// Information about a widget part for accessibility purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetInfo {
    /// The element described.
    pub element: Option<ElementId>,
    /// The accessibility role of the element.
    pub role: Role,
    /// The accessible label/name of the element.
    pub label: Option<String>,
    /// Whether the element is expanded (for menu buttons).
    pub expanded: Option<bool>,
    /// Whether the element is hidden from assistive technology.
    pub hidden: bool,
    /// Whether the element is reachable by sequential keyboard navigation.
    pub focusable: bool,
    /// The element this one controls (a trigger controls its popup).
    pub controls: Option<ElementId>,
    /// The child elements.
    pub children: Vec<ElementId>,
}

impl WidgetInfo {
    /// Creates a new `WidgetInfo` with the given role.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    /// Creates widget info for a menu button trigger.
    pub fn menu_button(label: impl Into<String>, expanded: bool) -> Self {
        Self {
            label: Some(label.into()),
            expanded: Some(expanded),
            focusable: true,
            ..Self::new(Role::Button)
        }
    }

    /// Creates widget info for a popup menu.
    pub fn menu(hidden: bool) -> Self {
        Self {
            hidden,
            ..Self::new(Role::Menu)
        }
    }

    /// Creates widget info for a menu item.
    pub fn menu_item(label: impl Into<String>, focusable: bool) -> Self {
        Self {
            label: Some(label.into()),
            focusable,
            ..Self::new(Role::MenuItem)
        }
    }

    /// Sets the element described.
    pub fn with_element(mut self, element: ElementId) -> Self {
        self.element = Some(element);
        self
    }

    /// Sets the element this one controls.
    pub fn with_controls(mut self, element: ElementId) -> Self {
        self.controls = Some(element);
        self
    }

    /// Adds child elements.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ElementId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Builds an AccessKit node out of the [`WidgetInfo`].
    #[cfg(feature = "accessibility")]
    pub fn to_node(&self) -> accesskit::Node {
        let mut node = accesskit::Node::new(self.role.into());

        if let Some(label) = &self.label {
            node.set_label(label.as_str());
        }

        if let Some(expanded) = self.expanded {
            node.set_expanded(expanded);
        }

        if self.hidden {
            node.set_hidden();
        }

        if self.focusable {
            node.add_action(accesskit::Action::Focus);
        }

        if matches!(self.role, Role::Button | Role::MenuItem) {
            node.add_action(accesskit::Action::Click);
        }

        node
    }
}
