//! A retained tree of elements.
//!
//! A [`Document`] models the small part of a page that widgets bind to:
//! elements with a [`Role`], text, attributes, classes, a tab index, a
//! visibility flag, and a single focused element.
use crate::element::{Element, ElementId};
use crate::Role;

/// A tree of [`Element`]s with a single focused element.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    focused: Option<ElementId>,
}

/// The net focus movement produced by an operation on a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusChange {
    /// The element focused before the operation.
    pub from: Option<ElementId>,
    /// The element focused after the operation.
    pub to: Option<ElementId>,
}

impl FocusChange {
    /// A [`FocusChange`] that leaves focus where it is.
    pub fn none(focused: Option<ElementId>) -> Self {
        Self {
            from: focused,
            to: focused,
        }
    }

    /// Returns true if focus did not move.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Chains two consecutive focus changes into their net result.
    ///
    /// ```
    /// use icy_menu_button_core::{Document, Role};
    ///
    /// let mut document = Document::new();
    /// let root = document.root();
    /// let a = document.insert(root, Role::Button, "A");
    /// let b = document.insert(root, Role::Button, "B");
    ///
    /// let first = document.focus(a);
    /// let second = document.focus(b);
    /// let net = first.then(second);
    ///
    /// assert_eq!(net.from, None);
    /// assert_eq!(net.to, Some(b));
    /// ```
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            from: self.from,
            to: next.to,
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a new [`Document`] with a single root container.
    pub fn new() -> Self {
        Self {
            elements: vec![Element::default()],
            focused: None,
        }
    }

    /// Returns the root element of the [`Document`].
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Returns the [`Element`] with the given id, if it exists.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let element = self.elements.get_mut(id.0);

        if element.is_none() {
            log::warn!("Element {id} does not exist in the document");
        }

        element
    }

    /// Creates a new element and appends it as the last child of `parent`.
    ///
    /// If `parent` does not exist, the element is created detached.
    pub fn insert(&mut self, parent: ElementId, role: Role, text: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len());
        let attached = self.get(parent).is_some();

        self.elements.push(Element {
            role,
            text: text.into(),
            parent: attached.then_some(parent),
            ..Element::default()
        });

        if let Some(parent) = attached.then_some(parent).and_then(|p| self.get_mut(p)) {
            parent.children.push(id);
        }

        id
    }

    /// Returns true if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);

        while let Some(id) = current {
            if id == ancestor {
                return true;
            }

            current = self.get(id).and_then(|element| element.parent);
        }

        false
    }

    /// Returns every descendant of `root` in tree order, excluding `root`.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack: Vec<ElementId> = self
            .get(root)
            .map(|element| element.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(id) = stack.pop() {
            result.push(id);

            if let Some(element) = self.get(id) {
                stack.extend(element.children.iter().rev().copied());
            }
        }

        result
    }

    /// Returns the first descendant of `root` with the given [`Role`].
    pub fn find(&self, root: ElementId, role: Role) -> Option<ElementId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.get(*id).is_some_and(|element| element.role == role))
    }

    /// Returns every descendant of `root` with the given [`Role`], in tree order.
    pub fn find_all(&self, root: ElementId, role: Role) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(|element| element.role == role))
            .collect()
    }

    /// Returns every descendant of `root` with the given class, in tree order.
    pub fn find_all_by_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// Returns the element whose `id` attribute equals `name`.
    pub fn get_by_id(&self, name: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.attribute("id") == Some(name))
            .map(ElementId)
    }

    /// Returns the text of the element and all of its descendants.
    pub fn text_content(&self, id: ElementId) -> String {
        let mut text = self
            .get(id)
            .map(|element| element.text.clone())
            .unwrap_or_default();

        for descendant in self.descendants(id) {
            if let Some(element) = self.get(descendant) {
                text.push_str(&element.text);
            }
        }

        text
    }

    /// Replaces the text directly owned by the element.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.get_mut(id) {
            element.text = text.into();
        }
    }

    /// Returns the value of an attribute of the element.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|element| element.attribute(name))
    }

    /// Sets an attribute of the element.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.get_mut(id) {
            let _ = element.attributes.insert(name.into(), value.into());
        }
    }

    /// Removes an attribute of the element.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(element) = self.get_mut(id) {
            let _ = element.attributes.remove(name);
        }
    }

    /// Adds a class to the element, if not present already.
    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            if !element.has_class(class) {
                element.classes.push(class.into());
            }
        }
    }

    /// Removes a class from the element.
    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the element has the given class.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|element| element.has_class(class))
    }

    /// Sets the tab index of the element.
    pub fn set_tab_index(&mut self, id: ElementId, tab_index: Option<i32>) {
        if let Some(element) = self.get_mut(id) {
            element.tab_index = tab_index;
        }
    }

    /// Returns the tab index of the element.
    pub fn tab_index(&self, id: ElementId) -> Option<i32> {
        self.get(id).and_then(|element| element.tab_index)
    }

    /// Shows or hides the element.
    ///
    /// Hiding an element that contains the focused element blurs it.
    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) -> FocusChange {
        if let Some(element) = self.get_mut(id) {
            element.hidden = hidden;
        }

        match self.focused {
            Some(focused) if hidden && self.contains(id, focused) => self.blur(),
            focused => FocusChange::none(focused),
        }
    }

    /// Returns true if the element or one of its ancestors is hidden.
    pub fn is_hidden(&self, id: ElementId) -> bool {
        let mut current = Some(id);

        while let Some(id) = current {
            match self.get(id) {
                Some(element) if element.hidden => return true,
                Some(element) => current = element.parent,
                None => return true,
            }
        }

        false
    }

    /// Returns true if the element can receive focus.
    ///
    /// Buttons, text inputs, and elements with a tab index are focusable as
    /// long as they are not hidden.
    pub fn is_focusable(&self, id: ElementId) -> bool {
        let Some(element) = self.get(id) else {
            return false;
        };

        let focusable = element.tab_index.is_some()
            || matches!(element.role, Role::Button | Role::TextInput);

        focusable && !self.is_hidden(id)
    }

    /// Returns true if the element is reachable by sequential keyboard
    /// navigation.
    pub fn is_tabbable(&self, id: ElementId) -> bool {
        self.is_focusable(id) && self.tab_index(id).is_none_or(|tab_index| tab_index >= 0)
    }

    /// Returns the tabbable element that sequential navigation reaches from
    /// `from`, in tree order, wrapping around.
    ///
    /// Positive tab indices have no special precedence.
    pub fn next_tabbable(&self, from: Option<ElementId>, backwards: bool) -> Option<ElementId> {
        let mut order = self.descendants(self.root());

        if backwards {
            order.reverse();
        }

        let start = from
            .and_then(|from| order.iter().position(|id| *id == from))
            .map_or(0, |position| position + 1);

        order[start..]
            .iter()
            .chain(&order[..start])
            .copied()
            .find(|id| Some(*id) != from && self.is_tabbable(*id))
    }

    /// Returns the focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Moves focus to the element.
    ///
    /// Focusing an element that cannot be focused leaves focus untouched.
    pub fn focus(&mut self, id: ElementId) -> FocusChange {
        let from = self.focused;

        if !self.is_focusable(id) {
            log::trace!("Element {id} is not focusable");

            return FocusChange::none(from);
        }

        self.focused = Some(id);

        FocusChange { from, to: Some(id) }
    }

    /// Removes focus from the focused element, if any.
    pub fn blur(&mut self) -> FocusChange {
        FocusChange {
            from: self.focused.take(),
            to: None,
        }
    }
}
