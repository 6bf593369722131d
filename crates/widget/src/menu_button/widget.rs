use super::style::{self, Status, Style};
use super::{Edge, Error, Focus, Interaction, Item, Outcome, State};

use crate::core::accessibility::WidgetInfo;
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, key::Named};
use crate::core::mouse;
use crate::core::{Document, ElementId, FocusChange, Role, Settings, Shell};

use smol_str::SmolStr;

use std::fmt;

/// A button that toggles a popup list of action items.
///
/// A [`MenuButton`] does not own any element. It binds to a container in a
/// [`Document`] holding a trigger (role `button`), a popup (role `menu`),
/// and one or more items (role `menuitem`), and keeps them in sync with its
/// [`State`] every time it is rendered.
pub struct MenuButton<Message> {
    container: ElementId,
    trigger: ElementId,
    popup: ElementId,
    items: Vec<Item>,
    state: State,
    pending_focus: Option<Focus>,
    has_focus: bool,
    applied_class: Option<SmolStr>,
    settings: Settings,
    on_action: Box<dyn Fn(&Item) -> Message>,
    style: Box<dyn Fn(&Settings, Status) -> Style>,
}

/// A part of a [`MenuButton`] targeted by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The trigger button.
    Trigger,
    /// The item at the given index.
    Item(usize),
    /// Anything else inside of the container.
    Container,
}

impl<Message> MenuButton<Message> {
    /// Binds a new [`MenuButton`] to the given container.
    ///
    /// The closure `on_action` produces the message published whenever an
    /// item is activated.
    ///
    /// The structure of the container is validated up front; the first
    /// render happens before returning.
    pub fn bind(
        document: &mut Document,
        container: ElementId,
        on_action: impl Fn(&Item) -> Message + 'static,
    ) -> Result<Self, Error> {
        if document.get(container).is_none() {
            return Err(Error::UnknownElement(container));
        }

        let trigger = document
            .find(container, Role::Button)
            .ok_or(Error::MissingTrigger { container })?;

        let popup = document
            .find(container, Role::Menu)
            .ok_or(Error::MissingPopup { container })?;

        let items: Vec<Item> = document
            .find_all(container, Role::MenuItem)
            .into_iter()
            .map(|element| Item::new(element, &document.text_content(element)))
            .collect();

        let state = State::new(items.iter().map(Item::first_char).collect())
            .ok_or(Error::NoItems { container })?;

        document.set_attribute(trigger, "aria-haspopup", "true");

        if let Some(id) = document.attribute(popup, "id").map(str::to_owned) {
            document.set_attribute(trigger, "aria-controls", id);
        }

        log::debug!(
            "Bound menu button {container} with {} items",
            items.len()
        );

        let mut menu_button = Self {
            container,
            trigger,
            popup,
            items,
            state,
            pending_focus: None,
            has_focus: false,
            applied_class: None,
            settings: Settings::default(),
            on_action: Box::new(on_action),
            style: Box::new(style::default),
        };

        let _ = menu_button.render(document);

        Ok(menu_button)
    }

    /// Sets the [`Settings`] of the [`MenuButton`].
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the style of the [`MenuButton`].
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Settings, Status) -> Style + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Returns the container of the [`MenuButton`].
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Returns the trigger of the [`MenuButton`].
    pub fn trigger(&self) -> ElementId {
        self.trigger
    }

    /// Returns the popup of the [`MenuButton`].
    pub fn popup(&self) -> ElementId {
        self.popup
    }

    /// Returns the items of the [`MenuButton`].
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the [`State`] of the [`MenuButton`].
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns true if the popup is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns the current [`Status`] of the container.
    pub fn status(&self) -> Status {
        match (self.has_focus, self.state.is_open()) {
            (false, _) => Status::Active,
            (true, false) => Status::Focused,
            (true, true) => Status::Opened,
        }
    }

    /// Returns the [`Part`] of the [`MenuButton`] containing `target`, if any.
    pub fn part(&self, document: &Document, target: ElementId) -> Option<Part> {
        if !document.contains(self.container, target) {
            return None;
        }

        if document.contains(self.trigger, target) {
            return Some(Part::Trigger);
        }

        Some(
            self.items
                .iter()
                .position(|item| document.contains(item.element(), target))
                .map_or(Part::Container, Part::Item),
        )
    }

    /// Processes an event in the target phase.
    ///
    /// `target` is the element the event was dispatched to; ancestors of the
    /// container never reach this method.
    pub fn update(
        &mut self,
        target: ElementId,
        event: &Event,
        document: &Document,
        shell: &mut Shell<'_, Message>,
    ) {
        let Some(part) = self.part(document, target) else {
            log::trace!("Ignoring event outside of menu button {}", self.container);
            return;
        };

        if let Event::Focus(focus) = event {
            let has_focus = *focus == event::Focus::Gained;

            if has_focus != self.has_focus {
                self.has_focus = has_focus;
                shell.invalidate_render();
            }

            return;
        }

        let Some(interaction) = self.interaction(part, event) else {
            return;
        };

        self.apply(interaction, shell);
    }

    /// Processes a pointer press in the capture phase, before any element
    /// sees it.
    ///
    /// Closes the popup when the press lands outside of the container.
    pub fn update_capture(
        &mut self,
        target: ElementId,
        event: &Event,
        document: &Document,
        shell: &mut Shell<'_, Message>,
    ) {
        if !matches!(event, Event::Mouse(mouse::Event::ButtonPressed(_))) {
            return;
        }

        if !self.settings.close_on_outside_press || document.contains(self.container, target) {
            return;
        }

        self.apply(Interaction::PressOutside, shell);
    }

    fn apply(&mut self, interaction: Interaction, shell: &mut Shell<'_, Message>) {
        let Outcome {
            focus,
            activated,
            status,
        } = self.state.update(interaction);

        if status == event::Status::Captured {
            shell.capture_event();
        }

        if let Some(item) = activated.and_then(|index| self.items.get(index)) {
            log::debug!("Menu item {:?} activated", item.label());

            shell.publish((self.on_action)(item));
        }

        if focus.is_some() {
            self.pending_focus = focus;
        }

        if focus.is_some() || activated.is_some() || interaction == Interaction::Leave {
            shell.invalidate_render();
        }
    }

    fn interaction(&self, part: Part, event: &Event) -> Option<Interaction> {
        match (part, event) {
            (Part::Trigger, Event::Mouse(mouse::Event::Clicked(mouse::Button::Left))) => {
                Some(Interaction::Toggle)
            }
            (Part::Trigger, Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers }))
                if !modifiers.is_command() =>
            {
                match key.as_ref() {
                    Key::Named(Named::Enter | Named::Space) => Some(Interaction::Toggle),
                    Key::Named(Named::ArrowDown) => Some(Interaction::Open(Edge::First)),
                    Key::Named(Named::ArrowUp) => Some(Interaction::Open(Edge::Last)),
                    _ => None,
                }
            }
            (Part::Item(index), Event::Mouse(mouse::Event::Clicked(mouse::Button::Left))) => {
                Some(Interaction::Activate(index))
            }
            (Part::Item(index), Event::Mouse(mouse::Event::CursorEntered)) => {
                Some(Interaction::Hover(index))
            }
            (Part::Item(index), Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers })) => {
                self.item_interaction(index, key, *modifiers)
            }
            _ => None,
        }
    }

    fn item_interaction(
        &self,
        index: usize,
        key: &Key,
        modifiers: keyboard::Modifiers,
    ) -> Option<Interaction> {
        if modifiers.is_command() {
            return None;
        }

        match key.as_ref() {
            Key::Named(Named::ArrowUp) => Some(Interaction::Previous(index)),
            Key::Named(Named::ArrowDown) => Some(Interaction::Next(index)),
            Key::Named(Named::Home | Named::PageUp) => Some(Interaction::Jump(Edge::First)),
            Key::Named(Named::End | Named::PageDown) => Some(Interaction::Jump(Edge::Last)),
            Key::Named(Named::Enter | Named::Space) => Some(Interaction::Activate(index)),
            Key::Named(Named::Escape) => Some(Interaction::Dismiss),
            Key::Named(Named::Tab) if self.settings.close_on_tab => Some(Interaction::Leave),
            Key::Character(_) if self.settings.type_ahead => key
                .to_char()
                .map(|c| Interaction::TypeAhead(index, c)),
            _ => None,
        }
    }

    /// Writes the [`State`] of the [`MenuButton`] into the document.
    ///
    /// Rendering is idempotent. Returns the focus movement it caused, so the
    /// host can notify the elements involved.
    pub fn render(&mut self, document: &mut Document) -> FocusChange {
        let mut change = FocusChange::none(document.focused());

        for (index, item) in self.items.iter().enumerate() {
            let tab_index = if self.state.is_tabbable(index) { 0 } else { -1 };
            document.set_tab_index(item.element(), Some(tab_index));
        }

        if self.state.is_open() {
            change = change.then(document.set_hidden(self.popup, false));
            document.set_attribute(self.trigger, "aria-expanded", "true");
        } else {
            change = change.then(document.set_hidden(self.popup, true));
            document.remove_attribute(self.trigger, "aria-expanded");
        }

        if let Some(focus) = self.pending_focus.take() {
            let target = match focus {
                Focus::Trigger => Some(self.trigger),
                Focus::Item(index) => self.items.get(index).map(Item::element),
            };

            if let Some(target) = target {
                change = change.then(document.focus(target));
            }
        }

        let Style { class } = (self.style)(&self.settings, self.status());

        if class != self.applied_class {
            if let Some(old) = self.applied_class.take() {
                document.remove_class(self.container, &old);
            }

            if let Some(new) = &class {
                document.add_class(self.container, new);
            }

            self.applied_class = class;
        }

        change
    }

    /// Describes the [`MenuButton`] to assistive technology.
    ///
    /// Returns the trigger, the popup, and every item, in that order.
    pub fn accessibility(&self, document: &Document) -> Vec<WidgetInfo> {
        let trigger = WidgetInfo::menu_button(
            document.text_content(self.trigger).trim(),
            self.state.is_open(),
        )
        .with_element(self.trigger)
        .with_controls(self.popup);

        let popup = WidgetInfo::menu(!self.state.is_open())
            .with_element(self.popup)
            .with_children(self.items.iter().map(Item::element));

        let items = self.items.iter().enumerate().map(|(index, item)| {
            WidgetInfo::menu_item(item.label(), self.state.is_tabbable(index))
                .with_element(item.element())
        });

        [trigger, popup].into_iter().chain(items).collect()
    }
}

impl<Message> fmt::Debug for MenuButton<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuButton")
            .field("container", &self.container)
            .field("trigger", &self.trigger)
            .field("popup", &self.popup)
            .field("items", &self.items)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
