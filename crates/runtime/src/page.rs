//! Route events through the menu buttons of a document.
use crate::core::event::{self, Event};
use crate::core::keyboard::{self, Key, key::Named};
use crate::core::mouse;
use crate::core::{Document, ElementId, FocusChange, Shell};
use crate::listener::Registry;
use crate::widget::MenuButton;
use crate::widget::menu_button::{self, Item};

/// The identifier of a menu button mounted on a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub(crate) usize);

/// An error produced by a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A menu button could not be bound.
    #[error(transparent)]
    MenuButton(#[from] menu_button::Error),
}

/// The most focus movements replayed for a single event.
const MAX_FOCUS_ROUNDS: usize = 8;

/// A [`Document`] together with the menu buttons bound to it.
#[derive(Debug)]
pub struct Page<Message> {
    document: Document,
    widgets: Vec<MenuButton<Message>>,
    listeners: Registry,
}

impl<Message> Page<Message> {
    /// Creates a new [`Page`] out of a [`Document`].
    pub fn new(document: Document) -> Self {
        Self {
            document,
            widgets: Vec::new(),
            listeners: Registry::new(),
        }
    }

    /// Binds a new menu button to `container` with default settings.
    pub fn mount(
        &mut self,
        container: ElementId,
        on_action: impl Fn(&Item) -> Message + 'static,
    ) -> Result<Id, Error> {
        let menu_button = MenuButton::bind(&mut self.document, container, on_action)?;

        Ok(self.insert(menu_button))
    }

    /// Binds a menu button to every element with the given class.
    ///
    /// Fails on the first container that cannot be bound; the containers
    /// before it stay mounted.
    pub fn mount_all(
        &mut self,
        class: &str,
        on_action: impl Fn(&Item) -> Message + Clone + 'static,
    ) -> Result<Vec<Id>, Error> {
        let containers = self
            .document
            .find_all_by_class(self.document.root(), class);

        if containers.is_empty() {
            log::warn!("No element with class {class:?} to mount a menu button on");
        }

        containers
            .into_iter()
            .map(|container| self.mount(container, on_action.clone()))
            .collect()
    }

    /// Adds an already bound menu button to the [`Page`].
    pub fn insert(&mut self, mut menu_button: MenuButton<Message>) -> Id {
        let id = Id(self.widgets.len());
        let _ = menu_button.render(&mut self.document);

        self.widgets.push(menu_button);

        id
    }

    /// Returns the [`Document`] of the [`Page`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the [`Document`] of the [`Page`] mutably.
    ///
    /// Changing the structure of a bound container is not supported.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Returns the menu button with the given [`Id`].
    pub fn widget(&self, id: Id) -> Option<&MenuButton<Message>> {
        self.widgets.get(id.0)
    }

    /// Returns the capture-phase listener [`Registry`] of the [`Page`].
    pub fn listeners(&self) -> &Registry {
        &self.listeners
    }

    /// Returns the element keyboard events are dispatched to: the focused
    /// element, or the root.
    pub fn keyboard_target(&self) -> ElementId {
        self.document
            .focused()
            .unwrap_or_else(|| self.document.root())
    }

    /// Moves focus to the given element, notifying the widgets involved.
    pub fn focus(&mut self, target: ElementId, messages: &mut Vec<Message>) {
        let change = self.document.focus(target);

        self.replay(change, messages);
    }

    /// Dispatches an event to `target`.
    ///
    /// Messages published by the widgets are appended to `messages`.
    pub fn dispatch(
        &mut self,
        target: ElementId,
        event: &Event,
        messages: &mut Vec<Message>,
    ) -> event::Status {
        if self.document.get(target).is_none() {
            log::warn!("Dropping event {event:?} for unknown element {target}");
            return event::Status::Ignored;
        }

        let mut status = event::Status::Ignored;

        if let Event::Mouse(mouse::Event::ButtonPressed(_)) = event {
            for owner in self.listeners.owners() {
                status = status.merge(self.run(owner, messages, |widget, document, shell| {
                    widget.update_capture(target, event, document, shell);
                }));
            }
        }

        let owners: Vec<Id> = (0..self.widgets.len())
            .map(Id)
            .filter(|id| {
                self.widgets[id.0]
                    .part(&self.document, target)
                    .is_some()
            })
            .collect();

        for owner in owners {
            status = status.merge(self.run(owner, messages, |widget, document, shell| {
                widget.update(target, event, document, shell);
            }));
        }

        if status == event::Status::Ignored {
            self.default_action(target, event, messages);
        }

        status
    }

    fn default_action(&mut self, target: ElementId, event: &Event, messages: &mut Vec<Message>) {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers })
                if *key == Key::Named(Named::Tab) =>
            {
                let Some(next) = self.document.next_tabbable(Some(target), modifiers.shift())
                else {
                    return;
                };

                self.focus(next, messages);
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if self.document.is_focusable(target) {
                    self.focus(target, messages);
                }
            }
            _ => {}
        }
    }

    fn run(
        &mut self,
        owner: Id,
        messages: &mut Vec<Message>,
        f: impl FnOnce(&mut MenuButton<Message>, &Document, &mut Shell<'_, Message>),
    ) -> event::Status {
        let Some(widget) = self.widgets.get_mut(owner.0) else {
            return event::Status::Ignored;
        };

        let mut change = FocusChange::none(self.document.focused());
        let mut shell = Shell::new(messages);

        f(widget, &self.document, &mut shell);

        let status = shell.event_status();
        shell.revalidate_render(|| change = widget.render(&mut self.document));

        self.sync_listener(owner);
        self.replay(change, messages);

        status
    }

    fn sync_listener(&mut self, owner: Id) {
        let Some(widget) = self.widgets.get(owner.0) else {
            return;
        };

        if widget.is_open() {
            let _ = self.listeners.register(owner);
        } else {
            let _ = self.listeners.unregister(owner);
        }
    }

    fn replay(&mut self, mut change: FocusChange, messages: &mut Vec<Message>) {
        for _ in 0..MAX_FOCUS_ROUNDS {
            if change.is_empty() {
                return;
            }

            let mut next = FocusChange::none(self.document.focused());

            let notifications = [
                (change.from, event::Focus::Lost),
                (change.to, event::Focus::Gained),
            ];

            for (target, focus) in notifications {
                let Some(target) = target else {
                    continue;
                };

                let event = Event::Focus(focus);

                for index in 0..self.widgets.len() {
                    let widget = &mut self.widgets[index];

                    if widget.part(&self.document, target).is_none() {
                        continue;
                    }

                    let mut shell = Shell::new(messages);
                    widget.update(target, &event, &self.document, &mut shell);

                    shell.revalidate_render(|| next = next.then(widget.render(&mut self.document)));
                }
            }

            change = next;
        }

        log::warn!("Focus kept moving after {MAX_FOCUS_ROUNDS} rounds");
    }
}
