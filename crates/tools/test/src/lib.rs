//! Test your icy_menu_button pages in headless mode.
//!
//! A [`Simulator`] drives a [`Page`] the way a user would: clicking and
//! hovering elements found by their text, and pressing keys on whatever
//! element has focus. Every message published along the way is collected.
//!
//! ```
//! use icy_menu_button_test::Simulator;
//! use icy_menu_button_test::runtime::Page;
//! use icy_menu_button_test::runtime::core::{Document, Role};
//! use icy_menu_button_test::runtime::widget::menu_button::Item;
//!
//! let mut document = Document::new();
//! let root = document.root();
//! let container = document.insert(root, Role::GenericContainer, "");
//! let _ = document.insert(container, Role::Button, "Actions");
//! let menu = document.insert(container, Role::Menu, "");
//! let _ = document.insert(menu, Role::MenuItem, "Copy");
//! let _ = document.insert(menu, Role::MenuItem, "Paste");
//!
//! let mut page = Page::new(document);
//! let _ = page.mount(container, |item: &Item| item.label().to_owned())?;
//!
//! let mut simulator = Simulator::new(page);
//! let _ = simulator.click("Actions")?;
//! let _ = simulator.press_key("ArrowDown");
//! let _ = simulator.press_key("Enter");
//!
//! assert_eq!(simulator.into_messages().collect::<Vec<_>>(), vec!["Paste"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub use icy_menu_button_runtime as runtime;

use runtime::Page;
use runtime::core::event::{self, Event};
use runtime::core::keyboard::{self, Key};
use runtime::core::mouse;
use runtime::core::{Document, ElementId};

/// A headless driver of a [`Page`].
#[derive(Debug)]
pub struct Simulator<Message> {
    page: Page<Message>,
    messages: Vec<Message>,
}

/// A simulator error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No element matched the selector.
    #[error("no element found with text {0:?}")]
    NotFound(String),
}

impl<Message> Simulator<Message> {
    /// Creates a new [`Simulator`] driving the given [`Page`].
    pub fn new(page: Page<Message>) -> Self {
        Self {
            page,
            messages: Vec::new(),
        }
    }

    /// Returns the [`Page`] being simulated.
    pub fn page(&self) -> &Page<Message> {
        &self.page
    }

    /// Returns the [`Document`] of the simulated [`Page`].
    pub fn document(&self) -> &Document {
        self.page.document()
    }

    /// Finds the first element, in tree order, whose own text is `text`
    /// once trimmed.
    pub fn find(&self, text: &str) -> Result<ElementId, Error> {
        let document = self.document();

        document
            .descendants(document.root())
            .into_iter()
            .find(|id| {
                document
                    .get(*id)
                    .is_some_and(|element| element.text().trim() == text)
            })
            .ok_or_else(|| Error::NotFound(text.to_owned()))
    }

    /// Dispatches a raw event to the given element.
    pub fn dispatch(&mut self, target: ElementId, event: impl Into<Event>) -> event::Status {
        let event = event.into();

        log::trace!("Simulating {event:?} on {target}");

        self.page.dispatch(target, &event, &mut self.messages)
    }

    /// Presses and releases the left mouse button over the element with the
    /// given text.
    pub fn click(&mut self, text: &str) -> Result<event::Status, Error> {
        let target = self.find(text)?;

        Ok(self.click_element(target))
    }

    /// Presses and releases the left mouse button over the given element.
    pub fn click_element(&mut self, target: ElementId) -> event::Status {
        let button = mouse::Button::Left;

        [
            mouse::Event::ButtonPressed(button),
            mouse::Event::ButtonReleased(button),
            mouse::Event::Clicked(button),
        ]
        .into_iter()
        .map(|event| self.dispatch(target, event))
        .fold(event::Status::Ignored, event::Status::merge)
    }

    /// Moves the pointer over the element with the given text.
    pub fn hover(&mut self, text: &str) -> Result<event::Status, Error> {
        let target = self.find(text)?;

        Ok(self.dispatch(target, mouse::Event::CursorEntered))
    }

    /// Presses and releases a key on the focused element.
    ///
    /// Keys are given as DOM key values, like `"ArrowDown"` or `"a"`.
    pub fn press_key(&mut self, key: impl Into<Key>) -> event::Status {
        let key = key.into();
        let modifiers = keyboard::Modifiers::empty();

        let target = self.page.keyboard_target();
        let status = self.dispatch(
            target,
            keyboard::Event::KeyPressed {
                key: key.clone(),
                modifiers,
            },
        );

        let target = self.page.keyboard_target();
        let _ = self.dispatch(target, keyboard::Event::KeyReleased { key, modifiers });

        status
    }

    /// Types every character of `text`, one key at a time.
    pub fn typewrite(&mut self, text: &str) -> event::Status {
        text.chars()
            .map(|c| self.press_key(Key::Character(c.to_string().into())))
            .fold(event::Status::Ignored, event::Status::merge)
    }

    /// Moves focus to the element with the given text.
    pub fn focus(&mut self, text: &str) -> Result<(), Error> {
        let target = self.find(text)?;

        self.page.focus(target, &mut self.messages);

        Ok(())
    }

    /// Returns the focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.document().focused()
    }

    /// Returns the trimmed text of the focused element, if any.
    pub fn focused_text(&self) -> Option<String> {
        self.focused()
            .map(|id| self.document().text_content(id).trim().to_owned())
    }

    /// Returns true if the element with the given text is visible.
    pub fn is_visible(&self, text: &str) -> Result<bool, Error> {
        let target = self.find(text)?;

        Ok(!self.document().is_hidden(target))
    }

    /// Returns the messages published so far.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the [`Simulator`] and returns the published messages.
    pub fn into_messages(self) -> impl Iterator<Item = Message> {
        self.messages.into_iter()
    }
}
