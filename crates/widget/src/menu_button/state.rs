//! The interaction model of a menu button, independent of any document.
use crate::core::event;
use crate::core::focus::Count;

/// Whether the popup of a menu button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popup {
    /// The popup is hidden and the trigger is not expanded.
    #[default]
    Closed,
    /// The popup is shown and the trigger is expanded.
    Open,
}

/// Where focus should move after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The trigger button.
    Trigger,
    /// The item at the given index.
    Item(usize),
}

/// An edge of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The first item.
    First,
    /// The last item.
    Last,
}

/// A user interaction, already resolved to the part of the widget it
/// concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The trigger was activated by a click, Enter, or Space.
    Toggle,
    /// The trigger asked to open the popup on the given edge.
    Open(Edge),
    /// Move to the item after the given one.
    Next(usize),
    /// Move to the item before the given one.
    Previous(usize),
    /// Move to the given edge of the list.
    Jump(Edge),
    /// The given item was activated.
    Activate(usize),
    /// Escape was pressed on an item.
    Dismiss,
    /// Tab was pressed on an item.
    Leave,
    /// The pointer moved over the given item.
    Hover(usize),
    /// A character was typed on the given item.
    TypeAhead(usize, char),
    /// A pointer was pressed outside of the widget.
    PressOutside,
}

/// The result of applying an [`Interaction`] to a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Where focus should move, if anywhere.
    pub focus: Option<Focus>,
    /// The item that was activated, if any.
    pub activated: Option<usize>,
    /// Whether the event that caused the interaction was consumed.
    pub status: event::Status,
}

impl Outcome {
    fn captured(focus: Option<Focus>) -> Self {
        Self {
            focus,
            activated: None,
            status: event::Status::Captured,
        }
    }

    fn ignored(focus: Option<Focus>) -> Self {
        Self {
            focus,
            activated: None,
            status: event::Status::Ignored,
        }
    }

    /// Returns true if the interaction changed nothing.
    pub fn is_noop(&self) -> bool {
        self.focus.is_none() && self.activated.is_none()
    }
}

/// The state of a menu button: whether its popup is open and which item is
/// tabbable.
///
/// Exactly one item is tabbable at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    popup: Popup,
    tabbable: usize,
    first_chars: Vec<Option<char>>,
}

impl State {
    /// Creates a closed [`State`] for items with the given first characters.
    ///
    /// The first item starts tabbable. Returns `None` if there are no items.
    pub fn new(first_chars: Vec<Option<char>>) -> Option<Self> {
        if first_chars.is_empty() {
            return None;
        }

        Some(Self {
            popup: Popup::Closed,
            tabbable: 0,
            first_chars,
        })
    }

    /// Returns the current [`Popup`] state.
    pub fn popup(&self) -> Popup {
        self.popup
    }

    /// Returns true if the popup is open.
    pub fn is_open(&self) -> bool {
        self.popup == Popup::Open
    }

    /// Returns the index of the tabbable item.
    pub fn tabbable(&self) -> usize {
        self.tabbable
    }

    /// Returns the amount of items.
    pub fn len(&self) -> usize {
        self.first_chars.len()
    }

    /// Always false; a [`State`] has at least one item.
    pub fn is_empty(&self) -> bool {
        self.first_chars.is_empty()
    }

    /// Returns whether the item at `index` is tabbable.
    pub fn is_tabbable(&self, index: usize) -> bool {
        index == self.tabbable
    }

    fn count(&self, from: usize) -> Count {
        Count::new(Some(from), self.len())
    }

    fn select(&mut self, index: Option<usize>) -> Option<Focus> {
        let index = index?;
        self.tabbable = index;

        Some(Focus::Item(index))
    }

    fn open(&mut self) {
        if self.popup == Popup::Closed {
            log::debug!("Opening menu button popup");
        }

        self.popup = Popup::Open;
    }

    fn close(&mut self) {
        if self.popup == Popup::Open {
            log::debug!("Closing menu button popup");
        }

        self.popup = Popup::Closed;
    }

    /// Returns the next item, after `from` and wrapping around, whose first
    /// character is `c`.
    pub fn find_by_char(&self, from: usize, c: char) -> Option<usize> {
        self.count(from)
            .cycle()
            .find(|index| self.first_chars.get(*index).copied().flatten() == Some(c))
    }

    /// Applies an [`Interaction`] and returns its [`Outcome`].
    pub fn update(&mut self, interaction: Interaction) -> Outcome {
        let outcome = match interaction {
            Interaction::Toggle if self.is_open() => {
                self.close();
                Outcome::captured(Some(Focus::Trigger))
            }
            Interaction::Toggle => {
                self.open();
                Outcome::captured(self.select(Count::new(None, self.len()).first()))
            }
            Interaction::Open(edge) => {
                self.open();
                Outcome::captured(self.select(self.edge(edge)))
            }
            Interaction::PressOutside if self.is_open() => {
                self.close();
                Outcome::ignored(Some(Focus::Trigger))
            }
            Interaction::PressOutside => Outcome::default(),
            // Items are hidden while closed, so they cannot be interacted with.
            _ if !self.is_open() => Outcome::default(),
            Interaction::Next(from) => Outcome::captured(self.select(self.count(from).next())),
            Interaction::Previous(from) => {
                Outcome::captured(self.select(self.count(from).previous()))
            }
            Interaction::Jump(edge) => Outcome::captured(self.select(self.edge(edge))),
            Interaction::Activate(index) if index < self.len() => {
                self.close();
                Outcome {
                    activated: Some(index),
                    ..Outcome::captured(Some(Focus::Trigger))
                }
            }
            Interaction::Activate(_) => Outcome::default(),
            Interaction::Dismiss => {
                self.close();
                Outcome::captured(Some(Focus::Trigger))
            }
            Interaction::Leave => {
                self.close();
                Outcome::ignored(None)
            }
            Interaction::Hover(index) if index < self.len() => {
                Outcome::ignored(self.select(Some(index)))
            }
            Interaction::Hover(_) => Outcome::default(),
            Interaction::TypeAhead(from, c) => {
                Outcome::captured(self.select(self.find_by_char(from, c)))
            }
        };

        if let Some(Focus::Item(index)) = outcome.focus {
            log::trace!("Menu item {index} is now tabbable");
        }

        outcome
    }

    fn edge(&self, edge: Edge) -> Option<usize> {
        let count = Count::new(None, self.len());

        match edge {
            Edge::First => count.first(),
            Edge::Last => count.last(),
        }
    }
}
