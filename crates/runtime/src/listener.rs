//! Track capture-phase pointer listeners.
//!
//! A menu button only listens to pointer presses outside of itself while its
//! popup is open. The [`Registry`] keeps those listeners in registration
//! order, so multiple widgets can coexist on a page.
use crate::page::Id;

/// The identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A set of capture-phase pointer listeners, keyed by their owner.
#[derive(Debug, Default)]
pub struct Registry {
    next: u64,
    listeners: Vec<(ListenerId, Id)>,
}

impl Registry {
    /// Creates an empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `owner`, returning its [`ListenerId`].
    ///
    /// Registering an owner twice returns the existing listener.
    pub fn register(&mut self, owner: Id) -> ListenerId {
        if let Some((listener, _)) = self.listeners.iter().find(|(_, o)| *o == owner) {
            return *listener;
        }

        let listener = ListenerId(self.next);
        self.next += 1;
        self.listeners.push((listener, owner));

        log::trace!("Registered capture listener {listener:?} for {owner:?}");

        listener
    }

    /// Removes the listener of `owner`, if any.
    pub fn unregister(&mut self, owner: Id) -> Option<ListenerId> {
        let position = self.listeners.iter().position(|(_, o)| *o == owner)?;
        let (listener, _) = self.listeners.remove(position);

        log::trace!("Unregistered capture listener {listener:?} for {owner:?}");

        Some(listener)
    }

    /// Returns whether `owner` has a registered listener.
    pub fn is_registered(&self, owner: Id) -> bool {
        self.listeners.iter().any(|(_, o)| *o == owner)
    }

    /// Returns the owners of every listener, in registration order.
    pub fn owners(&self) -> Vec<Id> {
        self.listeners.iter().map(|(_, owner)| *owner).collect()
    }

    /// Returns true if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
