//! Listen to keyboard events.
pub mod key;

mod event;
mod modifiers;

pub use event::Event;
pub use key::Key;
pub use modifiers::Modifiers;
