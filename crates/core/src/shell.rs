use crate::event;

/// A connection to the state of a shell.
///
/// A widget can leverage a [`Shell`] to trigger changes in an application,
/// like publishing messages or requesting a new render of its state.
#[derive(Debug)]
pub struct Shell<'a, Message> {
    messages: &'a mut Vec<Message>,
    event_status: event::Status,
    is_render_invalid: bool,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of messages.
    pub fn new(messages: &'a mut Vec<Message>) -> Self {
        Self {
            messages,
            event_status: event::Status::Ignored,
            is_render_invalid: false,
        }
    }

    /// Publish the given `Message` for an application to process it.
    pub fn publish(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Marks the current event as captured. Prevents "event bubbling".
    ///
    /// A widget should capture an event when no ancestor should
    /// handle it.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns whether the current event has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == event::Status::Captured
    }

    /// Requests the widget state to be rendered into the document.
    pub fn invalidate_render(&mut self) {
        self.is_render_invalid = true;
    }

    /// Returns whether a render has been requested.
    #[must_use]
    pub fn is_render_invalid(&self) -> bool {
        self.is_render_invalid
    }

    /// Triggers the given function if a render was requested, cleaning the
    /// request in the process.
    pub fn revalidate_render(&mut self, f: impl FnOnce()) {
        if self.is_render_invalid {
            self.is_render_invalid = false;

            f();
        }
    }
}
