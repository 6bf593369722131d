//! Move focus through a sequence of focusable elements.

/// A summary of the focusable elements in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    /// The index of the current focused element, if any.
    pub focused: Option<usize>,

    /// The total amount of focusable elements.
    pub total: usize,
}

impl Count {
    /// Creates a new [`Count`].
    pub fn new(focused: Option<usize>, total: usize) -> Self {
        Self {
            focused: focused.filter(|index| *index < total),
            total,
        }
    }

    /// Returns the index that should be focused next.
    ///
    /// - if an element is focused, the one after it, wrapping to the first.
    /// - if none is focused, the first one.
    ///
    /// ```
    /// use icy_menu_button_core::focus::Count;
    ///
    /// assert_eq!(Count::new(Some(0), 3).next(), Some(1));
    /// assert_eq!(Count::new(Some(2), 3).next(), Some(0));
    /// assert_eq!(Count::new(None, 3).next(), Some(0));
    /// assert_eq!(Count::new(None, 0).next(), None);
    /// ```
    pub fn next(self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }

        match self.focused {
            Some(focused) if focused + 1 < self.total => Some(focused + 1),
            Some(_) | None => Some(0),
        }
    }

    /// Returns the index that should be focused previously.
    ///
    /// - if an element is focused, the one before it, wrapping to the last.
    /// - if none is focused, the last one.
    ///
    /// ```
    /// use icy_menu_button_core::focus::Count;
    ///
    /// assert_eq!(Count::new(Some(1), 3).previous(), Some(0));
    /// assert_eq!(Count::new(Some(0), 3).previous(), Some(2));
    /// assert_eq!(Count::new(None, 3).previous(), Some(2));
    /// ```
    pub fn previous(self) -> Option<usize> {
        match self.focused {
            _ if self.total == 0 => None,
            Some(focused) if focused > 0 => Some(focused - 1),
            Some(_) | None => Some(self.total - 1),
        }
    }

    /// Returns the index of the first element, if any.
    pub fn first(self) -> Option<usize> {
        (self.total > 0).then_some(0)
    }

    /// Returns the index of the last element, if any.
    pub fn last(self) -> Option<usize> {
        self.total.checked_sub(1)
    }

    /// Returns the indices after the focused element, wrapping around and
    /// ending with the focused element itself.
    ///
    /// ```
    /// use icy_menu_button_core::focus::Count;
    ///
    /// let order: Vec<_> = Count::new(Some(1), 4).cycle().collect();
    /// assert_eq!(order, vec![2, 3, 0, 1]);
    /// ```
    pub fn cycle(self) -> impl Iterator<Item = usize> {
        let start = self.focused.map_or(0, |focused| focused + 1);
        let total = self.total;

        (0..total).map(move |offset| (start + offset) % total)
    }
}
