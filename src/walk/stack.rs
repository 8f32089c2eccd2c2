//! LIFO container for depth-first walks.

use alloc::vec::Vec;

/// Stack of pending steps.
#[derive(Debug, Clone)]
pub(super) struct Stack<T> {
    /// Items. The last item is the top.
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a stack with the initial item.
    #[inline]
    #[must_use]
    pub(super) fn with_initial(item: T) -> Self {
        let mut items = Vec::new();
        items.push(item);
        Self { items }
    }

    /// Pushes the item.
    #[inline]
    pub(super) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pushes the items in reverse order, so that the first item is popped
    /// first.
    ///
    /// Returns the number of pushed items.
    pub(super) fn push_reversed<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.items.len();
        self.items.extend(items);
        self.items[start..].reverse();
        self.items.len() - start
    }

    /// Pops the top item.
    #[inline]
    pub(super) fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
}
