//! FIFO container for breadth-first walks.

use alloc::collections::VecDeque;

/// Queue of pending items.
#[derive(Debug, Clone)]
pub(super) struct Queue<T> {
    /// Items. The front item is dequeued first.
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a queue with the initial item.
    #[inline]
    #[must_use]
    pub(super) fn with_initial(item: T) -> Self {
        let mut items = VecDeque::new();
        items.push_back(item);
        Self { items }
    }

    /// Enqueues the item.
    #[inline]
    pub(super) fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Enqueues all the items in order.
    ///
    /// Returns the number of enqueued items.
    pub(super) fn enqueue_all<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        self.items.extend(items);
        self.items.len() - before
    }

    /// Dequeues the front item.
    #[inline]
    pub(super) fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the front item.
    #[inline]
    #[must_use]
    pub(super) fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns a mutable reference to the front item.
    #[inline]
    #[must_use]
    pub(super) fn front_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }
}
