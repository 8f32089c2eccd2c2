//! Position cursors.
//!
//! A cursor tracks the parent, the depth, and the index of the node being
//! visited. It is updated incrementally by the walkers and never recomputed
//! from the tree.

use alloc::vec::Vec;

use crate::walk::queue::Queue;

/// Position of the node being visited.
pub(crate) trait Cursor<N> {
    /// Returns the parent of the current node.
    ///
    /// Returns `None` for the root.
    fn parent(&self) -> Option<&N>;

    /// Returns the number of ancestors of the current node.
    fn depth(&self) -> usize;

    /// Returns the index of the current node among its siblings.
    ///
    /// Returns `None` for the root.
    fn index(&self) -> Option<usize>;
}

/// Ancestor level of a depth-first walk.
#[derive(Debug, Clone)]
struct Frame<N> {
    /// Parent of the nodes at this level.
    parent: N,
    /// Index of the current node at this level.
    index: usize,
}

/// Cursor for depth-first walks.
///
/// Holds one frame per ancestor of the current node.
#[derive(Debug, Clone)]
pub(crate) struct DfsCursor<N> {
    /// Frames, the innermost last.
    frames: Vec<Frame<N>>,
}

impl<N> DfsCursor<N> {
    /// Creates a cursor pointing to the root.
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Descends to the first child of the given node.
    #[inline]
    pub(crate) fn move_down(&mut self, parent: N) {
        self.frames.push(Frame { parent, index: 0 });
    }

    /// Ascends to the parent level.
    ///
    /// Returns the parent node of the level that has been left.
    #[inline]
    pub(crate) fn move_up(&mut self) -> Option<N> {
        self.frames.pop().map(|frame| frame.parent)
    }

    /// Advances to the next sibling.
    ///
    /// Does nothing at the root level.
    #[inline]
    pub(crate) fn move_next(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.index += 1;
        }
    }
}

impl<N> Cursor<N> for DfsCursor<N> {
    #[inline]
    fn parent(&self) -> Option<&N> {
        self.frames.last().map(|frame| &frame.parent)
    }

    #[inline]
    fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        self.frames.last().map(|frame| frame.index)
    }
}

/// Children of a node, scheduled in a breadth-first walk.
#[derive(Debug, Clone)]
struct Group<N> {
    /// Parent of the group.
    ///
    /// `None` for the pseudo group of the root.
    parent: Option<N>,
    /// Number of nodes in the group which are not visited yet.
    arity: usize,
}

/// Cursor for breadth-first walks.
#[derive(Debug, Clone)]
pub(crate) struct BfsCursor<N> {
    /// Depth of the current level.
    depth: usize,
    /// Index of the current node in its group.
    index: usize,
    /// Groups of scheduled nodes, in visiting order.
    groups: Queue<Group<N>>,
    /// Number of nodes in the current level which are not visited yet.
    level_remaining: usize,
    /// Number of nodes scheduled for the next level.
    next_level: usize,
}

impl<N> BfsCursor<N> {
    /// Creates a cursor pointing to the root.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            depth: 0,
            index: 0,
            groups: Queue::with_initial(Group {
                parent: None,
                arity: 1,
            }),
            level_remaining: 1,
            next_level: 0,
        }
    }

    /// Records that `arity` children of `parent` have been scheduled.
    pub(crate) fn store(&mut self, parent: N, arity: usize) {
        self.groups.enqueue(Group {
            parent: Some(parent),
            arity,
        });
        self.next_level += arity;
    }

    /// Advances the index to the next sibling.
    #[inline]
    pub(crate) fn move_next(&mut self) {
        self.index += 1;
    }

    /// Consumes the slot of the visited node.
    ///
    /// Moves to the next group when the current group is exhausted, and to the
    /// next level when the current level is exhausted.
    pub(crate) fn move_forward(&mut self) {
        let group = self
            .groups
            .front_mut()
            .expect("[consistency] the visited node must belong to a scheduled group");
        group.arity -= 1;
        if group.arity == 0 {
            self.index = 0;
            self.groups.dequeue();
        }

        self.level_remaining -= 1;
        if self.level_remaining == 0 {
            self.depth += 1;
            self.level_remaining = self.next_level;
            self.next_level = 0;
        }
    }
}

impl<N> Cursor<N> for BfsCursor<N> {
    #[inline]
    fn parent(&self) -> Option<&N> {
        self.groups.front().and_then(|group| group.parent.as_ref())
    }

    #[inline]
    fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        self.groups
            .front()
            .and_then(|group| group.parent.as_ref())
            .map(|_| self.index)
    }
}
