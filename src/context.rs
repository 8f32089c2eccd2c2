//! Traversal context.

use core::fmt;

use crate::walk::cursor::Cursor;
use crate::walk::flags::{Directive, Flags};

/// Context of the node being visited.
///
/// A context is passed to the callback on every visit. It tells where the
/// node is (parent, depth, and index), lends the tree store, and lets the
/// callback steer the walk.
///
/// Directives are reset before each visit. Calling a directive twice during
/// the same visit keeps the latest value. Some directives have no effect in
/// some orders:
///
/// | directive        | pre-order | post-order | breadth-first |
/// |------------------|-----------|------------|---------------|
/// | [`skip`]         | yes       | no-op      | no-op         |
/// | [`break_walk`]   | yes       | yes        | yes           |
/// | [`remove`]       | yes       | index only | yes           |
/// | [`replace`]      | yes       | no-op      | yes           |
///
/// [`skip`]: `Context::skip`
/// [`break_walk`]: `Context::break_walk`
/// [`remove`]: `Context::remove`
/// [`replace`]: `Context::replace`
pub struct Context<'a, S: ?Sized, N> {
    /// Tree store.
    tree: &'a mut S,
    /// Directives for the current visit.
    flags: &'a mut Flags<N>,
    /// Position of the current node.
    cursor: &'a dyn Cursor<N>,
}

impl<'a, S: ?Sized, N> Context<'a, S, N> {
    /// Creates a new context for the current visit.
    #[inline]
    #[must_use]
    pub(crate) fn new(tree: &'a mut S, flags: &'a mut Flags<N>, cursor: &'a dyn Cursor<N>) -> Self {
        Self {
            tree,
            flags,
            cursor,
        }
    }

    /// Skips the subtree of the current node.
    ///
    /// Children of the current node (or of its replacement) won't be visited.
    /// Siblings are still visited.
    ///
    /// This has no effect in post-order walks (the subtree has already been
    /// visited) and in breadth-first walks.
    #[inline]
    pub fn skip(&mut self) {
        self.flags.apply(Directive::Skip);
    }

    /// Stops the walk.
    ///
    /// The callback won't be invoked anymore after the current visit.
    #[inline]
    pub fn break_walk(&mut self) {
        self.flags.apply(Directive::Break);
    }

    /// Notifies that the current node has been removed from its parent.
    ///
    /// The engine does not touch the tree: the callback must have detached
    /// the node from the children of its parent by itself. The next sibling
    /// will then report the index the removed node had.
    ///
    /// Children of the removed node won't be visited in pre-order and
    /// breadth-first walks. Removing takes precedence over [`replace`][`Self::replace`].
    #[inline]
    pub fn remove(&mut self) {
        self.flags.apply(Directive::Remove);
    }

    /// Notifies that the current node has been replaced by `node`.
    ///
    /// The engine does not touch the tree: the callback must have substituted
    /// the node in the children of its parent by itself. Children of `node`
    /// will be visited instead of those of the current node, and `node` will
    /// be reported as their parent.
    ///
    /// This has no effect in post-order walks, since the children of the
    /// current node have already been visited.
    #[inline]
    pub fn replace(&mut self, node: N) {
        self.flags.apply(Directive::Replace(node));
    }

    /// Returns the parent of the current node.
    ///
    /// Returns `None` for the root.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&N> {
        self.cursor.parent()
    }

    /// Returns the depth of the current node, i.e. the number of ancestors.
    ///
    /// The depth of the root is 0.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.cursor.depth()
    }

    /// Returns the level of the current node, i.e. the depth plus one.
    #[inline]
    #[must_use]
    pub fn level(&self) -> usize {
        self.cursor.depth() + 1
    }

    /// Returns the index of the current node among the children of its parent.
    ///
    /// Returns `None` for the root, which has no siblings.
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Returns a reference to the tree store.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &S {
        &*self.tree
    }

    /// Returns a mutable reference to the tree store.
    #[inline]
    #[must_use]
    pub fn tree_mut(&mut self) -> &mut S {
        &mut *self.tree
    }

    /// Returns true if [`skip`][`Self::skip`] has been called during this visit.
    #[inline]
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.flags.is_skipped()
    }

    /// Returns true if [`break_walk`][`Self::break_walk`] has been called during this visit.
    #[inline]
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.flags.is_broken()
    }

    /// Returns true if [`remove`][`Self::remove`] has been called during this visit.
    #[inline]
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.flags.is_removed()
    }

    /// Returns the node passed to [`replace`][`Self::replace`] during this visit.
    #[inline]
    #[must_use]
    pub fn replacement(&self) -> Option<&N> {
        self.flags.replacement()
    }
}

impl<S: ?Sized, N: fmt::Debug> fmt::Debug for Context<'_, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("parent", &self.parent())
            .field("depth", &self.depth())
            .field("index", &self.index())
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
