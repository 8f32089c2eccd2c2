//! Child accessors.
//!
//! The engine knows nothing about the shape of the tree. It only asks a
//! [`GetChildren`] implementation for the children of a node, right before it
//! schedules them.
//!
//! * [`ChildrenField`] is the default. It reads the children sequence a tree
//!   store exposes through the [`Tree`] trait.
//! * [`ChildrenFn`] wraps a closure, for stores that do not implement
//!   [`Tree`] or for trees whose nodes carry their children by themselves.

use core::fmt;

/// Tree store which exposes the children of its nodes.
///
/// # Examples
///
/// ```
/// use treecrawl::Tree;
///
/// struct Arena {
///     children: Vec<Vec<usize>>,
/// }
///
/// impl Tree<usize> for Arena {
///     fn children(&self, node: &usize) -> &[usize] {
///         self.children.get(*node).map_or(&[], |v| v.as_slice())
///     }
/// }
/// ```
pub trait Tree<N> {
    /// Returns the children of the node, in order.
    ///
    /// Nodes without children (including nodes which have no children
    /// sequence at all) return an empty slice.
    fn children(&self, node: &N) -> &[N];
}

impl<N, T: Tree<N> + ?Sized> Tree<N> for &T {
    #[inline]
    fn children(&self, node: &N) -> &[N] {
        (**self).children(node)
    }
}

impl<N, T: Tree<N> + ?Sized> Tree<N> for &mut T {
    #[inline]
    fn children(&self, node: &N) -> &[N] {
        (**self).children(node)
    }
}

/// Accessor to the children of a node.
///
/// The returned children are scheduled in iteration order, i.e. the first
/// child returned is visited first.
pub trait GetChildren<S: ?Sized, N> {
    /// Returns the children of the node.
    ///
    /// An empty iterator means the node has no children.
    fn get_children<'a>(&'a mut self, tree: &'a S, node: &'a N) -> impl IntoIterator<Item = N>;
}

/// Default child accessor, which reads [`Tree::children`].
///
/// Node handles are cloned out of the children slice, so they should be
/// cheap to clone (indices, IDs, or reference-counted pointers).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildrenField;

impl<S, N> GetChildren<S, N> for ChildrenField
where
    S: Tree<N> + ?Sized,
    N: Clone,
{
    #[inline]
    fn get_children<'a>(
        &'a mut self,
        tree: &'a S,
        node: &'a N,
    ) -> impl IntoIterator<Item = N> {
        tree.children(node).iter().cloned()
    }
}

/// Child accessor backed by a closure.
///
/// The closure receives the tree store and the node, and returns anything
/// iterable. An empty collection, an empty iterator and `None` all mean the
/// node has no children.
///
/// Usually created by [`Options::get_children`][`crate::Options::get_children`].
#[derive(Clone, Copy)]
pub struct ChildrenFn<F>(pub F);

impl<F> fmt::Debug for ChildrenFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChildrenFn(..)")
    }
}

impl<S, N, F, I> GetChildren<S, N> for ChildrenFn<F>
where
    S: ?Sized,
    F: FnMut(&S, &N) -> I,
    I: IntoIterator<Item = N>,
{
    #[inline]
    fn get_children<'a>(
        &'a mut self,
        tree: &'a S,
        node: &'a N,
    ) -> impl IntoIterator<Item = N> {
        (self.0)(tree, node)
    }
}
