//! Tree traversal engine that tolerates mutation during the walk.
//!
//! The engine visits every node of an arbitrary tree once, in depth-first
//! pre-order, depth-first post-order, or breadth-first order. The callback
//! receives a [`Context`] through which it can skip a subtree, abort the walk,
//! and announce that it removed or replaced the node being visited.
//!
//! Nodes are opaque handles (`N`). The structure they live in (the "tree
//! store", `S`) is borrowed for the duration of the walk and lent to the
//! callback via [`Context::tree_mut`], so the callback can edit the tree while
//! the engine keeps its own bookkeeping (parent, depth, index) consistent.
//!
//! # Examples
//!
//! ```
//! use treecrawl::{traverse, Options, Order, Tree};
//!
//! struct Arena {
//!     children: Vec<Vec<usize>>,
//! }
//!
//! impl Tree<usize> for Arena {
//!     fn children(&self, node: &usize) -> &[usize] {
//!         &self.children[*node]
//!     }
//! }
//!
//! // 0
//! // |-- 1
//! // |   |-- 2
//! // |   `-- 3
//! // `-- 4
//! //     `-- 5
//! let mut arena = Arena {
//!     children: vec![vec![1, 4], vec![2, 3], vec![], vec![], vec![5], vec![]],
//! };
//!
//! let mut visited = Vec::new();
//! traverse(&mut arena, Some(0), Options::new().order(Order::Post), |node, _ctx| {
//!     visited.push(*node);
//! });
//! assert_eq!(visited, [2, 3, 1, 5, 4, 0]);
//! ```
//!
//! Removing nodes during the walk:
//!
//! ```
//! use treecrawl::{traverse, Options, Tree};
//!
//! struct Arena {
//!     children: Vec<Vec<usize>>,
//! }
//!
//! impl Tree<usize> for Arena {
//!     fn children(&self, node: &usize) -> &[usize] {
//!         &self.children[*node]
//!     }
//! }
//!
//! let mut arena = Arena {
//!     children: vec![vec![1, 2, 3], vec![], vec![], vec![]],
//! };
//!
//! let mut indices = Vec::new();
//! traverse(&mut arena, Some(0), Options::new(), |node, ctx| {
//!     indices.push((*node, ctx.index()));
//!     if *node == 1 {
//!         // Detach the node by ourselves, then tell the engine about it.
//!         let index = ctx.index().expect("should never fail: not the root");
//!         ctx.tree_mut().children[0].remove(index);
//!         ctx.remove();
//!     }
//! });
//! assert_eq!(indices, [(0, None), (1, Some(0)), (2, Some(0)), (3, Some(1))]);
//! assert_eq!(arena.children[0], [2, 3]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod children;
mod context;
mod options;
mod order;
mod walk;

use core::convert::Infallible;

pub use self::children::{ChildrenField, ChildrenFn, GetChildren, Tree};
pub use self::context::Context;
pub use self::options::Options;
pub use self::order::{Order, ParseOrderError};

/// Walks the tree from `root` and invokes `iteratee` for every node.
///
/// Does nothing if `root` is `None`.
///
/// The callback may edit `tree` through [`Context::tree_mut`]. When it
/// detaches or substitutes the node being visited, it must announce the edit
/// with [`Context::remove`] or [`Context::replace`]. Announcing an edit that
/// was not performed (or performing one that was not announced) leaves the
/// reported indices and parents unspecified, but never causes a panic inside
/// the engine.
///
/// # Examples
///
/// ```
/// use treecrawl::{traverse, Options, Order};
///
/// // Nodes are integers and the children are computed on the fly.
/// let mut visited = Vec::new();
/// let options = Options::new()
///     .order(Order::BreadthFirst)
///     .get_children(|_: &(), node: &u32| if *node < 4 { vec![node * 2, node * 2 + 1] } else { vec![] });
/// traverse(&mut (), Some(1_u32), options, |node, _ctx| visited.push(*node));
/// assert_eq!(visited, [1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn traverse<S, N, G, F>(tree: &mut S, root: Option<N>, options: Options<G>, mut iteratee: F)
where
    S: ?Sized,
    G: GetChildren<S, N>,
    F: FnMut(&N, &mut Context<'_, S, N>),
{
    let result = try_traverse(tree, root, options, |node, ctx| {
        iteratee(node, ctx);
        Ok::<(), Infallible>(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Walks the tree from `root` and invokes the fallible `iteratee` for every
/// node.
///
/// Does nothing and returns `Ok(())` if `root` is `None`.
///
/// # Errors
///
/// Returns the first error returned by `iteratee`. The walk stops
/// immediately and no further nodes are visited.
///
/// # Examples
///
/// ```
/// use treecrawl::{try_traverse, Options};
///
/// let options = Options::new().get_children(|_: &(), node: &u32| 0..*node);
/// let mut visited = Vec::new();
/// let result = try_traverse(&mut (), Some(3_u32), options, |node, _ctx| {
///     if *node == 1 {
///         return Err("found one");
///     }
///     visited.push(*node);
///     Ok(())
/// });
/// assert_eq!(result, Err("found one"));
/// assert_eq!(visited, [3, 0]);
/// ```
pub fn try_traverse<S, N, G, F, E>(
    tree: &mut S,
    root: Option<N>,
    options: Options<G>,
    mut iteratee: F,
) -> Result<(), E>
where
    S: ?Sized,
    G: GetChildren<S, N>,
    F: FnMut(&N, &mut Context<'_, S, N>) -> Result<(), E>,
{
    let root = match root {
        Some(root) => root,
        None => {
            tracing::trace!("no root node, nothing to traverse");
            return Ok(());
        }
    };
    let (order, mut get_children) = options.into_parts();
    let span = tracing::debug_span!("traverse", %order);
    let _enter = span.enter();

    let visited = match order {
        Order::Pre => walk::pre_order(tree, root, &mut get_children, &mut iteratee)?,
        Order::Post => walk::post_order(tree, root, &mut get_children, &mut iteratee)?,
        Order::BreadthFirst => walk::breadth_first(tree, root, &mut get_children, &mut iteratee)?,
    };
    tracing::debug!(visited, "traversal finished");

    Ok(())
}
