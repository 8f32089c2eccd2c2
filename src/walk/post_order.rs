//! Depth-first post-order walker.

use crate::children::GetChildren;
use crate::context::Context;
use crate::walk::cursor::{Cursor as _, DfsCursor};
use crate::walk::flags::Flags;
use crate::walk::stack::Stack;

/// Pending step of a post-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostStep<N> {
    /// Expand the node, or visit it if it has no children.
    Enter(N),
    /// All children of the innermost parent have been visited: visit the
    /// parent.
    Leave,
}

/// Walks the tree in depth-first post-order.
///
/// Returns the number of visited nodes.
///
/// Skipping and replacing are ignored, since the subtree of a node has been
/// visited when the callback is invoked for the node.
pub(crate) fn post_order<S, N, G, F, E>(
    tree: &mut S,
    root: N,
    get_children: &mut G,
    iteratee: &mut F,
) -> Result<usize, E>
where
    S: ?Sized,
    G: GetChildren<S, N>,
    F: FnMut(&N, &mut Context<'_, S, N>) -> Result<(), E>,
{
    let mut flags = Flags::new();
    let mut cursor = DfsCursor::new();
    let mut stack = Stack::with_initial(PostStep::Enter(root));
    let mut visited = 0;

    while let Some(step) = stack.pop() {
        let node = match step {
            PostStep::Enter(node) => {
                stack.push(PostStep::Leave);
                let pushed = stack.push_reversed(
                    get_children
                        .get_children(&*tree, &node)
                        .into_iter()
                        .map(PostStep::Enter),
                );
                if pushed != 0 {
                    cursor.move_down(node);
                    continue;
                }
                // A leaf is ready to be visited right away.
                stack.pop();
                node
            }
            PostStep::Leave => cursor
                .move_up()
                .expect("[consistency] `Leave` is pushed together with a cursor frame"),
        };

        flags.reset();
        iteratee(&node, &mut Context::new(tree, &mut flags, &cursor))?;
        visited += 1;

        if flags.is_broken() {
            tracing::trace!(visited, depth = cursor.depth(), "walk broken");
            break;
        }
        if flags.is_skipped() || flags.replacement().is_some() {
            tracing::trace!("skip and replace have no effect in post-order");
        }
        if flags.is_removed() {
            continue;
        }
        cursor.move_next();
    }

    Ok(visited)
}
