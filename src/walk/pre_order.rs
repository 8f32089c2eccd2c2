//! Depth-first pre-order walker.

use crate::children::GetChildren;
use crate::context::Context;
use crate::walk::cursor::{Cursor as _, DfsCursor};
use crate::walk::flags::Flags;
use crate::walk::stack::Stack;

/// Pending step of a pre-order walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreStep<N> {
    /// Visit the node.
    Visit(N),
    /// All children of the innermost parent have been handled.
    Ascend,
}

/// Walks the tree in depth-first pre-order.
///
/// Returns the number of visited nodes.
pub(crate) fn pre_order<S, N, G, F, E>(
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
    let mut stack = Stack::with_initial(PreStep::Visit(root));
    let mut visited = 0;

    while let Some(step) = stack.pop() {
        let node = match step {
            PreStep::Visit(node) => node,
            PreStep::Ascend => {
                cursor.move_up();
                continue;
            }
        };

        flags.reset();
        iteratee(&node, &mut Context::new(tree, &mut flags, &cursor))?;
        visited += 1;

        if flags.is_broken() {
            tracing::trace!(visited, depth = cursor.depth(), "walk broken");
            break;
        }
        if flags.is_removed() {
            // The next sibling takes over the index of the removed node.
            continue;
        }
        cursor.move_next();
        if flags.is_skipped() {
            continue;
        }

        let node = flags.take_replacement().unwrap_or(node);
        stack.push(PreStep::Ascend);
        let pushed = stack.push_reversed(
            get_children
                .get_children(&*tree, &node)
                .into_iter()
                .map(PreStep::Visit),
        );
        if pushed == 0 {
            // No children to descend into.
            stack.pop();
        } else {
            cursor.move_down(node);
        }
    }

    Ok(visited)
}
