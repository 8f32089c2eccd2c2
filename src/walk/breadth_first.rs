//! Breadth-first walker.

use crate::children::GetChildren;
use crate::context::Context;
use crate::walk::cursor::BfsCursor;
use crate::walk::flags::Flags;
use crate::walk::queue::Queue;

/// Walks the tree in breadth-first order.
///
/// Returns the number of visited nodes.
///
/// Skipping is ignored. A replacement node is honored: its children are
/// scheduled instead of those of the replaced node.
pub(crate) fn breadth_first<S, N, G, F, E>(
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
    let mut cursor = BfsCursor::new();
    let mut queue = Queue::with_initial(root);
    let mut visited = 0;

    while let Some(node) = queue.dequeue() {
        flags.reset();
        iteratee(&node, &mut Context::new(tree, &mut flags, &cursor))?;
        visited += 1;

        if flags.is_broken() {
            tracing::trace!(visited, "walk broken");
            break;
        }
        if flags.is_skipped() {
            tracing::trace!("skip has no effect in breadth-first order");
        }

        if !flags.is_removed() {
            cursor.move_next();
            let node = flags.take_replacement().unwrap_or(node);
            let arity = queue.enqueue_all(get_children.get_children(&*tree, &node));
            if arity != 0 {
                cursor.store(node, arity);
            }
        }
        // The slot is consumed even for a removed node: the arity recorded for
        // its parent counted it.
        cursor.move_forward();
    }

    Ok(visited)
}
