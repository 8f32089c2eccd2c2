//! Arena tree used by the integration tests.

#![allow(dead_code)]

use treecrawl::Tree;

/// Node ID in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node entry.
#[derive(Debug, Clone)]
struct Entry {
    /// Value.
    value: u32,
    /// Children.
    children: Vec<NodeId>,
}

/// Arena of nodes.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    /// Nodes.
    nodes: Vec<Entry>,
}

impl Arena {
    /// Creates a detached node.
    pub fn create(&mut self, value: u32) -> NodeId {
        self.nodes.push(Entry {
            value,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Returns the value of the node.
    pub fn value(&self, id: NodeId) -> u32 {
        self.nodes[id.0].value
    }

    /// Returns the children of the node.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns the mutable children of the node.
    pub fn children_mut(&mut self, id: NodeId) -> &mut Vec<NodeId> {
        &mut self.nodes[id.0].children
    }

    /// Returns the ID of the node with the value, if any.
    pub fn find(&self, value: u32) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|entry| entry.value == value)
            .map(NodeId)
    }

    /// Detaches the node at `index` from the children of `parent`.
    pub fn detach(&mut self, parent: NodeId, index: usize) -> NodeId {
        self.children_mut(parent).remove(index)
    }

    /// Substitutes `node` for the child at `index` of `parent`.
    pub fn substitute(&mut self, parent: NodeId, index: usize, node: NodeId) -> NodeId {
        std::mem::replace(&mut self.children_mut(parent)[index], node)
    }

    /// Creates a complete tree with the given arity and number of levels.
    ///
    /// Values are assigned in breadth-first order starting from 0.
    pub fn complete(arity: usize, levels: usize) -> (Self, NodeId) {
        let mut arena = Self::default();
        let root = arena.create(0);
        let mut frontier = vec![root];
        for _ in 1..levels {
            let mut next = Vec::with_capacity(frontier.len() * arity);
            for parent in frontier {
                for _ in 0..arity {
                    let value = arena.nodes.len() as u32;
                    let child = arena.create(value);
                    arena.children_mut(parent).push(child);
                    next.push(child);
                }
            }
            frontier = next;
        }
        (arena, root)
    }
}

impl Tree<NodeId> for Arena {
    fn children(&self, node: &NodeId) -> &[NodeId] {
        self.children_of(*node)
    }
}

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::child()`] creates a new child node (as the last child) to
///   the current node.
/// * [`TreeBuilder::sibling()`] creates a new next sibling of the current node.
/// * [`TreeBuilder::parent()`] makes the parent the new current node.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    /// Target arena.
    arena: &'a mut Arena,
    /// Path from the root to the current node.
    path: Vec<NodeId>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a root node and the tree builder for the root node.
    pub fn new(arena: &'a mut Arena, root: u32) -> Self {
        let root = arena.create(root);
        Self {
            arena,
            path: vec![root],
        }
    }

    /// Returns the node ID of the root node.
    pub fn root_id(&self) -> NodeId {
        self.path[0]
    }

    /// Appends a child node to the current node, and changes the current node to it.
    pub fn child(&mut self, value: u32) -> &mut Self {
        let current = *self.path.last().expect("[validity] the path is never empty");
        let new = self.arena.create(value);
        self.arena.children_mut(current).push(new);
        self.path.push(new);
        self
    }

    /// Adds a next sibling node to the current node, and changes the current node to it.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root of a tree.
    pub fn sibling(&mut self, value: u32) -> &mut Self {
        self.path.pop();
        let parent = *self
            .path
            .last()
            .expect("[precondition] the current node should not be the root");
        let new = self.arena.create(value);
        self.arena.children_mut(parent).push(new);
        self.path.push(new);
        self
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is the root of a tree.
    pub fn parent(&mut self) -> &mut Self {
        assert!(
            self.path.len() > 1,
            "[precondition] the current node should not be the root"
        );
        self.path.pop();
        self
    }
}

/// Returns the sample tree and the root node ID.
///
/// Tree to be built:
///
/// ```text
/// 1
/// |-- 2
/// |   |-- 3
/// |   `-- 4
/// `-- 5
///     `-- 6
/// ```
pub fn sample_tree() -> (Arena, NodeId) {
    let mut arena = Arena::default();
    let root = TreeBuilder::new(&mut arena, 1)
        .child(2)
        .child(3)
        .sibling(4)
        .parent()
        .sibling(5)
        .child(6)
        .root_id();
    (arena, root)
}

/// Returns the tree `1 -> [2, 3]` and the root node ID.
pub fn flat_tree() -> (Arena, NodeId) {
    let mut arena = Arena::default();
    let root = TreeBuilder::new(&mut arena, 1)
        .child(2)
        .sibling(3)
        .root_id();
    (arena, root)
}

/// Returns the tree `1 -> [2 -> [3], 4]` and the root node ID.
pub fn lopsided_tree() -> (Arena, NodeId) {
    let mut arena = Arena::default();
    let root = TreeBuilder::new(&mut arena, 1)
        .child(2)
        .child(3)
        .parent()
        .sibling(4)
        .root_id();
    (arena, root)
}
