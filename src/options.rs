//! Traversal options.

use crate::children::{ChildrenField, ChildrenFn};
use crate::order::Order;

/// Options customizing a traversal.
///
/// By default, nodes are visited in [pre-order][`Order::Pre`] and children
/// are read through [`Tree::children`][`crate::Tree::children`].
///
/// # Examples
///
/// ```
/// use treecrawl::{Options, Order};
///
/// let options = Options::new();
/// assert_eq!(options.get_order(), Order::Pre);
///
/// let options = options.order(Order::Post);
/// assert_eq!(options.get_order(), Order::Post);
/// ```
///
/// A custom child accessor replaces the default one:
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use treecrawl::{traverse, Options};
///
/// struct Node {
///     value: u32,
///     child_nodes: Vec<Rc<RefCell<Node>>>,
/// }
///
/// let leaf = Rc::new(RefCell::new(Node { value: 2, child_nodes: vec![] }));
/// let root = Rc::new(RefCell::new(Node { value: 1, child_nodes: vec![leaf] }));
///
/// let options = Options::new()
///     .get_children(|_: &(), node: &Rc<RefCell<Node>>| node.borrow().child_nodes.clone());
/// let mut values = Vec::new();
/// traverse(&mut (), Some(root), options, |node, _ctx| values.push(node.borrow().value));
/// assert_eq!(values, [1, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Options<G = ChildrenField> {
    /// Traversal order.
    order: Order,
    /// Child accessor.
    get_children: G,
}

impl Options {
    /// Creates the default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self {
            order: Order::default(),
            get_children: ChildrenField,
        }
    }
}

impl From<Order> for Options {
    #[inline]
    fn from(order: Order) -> Self {
        Self::new().order(order)
    }
}

impl<G> Options<G> {
    /// Sets the traversal order.
    #[inline]
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Returns the traversal order.
    #[inline]
    #[must_use]
    pub fn get_order(&self) -> Order {
        self.order
    }

    /// Sets the child accessor closure.
    ///
    /// The closure receives the tree store and a node, and returns the
    /// children of the node in visiting order.
    #[inline]
    #[must_use]
    pub fn get_children<F>(self, f: F) -> Options<ChildrenFn<F>> {
        self.with_accessor(ChildrenFn(f))
    }

    /// Sets the child accessor.
    ///
    /// This accepts any [`GetChildren`][`crate::GetChildren`] implementation.
    #[inline]
    #[must_use]
    pub fn with_accessor<H>(self, get_children: H) -> Options<H> {
        Options {
            order: self.order,
            get_children,
        }
    }

    /// Decomposes the options into the order and the child accessor.
    #[inline]
    #[must_use]
    pub(crate) fn into_parts(self) -> (Order, G) {
        (self.order, self.get_children)
    }
}
