//! Walkers and their bookkeeping.
//!
//! Every walker owns a fresh set of [`Flags`][`flags::Flags`], a cursor, and a
//! container of pending work. After each callback invocation, the walker
//! inspects the flags and only then updates the cursor and the container, so
//! the cursor always describes the node being visited while the callback runs.

mod breadth_first;
pub(crate) mod cursor;
pub(crate) mod flags;
mod post_order;
mod pre_order;
mod queue;
mod stack;

pub(crate) use self::breadth_first::breadth_first;
pub(crate) use self::post_order::post_order;
pub(crate) use self::pre_order::pre_order;
