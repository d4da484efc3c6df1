//! An integer-order abstract domain.
//!
//! Tracks, for every integer-valued SSA variable seen while optimizing a
//! trace, both a numeric range ([`IntBound`]) and relational ordering
//! facts tying it to other variables ("`x` is strictly less than `y`",
//! "`x` is less-or-equal to `y`"). Facts only ever get stronger as the
//! optimizer discovers more of them (monotonic refinement); queries
//! answer "is `x` known to be `< y`?" so the optimizer can drop
//! redundant guards and branches, and the overflow-aware transfer
//! functions ([`OrderGraph::add`], [`OrderGraph::sub`],
//! [`OrderGraph::mul`], [`OrderGraph::add_const`]) derive new ordering
//! facts whenever an arithmetic operation provably cannot wrap around.
//!
//! The crate has no on-disk format, no wire protocol and no CLI surface:
//! it is a library meant to be linked into a JIT's optimizer pass, one
//! trace (one [`OrderGraph`]) at a time, single-threaded.
//!
//! ```
//! use int_order::OrderGraph;
//!
//! let mut g = OrderGraph::new();
//! let a = g.new_node();
//! let b = g.new_node();
//! let c = g.new_node();
//! g.make_lt(a, b).unwrap();
//! g.make_lt(b, c).unwrap();
//! assert!(g.known_lt(a, c));
//! ```

mod bound;
mod error;
mod graph;
mod node;
mod query;
mod relation;
mod transfer;

pub use bound::IntBound;
pub use error::ContradictionInvalidLoop;
pub use graph::{OrderGraph, OrderNode};
pub use relation::Relation;
