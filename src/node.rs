//! Per-node storage.

use crate::bound::IntBound;
use crate::relation::Relation;

/// The data owned by one node in an [`crate::graph::OrderGraph`] arena.
///
/// Holds the numeric bounds and the node's outgoing relation edges.
/// Only outgoing edges are stored; backward queries are never needed.
#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    pub(crate) bounds: IntBound,
    pub(crate) relations: Vec<Relation>,
}

impl NodeData {
    pub(crate) fn new(bounds: IntBound) -> Self {
        NodeData {
            bounds,
            relations: Vec::new(),
        }
    }
}
