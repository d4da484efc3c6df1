//! Outgoing edges of the relation graph.

use crate::graph::OrderNode;

/// A directed edge recording one ordering fact about two [`OrderNode`]s.
///
/// Only two cases exist, and both are known at every call site, so this
/// is a plain tagged enum rather than a trait-object hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `source < target`.
    Strict(OrderNode),
    /// `source <= target`.
    NonStrict(OrderNode),
}

impl Relation {
    pub fn target(&self) -> OrderNode {
        match *self {
            Relation::Strict(t) | Relation::NonStrict(t) => t,
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Relation::Strict(_))
    }

    /// The minimum concrete-value increment this edge enforces: 1 for a
    /// strict edge, 0 for a non-strict one. Used as the edge weight in
    /// the longest-path query.
    pub fn min_margin(&self) -> i64 {
        match self {
            Relation::Strict(_) => 1,
            Relation::NonStrict(_) => 0,
        }
    }

    /// Does the relation hold for these two concrete values? Used only
    /// by [`crate::graph::OrderGraph::contains_mapping`] for validation.
    pub fn concrete_check(&self, a: i64, b: i64) -> bool {
        match self {
            Relation::Strict(_) => a < b,
            Relation::NonStrict(_) => a <= b,
        }
    }
}
