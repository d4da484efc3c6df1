//! Contradiction signalling (component F).

use std::fmt;

/// Raised by [`crate::graph::OrderGraph::make_lt`] or
/// [`crate::graph::OrderGraph::make_le`] when the new fact would
/// introduce a cycle containing a strict edge.
///
/// This is the optimizer's signal to abandon the current trace
/// compilation; there is no recovery path and the `OrderGraph`'s state
/// after the error is unspecified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContradictionInvalidLoop;

impl fmt::Display for ContradictionInvalidLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "refinement would introduce a strict cycle in the order graph")
    }
}

impl std::error::Error for ContradictionInvalidLoop {}
